//! Ingestion of raw patent records into canonical inventor and membership facts

pub mod inventor;
pub mod normalizer;
pub mod record;

pub use inventor::{Inventor, Membership};
pub use normalizer::{NormalizationContext, NormalizationStats};
pub use record::{QueryResponse, RawAssignee, RawCitedPatent, RawCitingPatent, RawInventor, RawPatentRecord};
