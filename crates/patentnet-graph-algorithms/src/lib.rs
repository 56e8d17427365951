pub mod common;
pub mod projection;
pub mod community;
pub mod topology;

pub use common::{GraphView, NodeId};
pub use projection::{weighted_projection, BipartiteView, ProjectionResult};
pub use community::{weakly_connected_components, WccResult};
pub use topology::count_triangles;
