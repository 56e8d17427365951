//! Pipeline configuration
//!
//! Loaded from YAML. Defaults reproduce the Big Ten Academic Alliance run:
//! patents granted from 2007-01-01 up to (not including) 2012-12-31, written
//! as GraphML to `network_data/`.

use crate::export::ExportFormat;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid lexicon line {line}: {message}")]
    Lexicon { line: usize, message: String },

    #[error("Invalid date window: {start} is not before {end}")]
    DateWindow { start: NaiveDate, end: NaiveDate },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// An assignee organization whose patents form one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Upstream assignee identifier
    pub assignee_id: String,
    /// Display name, also used as the export file stem
    pub name: String,
}

impl Organization {
    pub fn new(assignee_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            assignee_id: assignee_id.into(),
            name: name.into(),
        }
    }
}

/// Half-open grant date range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ConfigResult<Self> {
        if start >= end {
            return Err(ConfigError::DateWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// Top-level pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Organizations to build networks for
    pub organizations: Vec<Organization>,
    /// Grant date filter; `None` keeps every record
    pub date_window: Option<DateWindow>,
    /// Directory holding one `<NAME>.json` query response per organization
    pub input_dir: PathBuf,
    /// Directory exports are written to
    pub output_dir: PathBuf,
    /// Export format
    pub export_format: ExportFormat,
    /// Seed for imputation; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Extra lexicon merged over the built-in one
    pub lexicon_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            organizations: big_ten_organizations(),
            date_window: NaiveDate::from_ymd_opt(2007, 1, 1)
                .zip(NaiveDate::from_ymd_opt(2012, 12, 31))
                .map(|(start, end)| DateWindow { start, end }),
            input_dir: PathBuf::from("raw_data"),
            output_dir: PathBuf::from("network_data"),
            export_format: ExportFormat::GraphMl,
            seed: None,
            lexicon_path: None,
        }
    }
}

impl PipelineConfig {
    /// Load from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        info!(
            "Loaded configuration from {:?}: {} organizations",
            path,
            config.organizations.len()
        );
        Ok(config)
    }

    /// Parse from YAML text
    pub fn from_yaml(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        if let Some(window) = config.date_window {
            DateWindow::new(window.start, window.end)?;
        }
        Ok(config)
    }

    /// Serialize to YAML text
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Random source for one organization's imputation.
    ///
    /// With a seed, the stream depends only on the seed and the organization's
    /// assignee id, never on processing order.
    pub fn rng_for(&self, organization: &Organization) -> StdRng {
        match self.seed {
            Some(seed) => {
                let mut hasher = rustc_hash::FxHasher::default();
                organization.assignee_id.hash(&mut hasher);
                StdRng::seed_from_u64(seed ^ hasher.finish())
            }
            None => StdRng::from_entropy(),
        }
    }
}

fn big_ten_organizations() -> Vec<Organization> {
    [
        ("org_bc6lUv5STJ8mpLZRh4yW", "MICHIGAN"),
        ("org_RWqhrlYbdCwoizZdLB7H", "RUTGERS"),
        ("org_OcawIS6TgLu0is1l9KyA", "OHIO_STATE"),
        ("org_8179W6jy5dO8wP9aiWVg", "IOWA"),
        ("org_gCHgholcypwXAN387I44", "INDIANA"),
        ("org_Y0wfV2542ecBUzEQdRZu", "UIUC"),
        ("org_yCDhSk1vYQ6qDtcA0cg1", "MARYLAND"),
        ("org_q57vGQ9Wmc7mdlqv153r", "MINNESOTA"),
        ("org_MQgh8MW8okCbGstcb8HD", "PENN_STATE"),
        ("org_mAyELP7MbXqcUgR2h6rO", "PURDUE"),
        ("org_E5kQ39riXJrINxYNWeko", "MICHIGAN_STATE"),
        ("org_ead7SNUziKyKxgAS3wT2", "NORTHWESTERN"),
        ("org_hdlPV7lIsDdFQuYRkEPI", "WISCONSIN"),
        ("org_Q7lMwr3Yijk4x4uuqILo", "NEBRASKA"),
    ]
    .into_iter()
    .map(|(id, name)| Organization::new(id, name))
    .collect()
}
