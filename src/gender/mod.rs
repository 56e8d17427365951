//! Gender labels: name-based classification and distribution-preserving imputation

pub mod classifier;
pub mod imputer;
pub mod lexicon;

pub use classifier::GenderClassifier;
pub use imputer::{impute_gender, ImputationReport};
pub use lexicon::{NameGenderLookup, NameLexicon};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender label of an inventor
///
/// `Unresolved` only exists during construction; exported graphs carry
/// `Male` or `Female` exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unresolved,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unresolved => "unresolved",
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Gender::Unresolved)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "unresolved" => Ok(Gender::Unresolved),
            other => Err(format!("unknown gender label: {}", other)),
        }
    }
}

/// What a name lexicon says about a single given-name token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSignal {
    Male,
    MostlyMale,
    Female,
    MostlyFemale,
    /// Used for both genders about equally
    Androgynous,
    /// Not in the lexicon
    Unknown,
}

impl NameSignal {
    /// Collapse to a label; weak signals count as their strong counterpart
    pub fn resolve(&self) -> Option<Gender> {
        match self {
            NameSignal::Male | NameSignal::MostlyMale => Some(Gender::Male),
            NameSignal::Female | NameSignal::MostlyFemale => Some(Gender::Female),
            NameSignal::Androgynous | NameSignal::Unknown => None,
        }
    }
}

impl FromStr for NameSignal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "male" => Ok(NameSignal::Male),
            "mostly_male" => Ok(NameSignal::MostlyMale),
            "female" => Ok(NameSignal::Female),
            "mostly_female" => Ok(NameSignal::MostlyFemale),
            "andy" | "androgynous" => Ok(NameSignal::Androgynous),
            "unknown" => Ok(NameSignal::Unknown),
            other => Err(format!("unknown name signal: {}", other)),
        }
    }
}
