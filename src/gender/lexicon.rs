//! Given-name lexicon
//!
//! Lexicon files are tab-separated `name<TAB>signal` lines. Blank lines and
//! lines starting with `#` are skipped. Names are matched case-insensitively.

use super::NameSignal;
use crate::config::{ConfigError, ConfigResult};
use rustc_hash::FxHashMap;
use std::path::Path;
use tracing::debug;

const BUILTIN_LEXICON: &str = include_str!("../../data/given_names.tsv");

/// Lookup of a single given-name token
pub trait NameGenderLookup {
    fn lookup(&self, token: &str) -> NameSignal;
}

impl<F> NameGenderLookup for F
where
    F: Fn(&str) -> NameSignal,
{
    fn lookup(&self, token: &str) -> NameSignal {
        self(token)
    }
}

/// In-memory name -> signal table
#[derive(Debug, Clone, Default)]
pub struct NameLexicon {
    entries: FxHashMap<String, NameSignal>,
}

impl NameLexicon {
    /// Empty lexicon; every token is `Unknown`
    pub fn new() -> Self {
        Self::default()
    }

    /// The lexicon shipped with the crate
    pub fn builtin() -> ConfigResult<Self> {
        Self::parse(BUILTIN_LEXICON)
    }

    /// Parse a lexicon from text
    pub fn parse(text: &str) -> ConfigResult<Self> {
        let mut lexicon = Self::new();
        lexicon.merge_str(text)?;
        Ok(lexicon)
    }

    /// Merge entries from a lexicon file over this one
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> ConfigResult<usize> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let added = self.merge_str(&text)?;
        debug!("Merged {} lexicon entries from {:?}", added, path);
        Ok(added)
    }

    /// Merge entries from lexicon text; later entries win
    pub fn merge_str(&mut self, text: &str) -> ConfigResult<usize> {
        let mut added = 0;
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, signal) = line.split_once('\t').ok_or_else(|| ConfigError::Lexicon {
                line: line_no + 1,
                message: "expected name<TAB>signal".to_string(),
            })?;
            let signal = signal.parse::<NameSignal>().map_err(|message| ConfigError::Lexicon {
                line: line_no + 1,
                message,
            })?;

            self.insert(name, signal);
            added += 1;
        }
        Ok(added)
    }

    /// Add or replace one entry
    pub fn insert(&mut self, name: &str, signal: NameSignal) {
        self.entries.insert(normalize(name), signal);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NameGenderLookup for NameLexicon {
    fn lookup(&self, token: &str) -> NameSignal {
        self.entries
            .get(&normalize(token))
            .copied()
            .unwrap_or(NameSignal::Unknown)
    }
}

/// Lowercase and strip surrounding punctuation ("A." -> "a")
fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}
