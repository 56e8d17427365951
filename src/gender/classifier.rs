//! Given-name gender classifier
//!
//! Scans given-name tokens left to right and takes the first token the lookup
//! resolves. Later tokens are never consulted once one resolves.

use super::lexicon::{NameGenderLookup, NameLexicon};
use super::Gender;
use crate::config::ConfigResult;

/// Classifies inventors from their given name(s)
#[derive(Debug, Clone)]
pub struct GenderClassifier<L = NameLexicon> {
    lookup: L,
}

impl GenderClassifier<NameLexicon> {
    /// Classifier over the built-in lexicon
    pub fn builtin() -> ConfigResult<Self> {
        NameLexicon::builtin().map(Self::new)
    }
}

impl<L: NameGenderLookup> GenderClassifier<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Classify an ordered sequence of given-name tokens
    pub fn classify_tokens<'a, I>(&self, tokens: I) -> Gender
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .find_map(|token| self.lookup.lookup(token).resolve())
            .unwrap_or(Gender::Unresolved)
    }

    /// Classify a whitespace-separated given-name string
    pub fn classify(&self, given_name: &str) -> Gender {
        self.classify_tokens(given_name.split_whitespace())
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}
