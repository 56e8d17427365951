//! Canonical facts produced by normalization

use crate::gender::Gender;
use crate::graph::{InventorId, PatentId};
use serde::{Deserialize, Serialize};

/// One inventor, deduplicated by upstream identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventor {
    pub id: InventorId,
    /// Given name(s) as supplied, whitespace separated
    pub given_name: String,
    pub family_name: String,
    /// Given and family name joined by a space
    pub display_name: String,
    pub gender: Gender,
}

impl Inventor {
    pub fn new(
        id: impl Into<InventorId>,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        gender: Gender,
    ) -> Self {
        let given_name = given_name.into();
        let family_name = family_name.into();
        let display_name = [given_name.trim(), family_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            id: id.into(),
            given_name,
            family_name,
            display_name,
            gender,
        }
    }

    /// Ordered given-name tokens
    pub fn given_name_tokens(&self) -> impl Iterator<Item = &str> {
        self.given_name.split_whitespace()
    }
}

/// "This inventor is listed on this patent"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Membership {
    pub inventor: InventorId,
    pub patent: PatentId,
}

impl Membership {
    pub fn new(inventor: impl Into<InventorId>, patent: impl Into<PatentId>) -> Self {
        Self {
            inventor: inventor.into(),
            patent: patent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let inventor = Inventor::new("i1", "Mary Ann", "Smith", Gender::Female);
        assert_eq!(inventor.display_name, "Mary Ann Smith");
        assert_eq!(inventor.given_name_tokens().collect::<Vec<_>>(), vec!["Mary", "Ann"]);

        let no_given = Inventor::new("i2", "", "Doe", Gender::Unresolved);
        assert_eq!(no_given.display_name, "Doe");
    }

    #[test]
    fn test_membership_equality() {
        assert_eq!(Membership::new("i1", "P1"), Membership::new("i1", "P1"));
        assert_ne!(Membership::new("i1", "P1"), Membership::new("i1", "P2"));
    }
}
