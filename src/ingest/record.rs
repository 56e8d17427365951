//! Raw patent records as handed over by the fetch layer
//!
//! Field names follow the PatentsView legacy patents query response. Required
//! identifiers are optional here so that their absence is reported by the
//! normalizer as a malformed record instead of a decode failure.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of a patents query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub patents: Vec<RawPatentRecord>,
    /// Records in this page
    #[serde(default)]
    pub count: usize,
    /// Records matching the query overall
    #[serde(default)]
    pub total_patent_count: usize,
}

impl QueryResponse {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// The page holds fewer records than the query matched
    pub fn is_truncated(&self) -> bool {
        self.count < self.total_patent_count
    }
}

/// One patent with its inventors, assignees and citations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPatentRecord {
    pub patent_number: Option<String>,
    pub patent_date: Option<String>,
    pub patent_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventors: Vec<RawInventor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignees: Vec<RawAssignee>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cited_patents: Vec<RawCitedPatent>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub citedby_patents: Vec<RawCitingPatent>,
}

impl RawPatentRecord {
    /// Non-empty patent number
    pub fn patent_number(&self) -> Option<&str> {
        non_empty(self.patent_number.as_deref())
    }

    /// Citation links in both directions. Not used for graph construction.
    pub fn citation_count(&self) -> usize {
        self.cited_patents.iter().filter(|c| c.cited_patent_number.is_some()).count()
            + self
                .citedby_patents
                .iter()
                .filter(|c| c.citedby_patent_number.is_some())
                .count()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInventor {
    pub inventor_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventor_first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventor_last_name: String,
}

impl RawInventor {
    /// Non-empty inventor identifier
    pub fn inventor_id(&self) -> Option<&str> {
        non_empty(self.inventor_id.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAssignee {
    pub assignee_id: Option<String>,
    pub assignee_organization: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCitedPatent {
    pub cited_patent_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCitingPatent {
    pub citedby_patent_number: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "patents": [{
            "patent_number": "7654321",
            "patent_date": "2010-02-02",
            "patent_title": "Widget",
            "inventors": [
                {"inventor_id": "i1", "inventor_first_name": "John Q.", "inventor_last_name": "Public"},
                {"inventor_id": "i2", "inventor_first_name": null, "inventor_last_name": "Doe"}
            ],
            "assignees": [{"assignee_id": "org_1", "assignee_organization": "Univ"}],
            "cited_patents": [{"cited_patent_number": "5000000"}, {"cited_patent_number": null}],
            "citedby_patents": null
        }],
        "count": 1,
        "total_patent_count": 3
    }"#;

    #[test]
    fn test_decode_page() {
        let page = QueryResponse::from_json(PAGE).unwrap();
        assert!(page.is_truncated());
        assert_eq!(page.patents.len(), 1);

        let record = &page.patents[0];
        assert_eq!(record.patent_number(), Some("7654321"));
        assert_eq!(record.inventors.len(), 2);
        assert_eq!(record.inventors[0].inventor_first_name, "John Q.");
        assert_eq!(record.inventors[1].inventor_first_name, "");
        assert!(record.citedby_patents.is_empty());
        assert_eq!(record.citation_count(), 1);
        assert_eq!(record.assignees[0].assignee_id.as_deref(), Some("org_1"));
    }

    #[test]
    fn test_missing_fields_decode_as_none() {
        let record: RawPatentRecord =
            serde_json::from_str(r#"{"inventors": [{"inventor_last_name": "X"}]}"#).unwrap();
        assert_eq!(record.patent_number(), None);
        assert_eq!(record.inventors[0].inventor_id(), None);
    }

    #[test]
    fn test_blank_identifiers_are_missing() {
        let inventor = RawInventor {
            inventor_id: Some("  ".to_string()),
            ..RawInventor::default()
        };
        assert_eq!(inventor.inventor_id(), None);
    }
}
