//! Record normalization
//!
//! A `NormalizationContext` is owned by exactly one organization's run. It
//! keeps the identifier -> inventor arena and the deduplicated membership set
//! for that run and is consumed when the bipartite graph is built.

use super::inventor::{Inventor, Membership};
use super::record::RawPatentRecord;
use crate::config::DateWindow;
use crate::error::{PipelineError, PipelineResult};
use crate::gender::{GenderClassifier, NameGenderLookup, NameLexicon};
use crate::graph::{BipartiteGraph, GraphResult, InventorId, PatentId};
use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::debug;

/// Counters collected while normalizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationStats {
    /// Records seen, skipped ones included
    pub records: usize,
    /// Records outside the configured date window
    pub out_of_window: usize,
    /// Records listing no inventors
    pub without_inventors: usize,
    /// Inventor mentions of an already known identifier
    pub repeat_inventors: usize,
    /// Membership pairs seen again
    pub duplicate_memberships: usize,
    /// Citation links carried by accepted records
    pub citations: usize,
}

/// Per-run accumulation of inventors and memberships
pub struct NormalizationContext<'c, L = NameLexicon> {
    classifier: &'c GenderClassifier<L>,
    date_window: Option<DateWindow>,
    inventors: IndexMap<InventorId, Inventor>,
    memberships: IndexSet<Membership>,
    stats: NormalizationStats,
}

impl<'c, L: NameGenderLookup> NormalizationContext<'c, L> {
    pub fn new(classifier: &'c GenderClassifier<L>) -> Self {
        Self {
            classifier,
            date_window: None,
            inventors: IndexMap::new(),
            memberships: IndexSet::new(),
            stats: NormalizationStats::default(),
        }
    }

    /// Skip records granted outside `window`
    pub fn with_date_window(mut self, window: Option<DateWindow>) -> Self {
        self.date_window = window;
        self
    }

    /// Normalize one record; returns the number of new memberships.
    ///
    /// The record is validated in full before anything is recorded.
    pub fn ingest(&mut self, record: &RawPatentRecord) -> PipelineResult<usize> {
        let index = self.stats.records;
        self.stats.records += 1;

        let malformed = |field| PipelineError::MalformedRecord {
            record: index,
            patent: record.patent_number.clone(),
            field,
        };

        let patent = record.patent_number().ok_or_else(|| malformed("patent_number"))?;

        if let Some(window) = self.date_window {
            let date = record
                .patent_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
                .ok_or_else(|| malformed("patent_date"))?;
            if !window.contains(date) {
                debug!("Skipping patent {} granted {} (outside window)", patent, date);
                self.stats.out_of_window += 1;
                return Ok(0);
            }
        }

        let mut ids = Vec::with_capacity(record.inventors.len());
        for inventor in &record.inventors {
            ids.push(inventor.inventor_id().ok_or_else(|| malformed("inventor_id"))?);
        }

        if ids.is_empty() {
            self.stats.without_inventors += 1;
            return Ok(0);
        }

        let patent = PatentId::from(patent);
        let mut added = 0;
        for (raw, id) in record.inventors.iter().zip(ids) {
            let id = InventorId::from(id);
            if self.inventors.contains_key(&id) {
                // First-seen attributes win.
                self.stats.repeat_inventors += 1;
            } else {
                let gender = self.classifier.classify(&raw.inventor_first_name);
                let inventor = Inventor::new(
                    id.clone(),
                    raw.inventor_first_name.as_str(),
                    raw.inventor_last_name.as_str(),
                    gender,
                );
                self.inventors.insert(id.clone(), inventor);
            }

            if self.memberships.insert(Membership::new(id, patent.clone())) {
                added += 1;
            } else {
                self.stats.duplicate_memberships += 1;
            }
        }

        self.stats.citations += record.citation_count();
        Ok(added)
    }

    /// Normalize a whole record set, stopping at the first malformed record
    pub fn ingest_all<'r>(
        &mut self,
        records: impl IntoIterator<Item = &'r RawPatentRecord>,
    ) -> PipelineResult<usize> {
        let mut added = 0;
        for record in records {
            added += self.ingest(record)?;
        }
        Ok(added)
    }

    pub fn inventors(&self) -> &IndexMap<InventorId, Inventor> {
        &self.inventors
    }

    pub fn memberships(&self) -> &IndexSet<Membership> {
        &self.memberships
    }

    pub fn stats(&self) -> NormalizationStats {
        self.stats
    }

    /// Consume the context into the inventor arena and membership set
    pub fn into_parts(self) -> (IndexMap<InventorId, Inventor>, IndexSet<Membership>) {
        (self.inventors, self.memberships)
    }

    /// Consume the context into the bipartite membership graph
    pub fn into_bipartite(self) -> GraphResult<BipartiteGraph> {
        let (inventors, memberships) = self.into_parts();
        BipartiteGraph::build(inventors, memberships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gender::Gender;
    use crate::ingest::record::RawInventor;

    fn classifier() -> GenderClassifier {
        GenderClassifier::new(NameLexicon::parse("john\tmale\nmary\tfemale\n").unwrap())
    }

    fn inventor(id: &str, first: &str, last: &str) -> RawInventor {
        RawInventor {
            inventor_id: Some(id.to_string()),
            inventor_first_name: first.to_string(),
            inventor_last_name: last.to_string(),
        }
    }

    fn record(number: &str, date: &str, inventors: Vec<RawInventor>) -> RawPatentRecord {
        RawPatentRecord {
            patent_number: Some(number.to_string()),
            patent_date: Some(date.to_string()),
            inventors,
            ..RawPatentRecord::default()
        }
    }

    #[test]
    fn test_ingest_creates_inventors_and_memberships() {
        let classifier = classifier();
        let mut ctx = NormalizationContext::new(&classifier);

        let added = ctx
            .ingest(&record(
                "P1",
                "2010-01-01",
                vec![inventor("a", "John", "Smith"), inventor("b", "Mary", "Jones")],
            ))
            .unwrap();

        assert_eq!(added, 2);
        assert_eq!(ctx.inventors().len(), 2);
        let a = &ctx.inventors()[&InventorId::from("a")];
        assert_eq!(a.display_name, "John Smith");
        assert_eq!(a.gender, Gender::Male);
    }

    #[test]
    fn test_first_seen_attributes_win() {
        let classifier = classifier();
        let mut ctx = NormalizationContext::new(&classifier);

        ctx.ingest(&record("P1", "2010-01-01", vec![inventor("a", "John", "Smith")]))
            .unwrap();
        ctx.ingest(&record("P2", "2010-01-01", vec![inventor("a", "Mary", "Smyth")]))
            .unwrap();

        let a = &ctx.inventors()[&InventorId::from("a")];
        assert_eq!(a.given_name, "John");
        assert_eq!(a.family_name, "Smith");
        assert_eq!(a.gender, Gender::Male);
        assert_eq!(ctx.stats().repeat_inventors, 1);
        assert_eq!(ctx.memberships().len(), 2);
    }

    #[test]
    fn test_duplicate_memberships_collapse() {
        let classifier = classifier();
        let mut ctx = NormalizationContext::new(&classifier);
        let r = record("P1", "2010-01-01", vec![inventor("a", "John", "Smith")]);

        ctx.ingest(&r).unwrap();
        assert_eq!(ctx.ingest(&r).unwrap(), 0);
        assert_eq!(ctx.memberships().len(), 1);
        assert_eq!(ctx.stats().duplicate_memberships, 1);
    }

    #[test]
    fn test_patent_without_inventors_ignored() {
        let classifier = classifier();
        let mut ctx = NormalizationContext::new(&classifier);

        assert_eq!(ctx.ingest(&record("P9", "2010-01-01", Vec::new())).unwrap(), 0);
        assert!(ctx.memberships().is_empty());
        assert_eq!(ctx.stats().without_inventors, 1);

        let graph = ctx.into_bipartite().unwrap();
        assert_eq!(graph.patent_count(), 0);
    }

    #[test]
    fn test_missing_patent_number_is_malformed() {
        let classifier = classifier();
        let mut ctx = NormalizationContext::new(&classifier);
        let mut r = record("", "2010-01-01", vec![inventor("a", "John", "Smith")]);
        r.patent_number = None;

        let err = ctx.ingest(&r).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MalformedRecord { record: 0, field: "patent_number", .. }
        ));
    }

    #[test]
    fn test_missing_inventor_id_is_malformed_and_atomic() {
        let classifier = classifier();
        let mut ctx = NormalizationContext::new(&classifier);
        let mut bad = inventor("", "Mary", "Jones");
        bad.inventor_id = None;

        let err = ctx
            .ingest(&record("P1", "2010-01-01", vec![inventor("a", "John", "Smith"), bad]))
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::MalformedRecord { field: "inventor_id", ref patent, .. }
                if patent.as_deref() == Some("P1")
        ));
        assert!(ctx.inventors().is_empty());
        assert!(ctx.memberships().is_empty());
    }

    #[test]
    fn test_date_window_filter() {
        let classifier = classifier();
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2007, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2012, 12, 31).unwrap(),
        )
        .unwrap();
        let mut ctx = NormalizationContext::new(&classifier).with_date_window(Some(window));

        ctx.ingest(&record("P1", "2006-12-31", vec![inventor("a", "John", "Smith")]))
            .unwrap();
        ctx.ingest(&record("P2", "2012-12-31", vec![inventor("b", "John", "Smith")]))
            .unwrap();
        ctx.ingest(&record("P3", "2007-01-01", vec![inventor("c", "John", "Smith")]))
            .unwrap();

        assert_eq!(ctx.stats().out_of_window, 2);
        assert_eq!(ctx.inventors().len(), 1);

        let err = ctx
            .ingest(&record("P4", "last tuesday", vec![inventor("d", "John", "Smith")]))
            .unwrap_err();
        assert!(matches!(err, PipelineError::MalformedRecord { field: "patent_date", .. }));
    }

    #[test]
    fn test_ingest_all_stops_at_first_error() {
        let classifier = classifier();
        let mut ctx = NormalizationContext::new(&classifier);
        let good = record("P1", "2010-01-01", vec![inventor("a", "John", "Smith")]);
        let bad = RawPatentRecord::default();

        let result = ctx.ingest_all([&good, &bad, &good]);
        assert!(matches!(result, Err(PipelineError::MalformedRecord { record: 1, .. })));
        assert_eq!(ctx.stats().records, 2);
    }
}
