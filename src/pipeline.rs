//! Per-organization network construction
//!
//! records -> normalize -> bipartite graph -> projection -> attributes ->
//! imputation -> summary. Each run owns all of its state; nothing is shared
//! between organizations.

use crate::algo::{project_onto_inventors, NetworkSummary};
use crate::config::{DateWindow, Organization, PipelineConfig};
use crate::error::{PipelineError, PipelineResult};
use crate::gender::{impute_gender, GenderClassifier, ImputationReport, NameGenderLookup, NameLexicon};
use crate::graph::{keys, CollaborationGraph};
use crate::ingest::{NormalizationContext, NormalizationStats, QueryResponse, RawPatentRecord};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// A finished network and what it took to build it
#[derive(Debug, Clone)]
pub struct NetworkOutput {
    pub graph: CollaborationGraph,
    pub summary: NetworkSummary,
    pub normalization: NormalizationStats,
    pub imputation: ImputationReport,
}

/// Result of one organization within a multi-organization run
#[derive(Debug)]
pub struct OrganizationOutcome {
    pub organization: Organization,
    pub result: PipelineResult<NetworkOutput>,
}

impl OrganizationOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Collaboration network pipeline
pub struct Pipeline<L = NameLexicon> {
    classifier: GenderClassifier<L>,
    date_window: Option<DateWindow>,
}

impl Pipeline<NameLexicon> {
    /// Build from configuration: built-in lexicon plus the configured one
    pub fn from_config(config: &PipelineConfig) -> PipelineResult<Self> {
        let mut lexicon = NameLexicon::builtin()?;
        if let Some(path) = &config.lexicon_path {
            lexicon.merge_file(path)?;
        }
        info!("Name lexicon ready with {} entries", lexicon.len());

        Ok(Self::new(GenderClassifier::new(lexicon)).with_date_window(config.date_window))
    }
}

impl<L: NameGenderLookup> Pipeline<L> {
    pub fn new(classifier: GenderClassifier<L>) -> Self {
        Self {
            classifier,
            date_window: None,
        }
    }

    pub fn with_date_window(mut self, window: Option<DateWindow>) -> Self {
        self.date_window = window;
        self
    }

    pub fn classifier(&self) -> &GenderClassifier<L> {
        &self.classifier
    }

    /// Build one organization's network from its record set.
    ///
    /// Either a complete, fully imputed graph is returned or nothing is.
    pub fn run<'r, R: Rng + ?Sized>(
        &self,
        organization: &Organization,
        records: impl IntoIterator<Item = &'r RawPatentRecord>,
        rng: &mut R,
    ) -> PipelineResult<NetworkOutput> {
        info!("Building network for {} ({})", organization.name, organization.assignee_id);

        let mut context = NormalizationContext::new(&self.classifier).with_date_window(self.date_window);
        context.ingest_all(records)?;
        let normalization = context.stats();

        let bipartite = context.into_bipartite()?;
        info!(
            "{}: {} inventors, {} patents, {} memberships",
            organization.name,
            bipartite.inventor_count(),
            bipartite.patent_count(),
            bipartite.membership_count()
        );
        if bipartite.inventor_count() == 0 {
            warn!("{}: no inventors in record set; network is empty", organization.name);
        }

        let mut graph = project_onto_inventors(&bipartite)?;
        graph.set_attribute(keys::ORGANIZATION_ID, organization.assignee_id.as_str());
        graph.set_attribute(keys::ORGANIZATION_NAME, organization.name.as_str());

        let imputation = impute_gender(&mut graph, rng)?;
        let summary = NetworkSummary::compute(organization.name.as_str(), &bipartite, &graph, &imputation);

        info!(
            "{}: {} collaborations, {} isolated, {} components, imputed {} of {} labels",
            organization.name,
            summary.collaborations,
            summary.isolated_inventors,
            summary.components,
            imputation.imputed(),
            summary.inventors
        );

        Ok(NetworkOutput {
            graph,
            summary,
            normalization,
            imputation,
        })
    }

    /// Build from one query response page
    pub fn run_response<R: Rng + ?Sized>(
        &self,
        organization: &Organization,
        response: &QueryResponse,
        rng: &mut R,
    ) -> PipelineResult<NetworkOutput> {
        if response.is_truncated() {
            warn!(
                "{}: response holds {} of {} matching patents; building from the partial set",
                organization.name, response.count, response.total_patent_count
            );
        }
        self.run(organization, &response.patents, rng)
    }

    /// Build every configured organization independently.
    ///
    /// `load` supplies each organization's records; a failure to load or to
    /// build is recorded for that organization and the run moves on.
    pub fn run_all<F>(&self, config: &PipelineConfig, mut load: F) -> Vec<OrganizationOutcome>
    where
        F: FnMut(&Organization) -> PipelineResult<QueryResponse>,
    {
        config
            .organizations
            .iter()
            .map(|organization| {
                let mut rng = config.rng_for(organization);
                let result = load(organization)
                    .and_then(|response| self.run_response(organization, &response, &mut rng));
                if let Err(e) = &result {
                    error!("{}: skipped: {}", organization.name, e);
                }
                OrganizationOutcome {
                    organization: organization.clone(),
                    result,
                }
            })
            .collect()
    }
}

/// Loader error for an organization without usable input
pub fn missing_input(organization: &Organization, message: impl Into<String>) -> PipelineError {
    PipelineError::Input {
        organization: organization.name.clone(),
        message: message.into(),
    }
}

/// Path of an organization's query response under `dir`
pub fn input_path(dir: &Path, organization: &Organization) -> PathBuf {
    dir.join(format!("{}.json", organization.name))
}

/// Read `<dir>/<NAME>.json` for an organization
pub fn load_response(dir: &Path, organization: &Organization) -> PipelineResult<QueryResponse> {
    let path = input_path(dir, organization);
    let text = std::fs::read_to_string(&path)
        .map_err(|e| missing_input(organization, format!("{}: {}", path.display(), e)))?;
    QueryResponse::from_json(&text)
        .map_err(|e| missing_input(organization, format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gender::Gender;
    use crate::ingest::RawInventor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pipeline() -> Pipeline {
        Pipeline::new(GenderClassifier::new(
            NameLexicon::parse("john\tmale\nmary\tfemale\n").unwrap(),
        ))
    }

    fn record(number: &str, inventors: &[(&str, &str)]) -> RawPatentRecord {
        RawPatentRecord {
            patent_number: Some(number.to_string()),
            patent_date: Some("2010-06-01".to_string()),
            inventors: inventors
                .iter()
                .map(|&(id, first)| RawInventor {
                    inventor_id: Some(id.to_string()),
                    inventor_first_name: first.to_string(),
                    inventor_last_name: "Doe".to_string(),
                })
                .collect(),
            ..RawPatentRecord::default()
        }
    }

    #[test]
    fn test_run_sets_graph_attributes() {
        let org = Organization::new("org_9", "ACME");
        let records = vec![record("P1", &[("a", "John"), ("b", "Zed")])];

        let output = pipeline()
            .run(&org, &records, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(output.graph.organization_id(), Some("org_9"));
        assert_eq!(output.graph.organization_name(), Some("ACME"));
        assert_eq!(output.imputation.imputed_male, 1);
        assert_eq!(
            output.graph.node_by_key("b").unwrap().gender(),
            Some(Gender::Male)
        );
    }

    #[test]
    fn test_run_fails_on_empty_pool() {
        let org = Organization::new("org_9", "ACME");
        let records = vec![record("P1", &[("a", "Zed"), ("b", "Qux")])];

        let err = pipeline()
            .run(&org, &records, &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, PipelineError::EmptyResolvedPool { ref organization } if organization == "ACME"));
    }

    #[test]
    fn test_run_all_isolates_failures() {
        let config = PipelineConfig {
            organizations: vec![
                Organization::new("org_bad", "BAD"),
                Organization::new("org_missing", "MISSING"),
                Organization::new("org_good", "GOOD"),
            ],
            seed: Some(3),
            ..PipelineConfig::default()
        };
        let pipeline = pipeline();

        let outcomes = pipeline.run_all(&config, |org| match org.name.as_str() {
            "BAD" => Ok(QueryResponse {
                patents: vec![RawPatentRecord::default()],
                ..QueryResponse::default()
            }),
            "GOOD" => Ok(QueryResponse {
                patents: vec![record("P1", &[("a", "Mary"), ("b", "John")])],
                count: 1,
                total_patent_count: 1,
            }),
            _ => Err(missing_input(org, "no file")),
        });

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0].result, Err(PipelineError::MalformedRecord { .. })));
        assert!(matches!(outcomes[1].result, Err(PipelineError::Input { .. })));
        assert!(outcomes[2].is_ok());

        let good = outcomes[2].result.as_ref().unwrap();
        assert_eq!(good.summary.collaborations, 1);
    }

    #[test]
    fn test_from_config_surfaces_lexicon_errors() {
        let pipeline = Pipeline::from_config(&PipelineConfig::default()).unwrap();
        assert_eq!(pipeline.classifier().classify("Mary"), Gender::Female);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.tsv");
        std::fs::write(&path, "ok\tmale\nbroken line\n").unwrap();
        let config = PipelineConfig {
            lexicon_path: Some(path),
            ..PipelineConfig::default()
        };

        let err = Pipeline::from_config(&config).err().unwrap();
        assert!(matches!(
            err,
            PipelineError::Config(crate::config::ConfigError::Lexicon { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_response() {
        let dir = tempfile::tempdir().unwrap();
        let org = Organization::new("org_1", "ACME");

        let err = load_response(dir.path(), &org).unwrap_err();
        assert!(matches!(err, PipelineError::Input { .. }));

        std::fs::write(
            input_path(dir.path(), &org),
            r#"{"patents": [{"patent_number": "P1", "inventors": null}], "count": 1, "total_patent_count": 4}"#,
        )
        .unwrap();
        let response = load_response(dir.path(), &org).unwrap();
        assert_eq!(response.patents.len(), 1);
        assert!(response.is_truncated());

        std::fs::write(input_path(dir.path(), &org), "not json").unwrap();
        assert!(matches!(
            load_response(dir.path(), &org),
            Err(PipelineError::Input { .. })
        ));
    }
}
