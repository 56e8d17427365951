//! Patentnet CLI: builds inventor collaboration networks from patent query
//! responses on disk.

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use patentnet::pipeline::load_response;
use patentnet::{
    export_to_dir, ExportFormat, GenderClassifier, NameLexicon, NetworkSummary,
    OrganizationOutcome, Pipeline, PipelineConfig, PipelineError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

#[derive(Parser)]
#[command(name = "patentnet-cli", version, about = "Inventor collaboration network builder")]
struct Cli {
    /// Report format
    #[arg(long, default_value = "table", global = true)]
    report: ReportFormat,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum ReportFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and export one network per configured organization
    Build {
        /// YAML configuration; defaults to the Big Ten set
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory holding `<NAME>.json` query responses
        #[arg(long)]
        input: Option<PathBuf>,

        /// Export directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Export format (graphml or json)
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Imputation seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify given names against the lexicon
    Classify {
        /// Given names; multi-token names must be quoted
        names: Vec<String>,

        /// Extra lexicon file (`name<TAB>signal`)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build {
            config,
            input,
            output,
            format,
            seed,
        } => load_config(config, input, output, format, seed)
            .and_then(|config| run_build(&config, &cli.report)),
        Commands::Classify { names, lexicon } => run_classify(&names, lexicon, &cli.report),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(
    path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
    seed: Option<u64>,
) -> anyhow::Result<PipelineConfig> {
    let mut config = match path {
        Some(path) => PipelineConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(input) = input {
        config.input_dir = input;
    }
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(format) = format {
        config.export_format = format;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

/// Returns `Ok(false)` when any organization failed
fn run_build(config: &PipelineConfig, report: &ReportFormat) -> anyhow::Result<bool> {
    let pipeline = Pipeline::from_config(config)?;
    info!(
        "Building {} networks from {}",
        config.organizations.len(),
        config.input_dir.display()
    );

    let mut outcomes = pipeline.run_all(config, |org| load_response(&config.input_dir, org));
    for outcome in &mut outcomes {
        export_outcome(outcome, config);
    }

    print_outcomes(&outcomes, report)?;

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        error!("{} of {} organizations failed", failed, outcomes.len());
    }
    Ok(failed == 0)
}

fn export_outcome(outcome: &mut OrganizationOutcome, config: &PipelineConfig) {
    let exported = match &outcome.result {
        Ok(output) => export_to_dir(&output.graph, &config.output_dir, config.export_format),
        Err(_) => return,
    };
    match exported {
        Ok(path) => info!("{}: wrote {}", outcome.organization.name, path.display()),
        Err(e) => {
            error!("{}: export failed: {}", outcome.organization.name, e);
            outcome.result = Err(PipelineError::Export(e));
        }
    }
}

fn print_outcomes(outcomes: &[OrganizationOutcome], report: &ReportFormat) -> anyhow::Result<()> {
    match report {
        ReportFormat::Json => {
            let rows: Vec<serde_json::Value> = outcomes
                .iter()
                .map(|o| match &o.result {
                    Ok(output) => serde_json::json!({
                        "organization": o.organization,
                        "summary": output.summary,
                        "normalization": output.normalization,
                    }),
                    Err(e) => serde_json::json!({
                        "organization": o.organization,
                        "error": e.to_string(),
                    }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        ReportFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                "Organization",
                "Inventors",
                "Patents",
                "Edges",
                "Isolated",
                "Components",
                "Male",
                "Female",
                "Imputed",
                "Status",
            ]);
            for outcome in outcomes {
                match &outcome.result {
                    Ok(output) => table.add_row(summary_row(&output.summary)),
                    Err(e) => table.add_row(failure_row(&outcome.organization.name, e)),
                };
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn summary_row(summary: &NetworkSummary) -> Vec<String> {
    vec![
        summary.organization.clone(),
        summary.inventors.to_string(),
        summary.patents.to_string(),
        summary.collaborations.to_string(),
        summary.isolated_inventors.to_string(),
        summary.components.to_string(),
        summary.male.to_string(),
        summary.female.to_string(),
        summary.imputed.to_string(),
        "ok".to_string(),
    ]
}

fn failure_row(name: &str, err: &PipelineError) -> Vec<String> {
    let mut row = vec![name.to_string()];
    row.extend(std::iter::repeat("-".to_string()).take(8));
    row.push(format!("failed: {}", err));
    row
}

fn run_classify(
    names: &[String],
    lexicon_path: Option<PathBuf>,
    report: &ReportFormat,
) -> anyhow::Result<bool> {
    let mut lexicon = NameLexicon::builtin().context("loading built-in lexicon")?;
    if let Some(path) = lexicon_path {
        lexicon
            .merge_file(&path)
            .with_context(|| format!("loading lexicon {}", path.display()))?;
    }
    let classifier = GenderClassifier::new(lexicon);

    let results: Vec<(&str, &str)> = names
        .iter()
        .map(|name| (name.as_str(), classifier.classify(name).as_str()))
        .collect();

    match report {
        ReportFormat::Json => {
            let rows: Vec<serde_json::Value> = results
                .iter()
                .map(|(name, gender)| serde_json::json!({ "name": name, "gender": gender }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        ReportFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Name", "Gender"]);
            for (name, gender) in &results {
                table.add_row(vec![*name, *gender]);
            }
            println!("{}", table);
        }
    }
    Ok(true)
}
