use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pcr_scorer::{catalog, loader, report, scoring, ScoringConfig};

#[derive(Parser)]
#[command(name = "pcr-scorer")]
#[command(about = "Score patient care reports against training scenarios", long_about = None)]
struct Cli {
    /// JSON scoring configuration
    #[arg(long, global = true, env = "PCR_SCORER_CONFIG")]
    config: Option<PathBuf>,

    /// Copy completeness suggestions into the aggregate suggestion list
    #[arg(long, global = true)]
    include_completeness_suggestions: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one document and print the result
    Score {
        #[arg(long)]
        document: PathBuf,
        /// Scenario JSON file or built-in scenario id
        #[arg(long)]
        scenario: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Write a markdown feedback report
    Report {
        #[arg(long)]
        document: PathBuf,
        /// Scenario JSON file or built-in scenario id
        #[arg(long)]
        scenario: String,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Score every submission listed in a CSV manifest
    Batch {
        #[arg(long)]
        manifest: PathBuf,
        #[arg(long, default_value = "summary.csv")]
        out: PathBuf,
    },
    /// List built-in scenarios
    Scenarios,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pcr_scorer=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ScoringConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ScoringConfig::default(),
    };
    if cli.include_completeness_suggestions {
        config.include_completeness_suggestions = true;
    }

    match cli.command {
        Commands::Score {
            document,
            scenario,
            format,
        } => {
            let pcr = loader::load_document(&document)?;
            let scenario = loader::resolve_scenario(&scenario)?;
            let scores = scoring::score_document(&pcr, &scenario, &config);
            info!(document = %pcr.id, scenario = %scenario.id, overall = scores.overall, "scored");

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&scores)?);
                }
                OutputFormat::Markdown => {
                    print!("{}", report::build_report(&pcr, &scenario, &scores));
                }
            }
        }
        Commands::Report {
            document,
            scenario,
            out,
        } => {
            let pcr = loader::load_document(&document)?;
            let scenario = loader::resolve_scenario(&scenario)?;
            let scores = scoring::score_document(&pcr, &scenario, &config);
            info!(document = %pcr.id, scenario = %scenario.id, overall = scores.overall, "scored");

            let report = report::build_report(&pcr, &scenario, &scores);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Batch { manifest, out } => {
            let rows = loader::score_manifest(&manifest, &config)
                .with_context(|| format!("failed to score manifest {}", manifest.display()))?;

            if rows.is_empty() {
                println!("No submissions could be scored.");
                return Ok(());
            }

            loader::write_summary(&out, &rows)?;
            println!("Scored {} submissions into {}.", rows.len(), out.display());
        }
        Commands::Scenarios => {
            for scenario in catalog::builtin_scenarios() {
                println!(
                    "- {} ({}), {} required treatments",
                    scenario.id,
                    scenario.title,
                    scenario.required_treatments().count()
                );
            }
        }
    }

    Ok(())
}
