//! newsgraph CLI - Command-line interface
//!
//! Usage:
//!   ng extract [FILE|-] [--scope sentence|paragraph] [--format visualization|statements|triples]
//!   ng entities [FILE|-]
//!   ng feeds list|add|remove
//!   ng digest show [--date YYYY-MM-DD]
//!   ng pipeline run

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ng_core::{AppConfig, FeedSource, Scope};
use ng_extractor::{Extractor, GazetteerTagger, TripleSet};
use ng_graph::{CoOccurrenceGraph, StatementExporter, VisualizationGraph};
use ng_sources::{parse_date, DigestStore, FeedStore, PipelineRunner};

#[derive(Parser)]
#[command(name = "ng")]
#[command(about = "Entity co-occurrence graphs from news text")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract co-occurrence relations from text
    Extract {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Segmentation scope (sentence or paragraph)
        #[arg(long)]
        scope: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Visualization)]
        format: OutputFormat,
    },
    /// List named entities grouped by category
    Entities {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Manage news feed sources
    Feeds {
        #[command(subcommand)]
        action: FeedAction,
    },
    /// Inspect digest artifacts
    Digest {
        #[command(subcommand)]
        action: DigestAction,
    },
    /// Drive the external batch pipeline
    Pipeline {
        #[command(subcommand)]
        action: PipelineAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `{nodes, links}` JSON
    Visualization,
    /// One graph-creation statement per line
    Statements,
    /// JSON array of triples
    Triples,
}

#[derive(Subcommand)]
enum FeedAction {
    /// List configured feeds
    List,
    /// Add a feed
    Add {
        name: String,
        #[arg(long)]
        url: String,
        #[arg(long = "type", default_value = "rss")]
        source_type: String,
        #[arg(long, default_value = "")]
        lang: String,
        #[arg(long, default_value_t = 0.0)]
        diversity_score: f64,
        #[arg(long, default_value = "")]
        perspective: String,
        #[arg(long, default_value = "")]
        region: String,
    },
    /// Remove a feed by name
    Remove { name: String },
}

#[derive(Subcommand)]
enum DigestAction {
    /// Print a digest (the newest one by default)
    Show {
        /// Digest date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
enum PipelineAction {
    /// Run the pipeline and report its outcome
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // Logs go to stderr; stdout carries command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Extract {
            input,
            scope,
            format,
        } => {
            let extractor = build_extractor(&config)?;
            let scope = match scope {
                Some(scope) => scope.parse::<Scope>()?,
                None => extractor.scope(),
            };
            let text = read_input(&input)?;
            let triples = extractor.extract_with_scope(&text, scope)?;
            info!(scope = %scope, triples = triples.len(), "extraction completed");
            let exporter = StatementExporter::from_config(&config.extraction);
            println!("{}", render(&triples, format, &exporter)?);
        }
        Commands::Entities { input } => {
            let extractor = build_extractor(&config)?;
            let entities = extractor.named_entities(&read_input(&input)?)?;
            println!("{}", serde_json::to_string_pretty(&entities)?);
        }
        Commands::Feeds { action } => {
            let store = FeedStore::new(config.feeds.path.clone());
            match action {
                FeedAction::List => {
                    for feed in store.list()? {
                        println!("{}\t{}\t{}", feed.name, feed.source_type, feed.url);
                    }
                }
                FeedAction::Add {
                    name,
                    url,
                    source_type,
                    lang,
                    diversity_score,
                    perspective,
                    region,
                } => {
                    let feed = store.add(FeedSource {
                        name,
                        source_type,
                        url,
                        lang,
                        diversity_score,
                        perspective,
                        region,
                    })?;
                    info!(name = %feed.name, url = %feed.url, "feed added");
                    println!("Added feed: {}", feed.name);
                }
                FeedAction::Remove { name } => {
                    let feed = store.remove(&name)?;
                    info!(name = %feed.name, "feed removed");
                    println!("Removed feed: {}", feed.name);
                }
            }
        }
        Commands::Digest { action } => match action {
            DigestAction::Show { date } => {
                let store = DigestStore::from_config(&config.digest);
                let date = match date.as_deref() {
                    Some(raw) => match parse_date(raw) {
                        Some(date) => Some(date),
                        None => bail!("invalid date '{raw}', expected YYYY-MM-DD"),
                    },
                    None => None,
                };
                let records = store.load_or_latest(date)?;
                println!("{}", serde_json::to_string_pretty(&records)?);
            }
        },
        Commands::Pipeline { action } => match action {
            PipelineAction::Run => {
                let outcome = PipelineRunner::from_config(&config.pipeline).run().await?;
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                if outcome.success {
                    info!(duration_ms = outcome.duration_ms, "pipeline completed");
                } else {
                    warn!(exit_code = ?outcome.exit_code, "pipeline failed");
                    bail!("pipeline exited with {:?}", outcome.exit_code);
                }
            }
        },
    }

    Ok(())
}

fn build_extractor(config: &AppConfig) -> anyhow::Result<Extractor> {
    let tagger = match &config.extraction.gazetteer_path {
        Some(path) => GazetteerTagger::from_yaml_file(path)?,
        None => GazetteerTagger::new(),
    };
    Ok(Extractor::from_config(Arc::new(tagger), &config.extraction))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn render(
    triples: &TripleSet,
    format: OutputFormat,
    exporter: &StatementExporter,
) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Visualization => {
            let graph = CoOccurrenceGraph::assemble(triples);
            serde_json::to_string_pretty(&VisualizationGraph::from_graph(&graph))?
        }
        OutputFormat::Statements => exporter.statements(triples).join("\n"),
        OutputFormat::Triples => serde_json::to_string_pretty(triples.as_slice())?,
    };
    Ok(rendered)
}
