//! unisearch CLI - higher education admissions search
//!
//! This binary provides the command-line interface for the unisearch system.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use unisearch::{CourseArgs, UniversityArgs};
use unisearch_api_service::SearchService;

#[derive(Parser)]
#[command(name = "unisearch")]
#[command(about = "Search higher education admissions by course, district, university and grade")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server
    Serve,
    /// Run one search against the graph store and print the records
    #[command(subcommand)]
    Search(SearchCommands),
    /// Print the compiled SPARQL query without running it
    #[command(subcommand)]
    Explain(SearchCommands),
}

#[derive(Subcommand)]
enum SearchCommands {
    /// Institutions offering a course
    University(UniversityArgs),
    /// Courses at a university or in a scientific area
    Course(CourseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Serve) => serve(cli.config.as_deref()).await,
        Some(Commands::Search(search)) => run_search(cli.config.as_deref(), search).await,
        Some(Commands::Explain(search)) => {
            let text = match &search {
                SearchCommands::University(args) => unisearch::explain_university(args)?,
                SearchCommands::Course(args) => unisearch::explain_course(args)?,
            };
            print!("{text}");
            Ok(())
        }
        None => {
            println!("Run 'unisearch serve' to start the REST server, or --help for more options");
            Ok(())
        }
    }
}

/// Initialize logging system
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug over info.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("unisearch={level},tower_http={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start the REST API server
async fn serve(config_path: Option<&Path>) -> Result<()> {
    info!("Preparing to start unisearch REST server...");

    let config = unisearch::load_config(config_path)?;
    info!("Using graph store at {}", config.graph_store.endpoint);

    unisearch_server::run_server(config)
        .await
        .context("REST server failed")?;
    Ok(())
}

/// Run one search and print its records as JSON
async fn run_search(config_path: Option<&Path>, search: SearchCommands) -> Result<()> {
    let config = unisearch::load_config(config_path)?;

    let store = unisearch_store::create_graph_store(&config.graph_store)
        .context("Failed to create graph store client")?;
    if !store.check_health().await {
        warn!(
            "Graph store at {} did not answer the health probe",
            config.graph_store.endpoint
        );
    }
    let service = SearchService::new(Arc::clone(&store));

    let output = match &search {
        SearchCommands::University(args) => unisearch::search_university(&service, args).await?,
        SearchCommands::Course(args) => unisearch::search_course(&service, args).await?,
    };
    println!("{output}");
    Ok(())
}
