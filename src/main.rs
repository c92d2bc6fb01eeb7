//! Web-Sweep main entry point
//!
//! This is the command-line interface for the Web-Sweep crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use web_sweep::config::{load_config_with_hash, validate, Config};
use web_sweep::crawler::crawl;
use web_sweep::output::print_statistics;

/// Web-Sweep: a breadth-first web crawler
///
/// Web-Sweep crawls outward from a list of seed URLs, recording the title
/// and meta description of every page it reaches, until the page budget is
/// spent or there is nothing left to visit.
#[derive(Parser, Debug)]
#[command(name = "web-sweep")]
#[command(version = "1.0.0")]
#[command(about = "A breadth-first web crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Seed URL to start from; repeat for several (replaces configured seeds)
    #[arg(long = "seed", value_name = "URL")]
    seeds: Vec<String>,

    /// Maximum number of pages to attempt
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Maximum number of fetches in flight at once
    #[arg(long, value_name = "N")]
    max_concurrent: Option<usize>,

    /// Path of the JSON results document
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_crawl(config, cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("web_sweep=info,warn"),
            1 => EnvFilter::new("web_sweep=debug,info"),
            2 => EnvFilter::new("web_sweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if !cli.seeds.is_empty() {
        config.seeds = cli.seeds.clone();
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(max_concurrent) = cli.max_concurrent {
        config.crawler.max_concurrent = max_concurrent;
    }
    if let Some(output) = &cli.output {
        config.output.results_path = output.display().to_string();
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Web-Sweep Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Max concurrent: {}", config.crawler.max_concurrent);
    println!("  Timeout: {}s", config.crawler.timeout_secs);
    println!("  Save interval: {} records", config.crawler.save_interval);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.value);

    println!("\nOutput:");
    println!("  Results: {}", config.output.results_path);

    println!("\nSeeds ({}):", config.seeds.len());
    for seed in &config.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config, quiet: bool) -> anyhow::Result<()> {
    let results_path = config.output.results_path.clone();
    tracing::info!("Total seed URLs: {}", config.seeds.len());

    let report = crawl(config).await.context("Crawl failed")?;

    tracing::info!(
        "{} pages saved to {}",
        report.records.len(),
        results_path
    );

    if !quiet {
        println!();
        print_statistics(&report.statistics);
    }

    Ok(())
}
