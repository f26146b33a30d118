//! Vitrine main entry point
//!
//! This is the command-line interface for the vitrine product catalog
//! summarizer.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vitrine::config::load_config_with_hash;
use vitrine::output::{render_json, write_json, write_markdown};
use vitrine::pipeline::build_catalog;
use vitrine::sitemap::domain_host;

/// Vitrine: a sitemap-driven product catalog summarizer
///
/// Vitrine reads a domain's robots.txt to find its sitemap, walks the
/// sitemap to the product listing, and produces a short summary for each
/// product in a bounded batch.
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "A sitemap-driven product catalog summarizer", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Domain to build a catalog for (e.g. example.com)
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be fetched without fetching
    #[arg(long)]
    dry_run: bool,

    /// Write the catalog JSON to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    json_out: Option<PathBuf>,

    /// Also write a human-readable markdown catalog to a file
    #[arg(long, value_name = "PATH")]
    markdown_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config, &cli.domain);
        return Ok(());
    }

    // Run the pipeline
    let domain = cli.domain.clone();
    let results = match build_catalog(config, &domain).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Catalog build failed: {}", e);
            return Err(e.into());
        }
    };

    // Emit the catalog
    if let Some(path) = &cli.json_out {
        write_json(&results, path)?;
        println!("Catalog written to: {}", path.display());
    } else {
        println!("{}", render_json(&results)?);
    }

    if let Some(path) = &cli.markdown_out {
        write_markdown(&domain_host(&domain), &results, path)?;
        println!("Markdown catalog written to: {}", path.display());
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
            0 => EnvFilter::new("vitrine=info,warn"),
            1 => EnvFilter::new("vitrine=debug,info"),
            2 => EnvFilter::new("vitrine=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &vitrine::Config, domain: &str) {
    println!("=== Vitrine Dry Run ===\n");

    println!("Domain: {}", domain_host(domain));
    println!("  robots.txt: https://{}/robots.txt", domain_host(domain));

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.scraper_name);
    println!("  Version: {}", config.user_agent.scraper_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nCatalog:");
    println!("  Product marker: {}", config.catalog.product_marker);
    println!("  Skip leading: {}", config.catalog.skip_leading);
    println!("  Batch size: {}", config.catalog.batch_size);

    println!("\nSummarizer:");
    println!("  Endpoint: {}", config.summarizer.endpoint_url);
    println!("  Token: [redacted]");

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would summarize up to {} products for {}",
        config.catalog.batch_size,
        domain_host(domain)
    );
}
