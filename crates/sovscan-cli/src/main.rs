use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod analyze;

#[derive(Debug, Parser)]
#[command(name = "sovscan")]
#[command(about = "Share of Voice analysis over YouTube search results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search videos, score brand mentions, and export CSV results
    Analyze {
        /// Search query (overrides SOVSCAN_QUERY)
        #[arg(long)]
        query: Option<String>,

        /// Number of videos to analyze (overrides SOVSCAN_MAX_VIDEOS)
        #[arg(long)]
        max_videos: Option<u32>,

        /// Top comments fetched per video (overrides SOVSCAN_MAX_COMMENTS)
        #[arg(long)]
        max_comments: Option<u32>,

        /// Raw mention table output path (overrides SOVSCAN_RAW_OUT)
        #[arg(long)]
        raw_out: Option<PathBuf>,

        /// Ranked summary output path (overrides SOVSCAN_SUMMARY_OUT)
        #[arg(long)]
        summary_out: Option<PathBuf>,

        /// Print the roster and query without any network calls
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the configured brand roster
    Brands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    // The API key check happens here, before any network call.
    let config = sovscan_core::load_app_config_from_env().context("configuration error")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match cli.command {
        Commands::Analyze {
            query,
            max_videos,
            max_comments,
            raw_out,
            summary_out,
            dry_run,
        } => {
            let request = analyze::AnalyzeRequest {
                query: query.unwrap_or_else(|| config.query.clone()),
                max_videos: max_videos.unwrap_or(config.max_videos),
                max_comments: max_comments.unwrap_or(config.max_comments),
                raw_out: raw_out.unwrap_or_else(|| config.raw_out.clone()),
                summary_out: summary_out.unwrap_or_else(|| config.summary_out.clone()),
                dry_run,
            };
            analyze::run_analyze(&config, &request).await
        }
        Commands::Brands => run_brands(&config),
    }
}

fn run_brands(config: &sovscan_core::AppConfig) -> anyhow::Result<()> {
    let roster = sovscan_core::BrandRoster::load(&config.brands_path)
        .with_context(|| format!("loading brands from {}", config.brands_path.display()))?;

    println!("{:<20}RELATIONSHIP", "BRAND");
    for brand in roster.brands() {
        println!("{:<20}{}", brand.name, brand.relationship);
    }
    Ok(())
}
