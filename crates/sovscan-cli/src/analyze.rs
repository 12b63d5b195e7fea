//! The `analyze` command: run the SoV pipeline and export results.

use std::path::PathBuf;

use anyhow::Context;
use sovscan_analysis::{export, run_sov_analysis, SovAnalysis};
use sovscan_core::{AppConfig, BrandRoster};
use sovscan_sentiment::{LexiconClassifier, RemoteClassifier};
use sovscan_youtube::YoutubeClient;

/// Effective parameters for one analysis run, after merging CLI flags over
/// the environment config.
pub(crate) struct AnalyzeRequest {
    pub query: String,
    pub max_videos: u32,
    pub max_comments: u32,
    pub raw_out: PathBuf,
    pub summary_out: PathBuf,
    pub dry_run: bool,
}

/// Run the analysis end to end.
///
/// Degradation policy: a client construction failure is reported and exits
/// cleanly without any network call; "no mentions found" prints a message
/// and writes no files. Only config/roster problems and search failures
/// are errors.
///
/// # Errors
///
/// Returns an error if the roster cannot be loaded, the search call fails,
/// or a CSV file cannot be written.
pub(crate) async fn run_analyze(config: &AppConfig, request: &AnalyzeRequest) -> anyhow::Result<()> {
    let roster = BrandRoster::load(&config.brands_path)
        .with_context(|| format!("loading brands from {}", config.brands_path.display()))?;

    if request.dry_run {
        let names: Vec<&str> = roster.names().collect();
        println!(
            "dry-run: would search '{}' across {} videos ({} comments each) for brands: [{}]",
            request.query,
            request.max_videos,
            request.max_comments,
            names.join(", ")
        );
        return Ok(());
    }

    let client = match YoutubeClient::new(&config.youtube_api_key, config.request_timeout_secs) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "YouTube client could not be constructed");
            println!("YouTube service is not available; no analysis was run.");
            return Ok(());
        }
    };

    let outcome = match &config.sentiment_url {
        Some(url) => {
            tracing::info!(url, "using remote sentiment classifier");
            run_sov_analysis(
                &client,
                &RemoteClassifier::new(url),
                &roster,
                &request.query,
                request.max_videos,
                request.max_comments,
            )
            .await?
        }
        None => {
            run_sov_analysis(
                &client,
                &LexiconClassifier::new(),
                &roster,
                &request.query,
                request.max_videos,
                request.max_comments,
            )
            .await?
        }
    };

    let Some(analysis) = outcome else {
        println!("No brand mentions found.");
        return Ok(());
    };

    print_report(&analysis);

    export::write_raw_csv(&request.raw_out, &analysis.mentions)
        .with_context(|| format!("writing {}", request.raw_out.display()))?;
    export::write_summary_csv(&request.summary_out, &analysis.report)
        .with_context(|| format!("writing {}", request.summary_out.display()))?;

    println!(
        "Saved '{}' and '{}'.",
        request.raw_out.display(),
        request.summary_out.display()
    );
    Ok(())
}

fn print_report(analysis: &SovAnalysis) {
    let banner = "=".repeat(40);
    println!("\n{banner}");
    println!("  SHARE OF VOICE (SoV) FINAL REPORT");
    println!("{banner}");
    for row in &analysis.report {
        println!("{:<25}{}", row.brand, row.wess_score);
    }
    println!("{banner}");
    println!(
        "generated {} from {} mentions",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"),
        analysis.mentions.len()
    );
}
