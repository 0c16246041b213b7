// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing), RUST_LOG or --verbose pick the level
// 3. Create the crawler (this makes the media directory)
// 4. Crawl until there's nothing left, then print the report
// 5. Exit with proper code (0 = crawl finished, 1 = media directory
//    couldn't be created, 2 = any other error)
//
// A crawl that finishes always exits with 0, even if some pages failed;
// the failures are listed in the report.
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use domain_crawler::crawl::{CrawlError, CrawlReport, Crawler, FailureKind};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<CrawlError>() {
            Some(CrawlError::MediaDir { .. }) => {
                error!("{}\nAborting...", e);
                1
            }
            _ => {
                error!("{:#}", e);
                2
            }
        },
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so `--json` output on stdout stays machine-readable
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("domain_crawler={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> Result<()> {
    let mut crawler = Crawler::new(cli.to_config())?;
    let report = crawler.crawl().await;

    print_results(&report, cli.json)
}

// Prints the report either as a summary or JSON
fn print_results(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_summary(report);
    }
    Ok(())
}

fn print_summary(report: &CrawlReport) {
    println!("🔍 Crawled {}", report.domain);
    println!();

    if !report.failures.is_empty() {
        println!("{:<60} {:<15} {:<30}", "URL", "STATUS", "MESSAGE");
        println!("{}", "=".repeat(105));

        for failure in &report.failures {
            // Truncate URL if too long for display
            let url_display = if failure.url.chars().count() > 57 {
                format!("{}...", failure.url.chars().take(57).collect::<String>())
            } else {
                failure.url.clone()
            };

            println!(
                "{:<60} {:<15} {:<30}",
                url_display,
                format_kind(&failure.kind),
                failure.message
            );
        }
        println!();
    }

    println!("📊 Summary:");
    println!("   📄 Pages: {}", report.pages.len());
    println!("   🖼️  Media: {}", report.media.len());
    println!("   ❌ Failed: {}", report.failures.len());
    println!("   🌐 External links: {}", report.external_links.len());
    println!("   ⏱️  Time: {:.2}s", report.elapsed_secs);
}

fn format_kind(kind: &FailureKind) -> String {
    match kind {
        FailureKind::Status(code) => format!("HTTP {}", code),
        FailureKind::Timeout => "TIMEOUT".to_string(),
        FailureKind::TooManyRedirects => "REDIRECTS".to_string(),
        FailureKind::Connect => "CONNECT".to_string(),
        FailureKind::Network => "NETWORK".to_string(),
        FailureKind::Io => "WRITE ERROR".to_string(),
    }
}
