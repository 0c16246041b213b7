// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There's just one command: give it a URL and it crawls that site.
//
//   domain-crawler https://example.com/ --media-dir ./out --json
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use domain_crawler::config::{self, CrawlerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "domain-crawler",
    version,
    about = "Crawl every page of one website and download its media files",
    long_about = "domain-crawler starts at a URL, follows every link that stays on the same host, \
                  and saves images, videos and archives it finds along the way. \
                  Links to other sites are listed but never followed."
)]
pub struct Cli {
    /// URL to start from (e.g., https://example.com/)
    ///
    /// Only pages with the same host and port are crawled
    pub domain: String,

    /// Directory to save media files in
    ///
    /// Files go in a subdirectory named after the domain
    #[arg(long, default_value = config::DEFAULT_MEDIA_ROOT)]
    pub media_dir: PathBuf,

    /// Initial HTTP connection pool size
    #[arg(long, default_value_t = config::DEFAULT_POOL_SIZE)]
    pub pool_size: usize,

    /// Maximum HTTP connection pool size
    #[arg(long, default_value_t = config::DEFAULT_MAX_POOL_SIZE)]
    pub max_pool_size: usize,

    /// Don't list links to other domains in the report
    #[arg(long)]
    pub no_external: bool,

    /// Output the crawl report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Log every URL as it's crawled (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> CrawlerConfig {
        CrawlerConfig::new(self.domain.clone())
            .with_media_root(self.media_dir.clone())
            .with_pool_size(self.pool_size)
            .with_max_pool_size(self.max_pool_size)
            .with_record_external(!self.no_external)
    }
}
