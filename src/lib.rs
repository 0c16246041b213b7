// src/lib.rs
// =============================================================================
// Library side of domain-crawler. The binary (src/main.rs) is a thin CLI
// on top of this.
//
// - config: settings for a crawl session
// - crawl: the crawler and its building blocks
// =============================================================================

pub mod config;
pub mod crawl;

pub use config::CrawlerConfig;
pub use crawl::{CrawlError, CrawlReport, Crawler, DocumentType};
