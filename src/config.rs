// src/config.rs
// =============================================================================
// Settings for a crawl session.
//
// The CLI (src/cli.rs) fills one of these in, and the crawler
// (src/crawl/queue.rs) reads it when it starts up.
//
// Defaults:
// - 100 pooled connections (initial and maximum)
// - media files go under ./out/<escaped domain>/
// - links to other domains are recorded in the report
// =============================================================================

use std::path::{Path, PathBuf};

pub const DEFAULT_POOL_SIZE: usize = 100;
pub const DEFAULT_MAX_POOL_SIZE: usize = 100;
pub const DEFAULT_MEDIA_ROOT: &str = "./out";

#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Seed URL; its host (and port) bounds the crawl
    pub domain: String,
    /// Initial connection pool size
    pub pool_size: usize,
    /// Maximum idle connections kept per host
    pub max_pool_size: usize,
    /// Parent directory for the per-domain media directory
    pub media_root: PathBuf,
    pub user_agent: String,
    /// Whether out-of-scope links are listed in the crawl report
    pub record_external: bool,
}

impl CrawlerConfig {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            pool_size: DEFAULT_POOL_SIZE,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            media_root: PathBuf::from(DEFAULT_MEDIA_ROOT),
            user_agent: format!("domain-crawler/{}", env!("CARGO_PKG_VERSION")),
            record_external: true,
        }
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn with_max_pool_size(mut self, max_pool_size: usize) -> Self {
        self.max_pool_size = max_pool_size;
        self
    }

    pub fn with_media_root(mut self, media_root: impl Into<PathBuf>) -> Self {
        self.media_root = media_root.into();
        self
    }

    pub fn with_record_external(mut self, record_external: bool) -> Self {
        self.record_external = record_external;
        self
    }

    /// Where media files for this domain end up: `<media_root>/<escaped domain>`
    pub fn media_dir(&self) -> PathBuf {
        media_dir_for(&self.media_root, &self.domain)
    }
}

pub fn media_dir_for(media_root: &Path, domain: &str) -> PathBuf {
    media_root.join(media_dir_name(domain))
}

// Turns a domain string into something safe to use as a directory name
//
// Examples:
//   "https://www.example.com/" -> "https_www_example_com"
//   "http://localhost:8080"    -> "http_localhost_8080"
pub fn media_dir_name(domain: &str) -> String {
    domain.replace('.', "_").replace('/', "").replace(':', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_dir_name_escapes_domain() {
        assert_eq!(media_dir_name("https://www.example.com/"), "https_www_example_com");
        assert_eq!(media_dir_name("http://localhost:8080"), "http_localhost_8080");
    }

    #[test]
    fn test_media_dir_lives_under_root() {
        let config = CrawlerConfig::new("http://ex.com/").with_media_root("/tmp/media");
        assert_eq!(config.media_dir(), PathBuf::from("/tmp/media/http_ex_com"));
    }

    #[test]
    fn test_defaults() {
        let config = CrawlerConfig::new("http://ex.com/");
        assert_eq!(config.pool_size, 100);
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.media_root, PathBuf::from("./out"));
        assert!(config.record_external);
    }
}
