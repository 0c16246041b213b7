// src/crawl/report.rs
// =============================================================================
// What a finished crawl hands back: which pages were fetched, which media
// files were saved, what failed and which links pointed off-site.
//
// The report is only a record. Nothing in it changes how the crawl runs.
// =============================================================================

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use super::classify::DocumentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "code", rename_all = "snake_case")]
pub enum FailureKind {
    /// Server answered with something other than 200
    Status(u16),
    Timeout,
    TooManyRedirects,
    /// Could not connect (DNS, refused, unreachable)
    Connect,
    /// Any other transport error
    Network,
    /// Local file could not be written
    Io,
}

#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub url: String,
    pub document_type: DocumentType,
    #[serde(flatten)]
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaRecord {
    pub url: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlReport {
    pub domain: String,
    /// Pages fetched with a 200 and scanned for links
    pub pages: Vec<String>,
    pub media: Vec<MediaRecord>,
    pub failures: Vec<Failure>,
    /// Off-site links, first-seen order, each listed once
    pub external_links: Vec<String>,
    /// Frontier entries dropped because they were already visited or off-site
    pub discarded: usize,
    pub elapsed_secs: f64,
    #[serde(skip)]
    seen_external: HashSet<String>,
}

impl CrawlReport {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    pub fn record_external(&mut self, url: &str) {
        if self.seen_external.insert(url.to_string()) {
            self.external_links.push(url.to_string());
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
