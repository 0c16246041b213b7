// src/crawl/mod.rs
// =============================================================================
// This module crawls a single website.
//
// Submodules:
// - normalize: relative link -> absolute URL, and the same-domain check
// - classify: media file, web page, or unknown? (by file extension)
// - extract: links from <a>, <img> and <source> tags
// - fetch: the pooled HTTP client and page fetching
// - download: streaming media files to disk
// - queue: the crawler itself (frontier + visited set)
// - report: what a finished crawl returns
// - error: error types
// =============================================================================

mod classify;
mod download;
mod error;
mod extract;
mod fetch;
mod normalize;
mod queue;
mod report;

// Re-export the pieces the rest of the application uses
pub use classify::{classify, classify_str, DocumentType};
pub use error::{CrawlError, DownloadError, FetchError};
pub use extract::{extract_links, extract_links_from_html};
pub use normalize::{in_scope, normalize};
pub use queue::Crawler;
pub use report::{CrawlReport, Failure, FailureKind, MediaRecord};
