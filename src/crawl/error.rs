// src/crawl/error.rs
// =============================================================================
// Error types for the crawler.
//
// Only CrawlError can stop a crawl, and only before it starts (bad domain,
// media directory can't be created, HTTP client can't be built). Fetch and
// download errors are reported back to the crawler loop, which logs them,
// records them in the report and moves on to the next URL.
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use super::report::FailureKind;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid domain '{domain}': {source}")]
    InvalidDomain {
        domain: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to make media directory {}: {source}", path.display())]
    MediaDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(StatusCode),
}

impl FetchError {
    // Sorts a fetch failure into a report category
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Status(status) => FailureKind::Status(status.as_u16()),
            FetchError::Request(e) if e.is_timeout() => FailureKind::Timeout,
            FetchError::Request(e) if e.is_redirect() => FailureKind::TooManyRedirects,
            FetchError::Request(e) if e.is_connect() => FailureKind::Connect,
            FetchError::Request(_) => FailureKind::Network,
        }
    }
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no file name in media URL {0}")]
    NoFileName(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DownloadError::Fetch(e) => e.kind(),
            DownloadError::NoFileName(_) | DownloadError::Io { .. } => FailureKind::Io,
        }
    }
}
