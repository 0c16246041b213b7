// src/crawl/classify.rs
// =============================================================================
// Decides what kind of document a URL points at, based only on the file
// extension in its path:
//
//   /photos/cat.JPG    -> Media    (download it)
//   /about.html        -> Webpage  (fetch it and look for more links)
//   /archive/report    -> Unknown  (treated like a webpage by the crawler)
//
// The extension tables live here and nowhere else.
// =============================================================================

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

/// Extensions (lowercase, without the dot) that get downloaded as media.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "mov", "zip", "avi", "gif", "png", "rar", "mp3", "mp4",
];

/// Extensions that are definitely HTML pages.
pub const WEBPAGE_EXTENSIONS: &[&str] = &["html", "shtml", "htm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Media,
    Webpage,
    Unknown,
}

impl DocumentType {
    /// Pages (and anything we can't tell apart from a page) get crawled.
    pub fn is_crawlable(self) -> bool {
        matches!(self, DocumentType::Webpage | DocumentType::Unknown)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentType::Media => "media",
            DocumentType::Webpage => "webpage",
            DocumentType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

// Last segment of the URL's path, e.g. "b.jpg" for "http://ex.com/a/b.jpg?x=1".
// Empty when the path ends with a slash.
pub fn document_name(url: &Url) -> &str {
    url.path().rsplit('/').next().unwrap_or("")
}

pub fn classify(url: &Url) -> DocumentType {
    let name = document_name(url);
    debug!("Inferring document type -> {}", name);

    // Path::extension follows the usual rules: "archive.tar.gz" -> "gz",
    // ".hidden" -> none, "report" -> none
    let extension = match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return DocumentType::Unknown,
    };

    if MEDIA_EXTENSIONS.contains(&extension.as_str()) {
        DocumentType::Media
    } else if WEBPAGE_EXTENSIONS.contains(&extension.as_str()) {
        DocumentType::Webpage
    } else {
        DocumentType::Unknown
    }
}

/// Classifies a raw URL string. Anything that doesn't parse is Unknown.
pub fn classify_str(raw: &str) -> DocumentType {
    match Url::parse(raw) {
        Ok(url) => classify(&url),
        Err(e) => {
            warn!("Failed to infer document type for {}: {}", raw, e);
            DocumentType::Unknown
        }
    }
}
