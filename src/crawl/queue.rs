// src/crawl/queue.rs
// =============================================================================
// This module drives the crawl with a breadth-first approach.
//
// How it works:
// 1. Start with the seed URL in the frontier (a FIFO queue)
// 2. Take the URL at the head of the frontier
// 3. Skip it if we've already visited it, or if it's on another domain
// 4. Media file (.jpg, .mp4, .zip, ...)? Download it
//    Anything else? Fetch the page and append all of its links to the frontier
// 5. Mark the URL as visited
// 6. Repeat until the frontier is empty
//
// The crawl always finishes for a finite site: every step removes one URL
// from the frontier, and only pages on our domain (each visited once) can
// add new ones.
//
// Everything runs one request at a time. A failed page or download is
// logged, written to the report, and the crawl carries on.
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::time::Instant;

use reqwest::Client;
use tracing::{debug, error, info};
use url::Url;

use crate::config::CrawlerConfig;

use super::classify::{classify, DocumentType};
use super::download::download_media;
use super::error::CrawlError;
use super::extract::extract_links_from_html;
use super::fetch::{build_client, fetch_page};
use super::normalize::in_scope;
use super::report::{CrawlReport, Failure, MediaRecord};

pub struct Crawler {
    config: CrawlerConfig,
    /// Seed URL of the current crawl; its host/port is the scope
    domain: Url,
    /// Pooled HTTP client, lives as long as the crawler
    client: Client,
    media_dir: PathBuf,
    frontier: VecDeque<Url>,
    visited: HashSet<Url>,
    started: Instant,
}

impl Crawler {
    // Sets up a crawl session
    //
    // Fails if the domain isn't a valid absolute URL or if the media
    // directory can't be created. Nothing has been fetched at that point.
    pub fn new(config: CrawlerConfig) -> Result<Self, CrawlError> {
        let domain = parse_domain(&config.domain)?;
        let client = build_client(&config)?;

        let media_dir = config.media_dir();
        create_media_dir(&media_dir)?;

        Ok(Self {
            config,
            domain,
            client,
            media_dir,
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            started: Instant::now(),
        })
    }

    pub fn domain(&self) -> &Url {
        &self.domain
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    pub fn visited(&self) -> &HashSet<Url> {
        &self.visited
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    // Points the crawler at a new domain
    //
    // The HTTP client is rebuilt for the new domain. The frontier, the visited
    // set, the media directory and the session start time are NOT reset: URLs
    // visited while crawling the previous domain stay visited.
    pub fn retarget(&mut self, domain: &str) -> Result<(), CrawlError> {
        let parsed = parse_domain(domain)?;
        self.config.domain = domain.to_string();
        self.client = build_client(&self.config)?;
        self.domain = parsed;

        info!("Retargeted crawler to {}", self.domain);
        Ok(())
    }

    // Crawls the current domain until the frontier is empty
    //
    // Never fails: per-URL problems end up in the report's `failures`.
    pub async fn crawl(&mut self) -> CrawlReport {
        let mut report = CrawlReport::new(self.domain.as_str());
        info!("Starting crawl of {}", self.domain);

        self.frontier.push_back(self.domain.clone());

        while let Some(current) = self.frontier.pop_front() {
            // Don't process a link twice, and never leave the domain
            if self.visited.contains(&current) {
                report.discarded += 1;
                continue;
            }
            if !in_scope(&self.domain, &current) {
                debug!("Skipping external link -> {}", current);
                if self.config.record_external {
                    report.record_external(current.as_str());
                }
                report.discarded += 1;
                continue;
            }

            debug!("Total left to crawl -> {}", self.frontier.len() + 1);

            let doctype = classify(&current);
            debug!("Document type -> {}", doctype);

            match doctype {
                DocumentType::Media => self.download(&current, &mut report).await,
                DocumentType::Webpage | DocumentType::Unknown => {
                    let links = self.crawl_single(&current, doctype, &mut report).await;
                    self.frontier.extend(links);
                }
            }

            self.visited.insert(current);
        }

        report.elapsed_secs = self.started.elapsed().as_secs_f64();
        info!("Crawl completed in {:.3} second(s)", report.elapsed_secs);

        report
    }

    // Fetches one page and returns the links on it.
    // A failed fetch (or a non-200 response) yields no links.
    async fn crawl_single(
        &self,
        url: &Url,
        doctype: DocumentType,
        report: &mut CrawlReport,
    ) -> Vec<Url> {
        debug!("Crawling -> {}", url);

        match fetch_page(&self.client, url.as_str()).await {
            Ok(html) => {
                let links = extract_links_from_html(url, &html);
                debug!("Found {} link(s) on {}", links.len(), url);
                report.pages.push(url.to_string());
                links
            }
            Err(e) => {
                error!("Failed to crawl {}: {}", url, e);
                report.failures.push(Failure {
                    url: url.to_string(),
                    document_type: doctype,
                    kind: e.kind(),
                    message: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    async fn download(&self, url: &Url, report: &mut CrawlReport) {
        match download_media(&self.client, url, &self.media_dir).await {
            Ok(path) => report.media.push(MediaRecord {
                url: url.to_string(),
                path,
            }),
            Err(e) => {
                error!("Failed to download media {}: {}", url, e);
                report.failures.push(Failure {
                    url: url.to_string(),
                    document_type: DocumentType::Media,
                    kind: e.kind(),
                    message: e.to_string(),
                });
            }
        }
    }
}

fn parse_domain(domain: &str) -> Result<Url, CrawlError> {
    Url::parse(domain).map_err(|source| CrawlError::InvalidDomain {
        domain: domain.to_string(),
        source,
    })
}

fn create_media_dir(path: &Path) -> Result<(), CrawlError> {
    debug!("Creating new media directory -> {}", path.display());
    std::fs::create_dir_all(path).map_err(|source| CrawlError::MediaDir {
        path: path.to_path_buf(),
        source,
    })
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why check `visited` when popping instead of when pushing?
//    - A page can link to the same URL many times; pushing duplicates is cheap
//    - The one check at pop time is enough to guarantee each URL is fetched
//      or downloaded at most once
//
// 2. Why aren't external links added to `visited`?
//    - `visited` means "we processed this"; external links are never processed
//    - They're dropped every time they come off the frontier instead
//
// 3. Why does `crawl()` return a report instead of a Result?
//    - Individual failures (404s, timeouts, disk errors) don't stop a crawl
//    - The only errors that do are setup errors, and those come from `new()`
// -----------------------------------------------------------------------------
