// src/crawl/extract.rs
// =============================================================================
// This module pulls outgoing links out of an HTML page.
//
// We collect three kinds of references, in this order:
// - <a href="...">       hyperlinks to other pages (or files)
// - <img src="...">      images
// - <source src="...">   video/audio sources inside <video>/<audio>
//
// Within each group the links keep their document order. Every reference is
// resolved against the page URL (see normalize.rs), so the crawler only ever
// sees absolute URLs.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Never fails on messy HTML, it just does its best (like a browser)
// =============================================================================

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use super::normalize::normalize;

// (CSS selector, attribute to read) for each group of links
const LINK_SOURCES: &[(&str, &str)] = &[("a", "href"), ("img", "src"), ("source", "src")];

// Extracts every link from an already-parsed document
//
// Parameters:
//   base_url: the URL of the page (for resolving relative links)
//   document: the parsed HTML
//
// Returns: absolute URLs, duplicates included
//
// Example:
//   <a href="/a.html"></a><img src="b.jpg">  on  http://ex.com/
//   -> ["http://ex.com/a.html", "http://ex.com/b.jpg"]
pub fn extract_links(base_url: &Url, document: &Html) -> Vec<Url> {
    let mut links = Vec::new();

    for (tag, attribute) in LINK_SOURCES {
        // Selector::parse only fails on invalid CSS; a bare tag name is
        // always valid, so this is a programmer error if it ever panics
        let selector = Selector::parse(tag).expect("tag selector is valid CSS");

        for element in document.select(&selector) {
            // Elements without the attribute (e.g. <a name="top">) are skipped
            let Some(reference) = element.value().attr(attribute) else {
                continue;
            };

            match normalize(base_url, reference) {
                Some(url) => links.push(url),
                None => debug!("Skipping unresolvable link '{}' on {}", reference, base_url),
            }
        }
    }

    links
}

// Parses `html` and extracts its links in one go
pub fn extract_links_from_html(base_url: &Url, html: &str) -> Vec<Url> {
    let document = Html::parse_document(html);
    extract_links(base_url, &document)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is the order "all <a>, then all <img>, then all <source>"?
//    - The crawler appends links to its queue in the order we return them
//    - A fixed order means the same page always produces the same crawl order,
//      which keeps the tests deterministic
//
// 2. Why return duplicates?
//    - The crawler checks its visited set when it takes a URL OFF the queue,
//      so duplicates are harmless there
//    - Deduplicating here would hide how often a page links to something
//
// 3. What is `let ... else`?
//    - `let Some(x) = maybe else { continue };` binds x or runs the else block
//    - The else block must leave the current scope (continue/return/break)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn as_strings(links: Vec<Url>) -> Vec<String> {
        links.into_iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_extract_anchor_and_image() {
        let html = r#"<a href="/a.html">A</a><img src="b.jpg">"#;
        let links = extract_links_from_html(&base("http://ex.com/"), html);
        assert_eq!(as_strings(links), vec!["http://ex.com/a.html", "http://ex.com/b.jpg"]);
    }

    #[test]
    fn test_groups_come_in_fixed_order() {
        let html = r#"
            <video><source src="clip.mp4"></video>
            <img src="pic.png">
            <a href="second.html">2</a>
            <a href="first.html">1</a>
        "#;
        let links = extract_links_from_html(&base("http://ex.com/dir/"), html);
        assert_eq!(
            as_strings(links),
            vec![
                "http://ex.com/dir/second.html",
                "http://ex.com/dir/first.html",
                "http://ex.com/dir/pic.png",
                "http://ex.com/dir/clip.mp4",
            ]
        );
    }

    #[test]
    fn test_missing_attributes_are_skipped() {
        let html = r#"<a name="top">Top</a><img alt="no source"><source type="video/mp4">"#;
        let links = extract_links_from_html(&base("http://ex.com/"), html);
        assert!(links.is_empty());
    }

    #[test]
    fn test_keeps_duplicates_and_external_links() {
        let html = r#"
            <a href="/x.html">1</a>
            <a href="http://ex.com/x.html">2</a>
            <a href="http://other.com/x.html">3</a>
        "#;
        let links = extract_links_from_html(&base("http://ex.com/"), html);
        assert_eq!(
            as_strings(links),
            vec![
                "http://ex.com/x.html",
                "http://ex.com/x.html",
                "http://other.com/x.html",
            ]
        );
    }

    #[test]
    fn test_fragments_are_kept() {
        let html = r##"<a href="#section">S</a>"##;
        let links = extract_links_from_html(&base("http://ex.com/page.html"), html);
        assert_eq!(as_strings(links), vec!["http://ex.com/page.html#section"]);
    }

    #[test]
    fn test_non_http_links_still_resolve() {
        // filtering these out is the domain check's job, not ours
        let html = r#"<a href="mailto:me@ex.com">Mail</a>"#;
        let links = extract_links_from_html(&base("http://ex.com/"), html);
        assert_eq!(as_strings(links), vec!["mailto:me@ex.com"]);
    }

    #[test]
    fn test_broken_html_does_not_panic() {
        let html = r#"<div><a href="/ok.html">unclosed <img src="/i.gif""#;
        let links = extract_links_from_html(&base("http://ex.com/"), html);
        assert!(as_strings(links).contains(&"http://ex.com/ok.html".to_string()));
    }
}
