// src/crawl/normalize.rs
// =============================================================================
// URL helpers used by the crawler:
// - normalize(): turn a (possibly relative) link into an absolute URL
// - in_scope(): is this URL on the domain we're crawling?
//
// The `url` crate does the heavy lifting. Url::join follows the same rules a
// browser uses for relative links ("..", "./", "//host/path", etc.) and keeps
// the #fragment.
// =============================================================================

use url::Url;

// Resolves `reference` against `base`
//
// Examples:
//   base = "http://ex.com/docs/page.html"
//   "/a.html"          -> "http://ex.com/a.html"
//   "b.jpg"            -> "http://ex.com/docs/b.jpg"
//   "../up.html#top"   -> "http://ex.com/up.html#top"
//   "http://other.com" -> "http://other.com/"
//
// Returns None only when the reference can't be turned into a URL at all
// (e.g. "http://" with no host).
pub fn normalize(base: &Url, reference: &str) -> Option<Url> {
    base.join(reference).ok()
}

/// The host and port of a URL. Default ports are dropped by the `url` crate,
/// so `http://ex.com:80/` and `http://ex.com/` share a network location.
pub fn network_location(url: &Url) -> (Option<&str>, Option<u16>) {
    (url.host_str(), url.port())
}

// True when `candidate` has the same host and port as `target`.
// The scheme is ignored, so http and https pages of one site are both in scope.
// URLs without a host (mailto:, javascript:, data:) are never in scope.
pub fn in_scope(target: &Url, candidate: &Url) -> bool {
    let (target_host, target_port) = network_location(target);
    let (candidate_host, candidate_port) = network_location(candidate);

    target_host.is_some() && target_host == candidate_host && target_port == candidate_port
}
