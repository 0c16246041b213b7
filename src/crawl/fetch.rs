// src/crawl/fetch.rs
// =============================================================================
// The crawler's HTTP side.
//
// Key functionality:
// - Builds ONE reqwest Client per crawler (it keeps a connection pool, so
//   requests to the same site reuse connections)
// - Fetches a page and hands back its HTML, but only for a 200 response
//
// Downloads of media files live in download.rs, they stream instead of
// buffering the whole body.
// =============================================================================

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::CrawlerConfig;

use super::error::FetchError;

// Creates the pooled HTTP client used for the whole crawl session
//
// reqwest opens connections lazily, so there's nothing to pre-allocate for
// `pool_size`; `max_pool_size` caps how many idle connections are kept
// around per host. No timeout is set, we get reqwest's default.
pub fn build_client(config: &CrawlerConfig) -> reqwest::Result<Client> {
    debug!(
        "Building HTTP client (pool size {}, max pool size {})",
        config.pool_size, config.max_pool_size
    );

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .pool_max_idle_per_host(config.max_pool_size)
        .build()
}

// Fetches a web page and returns its HTML content
//
// Anything other than exactly 200 counts as a failure: a 204 or a 206 has no
// page worth scanning for links.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    debug!("Response code -> {}", status.as_u16());

    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }

    let html = response.text().await?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::report::FailureKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> Client {
        build_client(&CrawlerConfig::new("http://localhost/")).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/index.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
            .mount(&server)
            .await;

        let html = fetch_page(&client(), &format!("{}/index.html", server.uri()))
            .await
            .unwrap();
        assert_eq!(html, "<p>hello</p>");
    }

    #[tokio::test]
    async fn test_fetch_page_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetch_page(&client(), &format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::Status(404));
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_non_200_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = fetch_page(&client(), &server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(StatusCode::NO_CONTENT)));
    }
}
