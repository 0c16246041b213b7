// src/crawl/download.rs
// =============================================================================
// Saves a media file (image, video, archive, ...) to disk.
//
// The response body is streamed: we never hold the whole file in memory,
// each piece is written out as it arrives, 512 bytes at a time.
//
// If something goes wrong halfway through, the partially written file is
// left where it is. The crawler doesn't retry.
// =============================================================================

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use super::classify::document_name;
use super::error::{DownloadError, FetchError};

pub const CHUNK_SIZE: usize = 512;

// Downloads `url` into `dest_dir`, naming the file after the last segment of
// the URL's path ("http://ex.com/img/b.jpg" -> "<dest_dir>/b.jpg").
//
// Returns the path that was written.
pub async fn download_media(
    client: &Client,
    url: &Url,
    dest_dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let name = document_name(url);
    if name.is_empty() {
        return Err(DownloadError::NoFileName(url.to_string()));
    }
    let path = dest_dir.join(name);
    debug!("Downloading media -> {}", name);

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(FetchError::from)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status).into());
    }

    let io_err = |source| DownloadError::Io {
        path: path.clone(),
        source,
    };

    let mut file = File::create(&path).await.map_err(io_err)?;
    let mut body = response.bytes_stream();

    while let Some(bytes) = body.next().await {
        let bytes = bytes.map_err(FetchError::from)?;
        for chunk in bytes.chunks(CHUNK_SIZE) {
            file.write_all(chunk).await.map_err(io_err)?;
        }
    }
    file.flush().await.map_err(io_err)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::report::FailureKind;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_download_writes_file_named_after_url() {
        let server = MockServer::start().await;
        // bigger than one chunk so the write loop runs more than once
        let body: Vec<u8> = (0..2000u32).map(|i| (i % 251) as u8).collect();
        Mock::given(method("GET"))
            .and(path("/img/b.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let url = Url::parse(&format!("{}/img/b.jpg", server.uri())).unwrap();
        let written = download_media(&Client::new(), &url, dir.path()).await.unwrap();

        assert_eq!(written, dir.path().join("b.jpg"));
        assert_eq!(std::fs::read(&written).unwrap(), body);
    }

    #[tokio::test]
    async fn test_download_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let url = Url::parse(&format!("{}/secret.png", server.uri())).unwrap();
        let err = download_media(&Client::new(), &url, dir.path()).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::Status(403));
        assert!(!dir.path().join("secret.png").exists());
    }

    #[tokio::test]
    async fn test_download_missing_directory() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let url = Url::parse(&format!("{}/a.gif", server.uri())).unwrap();
        let err = download_media(&Client::new(), &url, &missing).await.unwrap_err();

        assert!(matches!(err, DownloadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_download_without_file_name() {
        let dir = TempDir::new().unwrap();
        let url = Url::parse("http://ex.com/gallery/").unwrap();
        let err = download_media(&Client::new(), &url, dir.path()).await.unwrap_err();
        assert!(matches!(err, DownloadError::NoFileName(_)));
    }
}
