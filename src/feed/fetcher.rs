use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{AppError, Result};
use crate::hash::sha256_hex;

/// A downloaded document together with the digest of its raw bytes.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub body: Vec<u8>,
    pub content_hash: String,
}

pub struct Fetcher {
    client: Client,
    max_body_bytes: usize,
}

impl Fetcher {
    pub fn new(max_body_bytes: usize) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("motivar/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_body_bytes,
        }
    }

    /// Download `url`, enforcing the body size cap while streaming so an
    /// oversized response is abandoned instead of buffered whole.
    pub async fn fetch(&self, url: &Url) -> Result<FetchedDocument> {
        let mut response = self.client.get(url.clone()).send().await?;

        if response.status() != StatusCode::OK {
            return Err(AppError::UnexpectedStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
            if body.len() > self.max_body_bytes {
                return Err(AppError::BodyTooLarge {
                    length: body.len(),
                    limit: self.max_body_bytes,
                });
            }
        }

        let content_hash = sha256_hex(&body);
        tracing::debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(FetchedDocument { body, content_hash })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body_and_digest() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quotes.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string("author,phrase\n"))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/quotes.csv", server.uri())).unwrap();
        let document = Fetcher::new(200_000).fetch(&url).await.unwrap();

        assert_eq!(document.body, b"author,phrase\n");
        assert_eq!(document.content_hash, sha256_hex(b"author,phrase\n"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_ok_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/missing", server.uri())).unwrap();
        let err = Fetcher::new(200_000).fetch(&url).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::UnexpectedStatus { status, .. } if status == StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn test_fetch_rejects_oversized_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/huge"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![b'x'; 4096]))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/huge", server.uri())).unwrap();
        let err = Fetcher::new(1024).fetch(&url).await.unwrap_err();

        assert!(matches!(err, AppError::BodyTooLarge { limit: 1024, .. }));
    }
}
