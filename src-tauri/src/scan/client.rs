//! Scan Client
//!
//! One request per fetch, bounded by the configured timeout. No retries.

use std::path::Path;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::{decode, ScanError};
use crate::config::ScanConfig;
use crate::domain::DetectedItem;

/// Anything that can turn a (maybe) picked image into detected items
#[async_trait]
pub trait ScanSource: Send + Sync {
    async fn fetch(&self, image: Option<&Path>) -> Result<Vec<DetectedItem>, ScanError>;
}

pub struct ScanClient {
    http: reqwest::Client,
    config: ScanConfig,
}

impl ScanClient {
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ScanError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn request_error(&self, err: reqwest::Error) -> ScanError {
        if err.is_timeout() {
            ScanError::Timeout(self.config.timeout().as_secs())
        } else {
            ScanError::Transport(err.to_string())
        }
    }

    async fn build_request(&self, image: Option<&Path>) -> Result<reqwest::RequestBuilder, ScanError> {
        match image {
            Some(path) if self.config.upload_image => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| ScanError::ImageRead(format!("{}: {}", path.display(), e)))?;
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                log::info!("Uploading {} ({} bytes, {})", path.display(), bytes.len(), mime);
                Ok(self
                    .http
                    .post(&self.config.endpoint)
                    .header(CONTENT_TYPE, mime.as_ref())
                    .body(bytes))
            }
            _ => Ok(self.http.get(&self.config.endpoint)),
        }
    }
}

#[async_trait]
impl ScanSource for ScanClient {
    async fn fetch(&self, image: Option<&Path>) -> Result<Vec<DetectedItem>, ScanError> {
        let request = self.build_request(image).await?;
        let response = request.send().await.map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Scan endpoint returned {}", status);
            return Err(ScanError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        let items = decode(&body)?;
        log::info!("Scan returned {} item(s)", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ScanFailure;
    use axum::body::Bytes;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;
    use std::time::Duration;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind http listener");
        let addr = listener.local_addr().expect("listener addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{}/scan", addr)
    }

    fn client(endpoint: String, timeout_secs: u64, upload_image: bool) -> ScanClient {
        ScanClient::new(ScanConfig { endpoint, timeout_secs, upload_image }).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let router = Router::new().route(
            "/scan",
            get(|| async { Json(json!({ "data": [{ "Food": "Apple", "Expiry": "2024-05-01" }] })) }),
        );
        let endpoint = serve(router).await;

        let items = client(endpoint, 5, false).fetch(None).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].food, "Apple");
        assert_eq!(items[0].expiry, chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let router = Router::new().route(
            "/scan",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let endpoint = serve(router).await;

        let err = client(endpoint, 5, false).fetch(None).await.unwrap_err();
        assert!(matches!(err, ScanError::Status(500)));
        assert!(matches!(ScanFailure::from(err), ScanFailure::NetworkFailed(_)));
    }

    #[tokio::test]
    async fn test_bad_body_maps_to_parse() {
        let router = Router::new().route("/scan", get(|| async { "not json" }));
        let endpoint = serve(router).await;

        let err = client(endpoint, 5, false).fetch(None).await.unwrap_err();
        assert!(matches!(err, ScanError::Parse(_)));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let router = Router::new().route(
            "/scan",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "data": [] }))
            }),
        );
        let endpoint = serve(router).await;

        let err = client(endpoint, 1, false).fetch(None).await.unwrap_err();
        assert!(matches!(err, ScanError::Timeout(1)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport() {
        // Bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{}/scan", addr), 2, false).fetch(None).await.unwrap_err();
        assert!(matches!(err, ScanError::Transport(_)));
    }

    #[tokio::test]
    async fn test_upload_mode_posts_image() {
        let router = Router::new().route(
            "/scan",
            post(|headers: HeaderMap, body: Bytes| async move {
                let content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({
                    "data": [{ "Food": format!("{} {}", content_type, body.len()), "Expiry": "2024-05-01" }]
                }))
            }),
        );
        let endpoint = serve(router).await;

        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("groceries.png");
        std::fs::write(&image, [0x89, b'P', b'N', b'G', 0, 0, 0, 0]).unwrap();

        let items = client(endpoint, 5, true).fetch(Some(image.as_path())).await.unwrap();
        assert_eq!(items[0].food, "image/png 8");
    }

    #[tokio::test]
    async fn test_upload_mode_without_image_uses_get() {
        let router = Router::new().route("/scan", get(|| async { Json(json!({ "data": [] })) }));
        let endpoint = serve(router).await;

        assert!(client(endpoint, 5, true).fetch(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.jpg");

        let err = client("http://127.0.0.1:9/scan".into(), 1, true)
            .fetch(Some(missing.as_path()))
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::ImageRead(_)));
    }
}
