//! Cloudflare R2 (S3-compatible) object store

use super::sigv4::{encode_key, SigV4Signer};
use crate::config::StorageConfig;
use crate::core::{ObjectStore, StorageError, StorageResult};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, error};

/// R2 client writing path-style objects into one bucket
#[derive(Debug, Clone)]
pub struct R2ObjectStore {
    client: reqwest::Client,
    endpoint: Url,
    bucket: String,
    signer: SigV4Signer,
}

impl R2ObjectStore {
    pub fn new(config: &StorageConfig, timeout: Duration) -> StorageResult<Self> {
        let endpoint = Url::parse(&config.endpoint())
            .map_err(|e| StorageError::Request(format!("invalid endpoint: {}", e)))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorageError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            bucket: config.bucket.clone(),
            signer: SigV4Signer::new(
                &config.access_key_id,
                &config.secret_access_key,
                &config.region,
            ),
        })
    }

    /// Host header value, including a non-default port
    fn host(&self) -> StorageResult<String> {
        let host = self
            .endpoint
            .host_str()
            .ok_or_else(|| StorageError::Request("endpoint has no host".to_string()))?;
        Ok(match self.endpoint.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        })
    }

    fn canonical_uri(&self, key: &str) -> String {
        format!("/{}/{}", encode_key(&self.bucket), encode_key(key))
    }
}

#[async_trait]
impl ObjectStore for R2ObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> StorageResult<()> {
        if key.is_empty() || key.starts_with('/') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        let host = self.host()?;
        let canonical_uri = self.canonical_uri(key);
        let signed = self.signer.sign_put(
            &host,
            &canonical_uri,
            content_type,
            &bytes,
            chrono::Utc::now(),
        )?;

        let url = format!(
            "{}://{}{}",
            self.endpoint.scheme(),
            host,
            canonical_uri
        );
        let size = bytes.len();

        let response = self
            .client
            .put(&url)
            .header("content-type", content_type)
            .header("x-amz-content-sha256", &signed.content_sha256)
            .header("x-amz-date", &signed.amz_date)
            .header("authorization", &signed.authorization)
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                error!("R2 put request failed for {}: {}", key, e);
                StorageError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("R2 rejected put for {}: {} {}", key, status, body);
            return Err(StorageError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Stored {} ({} bytes, {})", key, size, content_type);
        Ok(())
    }
}
