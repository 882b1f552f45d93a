// HTTP access to the BindingDB BDBService
use bdbfetch_core::{build_url, Error, Query, Result};
use tracing::{debug, info};

/// Thin wrapper over a default `reqwest::Client` pointed at a BDBService endpoint
#[derive(Debug, Clone)]
pub struct BindingDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl BindingDbClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Send one GET for `query` and return the raw response body
    pub async fn fetch(&self, query: &Query) -> Result<String> {
        let url = build_url(&self.base_url, query);
        info!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response body: {}", e)))?;
        debug!("Received {} bytes", body.len());

        Ok(body)
    }
}
