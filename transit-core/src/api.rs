//! Native HTTP client for the query endpoints.

use crate::error::{Result, TransitError};
use crate::params::{Endpoint, QueryParams};
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

/// Base URL used when neither a flag nor the environment names one.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5050";

/// Client for one API origin.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET the endpoint and return the raw body. Non-2xx statuses are errors.
    pub async fn fetch_text(&self, endpoint: Endpoint, params: QueryParams) -> Result<String> {
        let url = endpoint.url(&self.base_url, &params);
        info!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransitError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        debug!("{} returned {} bytes", endpoint.path(), body.len());
        Ok(body)
    }
}
