//! HTTP client for the flower safety API

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{QueryError, Verdict};
use crate::config::ApiConfig;

/// Public deployment used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://flower-safety-api2.vercel.app";

const CHECK_PATH: &str = "/flower-check";

const USER_AGENT_VALUE: &str = concat!("flowercheck/", env!("CARGO_PKG_VERSION"));

/// Health probe response from `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct CheckBody<'a> {
    flower: &'a str,
}

/// Sends flower names to the verification endpoint.
///
/// Every call is a single request: no retries, no backoff.
#[derive(Debug, Clone)]
pub struct QueryClient {
    client: Client,
    base_url: String,
}

impl QueryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, QueryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(|e| QueryError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, QueryError> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn check_url(&self) -> String {
        format!("{}{}", self.base_url, CHECK_PATH)
    }

    /// Check one flower.
    ///
    /// The name is trimmed first; an empty name returns
    /// `QueryError::EmptyInput` without touching the network.
    pub async fn check(&self, flower_name: &str) -> Result<Verdict, QueryError> {
        let flower = flower_name.trim();
        if flower.is_empty() {
            return Err(QueryError::EmptyInput);
        }

        log::debug!("POST {} flower={:?}", self.check_url(), flower);

        let response = self
            .client
            .post(self.check_url())
            .json(&CheckBody { flower })
            .send()
            .await?;

        let body = read_success_body(response).await?;
        Verdict::from_json(&body, flower)
    }

    pub async fn health(&self) -> Result<ApiStatus, QueryError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?;

        let body = read_success_body(response).await?;
        serde_json::from_str(&body).map_err(|e| QueryError::MalformedResponse {
            message: e.to_string(),
        })
    }
}

/// Returns the body of a 2xx response, or the mapped error for anything else
async fn read_success_body(response: reqwest::Response) -> Result<String, QueryError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::debug!("API returned {}: {}", status.as_u16(), body);
        return Err(QueryError::from_error_body(status.as_u16(), &body));
    }

    Ok(response.text().await?)
}
