//! Client for the external ML recommendation service.

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::Value;
use tracing::{error, info};

use crate::utils::error::AppError;

const TRENDING_PATH: &str = "/api/recommendations/trending";
const TRENDING_UNREACHABLE: &str = "Failed to fetch trending events from ML service";

#[derive(Debug, Clone)]
pub struct RecommenderClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecommenderClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn trending_url(&self) -> String {
        format!("{}{}", self.base_url, TRENDING_PATH)
    }

    /// Fetches the trending feed and returns the upstream body untouched.
    ///
    /// A non-success upstream status is reported with that same status;
    /// transport failures, timeouts and undecodable bodies become a 500.
    pub async fn trending(&self, limit: u32, category: Option<&str>) -> Result<Value, AppError> {
        let url = self.trending_url();
        let mut query = vec![("limit", limit.to_string())];
        if let Some(category) = category {
            query.push(("category", category.to_string()));
        }

        info!(url = %url, limit, category, "Fetching trending events from ML service");

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| unreachable_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "ML service returned an error");

            return Err(AppError::Upstream {
                status,
                message: format!(
                    "Failed to fetch trending events: {}",
                    status.canonical_reason().unwrap_or("Unknown Status")
                ),
                detail: body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| unreachable_error(format!("invalid response body: {e}")))
    }
}

fn unreachable_error(detail: String) -> AppError {
    AppError::Upstream {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: TRENDING_UNREACHABLE.to_string(),
        detail,
    }
}
