use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{CreateRoomPayload, ProviderRoom};

/// Thin client over the Daily REST API
#[derive(Clone)]
pub struct DailyClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl DailyClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.provider_timeout())
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.daily_api_url.clone(),
            api_key: config.daily_api_key.clone(),
        })
    }

    /// POST /rooms. One attempt; any failure is returned to the caller.
    pub async fn create_room(&self, payload: &CreateRoomPayload) -> Result<ProviderRoom> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration("Server misconfigured: DAILY_API_KEY missing".to_string())
        })?;

        let res = self
            .client
            .post(format!("{}/rooms", self.api_url))
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Upstream(error_payload(status.as_u16(), &body)));
        }

        res.json::<ProviderRoom>().await.map_err(|e| {
            AppError::Upstream(Value::String(format!("Unexpected provider response: {}", e)))
        })
    }
}

/// Provider error body as JSON when possible, raw text otherwise.
fn error_payload(status: u16, body: &str) -> Value {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Value::String(format!("Provider request failed with status {}", status));
    }

    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}
