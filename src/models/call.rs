use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const DEFAULT_CLIENT_NAME: &str = "Client";
pub const DEFAULT_MODEL_NAME: &str = "Model";

pub const MIN_DURATION_MINUTES: f64 = 1.0;
pub const MAX_DURATION_MINUTES: f64 = 240.0;

/// `durationMinutes` as sent by the manager form: a number, or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Number(f64),
    Text(String),
}

impl DurationInput {
    fn as_number(&self) -> Option<f64> {
        match self {
            DurationInput::Number(n) => Some(*n),
            DurationInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Call length in minutes, always within `[1, 240]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallDuration(f64);

impl CallDuration {
    pub fn minutes(&self) -> f64 {
        self.0
    }
}

impl TryFrom<Option<&DurationInput>> for CallDuration {
    type Error = AppError;

    fn try_from(input: Option<&DurationInput>) -> Result<Self> {
        input
            .and_then(DurationInput::as_number)
            .filter(|d| d.is_finite() && (MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(d))
            .map(CallDuration)
            .ok_or_else(|| AppError::BadRequest("Invalid durationMinutes (1..240)".to_string()))
    }
}

/// Body of `POST /api/create-call`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCallRequest {
    #[serde(default)]
    pub duration_minutes: Option<DurationInput>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl CreateCallRequest {
    pub fn duration(&self) -> Result<CallDuration> {
        CallDuration::try_from(self.duration_minutes.as_ref())
    }

    pub fn client_name(&self) -> &str {
        non_empty_or(self.client_name.as_deref(), DEFAULT_CLIENT_NAME)
    }

    pub fn model_name(&self) -> &str {
        non_empty_or(self.model_name.as_deref(), DEFAULT_MODEL_NAME)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback)
}

/// Per-role join URLs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParticipantLinks {
    pub model: String,
    pub client: String,
    pub manager: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCallResponse {
    pub ok: bool,
    pub room_name: String,
    pub exp: i64,
    pub links: ParticipantLinks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub ok: bool,
    pub ts: i64,
}
