use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::error::{AppError, Result};

pub const MANAGER_PASS_HEADER: &str = "x-manager-pass";

/// Shared-secret gate for manager endpoints
#[derive(Clone)]
pub struct AccessGuard {
    manager_pass: String,
}

impl AccessGuard {
    pub fn new(config: &Config) -> Self {
        Self {
            manager_pass: config.manager_pass.clone(),
        }
    }

    /// Exact match against the manager pass
    pub fn is_authorized(&self, presented: Option<&str>) -> bool {
        match presented {
            Some(pass) => pass.as_bytes().ct_eq(self.manager_pass.as_bytes()).into(),
            None => false,
        }
    }

    pub fn authorize(&self, presented: Option<&str>) -> Result<()> {
        if self.is_authorized(presented) {
            Ok(())
        } else {
            Err(AppError::Unauthorized("Unauthorized".to_string()))
        }
    }
}

/// Value of the `X-Manager-Pass` header, if present and non-empty
pub fn header_pass(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(MANAGER_PASS_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Value of `?pass=`, if present and non-empty
pub fn query_pass(pass: Option<&String>) -> Option<&str> {
    pass.map(String::as_str).filter(|v| !v.is_empty())
}
