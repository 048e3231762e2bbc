use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

use crate::error::{HttpSourceError, Result};

/// Endpoint used when no URL is configured
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest error body excerpt kept in an error message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Blocking client for a JSON endpoint that lists users
pub struct HttpUserSource {
    agent: Agent,
    url: String,
}

impl HttpUserSource {
    /// Create a source for `url` with the default timeout
    pub fn new(url: &str) -> Self {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            url: url.to_string(),
        }
    }

    /// The endpoint this source reads from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Prefer a JSON "message" or "error" field, then the raw body, then the reason phrase
        let message = match serde_json::from_str::<Value>(&body) {
            Ok(json) => json
                .get("message")
                .or_else(|| json.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string),
            Err(_) => None,
        }
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected status")
                .to_string()
        });

        Err(HttpSourceError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Fetch the user list as raw JSON records
    ///
    /// The body must be a JSON array; its elements are returned untouched.
    pub fn get_users(&self) -> Result<Vec<Value>> {
        debug!(url = %self.url, "GET users");

        let response = self
            .agent
            .get(&self.url)
            .header("Accept", "application/json")
            .call()
            .map_err(HttpSourceError::Http)?;

        let mut response = self.check_response(response)?;
        let body = response.body_mut().read_to_string()?;

        match serde_json::from_str::<Value>(&body)? {
            Value::Array(records) => {
                debug!(count = records.len(), "received user records");
                Ok(records)
            }
            other => Err(HttpSourceError::NotAnArray(json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
