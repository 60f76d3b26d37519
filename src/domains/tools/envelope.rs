//! Result envelope for tool invocations.
//!
//! Every tool call resolves to either the raw JSON body of a successful
//! upstream response, or a normalized error object carrying one of a small
//! fixed set of codes. Errors are data in the payload, never MCP protocol
//! faults.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Fixed set of error codes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Transport-level failure (DNS, connection refused, timeout).
    ConnectionError,

    /// Upstream returned HTTP 404.
    NotFound,

    /// Upstream returned HTTP 429.
    RateLimit,

    /// Any other non-2xx upstream response.
    ApiError,

    /// The requested tool name is not in the catalog.
    UnknownTool,
}

/// Normalized error object returned in place of upstream JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Human-readable message.
    pub error: String,

    /// Machine-readable error code.
    pub code: ErrorCode,

    /// Upstream HTTP status, present only for `API_ERROR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorEnvelope {
    /// Transport failure while reaching the upstream API.
    pub fn connection_error(details: impl std::fmt::Display) -> Self {
        Self {
            error: format!("connection error: {details}"),
            code: ErrorCode::ConnectionError,
            status: None,
        }
    }

    /// Upstream 404.
    pub fn not_found() -> Self {
        Self {
            error: "not found".to_string(),
            code: ErrorCode::NotFound,
            status: None,
        }
    }

    /// Upstream 429.
    pub fn rate_limit() -> Self {
        Self {
            error: "rate limit exceeded, wait and retry".to_string(),
            code: ErrorCode::RateLimit,
            status: None,
        }
    }

    /// Any other non-2xx upstream response, carrying the HTTP status.
    pub fn api_error(message: impl Into<String>, status: u16) -> Self {
        Self {
            error: message.into(),
            code: ErrorCode::ApiError,
            status: Some(status),
        }
    }

    /// Dispatch miss - the tool name is not in the catalog.
    pub fn unknown_tool(name: &str) -> Self {
        Self {
            error: format!("unknown tool: {name}"),
            code: ErrorCode::UnknownTool,
            status: None,
        }
    }

    /// Render as a JSON value for the result payload.
    pub fn into_value(self) -> Value {
        let mut value = json!({
            "error": self.error,
            "code": self.code,
        });
        if let Some(status) = self.status {
            value["status"] = json!(status);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_serialize_screaming_snake() {
        assert_eq!(
            serde_json::to_value(ErrorCode::ConnectionError).unwrap(),
            json!("CONNECTION_ERROR")
        );
        assert_eq!(
            serde_json::to_value(ErrorCode::RateLimit).unwrap(),
            json!("RATE_LIMIT")
        );
        assert_eq!(
            serde_json::to_value(ErrorCode::UnknownTool).unwrap(),
            json!("UNKNOWN_TOOL")
        );
    }

    #[test]
    fn test_not_found_shape() {
        let value = ErrorEnvelope::not_found().into_value();
        assert_eq!(value, json!({"error": "not found", "code": "NOT_FOUND"}));
    }

    #[test]
    fn test_api_error_carries_status() {
        let value = ErrorEnvelope::api_error("boom", 500).into_value();
        assert_eq!(
            value,
            json!({"error": "boom", "code": "API_ERROR", "status": 500})
        );
    }

    #[test]
    fn test_status_absent_unless_api_error() {
        let value = ErrorEnvelope::rate_limit().into_value();
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_unknown_tool_message() {
        let value = ErrorEnvelope::unknown_tool("nope").into_value();
        assert_eq!(value["error"], json!("unknown tool: nope"));
        assert_eq!(value["code"], json!("UNKNOWN_TOOL"));
    }
}
