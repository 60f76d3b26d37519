//! Outbound request descriptions produced by tool bindings.
//!
//! Every tool binding resolves to exactly one [`ApiRequest`]: a method, a
//! relative path, already-stringified query pairs, and an optional JSON body.
//! The request is pure data - nothing here touches the network.

use serde_json::Value;

/// HTTP method used for an upstream call.
///
/// The upstream registry API is read-only; POST exists solely for the bulk
/// lookup endpoint, which carries its identifiers in a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
}

/// A fully-bound upstream request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: ApiMethod,

    /// Path relative to the API base origin, with path parameters already
    /// substituted (e.g. `/api/cnpj/00000000000191/socios`).
    pub path: String,

    /// Query parameters, stringified and with null/absent values omitted.
    pub query: Vec<(String, String)>,

    /// JSON body for POST requests.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a GET request with no query parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: ApiMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Create a POST request with a JSON body.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: ApiMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Append a query parameter when the value is present.
    ///
    /// Absent optional arguments are omitted entirely - never serialized as
    /// an empty string or the literal text "null".
    pub fn with_param(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Forward an entire argument mapping as query parameters.
    ///
    /// Used by the advanced search endpoint, which accepts an open set of
    /// filters with no per-field binding. Null values are dropped; strings
    /// are forwarded as-is, other scalars via their JSON rendering.
    pub fn with_query_map(mut self, args: &serde_json::Map<String, Value>) -> Self {
        for (key, value) in args {
            if let Some(rendered) = render_query_value(value) {
                self.query.push((key.clone(), rendered));
            }
        }
        self
    }
}

/// Render a JSON value for use in a query string, or `None` to omit it.
fn render_query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
