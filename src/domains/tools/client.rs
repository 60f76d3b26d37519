//! Upstream registry API client.
//!
//! Thin wrapper over reqwest that executes one [`ApiRequest`] against the
//! configured base origin and normalizes the outcome into the result
//! envelope. One attempt per invocation - no retries, no backoff, no timeout
//! beyond the transport default.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use super::envelope::ErrorEnvelope;
use super::request::{ApiMethod, ApiRequest};

/// Fallback message when a non-2xx response body is missing or unparseable.
const GENERIC_API_ERROR: &str = "upstream error";

/// HTTP client bound to a single upstream origin.
///
/// Stateless apart from reqwest's connection pool; safe to share across
/// concurrent invocations.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base origin (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The configured base origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a bound request and normalize the outcome.
    ///
    /// Always resolves to a JSON value: the decoded upstream body on 2xx, or
    /// a normalized error envelope otherwise.
    pub async fn execute(&self, request: ApiRequest) -> Value {
        let url = format!("{}{}", self.base_url, request.path);
        debug!("Upstream request: {:?} {}", request.method, url);

        let mut builder = match request.method {
            ApiMethod::Get => self.http.get(&url),
            ApiMethod::Post => self.http.post(&url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Upstream request to {} failed: {}", url, e);
                return ErrorEnvelope::connection_error(e).into_value();
            }
        };

        let status = response.status();
        if status.is_success() {
            // A 2xx body that fails to decode is treated as a transport
            // failure, mirroring the single try/fail mapping per call.
            return match response.json::<Value>().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to decode upstream response from {}: {}", url, e);
                    ErrorEnvelope::connection_error(e).into_value()
                }
            };
        }

        warn!("Upstream returned {} for {}", status, url);
        match status {
            StatusCode::NOT_FOUND => ErrorEnvelope::not_found().into_value(),
            StatusCode::TOO_MANY_REQUESTS => ErrorEnvelope::rate_limit().into_value(),
            other => {
                let message = response
                    .json::<Value>()
                    .await
                    .ok()
                    .and_then(|body| {
                        body.get("message")
                            .and_then(Value::as_str)
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| GENERIC_API_ERROR.to_string());
                ErrorEnvelope::api_error(message, other.as_u16()).into_value()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_success_body_passed_through_verbatim() {
        let server = MockServer::start().await;
        let body = json!({
            "razao_social": "BANCO DO BRASIL SA",
            "situacao_cadastral": "02"
        });
        Mock::given(method("GET"))
            .and(path("/api/cnpj/00000000000191"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let result = client
            .execute(ApiRequest::get("/api/cnpj/00000000000191"))
            .await;

        assert_eq!(result, body);
        assert!(result.get("code").is_none());
    }

    #[tokio::test]
    async fn test_query_params_sent_and_nulls_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cnpj/buscar/cnae/4711302"))
            .and(query_param("limite", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let request = ApiRequest::get("/api/cnpj/buscar/cnae/4711302")
            .with_param("uf", None::<String>)
            .with_param("limite", Some(5));
        let result = client.execute(request).await;

        // The mock only matches when `uf` was omitted and `limite=5` was sent.
        assert_eq!(result, json!([]));
    }

    #[tokio::test]
    async fn test_404_normalized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cnpj/99999999999999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let result = client
            .execute(ApiRequest::get("/api/cnpj/99999999999999"))
            .await;

        assert_eq!(result, json!({"error": "not found", "code": "NOT_FOUND"}));
    }

    #[tokio::test]
    async fn test_429_normalized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cnpj/00000000000191"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let result = client
            .execute(ApiRequest::get("/api/cnpj/00000000000191"))
            .await;

        assert_eq!(result["code"], json!("RATE_LIMIT"));
        assert_eq!(result["error"], json!("rate limit exceeded, wait and retry"));
    }

    #[tokio::test]
    async fn test_other_error_uses_upstream_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cnpj/00000000000191"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "database offline"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let result = client
            .execute(ApiRequest::get("/api/cnpj/00000000000191"))
            .await;

        assert_eq!(
            result,
            json!({"error": "database offline", "code": "API_ERROR", "status": 500})
        );
    }

    #[tokio::test]
    async fn test_unparseable_error_body_gets_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cnpj/00000000000191"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let result = client
            .execute(ApiRequest::get("/api/cnpj/00000000000191"))
            .await;

        assert_eq!(
            result,
            json!({"error": "upstream error", "code": "API_ERROR", "status": 502})
        );
    }

    #[tokio::test]
    async fn test_connection_refused_normalized() {
        // Port 1 on localhost is essentially never listening.
        let client = ApiClient::new("http://127.0.0.1:1");
        let result = client.execute(ApiRequest::get("/api/cnpj/stats/por-uf")).await;

        assert_eq!(result["code"], json!("CONNECTION_ERROR"));
        let message = result["error"].as_str().unwrap();
        assert!(message.starts_with("connection error: "));
    }

    // Live upstream tests (require network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_live_buscar_empresa() {
        let client = ApiClient::new(crate::core::config::API_URL);
        let result = client
            .execute(ApiRequest::get("/api/cnpj/00000000000191"))
            .await;
        assert!(result.get("razao_social").is_some(), "got: {result}");
    }

    #[tokio::test]
    async fn test_bulk_post_sends_json_body() {
        let server = MockServer::start().await;
        let body = json!({"cnpjs": ["00000000000191", "33000167000101"]});
        Mock::given(method("POST"))
            .and(path("/api/cnpj/bulk"))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultados": []})))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let result = client.execute(ApiRequest::post("/api/cnpj/bulk", body)).await;

        assert_eq!(result, json!({"resultados": []}));
    }
}
