//! HTTP transport for the Re:lation API.
//!
//! `Transport` turns a method, a relative path, optional query parameters
//! and an optional JSON body into either the parsed JSON response or a
//! typed [`RelationError`].
//!
//! # Retry Logic
//!
//! Three transient causes share one attempt budget (`Config::max_retries`):
//! - connection failures and timeouts: base delay
//! - HTTP 429: `Retry-After` seconds if present and numeric, else base delay
//! - HTTP 503: base delay
//!
//! Nothing else is retried.
//!
//! # Security
//!
//! The access token is never logged. Error bodies are sanitized before they
//! are attached to an error.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::{ApiFailure, ErrorKind, RelationError};

const JSON_MIME: &str = "application/json";

const USER_AGENT: &str = concat!("relation-client/", env!("CARGO_PKG_VERSION"));

/// Ordered query parameters.
///
/// Array parameters are sent the way the API expects them, as repeated
/// `key[]=value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scalar parameter.
    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a scalar parameter only when a value is present.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Appends one `key[]` pair per value.
    pub fn push_array<I, V>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let key = format!("{key}[]");
        for value in values {
            self.pairs.push((key.clone(), value.to_string()));
        }
        self
    }

    /// Returns the pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns every value sent under `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A failed attempt and, if it may be retried, how long to wait first.
struct Attempt {
    error: RelationError,
    retry_after: Option<Duration>,
}

impl Attempt {
    fn fatal(error: RelationError) -> Self {
        Self {
            error,
            retry_after: None,
        }
    }

    fn retry(error: RelationError, delay: Duration) -> Self {
        Self {
            error,
            retry_after: Some(delay),
        }
    }
}

/// Authenticated JSON-over-HTTP transport with bounded retry.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct Transport {
    http: Client,

    /// Base URL ending in `/api/{version}/`.
    base_url: Url,

    /// SECURITY: Never log this value!
    access_token: String,

    max_retries: u32,
    retry_delay: Duration,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &"[REDACTED]")
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

impl Transport {
    /// Creates a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::Config` if the configuration is invalid, or
    /// `RelationError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, RelationError> {
        config.validate()?;
        let base_url = config.base_url()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(RelationError::HttpClient)?;

        Ok(Self {
            http,
            base_url,
            access_token: config.access_token.clone(),
            max_retries: config.max_retries,
            retry_delay: config.retry_delay,
        })
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a relative path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::InvalidRequest` if the path resolves outside
    /// the API base URL.
    pub fn url_for(&self, path: &str) -> Result<Url, RelationError> {
        let path = path.trim_start_matches('/');
        let url = self.base_url.join(path).map_err(|e| {
            RelationError::InvalidRequest(ApiFailure::new(format!("invalid path {path:?}: {e}")))
        })?;
        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(RelationError::InvalidRequest(ApiFailure::new(format!(
                "path {path:?} resolves outside the API base URL"
            ))));
        }
        Ok(url)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn get(&self, path: &str, query: Option<&QueryParams>) -> Result<Value, RelationError> {
        self.request(Method::GET, path, query, None).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, RelationError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, None, Some(&body)).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Value, RelationError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, None, Some(&body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`Transport::request`].
    pub async fn delete(&self, path: &str) -> Result<Value, RelationError> {
        self.request(Method::DELETE, path, None, None).await
    }

    /// Sends a request, retrying transient failures.
    ///
    /// # Returns
    ///
    /// The parsed JSON body. An empty body is `{}` and a body that is not
    /// JSON is wrapped as `{"data": "<text>"}`.
    ///
    /// # Errors
    ///
    /// Returns the error kind mapped from the response status, or
    /// `RelationError::Api` with a "connection error" message once
    /// connection retries are exhausted.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> Result<Value, RelationError> {
        let url = self.url_for(path)?;
        let mut attempts = 0u32;

        loop {
            match self.send_once(method.clone(), &url, query, body).await {
                Ok(value) => return Ok(value),
                Err(Attempt {
                    error,
                    retry_after: Some(delay),
                }) if attempts < self.max_retries => {
                    attempts += 1;
                    tracing::debug!(
                        method = %method,
                        path = %url.path(),
                        attempt = attempts,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Retrying after transient error"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(Attempt { error, .. }) => {
                    if attempts > 0 {
                        tracing::debug!(
                            method = %method,
                            path = %url.path(),
                            attempts = attempts,
                            "All retry attempts exhausted"
                        );
                    }
                    return Err(error);
                }
            }
        }
    }

    /// Performs a single HTTP exchange without retry.
    async fn send_once(
        &self,
        method: Method,
        url: &Url,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> Result<Value, Attempt> {
        tracing::debug!(method = %method, path = %url.path(), "Making Re:lation API request");

        let mut req = self
            .http
            .request(method, url.clone())
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, JSON_MIME)
            .header(ACCEPT, JSON_MIME);

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            req = req.query(query.pairs());
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| self.transport_failure(e))?;
        let status = response.status();
        let retry_after = parse_retry_after(response.headers());
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_failure(e))?;

        if status.as_u16() < 400 {
            tracing::trace!(status = %status, "Re:lation API response");
            return Ok(parse_success_body(&text));
        }

        Err(self.status_failure(status, &text, retry_after))
    }

    /// Classifies a reqwest error: connection failures and timeouts retry.
    fn transport_failure(&self, error: reqwest::Error) -> Attempt {
        if error.is_connect() || error.is_timeout() {
            let message = RelationError::sanitize_message(&error.to_string(), &self.access_token);
            Attempt::retry(
                RelationError::Api(ApiFailure::new(format!("connection error: {message}"))),
                self.retry_delay,
            )
        } else {
            Attempt::fatal(RelationError::Http(error))
        }
    }

    /// Converts an error status into a typed error and its retry delay.
    fn status_failure(
        &self,
        status: StatusCode,
        text: &str,
        retry_after: Option<Duration>,
    ) -> Attempt {
        let kind = ErrorKind::from_status(status.as_u16()).unwrap_or(ErrorKind::Api);
        let body = RelationError::sanitize_message(text, &self.access_token);
        let mut message = extract_error_message(status, &body);
        if kind == ErrorKind::Api && status != StatusCode::INTERNAL_SERVER_ERROR {
            message = format!("unexpected status code {}: {}", status.as_u16(), message);
        }

        match kind {
            ErrorKind::RateLimit => tracing::warn!("Rate limited by Re:lation API"),
            ErrorKind::ServiceUnavailable => {
                tracing::warn!(status = %status, "Re:lation API temporarily unavailable")
            }
            _ => {}
        }

        let error = RelationError::from_kind(kind, ApiFailure::with_response(message, status, body));
        match retry_delay(kind, retry_after, self.retry_delay) {
            Some(delay) => Attempt::retry(error, delay),
            None => Attempt::fatal(error),
        }
    }
}

/// Returns how long to wait before retrying a response of `kind`, or
/// `None` if it is not retried.
///
/// A rate limit honours `Retry-After` when the server sent a numeric value.
pub fn retry_delay(kind: ErrorKind, retry_after: Option<Duration>, base: Duration) -> Option<Duration> {
    if !kind.is_retryable() {
        return None;
    }
    match kind {
        ErrorKind::RateLimit => Some(retry_after.unwrap_or(base)),
        _ => Some(base),
    }
}

/// Reads `Retry-After` as whole seconds. HTTP-date values are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Parses a success body: empty is `{}`, non-JSON is wrapped under `data`.
fn parse_success_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Object(serde_json::Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "data": text }))
}

/// Extracts a human-readable message from an error body.
///
/// A present `error` key wins whatever its value, then `message`, then the
/// whole JSON document, then the raw text, and finally a generic
/// `HTTP error <code>`. JSON strings are returned unquoted.
pub fn extract_error_message(status: StatusCode, text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(json) => {
            let field = json
                .as_object()
                .and_then(|object| object.get("error").or_else(|| object.get("message")));
            match field.unwrap_or(&json) {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }
        }
        Err(_) if !text.trim().is_empty() => text.to_string(),
        Err(_) => format!("HTTP error {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn test_transport() -> Transport {
        let config = Config::new("secret_token_abc", "acme");
        Transport::new(&config).unwrap()
    }

    #[test]
    fn test_query_params_array_pairs() {
        let mut params = QueryParams::new();
        params
            .push_array("emails", ["a@example.com", "b@example.com"])
            .push("per_page", 10)
            .push_opt("page", None::<u32>);

        assert_eq!(params.get_all("emails[]"), vec!["a@example.com", "b@example.com"]);
        assert_eq!(params.get_all("per_page"), vec!["10"]);
        assert!(params.get_all("page").is_empty());
        assert_eq!(params.pairs().len(), 3);
    }

    #[test]
    fn test_url_for_strips_leading_slash() {
        let transport = test_transport();
        let url = transport.url_for("/message_boxes").unwrap();
        assert_eq!(url.as_str(), "https://acme.relationapp.jp/api/v2/message_boxes");
    }

    #[test]
    fn test_url_for_rejects_escape() {
        let transport = test_transport();
        assert!(transport.url_for("1/../../../admin").is_err());
        assert!(transport.url_for("https://evil.example.com/x").is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", test_transport());
        assert!(!debug.contains("secret_token_abc"));
    }

    #[test]
    fn test_retry_delay_policy() {
        let base = Duration::from_secs(1);
        assert_eq!(
            retry_delay(ErrorKind::RateLimit, Some(Duration::from_secs(5)), base),
            Some(Duration::from_secs(5))
        );
        assert_eq!(retry_delay(ErrorKind::RateLimit, None, base), Some(base));
        assert_eq!(
            retry_delay(ErrorKind::ServiceUnavailable, Some(Duration::from_secs(5)), base),
            Some(base)
        );
        assert_eq!(retry_delay(ErrorKind::Api, None, base), None);
        assert_eq!(retry_delay(ErrorKind::ResourceNotFound, None, base), None);
    }

    #[test]
    fn test_retry_delay_agrees_with_error_kind() {
        let base = Duration::from_millis(10);
        let kinds = [
            ErrorKind::Authentication,
            ErrorKind::Permission,
            ErrorKind::ResourceNotFound,
            ErrorKind::InvalidRequest,
            ErrorKind::RateLimit,
            ErrorKind::ServiceUnavailable,
            ErrorKind::Api,
        ];
        for kind in kinds {
            assert_eq!(
                retry_delay(kind, None, base).is_some(),
                kind.is_retryable(),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn test_parse_retry_after() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(7)));

        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn test_parse_success_body() {
        assert_eq!(parse_success_body(""), serde_json::json!({}));
        assert_eq!(parse_success_body("[1,2]"), serde_json::json!([1, 2]));
        assert_eq!(parse_success_body("OK"), serde_json::json!({"data": "OK"}));
    }

    #[test]
    fn test_extract_error_message_precedence() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(
            extract_error_message(status, r#"{"error":"bad","message":"ignored"}"#),
            "bad"
        );
        assert_eq!(extract_error_message(status, r#"{"message":"m"}"#), "m");
        assert_eq!(extract_error_message(status, r#"{"code":1}"#), r#"{"code":1}"#);
        assert_eq!(extract_error_message(status, r#"{"error":"","message":"m"}"#), "");
        assert_eq!(extract_error_message(status, r#"{"error":null,"message":"m"}"#), "null");
        assert_eq!(
            extract_error_message(status, r#"{"error":{"code":7},"message":"m"}"#),
            r#"{"code":7}"#
        );
        assert_eq!(extract_error_message(status, r#""quota exceeded""#), "quota exceeded");
        assert_eq!(extract_error_message(status, "[1,2]"), "[1,2]");
        assert_eq!(extract_error_message(status, "plain text"), "plain text");
        assert_eq!(extract_error_message(status, ""), "HTTP error 400");
    }

    #[test]
    fn test_status_failure_sanitizes_body() {
        let transport = test_transport();
        let attempt = transport.status_failure(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"bad token secret_token_abc"}"#,
            None,
        );
        assert!(attempt.retry_after.is_none());
        let failure = attempt.error.failure().unwrap();
        assert!(!failure.message.contains("secret_token_abc"));
        assert!(!failure.response.as_ref().unwrap().body.contains("secret_token_abc"));
    }

    #[test]
    fn test_status_failure_unexpected_code() {
        let transport = test_transport();
        let attempt = transport.status_failure(StatusCode::IM_A_TEAPOT, "", None);
        assert!(matches!(attempt.error, RelationError::Api(_)));
        assert!(attempt.error.to_string().contains("unexpected status code 418"));

        let attempt = transport.status_failure(StatusCode::INTERNAL_SERVER_ERROR, "boom", None);
        assert_eq!(attempt.error.failure().unwrap().message, "boom");
    }
}
