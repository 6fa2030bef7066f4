//! Error types for the Re:lation client.
//!
//! This module defines `RelationError`, the unified error type returned by
//! every client operation. HTTP failures are classified into a closed set of
//! kinds keyed on the response status code (see [`ErrorKind::from_status`]),
//! each carrying the extracted server message and the raw response.
//!
//! # Security
//!
//! Response bodies are passed through `sanitize_message()` before they are
//! stored on an error, so the access token never leaks into logs or
//! error messages.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// The raw HTTP response attached to an API error for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code returned by the server.
    pub status: StatusCode,

    /// Response body text (sanitized).
    pub body: String,
}

/// Message and optional raw response shared by all API error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// Human-readable message extracted from the response.
    pub message: String,

    /// The response that produced this error, if one was received.
    pub response: Option<RawResponse>,
}

impl ApiFailure {
    /// Creates a failure with no attached response (e.g. connection errors).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }

    /// Creates a failure carrying the raw response.
    pub fn with_response(message: impl Into<String>, status: StatusCode, body: String) -> Self {
        Self {
            message: message.into(),
            response: Some(RawResponse { status, body }),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The closed set of API error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// HTTP 401.
    Authentication,
    /// HTTP 403.
    Permission,
    /// HTTP 404.
    ResourceNotFound,
    /// HTTP 400 and 415.
    InvalidRequest,
    /// HTTP 429.
    RateLimit,
    /// HTTP 503.
    ServiceUnavailable,
    /// HTTP 500, any unrecognized error status, or an exhausted connection failure.
    Api,
}

impl ErrorKind {
    /// Maps an HTTP status code to an error kind.
    ///
    /// Returns `None` for statuses below 400, which are successes.
    #[must_use]
    pub fn from_status(status: u16) -> Option<Self> {
        let kind = match status {
            0..=399 => return None,
            400 | 415 => ErrorKind::InvalidRequest,
            401 => ErrorKind::Authentication,
            403 => ErrorKind::Permission,
            404 => ErrorKind::ResourceNotFound,
            429 => ErrorKind::RateLimit,
            503 => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::Api,
        };
        Some(kind)
    }

    /// Returns true if a response with this kind's status is retried by
    /// the transport.
    ///
    /// Connection failures and timeouts are retried as well but have no
    /// status; once exhausted they surface as [`ErrorKind::Api`].
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::RateLimit | ErrorKind::ServiceUnavailable)
    }
}

/// Unified error type for all client operations.
#[derive(Error, Debug)]
pub enum RelationError {
    /// Configuration error - missing or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A non-transient transport failure (request build, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Credentials were rejected (HTTP 401).
    #[error("authentication failed: {0}")]
    Authentication(ApiFailure),

    /// Authenticated but not allowed (HTTP 403).
    #[error("permission denied: {0}")]
    Permission(ApiFailure),

    /// The addressed resource does not exist (HTTP 404).
    #[error("resource not found: {0}")]
    ResourceNotFound(ApiFailure),

    /// The request was malformed (HTTP 400/415).
    #[error("invalid request: {0}")]
    InvalidRequest(ApiFailure),

    /// Rate limited and the retry budget is exhausted (HTTP 429).
    #[error("rate limited: {0}")]
    RateLimit(ApiFailure),

    /// Service in maintenance and the retry budget is exhausted (HTTP 503).
    #[error("service unavailable: {0}")]
    ServiceUnavailable(ApiFailure),

    /// Generic API failure.
    #[error("API error: {0}")]
    Api(ApiFailure),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RelationError {
    /// Builds the error variant for an API error kind.
    pub fn from_kind(kind: ErrorKind, failure: ApiFailure) -> Self {
        match kind {
            ErrorKind::Authentication => RelationError::Authentication(failure),
            ErrorKind::Permission => RelationError::Permission(failure),
            ErrorKind::ResourceNotFound => RelationError::ResourceNotFound(failure),
            ErrorKind::InvalidRequest => RelationError::InvalidRequest(failure),
            ErrorKind::RateLimit => RelationError::RateLimit(failure),
            ErrorKind::ServiceUnavailable => RelationError::ServiceUnavailable(failure),
            ErrorKind::Api => RelationError::Api(failure),
        }
    }

    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        RelationError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        RelationError::Config(message.into())
    }

    /// Returns the API error kind, or `None` for ambient errors.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            RelationError::Authentication(_) => Some(ErrorKind::Authentication),
            RelationError::Permission(_) => Some(ErrorKind::Permission),
            RelationError::ResourceNotFound(_) => Some(ErrorKind::ResourceNotFound),
            RelationError::InvalidRequest(_) => Some(ErrorKind::InvalidRequest),
            RelationError::RateLimit(_) => Some(ErrorKind::RateLimit),
            RelationError::ServiceUnavailable(_) => Some(ErrorKind::ServiceUnavailable),
            RelationError::Api(_) => Some(ErrorKind::Api),
            _ => None,
        }
    }

    /// Returns the message and raw response of an API error.
    #[must_use]
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            RelationError::Authentication(f)
            | RelationError::Permission(f)
            | RelationError::ResourceNotFound(f)
            | RelationError::InvalidRequest(f)
            | RelationError::RateLimit(f)
            | RelationError::ServiceUnavailable(f)
            | RelationError::Api(f) => Some(f),
            _ => None,
        }
    }

    /// Returns the server-provided message of an API error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }

    /// Returns the HTTP status of the response behind this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.failure()
            .and_then(|f| f.response.as_ref())
            .map(|r| r.status)
    }

    /// Returns true if this error came from a retryable status (429 or
    /// 503), i.e. the transport gave up after spending its retry budget.
    ///
    /// An exhausted connection failure is reported as `Api` and returns
    /// false here even though it was retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.kind().is_some_and(ErrorKind::is_retryable)
    }

    /// Sanitizes a message to remove any occurrence of the access token.
    ///
    /// # Returns
    ///
    /// The message with the token replaced by `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, access_token: &str) -> String {
        if access_token.is_empty() {
            return message.to_string();
        }
        message.replace(access_token, "[REDACTED]")
    }
}

/// Convenience alias used across the crate.
pub type Result<T, E = RelationError> = std::result::Result<T, E>;
