//! Configuration for the Re:lation client.
//!
//! A `Config` is supplied once at client construction; there is no dynamic
//! reconfiguration. It can be built in code with [`Config::new`] and the
//! `with_*` methods, or loaded from environment variables with
//! [`Config::from_env`].

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::RelationError;

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v2";

/// Host under which every tenant subdomain lives.
pub const DEFAULT_HOST: &str = "relationapp.jp";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries for transient failures.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay between retries.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Configuration for connecting to Re:lation.
///
/// The access token is stored but never logged; the `Debug` impl redacts it.
#[derive(Clone)]
pub struct Config {
    /// API access token sent as a bearer token.
    /// This value must never be logged or included in error messages.
    pub access_token: String,

    /// Tenant subdomain (`{subdomain}.relationapp.jp`).
    pub subdomain: String,

    /// API version path segment.
    pub api_version: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Maximum retries shared by connection failures, 429 and 503 responses.
    pub max_retries: u32,

    /// Base delay between retries.
    pub retry_delay: Duration,

    /// Origin replacing `https://{subdomain}.relationapp.jp`, e.g. a proxy.
    pub endpoint: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"[REDACTED]")
            .field("subdomain", &self.subdomain)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Creates a configuration with default version, timeout and retry settings.
    pub fn new(access_token: impl Into<String>, subdomain: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            subdomain: subdomain.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            endpoint: None,
        }
    }

    /// Sets the API version path segment.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the base delay between retries.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Overrides the origin the API is reached through.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `RELATION_ACCESS_TOKEN`: API access token
    /// - `RELATION_SUBDOMAIN`: tenant subdomain
    ///
    /// # Optional Environment Variables
    ///
    /// - `RELATION_API_VERSION` (default `v2`)
    /// - `RELATION_TIMEOUT_SECS` (default 30)
    /// - `RELATION_MAX_RETRIES` (default 3)
    /// - `RELATION_RETRY_DELAY_SECS` (default 1)
    /// - `RELATION_ENDPOINT`
    ///
    /// # Errors
    ///
    /// Returns `RelationError::Config` if a required variable is missing
    /// or any value fails validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, RelationError> {
        let access_token = Self::get_required_env("RELATION_ACCESS_TOKEN")?;
        let subdomain = Self::get_required_env("RELATION_SUBDOMAIN")?;

        let mut config = Config::new(access_token.trim(), subdomain.trim());

        if let Some(version) = Self::get_optional_env("RELATION_API_VERSION") {
            config.api_version = version;
        }
        if let Some(secs) = Self::get_optional_env("RELATION_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(Self::parse_number(
                "RELATION_TIMEOUT_SECS",
                &secs,
            )?);
        }
        if let Some(retries) = Self::get_optional_env("RELATION_MAX_RETRIES") {
            config.max_retries = Self::parse_number("RELATION_MAX_RETRIES", &retries)?;
        }
        if let Some(secs) = Self::get_optional_env("RELATION_RETRY_DELAY_SECS") {
            config.retry_delay = Duration::from_secs(Self::parse_number(
                "RELATION_RETRY_DELAY_SECS",
                &secs,
            )?);
        }
        config.endpoint = Self::get_optional_env("RELATION_ENDPOINT");

        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable before a client is built.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<(), RelationError> {
        if self.access_token.trim().is_empty() {
            return Err(RelationError::invalid_config("access token must not be empty"));
        }
        Self::validate_access_token(&self.access_token)?;
        Self::validate_subdomain(&self.subdomain)?;
        if self.api_version.trim().is_empty() || self.api_version.contains('/') {
            return Err(RelationError::invalid_config(
                "API version must be a single path segment such as \"v2\"",
            ));
        }
        if self.timeout.is_zero() {
            return Err(RelationError::invalid_config("timeout must be greater than zero"));
        }
        if let Some(endpoint) = &self.endpoint {
            Self::validate_endpoint(endpoint)?;
        }
        Ok(())
    }

    /// Returns the API base URL, always ending with a slash so relative
    /// paths join under the version segment.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::Config` if the URL cannot be parsed.
    pub fn base_url(&self) -> Result<Url, RelationError> {
        let origin = match &self.endpoint {
            Some(endpoint) => endpoint.trim().trim_end_matches('/').to_string(),
            None => format!("https://{}.{}", self.subdomain, DEFAULT_HOST),
        };
        let raw = format!("{}/api/{}/", origin, self.api_version);
        Url::parse(&raw)
            .map_err(|e| RelationError::invalid_config(format!("invalid base URL {raw}: {e}")))
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, RelationError> {
        env::var(name)
            .map_err(|_| RelationError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(RelationError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    fn get_optional_env(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, RelationError> {
        value.parse().map_err(|_| {
            RelationError::invalid_config(format!("{} must be a non-negative integer", name))
        })
    }

    /// Validates the subdomain is a single DNS label.
    fn validate_subdomain(subdomain: &str) -> Result<(), RelationError> {
        let valid = !subdomain.is_empty()
            && subdomain.len() <= 63
            && subdomain
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !subdomain.starts_with('-')
            && !subdomain.ends_with('-');
        if !valid {
            return Err(RelationError::invalid_config(
                "subdomain must be a single DNS label (letters, digits, hyphens)",
            ));
        }
        Ok(())
    }

    /// Validates the access token is not a known placeholder value.
    ///
    /// Only whole-token matches are rejected; tokens are opaque and may
    /// contain any of these words.
    fn validate_access_token(token: &str) -> Result<(), RelationError> {
        const PLACEHOLDERS: [&str; 6] = [
            "your_access_token",
            "your_access_token_here",
            "your_token",
            "placeholder",
            "changeme",
            "xxx",
        ];

        let token = token.trim();
        let is_placeholder = PLACEHOLDERS
            .iter()
            .any(|placeholder| token.eq_ignore_ascii_case(placeholder))
            || (token.len() >= 3 && token.chars().all(|c| c == 'x' || c == 'X'));
        if is_placeholder {
            return Err(RelationError::invalid_config(
                "access token appears to be a placeholder value",
            ));
        }

        Ok(())
    }

    fn validate_endpoint(endpoint: &str) -> Result<(), RelationError> {
        let endpoint = endpoint.trim();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(RelationError::invalid_config(
                "endpoint must start with http:// or https://",
            ));
        }
        Url::parse(endpoint)
            .map(|_| ())
            .map_err(|e| RelationError::invalid_config(format!("invalid endpoint: {e}")))
    }
}
