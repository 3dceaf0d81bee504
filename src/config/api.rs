use crate::core::{AppError, Result};
use std::time::Duration;

/// Variables holding the API base URL, in precedence order
///
/// The admin panel and the customer site name this variable differently; all are accepted.
pub const BASE_URL_VARS: [&str; 4] = [
    "SEVADESK_API_URL",
    "VITE_BASE_API_URL",
    "NEXT_PUBLIC_API_URL",
    "NEXT_PUBLIC_SERVER_URL",
];

/// Storefront API connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Variable the base URL was read from
    pub base_url_source: String,
    pub prefix: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            base_url_source: "explicit".to_string(),
            prefix: "/api".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (source, base_url) = BASE_URL_VARS
            .iter()
            .find_map(|var| {
                lookup(var)
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (var.to_string(), v.trim().to_string()))
            })
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "API base URL not set (one of {})",
                    BASE_URL_VARS.join(", ")
                ))
            })?;

        Ok(ApiConfig {
            base_url,
            base_url_source: source,
            prefix: lookup("SEVADESK_API_PREFIX").unwrap_or_else(|| "/api".to_string()),
            token: lookup("SEVADESK_API_TOKEN").filter(|t| !t.trim().is_empty()),
            timeout_secs: lookup("SEVADESK_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .trim()
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid SEVADESK_HTTP_TIMEOUT_SECS".to_string())
                })?,
        })
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL joined with the prefix, without a trailing slash
    ///
    /// A base URL that already ends with the prefix is used as-is, so both
    /// `https://host` and `https://host/api` resolve to `https://host/api`.
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.prefix.trim_matches('/');

        if prefix.is_empty() || base.ends_with(&format!("/{}", prefix)) {
            base.to_string()
        } else {
            format!("{}/{}", base, prefix)
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Configuration(format!(
                "{} must be an http(s) URL, got '{}'",
                self.base_url_source, self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "HTTP timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
