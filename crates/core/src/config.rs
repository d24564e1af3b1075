//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Request handling never reads process-wide environment variables, which keeps behaviour
//! consistent across multi-threaded runtimes and test harnesses.

use crate::constants::DEFAULT_REGISTRY_URL;
use crate::{LookupError, LookupResult};
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    registry_url: String,
    registry_timeout: Option<Duration>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `registry_url` must be an absolute `http://` or `https://` URL. A `registry_timeout` of
    /// `None` means upstream calls wait indefinitely.
    pub fn new(registry_url: String, registry_timeout: Option<Duration>) -> LookupResult<Self> {
        let registry_url = registry_url.trim().to_string();
        if registry_url.is_empty() {
            return Err(LookupError::InvalidConfig(
                "registry_url cannot be empty".into(),
            ));
        }
        if !(registry_url.starts_with("http://") || registry_url.starts_with("https://")) {
            return Err(LookupError::InvalidConfig(format!(
                "registry_url must be an http(s) URL, got {registry_url}"
            )));
        }
        if registry_timeout.is_some_and(|t| t.is_zero()) {
            return Err(LookupError::InvalidConfig(
                "registry timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            registry_url,
            registry_timeout,
        })
    }

    pub fn registry_url(&self) -> &str {
        &self.registry_url
    }

    pub fn registry_timeout(&self) -> Option<Duration> {
        self.registry_timeout
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            registry_timeout: None,
        }
    }
}

/// Resolve the registry URL from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the public registry endpoint.
pub fn registry_url_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string())
}

/// Parse the upstream timeout (whole seconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, no timeout is applied.
pub fn registry_timeout_from_env_value(value: Option<String>) -> LookupResult<Option<Duration>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(raw) = value else {
        return Ok(None);
    };

    let secs: u64 = raw.parse().map_err(|_| {
        LookupError::InvalidConfig(format!("registry timeout must be whole seconds, got {raw}"))
    })?;
    if secs == 0 {
        return Err(LookupError::InvalidConfig(
            "registry timeout must be greater than zero".into(),
        ));
    }

    Ok(Some(Duration::from_secs(secs)))
}
