//! Configuration for the Gridflow client and CLI.
//!
//! Layered figment stack: built-in defaults, an optional TOML file
//! under the user config directory, then `GRIDFLOW_*` environment
//! variables on top. The resolved [`Settings`] convert into the
//! explicit config structs `gridflow-api` constructors take -- there
//! is no process-global client state.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use gridflow_api::{ApiConfig, AuthConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Resolved client settings.
///
/// Environment variables use the `GRIDFLOW_` prefix with the field
/// name upper-cased, e.g. `GRIDFLOW_API_URL`, `GRIDFLOW_TOKEN_PATH`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Platform API root.
    pub api_url: String,

    /// API version segment.
    pub api_version: String,

    /// Identity provider domain (or full URL) for the device flow.
    pub auth_domain: String,

    /// OAuth client id of this application.
    pub auth_client_id: String,

    /// OAuth audience of the platform API.
    pub auth_audience: String,

    /// OAuth scopes requested at login.
    pub auth_scope: String,

    /// Override for the token file path.
    pub token_path: Option<PathBuf>,

    /// Extra default headers as a JSON-encoded string map.
    pub headers: Option<String>,

    /// Per-request timeout, seconds.
    pub timeout_secs: u64,

    /// Bound on device-flow polling, seconds.
    pub device_flow_max_wait_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "https://api.gridflow.energy".into(),
            api_version: "v1".into(),
            auth_domain: "auth.gridflow.energy".into(),
            auth_client_id: "gridflow-public-client".into(),
            auth_audience: "https://api.gridflow.energy".into(),
            auth_scope: "openid profile offline_access".into(),
            token_path: None,
            headers: None,
            timeout_secs: 10,
            device_flow_max_wait_secs: 300,
        }
    }
}

impl Settings {
    /// Load settings from defaults + config file + environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(path) = config_path() {
            figment = figment.merge(Toml::file(path));
        }
        let settings = figment.merge(Env::prefixed("GRIDFLOW_")).extract()?;
        Ok(settings)
    }

    /// Translate into the API transport config.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let api_url = Url::parse(&self.api_url).map_err(|e| ConfigError::Validation {
            field: "api_url".into(),
            reason: e.to_string(),
        })?;

        let mut config = ApiConfig::new(api_url);
        config.api_version = self.api_version.clone();
        config.timeout = Duration::from_secs(self.timeout_secs);
        config.headers = self.parse_headers()?;
        Ok(config)
    }

    /// Translate into the identity-provider config.
    pub fn auth_config(&self) -> Result<AuthConfig, ConfigError> {
        let raw = if self.auth_domain.contains("://") {
            self.auth_domain.clone()
        } else {
            format!("https://{}/", self.auth_domain)
        };
        let issuer = Url::parse(&raw).map_err(|e| ConfigError::Validation {
            field: "auth_domain".into(),
            reason: e.to_string(),
        })?;

        let mut config = AuthConfig::new(issuer, &self.auth_client_id, &self.auth_audience)
            .with_token_path(self.token_path())
            .with_device_flow_max_wait(Duration::from_secs(self.device_flow_max_wait_secs));
        config.scope = self.auth_scope.clone();
        Ok(config)
    }

    /// The token file path: explicit override, else the per-user
    /// config directory.
    pub fn token_path(&self) -> PathBuf {
        self.token_path.clone().unwrap_or_else(default_token_path)
    }

    fn parse_headers(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        let Some(raw) = &self.headers else {
            return Ok(headers);
        };

        let map: HashMap<String, String> =
            serde_json::from_str(raw).map_err(|e| ConfigError::Validation {
                field: "headers".into(),
                reason: format!("expected a JSON string map: {e}"),
            })?;

        for (key, value) in map {
            let name =
                HeaderName::from_bytes(key.as_bytes()).map_err(|e| ConfigError::Validation {
                    field: "headers".into(),
                    reason: format!("bad header name '{key}': {e}"),
                })?;
            let value = HeaderValue::from_str(&value).map_err(|e| ConfigError::Validation {
                field: "headers".into(),
                reason: format!("bad header value for '{key}': {e}"),
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

// ── Paths ───────────────────────────────────────────────────────────

/// The TOML config file path, if a home directory is resolvable.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("energy", "gridflow", "gridflow")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Default token file location under the per-user config directory.
pub fn default_token_path() -> PathBuf {
    ProjectDirs::from("energy", "gridflow", "gridflow").map_or_else(
        || PathBuf::from(".gridflow/token.json"),
        |dirs| dirs.config_dir().join("token.json"),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_resolve_into_configs() {
        let settings = Settings::default();

        let api = settings.api_config().unwrap();
        assert_eq!(api.api_url.as_str(), "https://api.gridflow.energy/");
        assert_eq!(api.api_version, "v1");
        assert_eq!(api.timeout, Duration::from_secs(10));

        let auth = settings.auth_config().unwrap();
        assert_eq!(auth.issuer_url.as_str(), "https://auth.gridflow.energy/");
        assert_eq!(auth.scope, "openid profile offline_access");
    }

    #[test]
    fn env_variables_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GRIDFLOW_API_URL", "https://staging.gridflow.energy");
            jail.set_env("GRIDFLOW_API_VERSION", "v2");
            jail.set_env("GRIDFLOW_TIMEOUT_SECS", "30");

            let settings = Settings::load().expect("settings should load");
            assert_eq!(settings.api_url, "https://staging.gridflow.energy");
            assert_eq!(settings.api_version, "v2");
            assert_eq!(settings.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn headers_parse_from_json_map() {
        let settings = Settings {
            headers: Some(r#"{"x-team": "modelling"}"#.into()),
            ..Settings::default()
        };

        let api = settings.api_config().unwrap();
        assert_eq!(api.headers.get("x-team").unwrap(), "modelling");
    }

    #[test]
    fn malformed_headers_are_a_validation_error() {
        let settings = Settings {
            headers: Some("not-json".into()),
            ..Settings::default()
        };

        let err = settings.api_config().unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn full_auth_domain_url_is_used_verbatim() {
        let settings = Settings {
            auth_domain: "http://localhost:9999/".into(),
            ..Settings::default()
        };

        let auth = settings.auth_config().unwrap();
        assert_eq!(auth.issuer_url.as_str(), "http://localhost:9999/");
    }
}
