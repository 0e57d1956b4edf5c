use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::Error;

/// Identity-provider settings shared by the device flow and the
/// per-request bearer authenticator.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Identity provider base URL, e.g. `https://auth.gridflow.energy`.
    pub issuer_url: Url,
    pub client_id: String,
    pub audience: String,
    /// Space-separated OAuth scopes requested at login.
    pub scope: String,
    /// Where the credential bundle is persisted.
    pub token_path: PathBuf,
    /// Upper bound on device-flow polling before giving up.
    pub device_flow_max_wait: Duration,
}

impl AuthConfig {
    pub fn new(issuer_url: Url, client_id: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer_url,
            client_id: client_id.into(),
            audience: audience.into(),
            scope: "openid profile offline_access".into(),
            token_path: PathBuf::from("token.json"),
            device_flow_max_wait: Duration::from_secs(300),
        }
    }

    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = path.into();
        self
    }

    pub fn with_device_flow_max_wait(mut self, max_wait: Duration) -> Self {
        self.device_flow_max_wait = max_wait;
        self
    }

    pub(crate) fn device_code_url(&self) -> Result<Url, Error> {
        self.issuer_url
            .join("oauth/device/code")
            .map_err(Error::InvalidUrl)
    }

    pub(crate) fn token_url(&self) -> Result<Url, Error> {
        self.issuer_url.join("oauth/token").map_err(Error::InvalidUrl)
    }
}
