// OAuth device-authorization flow.
//
// Two-step API: `start()` obtains the device/user codes so the caller
// can display the verification URL, then `poll()` blocks until the
// user approves, the provider errors, or the wait bound expires.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

use crate::auth::config::AuthConfig;
use crate::auth::token::{AuthToken, TokenStore};
use crate::error::{AuthError, Error};

/// Extra seconds added to the poll interval on a `slow_down` response,
/// per RFC 8628 §3.5.
const SLOW_DOWN_BACKOFF: Duration = Duration::from_secs(5);

/// An in-progress device authorization, returned by [`DeviceFlow::start`].
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceCodeGrant {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri_complete: String,
    /// Provider-specified polling interval, seconds.
    pub interval: u64,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Device-authorization login against the identity provider.
///
/// On success the credential bundle is persisted through the
/// [`TokenStore`] so later processes can pick it up.
pub struct DeviceFlow {
    config: AuthConfig,
    store: TokenStore,
    http: reqwest::Client,
}

impl DeviceFlow {
    pub fn new(config: AuthConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(Error::Transport)?;
        let store = TokenStore::new(config.token_path.clone());
        Ok(Self { config, store, http })
    }

    /// Request a device code from the provider.
    ///
    /// The caller should show `verification_uri_complete` and
    /// `user_code` to the user, then call [`poll`](Self::poll).
    pub async fn start(&self) -> Result<DeviceCodeGrant, Error> {
        let url = self.config.device_code_url()?;
        debug!("requesting device code from {url}");

        let resp = self
            .http
            .post(url)
            .json(&json!({
                "client_id": self.config.client_id,
                "scope": self.config.scope,
                "audience": self.config.audience,
            }))
            .send()
            .await
            .map_err(Error::Transport)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::DeviceFlow {
                description: format!("device code request failed (HTTP {status}): {body}"),
            }
            .into());
        }

        let grant: DeviceCodeGrant = resp.json().await.map_err(Error::Transport)?;
        info!(user_code = %grant.user_code, "device code obtained");
        Ok(grant)
    }

    /// Poll the token endpoint until the user approves the grant.
    ///
    /// `authorization_pending` keeps polling at the provider interval;
    /// `slow_down` backs the interval off before continuing. Any other
    /// provider error is fatal. Polling is bounded by the configured
    /// `device_flow_max_wait`; the provider's unbounded-loop behavior
    /// is deliberately not reproduced.
    pub async fn poll(&self, grant: &DeviceCodeGrant) -> Result<AuthToken, Error> {
        let url = self.config.token_url()?;
        let started = Instant::now();
        let mut interval = Duration::from_secs(grant.interval);

        loop {
            if started.elapsed() >= self.config.device_flow_max_wait {
                return Err(AuthError::DeviceFlowTimeout {
                    waited_secs: started.elapsed().as_secs(),
                }
                .into());
            }

            let resp = self
                .http
                .post(url.clone())
                .form(&[
                    (
                        "grant_type",
                        "urn:ietf:params:oauth:grant-type:device_code",
                    ),
                    ("device_code", grant.device_code.as_str()),
                    ("client_id", self.config.client_id.as_str()),
                    ("audience", self.config.audience.as_str()),
                ])
                .send()
                .await
                .map_err(Error::Transport)?;

            if resp.status().is_success() {
                let token: AuthToken = resp.json().await.map_err(Error::Transport)?;
                self.store.save(&token)?;
                info!("device authorization complete, token persisted");
                return Ok(token);
            }

            let body = resp.text().await.map_err(Error::Transport)?;
            let err: ProviderError =
                serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                    message: e.to_string(),
                    body: body.clone(),
                })?;

            match err.error.as_str() {
                "authorization_pending" => {}
                "slow_down" => {
                    interval += SLOW_DOWN_BACKOFF;
                    debug!("provider asked to slow down, interval now {interval:?}");
                }
                other => {
                    return Err(AuthError::DeviceFlow {
                        description: err
                            .error_description
                            .unwrap_or_else(|| other.to_owned()),
                    }
                    .into());
                }
            }

            sleep(interval).await;
        }
    }

    /// The store this flow persists into (for post-login inspection).
    pub fn store(&self) -> &TokenStore {
        &self.store
    }
}
