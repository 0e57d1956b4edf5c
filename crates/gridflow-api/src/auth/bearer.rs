// Per-request bearer authentication with single-shot token refresh.
//
// This is the one piece of shared mutable state in the crate: the
// in-memory credential bundle, guarded by an async mutex so concurrent
// requests never race a double refresh or read a half-updated bundle.

use std::fmt;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::auth::config::AuthConfig;
use crate::auth::token::{AuthToken, TokenStore};
use crate::error::{AuthError, Error};

#[derive(Debug, Deserialize)]
struct RefreshErrorBody {
    #[serde(default)]
    error_description: Option<String>,
}

/// Attaches `Authorization: Bearer <access_token>` to outgoing requests
/// and transparently recovers from one expired-token 401 per request.
///
/// Contract (see crate docs): on a 401, exactly one refresh-token grant
/// is sent; on refresh success the original request is resent exactly
/// once and that second response is returned as-is, even if it is
/// another 401. A refresh rejection is fatal for the request chain.
pub struct BearerAuth {
    config: AuthConfig,
    store: TokenStore,
    /// Bare client for identity-provider round trips. Separate from the
    /// API client so token requests never recurse through `execute`.
    http: reqwest::Client,
    token: Mutex<Option<AuthToken>>,
}

impl BearerAuth {
    pub fn new(config: AuthConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(Error::Transport)?;
        let store = TokenStore::new(config.token_path.clone());
        // A missing or unreadable file is not an error yet -- it becomes
        // one when the first request actually needs credentials.
        let token = Mutex::new(store.load().ok());
        Ok(Self { config, store, http, token })
    }

    /// Send `request`, refreshing the token and retrying once on 401.
    pub async fn execute(
        &self,
        http: &reqwest::Client,
        mut request: reqwest::Request,
    ) -> Result<reqwest::Response, Error> {
        // Clone up front: the body is consumed by the first send.
        let retry = request.try_clone();

        let access = self.access_token().await?;
        attach_bearer(&mut request, &access)?;

        let response = http.execute(request).await.map_err(Error::Transport)?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        // Streaming bodies cannot be replayed; surface the 401 as-is.
        let Some(mut retry) = retry else {
            return Ok(response);
        };

        debug!("401 from API, refreshing token and retrying once");
        let access = self.refresh(&access).await?;
        attach_bearer(&mut retry, &access)?;
        http.execute(retry).await.map_err(Error::Transport)
    }

    /// Current access token: in-memory bundle, else token-store load.
    async fn access_token(&self) -> Result<String, Error> {
        let mut guard = self.token.lock().await;
        if guard.is_none() {
            *guard = Some(self.store.load()?);
        }
        match guard.as_ref() {
            Some(token) => Ok(token.access_token.clone()),
            None => Err(AuthError::NotLoggedIn.into()),
        }
    }

    /// Perform one refresh-token grant and replace the bundle wholesale.
    ///
    /// `stale_access` is the token that just got a 401: if the bundle no
    /// longer matches it, a concurrent request already refreshed and we
    /// reuse its result instead of burning the rotated refresh token.
    async fn refresh(&self, stale_access: &str) -> Result<String, Error> {
        let mut guard = self.token.lock().await;

        if let Some(token) = guard.as_ref() {
            if token.access_token != stale_access {
                return Ok(token.access_token.clone());
            }
        }

        let refresh_token = guard
            .as_ref()
            .map(|t| t.refresh_token.clone())
            .ok_or(AuthError::NotLoggedIn)?;

        let url = self.config.token_url()?;
        let resp = self
            .http
            .post(url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("client_id", self.config.client_id.as_str()),
                ("refresh_token", refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(Error::Transport)?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            let description = serde_json::from_str::<RefreshErrorBody>(&body)
                .ok()
                .and_then(|b| b.error_description)
                .unwrap_or_else(|| "no additional information".into());
            return Err(AuthError::RefreshToken { description }.into());
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let token: AuthToken =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body,
            })?;

        // Re-persist so a process restart keeps the rotated refresh
        // token. Persistence failure downgrades to a warning: the
        // in-flight request can still proceed on the in-memory bundle.
        if let Err(e) = self.store.save(&token) {
            warn!("failed to persist refreshed token: {e}");
        }

        info!("access token refreshed");
        let access = token.access_token.clone();
        *guard = Some(token);
        Ok(access)
    }

    /// Snapshot of the in-memory bundle, if any.
    pub async fn current_token(&self) -> Option<AuthToken> {
        self.token.lock().await.clone()
    }

    /// The token store backing this authenticator.
    pub fn store(&self) -> &TokenStore {
        &self.store
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print token material.
        f.debug_struct("BearerAuth")
            .field("token_path", &self.store.path())
            .finish_non_exhaustive()
    }
}

fn attach_bearer(request: &mut reqwest::Request, access_token: &str) -> Result<(), Error> {
    let value = HeaderValue::from_str(&format!("Bearer {access_token}"))
        .map_err(Error::InvalidHeader)?;
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}
