// Platform API HTTP client.
//
// Binds base URL, default headers, timeout, and the bearer
// authenticator. Endpoint modules (nodes, models, runs, ...) are
// implemented as inherent methods in separate files so this module
// stays focused on transport mechanics.

use std::fmt::Display;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::{AuthConfig, BearerAuth};
use crate::error::Error;

/// Transport configuration for the platform API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API root, e.g. `https://api.gridflow.energy`.
    pub api_url: Url,
    /// API version segment appended to the root, e.g. `v1`.
    pub api_version: String,
    /// Extra default headers sent with every request.
    pub headers: HeaderMap,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            api_version: "v1".into(),
            headers: HeaderMap::new(),
            timeout: Duration::from_secs(10),
        }
    }

    /// The versioned base URL, normalized to a trailing slash so
    /// relative endpoint paths join underneath it.
    fn base_url(&self) -> Result<Url, Error> {
        let mut base = self
            .api_url
            .join(&format!("{}/", self.api_version.trim_matches('/')))?;
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Ok(base)
    }
}

/// The shared entry point for all platform API calls.
///
/// One instance per process is the intended usage; endpoint wrappers
/// and domain objects borrow it via `Arc`. Callers interpret non-2xx
/// statuses through [`Error::Api`] -- the only retry behavior lives in
/// [`BearerAuth`] (one refresh-and-resend per 401).
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    auth: BearerAuth,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, auth: AuthConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(config.headers.clone())
            .user_agent(concat!("gridflow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            http,
            base_url: config.base_url()?,
            auth: BearerAuth::new(auth)?,
        })
    }

    /// The bearer authenticator (token inspection, logout).
    pub fn auth(&self) -> &BearerAuth {
        &self.auth
    }

    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");
        let request = self
            .http
            .get(url)
            .query(query.as_slice())
            .build()
            .map_err(Error::Transport)?;
        let resp = self.auth.execute(&self.http, request).await?;
        parse_body(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");
        let request = self
            .http
            .post(url)
            .json(body)
            .build()
            .map_err(Error::Transport)?;
        let resp = self.auth.execute(&self.http, request).await?;
        parse_body(resp).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");
        let request = self.http.delete(url).build().map_err(Error::Transport)?;
        let resp = self.auth.execute(&self.http, request).await?;
        parse_body(resp).await
    }
}

async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    let body = resp.text().await.map_err(Error::Transport)?;

    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}

/// Query-string builder that drops absent parameters, mirroring the
/// platform convention that `None` filters are simply omitted.
#[derive(Debug, Default)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn push_opt(&mut self, key: &'static str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub(crate) fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Standard `limit`/`page` pagination parameters.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: u32,
    pub page: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: 10, page: 0 }
    }
}

impl Page {
    pub(crate) fn apply(self, query: &mut Query) {
        query.push("limit", self.limit).push("page", self.page);
    }
}
