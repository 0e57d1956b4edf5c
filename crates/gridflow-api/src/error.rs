use thiserror::Error;

/// Authentication-specific failures.
///
/// Kept separate from [`Error`] so callers can match on the recovery
/// action: `CredentialsNotFound` / `NotLoggedIn` mean "run the login
/// flow", `RefreshToken` means the stored session is dead and login
/// must be re-run, device-flow variants abort an in-progress login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No token file at the configured path.
    #[error("no credentials found at '{path}' -- run `gridflow auth login` first")]
    CredentialsNotFound { path: String },

    /// Neither an in-memory token nor a token file is available.
    #[error("not logged in -- run `gridflow auth login` first")]
    NotLoggedIn,

    /// The identity provider rejected the refresh-token grant.
    /// The stored refresh token is expired or revoked.
    #[error("token refresh rejected: {description} -- run `gridflow auth login` again")]
    RefreshToken { description: String },

    /// The device-authorization flow returned an unrecoverable error.
    #[error("device authorization failed: {description}")]
    DeviceFlow { description: String },

    /// The user did not complete the device flow within the wait bound.
    #[error("device authorization timed out after {waited_secs}s")]
    DeviceFlowTimeout { waited_secs: u64 },

    /// Reading or writing the token file failed.
    #[error("token store error at '{path}': {source}")]
    TokenStore {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The token file exists but does not parse as a credential bundle.
    #[error("invalid token file at '{path}': {source}")]
    TokenParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error type for the `gridflow-api` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication or token lifecycle failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL construction error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A token or header value contained characters that cannot be
    /// carried in an HTTP header.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The API returned a non-2xx status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// A compound slug had the wrong number of `:`-separated parts.
    #[error("invalid slug '{slug}': expected {expected} parts, got {got}")]
    Slug {
        slug: String,
        expected: usize,
        got: usize,
    },

    /// An `includes=` fetch came back without the requested relationship.
    #[error("API response missing expected relationship '{field}'")]
    MissingRelationship { field: &'static str },
}

impl Error {
    /// Returns `true` if re-running the login flow might resolve this error.
    pub fn needs_login(&self) -> bool {
        matches!(
            self,
            Self::Auth(
                AuthError::CredentialsNotFound { .. }
                    | AuthError::NotLoggedIn
                    | AuthError::RefreshToken { .. }
            )
        )
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
