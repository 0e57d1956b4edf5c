//! CLI error types with miette diagnostics.
//!
//! Maps library errors into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use gridflow_api::Error as ApiError;
use gridflow_config::ConfigError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────

    #[error("Not logged in")]
    #[diagnostic(
        code(gridflow::auth_required),
        help("Run: gridflow auth login")
    )]
    AuthRequired,

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(gridflow::auth_failed),
        help("Your session may have been revoked. Run: gridflow auth login")
    )]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource} '{identifier}' not found")]
    #[diagnostic(
        code(gridflow::not_found),
        help("Run: gridflow {search_command} to see what is available")
    )]
    NotFound {
        resource: String,
        identifier: String,
        search_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(gridflow::api_error))]
    Api { status: u16, message: String },

    #[error("Unexpected response from the platform: {message}")]
    #[diagnostic(
        code(gridflow::bad_response),
        help("Re-run with -vv to see the raw response body.")
    )]
    BadResponse { message: String },

    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the platform API")]
    #[diagnostic(
        code(gridflow::connection_failed),
        help("Check your network connection and the configured api_url.")
    )]
    Connection {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(gridflow::timeout),
        help("Increase timeout_secs in your configuration or GRIDFLOW_TIMEOUT_SECS.")
    )]
    Timeout,

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(gridflow::validation))]
    Validation { field: String, reason: String },

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(gridflow::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Configuration / IO ───────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(gridflow::config))]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthRequired | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Connection { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Annotate a library error with the resource that was being looked up,
    /// so 404s render as "model 'x' not found" rather than a raw API error.
    pub fn for_resource(err: ApiError, resource: &str, identifier: &str) -> Self {
        if err.is_not_found() {
            return Self::NotFound {
                resource: resource.to_owned(),
                identifier: identifier.to_owned(),
                search_command: format!("{resource}s search"),
            };
        }
        Self::from(err)
    }
}

// ── Library error → CliError mapping ─────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        if err.needs_login() {
            return Self::AuthRequired;
        }

        match err {
            ApiError::Auth(auth) => Self::AuthFailed {
                message: auth.to_string(),
            },

            ApiError::Transport(e) => {
                if e.is_timeout() {
                    Self::Timeout
                } else if e.is_connect() {
                    Self::Connection { source: e.into() }
                } else {
                    Self::Api {
                        status: e.status().map_or(0, |s| s.as_u16()),
                        message: e.to_string(),
                    }
                }
            }

            ApiError::Api { status, message } => Self::Api { status, message },

            ApiError::Deserialization { message, .. } => Self::BadResponse { message },

            ApiError::Slug {
                slug,
                expected,
                got,
            } => Self::Validation {
                field: "id".into(),
                reason: format!("'{slug}' has {got} part(s), expected {expected}"),
            },

            ApiError::MissingRelationship { field } => Self::BadResponse {
                message: format!("relationship '{field}' missing from response"),
            },

            other => Self::Api {
                status: 0,
                message: other.to_string(),
            },
        }
    }
}
