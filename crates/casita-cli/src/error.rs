//! CLI error types with miette diagnostics.
//!
//! Maps `casita_api::Error` variants into user-facing errors with
//! actionable help text. All errors are terminal for the current command;
//! there is no retry or recovery.

use miette::Diagnostic;
use thiserror::Error;

use casita_api::Error as ApiError;

/// Exit codes for process termination.
#[allow(dead_code)]
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const PERMISSION: i32 = 3;
    pub const SERVER: i32 = 4;
    pub const CONNECTION: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the Casita server at {url}")]
    #[diagnostic(
        code(casita::connection_failed),
        help(
            "Is the Casita app running with the server enabled?\n\
             Note: webhook/CLI access requires a Casita Pro subscription."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Entitlement ──────────────────────────────────────────────────
    #[error("Casita Pro required for webhook/CLI access")]
    #[diagnostic(
        code(casita::access_denied),
        help("Upgrade in the Casita app under Settings > Casita Pro.")
    )]
    AccessDenied,

    // ── Server-reported failures ─────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(casita::server_reported))]
    ServerReported { message: String },

    #[error("{message}")]
    #[diagnostic(code(casita::action_failed))]
    ActionFailed { message: String },

    #[error("Server error: {status}")]
    #[diagnostic(code(casita::server_error))]
    ServerError { status: u16 },

    // ── Data ─────────────────────────────────────────────────────────
    #[error("Unexpected response from the server: {message}")]
    #[diagnostic(
        code(casita::parse),
        help("The Casita app may be newer or older than this CLI.")
    )]
    Parse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(casita::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(casita::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(casita::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AccessDenied => exit_code::PERMISSION,
            Self::ServerReported { .. } | Self::ActionFailed { .. } | Self::ServerError { .. } => {
                exit_code::SERVER
            }
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ApiError → CliError mapping ──────────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ConnectionFailed { url, source } => CliError::ConnectionFailed {
                url,
                source: Box::new(source),
            },

            ApiError::AccessDenied => CliError::AccessDenied,

            ApiError::ServerReported { message } => CliError::ServerReported { message },

            ApiError::ActionFailed { message } => CliError::ActionFailed { message },

            ApiError::ServerError { status } => CliError::ServerError { status },

            ApiError::Parse { message, body: _ } => CliError::Parse { message },

            ApiError::Transport(message) => CliError::ConnectionFailed {
                url: "(unknown)".into(),
                source: message.into(),
            },

            ApiError::InvalidUrl(e) => CliError::Validation {
                field: "url".into(),
                reason: e.to_string(),
            },
        }
    }
}
