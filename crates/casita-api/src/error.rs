use thiserror::Error;

/// Top-level error type for the `casita-api` crate.
///
/// Covers every failure mode of a single request: transport, HTTP-level
/// rejection, server-reported failures embedded in the body, and
/// deserialization. `casita-cli` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout). The app is probably not running or its server
    /// is disabled.
    #[error("could not connect to the Casita server at {url}")]
    ConnectionFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Reading the response body failed mid-stream.
    #[error("failed to read response: {0}")]
    Transport(String),

    /// URL parsing or construction error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── HTTP-level ──────────────────────────────────────────────────
    /// HTTP 403. The server gates webhook/CLI access behind the paid tier,
    /// so the body is irrelevant.
    #[error("Casita Pro required for webhook/CLI access")]
    AccessDenied,

    /// HTTP >= 400 with a usable `{status, message}` body.
    #[error("{message}")]
    ServerReported { message: String },

    /// HTTP >= 400 with no usable message in the body.
    #[error("server error: {status}")]
    ServerError { status: u16 },

    // ── Embedded failures ───────────────────────────────────────────
    /// A 200 response whose body carries `{status: "error", message}`.
    /// Action and info endpoints signal "not found" and similar this way.
    #[error("{message}")]
    ActionFailed { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// The body matched none of the expected shapes. Keeps the raw body
    /// for debugging.
    #[error("failed to parse response: {message}")]
    Parse { message: String, body: String },
}

impl Error {
    /// Returns `true` if the remote process itself was unreachable.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. })
    }
}
