use std::fmt;

use reqwest::StatusCode;

/// Errors returned by [`super::SignupClient`].
///
/// Only two tiers matter to callers: the server answered with a non-2xx
/// status (`Server`), or the exchange itself failed (everything else).
#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Server {
        status: StatusCode,
        detail: Option<String>,
    },
    Decode(serde_json::Error),
    InvalidUrl(url::ParseError),
}

impl ApiError {
    /// Text shown to the user for this failure.
    ///
    /// Server failures show the detail verbatim, or `server_fallback` when the
    /// body had none. Transport and parse failures always show
    /// `transport_fallback`.
    pub fn user_message(&self, server_fallback: &str, transport_fallback: &str) -> String {
        match self {
            ApiError::Server { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| server_fallback.to_string()),
            _ => transport_fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "transport error: {err}"),
            ApiError::Server { status, detail } => {
                if let Some(detail) = detail {
                    write!(f, "server error {status}: {detail}")
                } else {
                    write!(f, "server error {status}")
                }
            }
            ApiError::Decode(err) => write!(f, "response decode error: {err}"),
            ApiError::InvalidUrl(err) => write!(f, "invalid base URL: {err}"),
        }
    }
}

// Inner errors are part of Display; `source()` stays empty.
impl std::error::Error for ApiError {}
