//! Failure modes of talking to the currency backend.

use thiserror::Error;

/// An error returned by [`CurrencyClient`](crate::client::CurrencyClient).
///
/// Neither variant is fatal for the UI: callers log it and fall back to
/// their "no data yet" rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a usable response (transport error or a
    /// non-success HTTP status).
    #[error("request to {url} failed: {reason}")]
    FetchFailed { url: String, reason: String },
    /// The backend answered, but the body does not match the expected schema.
    #[error("malformed {what} payload: {reason}")]
    DecodeFailed { what: &'static str, reason: String },
}

impl ApiError {
    pub(crate) fn fetch(url: &str, reason: impl ToString) -> Self {
        Self::FetchFailed {
            url: url.to_owned(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode(what: &'static str, reason: impl ToString) -> Self {
        Self::DecodeFailed {
            what,
            reason: reason.to_string(),
        }
    }
}
