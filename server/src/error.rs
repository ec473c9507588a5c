use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the proxy routes.
#[derive(Error, Debug)]
pub enum ServerError {
    /// CoinMarketCap could not be reached.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    /// CoinMarketCap answered with a non-success status.
    #[error("upstream returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },
    /// CoinMarketCap answered, but not with the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Decode(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE"),
            ServerError::UpstreamStatus { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            ServerError::Decode(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_DECODE_ERROR"),
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        let body = Json(json!({
            "error": code,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        let err = ServerError::UpstreamStatus {
            status: 401,
            message: "API key missing.".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);

        let err = ServerError::Decode("no data".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn client_errors_keep_their_status() {
        let err = ServerError::NotFound("no currency 9".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = ServerError::BadRequest("bad id".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
