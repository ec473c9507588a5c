//! HTTP surface consumed by the client.
//!
//! - `GET /cryptocurrency` - latest listing
//! - `GET /cryptocurrency/:id` - one currency with its USD quote

use std::sync::Arc;

use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde_json::Value;
use tower_http::cors::AllowOrigin;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::source::CurrencySource;

pub type SharedSource = Arc<dyn CurrencySource>;

/// Build the router with all routes and middleware.
pub fn build_router(source: SharedSource, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/cryptocurrency", get(list_currencies))
        .route("/cryptocurrency/:id", get(get_currency))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(source)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn list_currencies(State(source): State<SharedSource>) -> Result<Json<Value>, ServerError> {
    Ok(Json(source.listings().await?))
}

async fn get_currency(
    State(source): State<SharedSource>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServerError> {
    let id: u64 = id
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("currency id must be an integer, got {id:?}")))?;

    Ok(Json(source.quote(id).await?))
}
