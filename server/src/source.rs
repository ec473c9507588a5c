//! Defines the trait and implementation for the upstream market data provider.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ServerError;

/// A service that can list currencies and quote a single one.
///
/// Payloads are passed through as raw JSON; the client owns the schema.
#[async_trait]
pub trait CurrencySource: Send + Sync {
    /// Latest listing, as a JSON array of currency records.
    async fn listings(&self) -> Result<Value, ServerError>;

    /// Latest quote record for one currency.
    async fn quote(&self, id: u64) -> Result<Value, ServerError>;
}

/// Unwraps the `data` array of a listings response.
pub fn extract_listings(body: Value) -> Result<Value, ServerError> {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Array(_)) => Ok(data),
            _ => Err(ServerError::Decode(
                "listings response has no `data` array".to_string(),
            )),
        },
        _ => Err(ServerError::Decode(
            "listings response is not an object".to_string(),
        )),
    }
}

/// Picks the record for `id` out of a quotes response (`data["{id}"]`).
pub fn extract_quote(body: Value, id: u64) -> Result<Value, ServerError> {
    let Value::Object(mut map) = body else {
        return Err(ServerError::Decode(
            "quotes response is not an object".to_string(),
        ));
    };
    let Some(Value::Object(mut data)) = map.remove("data") else {
        return Err(ServerError::Decode(
            "quotes response has no `data` object".to_string(),
        ));
    };
    data.remove(&id.to_string())
        .filter(|record| !record.is_null())
        .ok_or_else(|| ServerError::NotFound(format!("no currency with id {id}")))
}

/// Best-effort extraction of CoinMarketCap's `status.error_message`.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("status")?
                .get("error_message")?
                .as_str()
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}

/// Provides market data from the CoinMarketCap Pro API.
pub mod coin_market_cap {
    use super::*;

    pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

    const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";
    const QUOTES_PATH: &str = "/v2/cryptocurrency/quotes/latest";

    /// An implementation of the `CurrencySource` trait for CoinMarketCap.
    pub struct CoinMarketCap {
        http: reqwest::Client,
        base_url: String,
        api_key: String,
    }

    impl CoinMarketCap {
        pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
            Self {
                http: reqwest::Client::new(),
                base_url: base_url.into().trim_end_matches('/').to_string(),
                api_key: api_key.into(),
            }
        }

        async fn get_json(&self, path_and_query: &str) -> Result<Value, ServerError> {
            let url = format!("{}{}", self.base_url, path_and_query);
            tracing::debug!("upstream GET {}", url);

            let response = self
                .http
                .get(&url)
                .header(API_KEY_HEADER, &self.api_key)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ServerError::UpstreamStatus {
                    status: status.as_u16(),
                    message: upstream_message(&body),
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| ServerError::Decode(e.to_string()))
        }
    }

    #[async_trait]
    impl CurrencySource for CoinMarketCap {
        async fn listings(&self) -> Result<Value, ServerError> {
            extract_listings(self.get_json(LISTINGS_PATH).await?)
        }

        async fn quote(&self, id: u64) -> Result<Value, ServerError> {
            let body = self.get_json(&format!("{QUOTES_PATH}?id={id}")).await?;
            extract_quote(body, id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::coin_market_cap::CoinMarketCap;
    use super::*;
    use axum::http::HeaderMap;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::Json;
    use axum::Router;
    use serde_json::json;

    #[test]
    fn listings_data_is_unwrapped() {
        let body = json!({"status": {"error_code": 0}, "data": [{"id": 1, "name": "Bitcoin"}]});
        assert_eq!(
            extract_listings(body).unwrap(),
            json!([{"id": 1, "name": "Bitcoin"}])
        );
    }

    #[test]
    fn listings_without_data_is_a_decode_error() {
        let err = extract_listings(json!({"status": {}})).unwrap_err();
        assert!(matches!(err, ServerError::Decode(_)));
    }

    #[test]
    fn quote_is_picked_by_id() {
        let body = json!({"data": {"1027": {"id": 1027, "name": "Ethereum"}}});
        assert_eq!(
            extract_quote(body, 1027).unwrap(),
            json!({"id": 1027, "name": "Ethereum"})
        );
    }

    #[test]
    fn missing_quote_is_not_found() {
        let body = json!({"data": {"1": {"id": 1}}});
        assert!(matches!(
            extract_quote(body, 2).unwrap_err(),
            ServerError::NotFound(_)
        ));
    }

    #[test]
    fn upstream_message_prefers_status_field() {
        let body = r#"{"status": {"error_code": 1002, "error_message": "API key missing."}}"#;
        assert_eq!(upstream_message(body), "API key missing.");
        assert_eq!(upstream_message("gateway timeout"), "gateway timeout");
    }

    /// A stand-in for CoinMarketCap that insists on the API key header.
    async fn spawn_fake_cmc(expected_key: &'static str) -> String {
        let authorized = move |headers: HeaderMap| {
            headers
                .get(coin_market_cap::API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                == Some(expected_key)
        };

        let router = Router::new()
            .route(
                "/v1/cryptocurrency/listings/latest",
                get(move |headers: HeaderMap| async move {
                    if !authorized(headers) {
                        return (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"status": {"error_code": 1002, "error_message": "API key missing."}})),
                        )
                            .into_response();
                    }
                    Json(json!({"data": [{"id": 1, "name": "Bitcoin"}]})).into_response()
                }),
            )
            .route(
                "/v2/cryptocurrency/quotes/latest",
                get(|| async {
                    Json(json!({"data": {"1": {
                        "id": 1,
                        "name": "Bitcoin",
                        "quote": {"USD": {"price": 1.0, "percent_change_24h": 0.0, "market_cap": 2.0}}
                    }}}))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn forwards_api_key_and_unwraps_listings() {
        let base = spawn_fake_cmc("secret").await;
        let source = CoinMarketCap::new(base, "secret");

        let listings = source.listings().await.unwrap();

        assert_eq!(listings, json!([{"id": 1, "name": "Bitcoin"}]));
    }

    #[tokio::test]
    async fn rejected_api_key_surfaces_upstream_message() {
        let base = spawn_fake_cmc("secret").await;
        let source = CoinMarketCap::new(base, "wrong");

        match source.listings().await.unwrap_err() {
            ServerError::UpstreamStatus { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "API key missing.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn quotes_one_currency() {
        let base = spawn_fake_cmc("secret").await;
        let source = CoinMarketCap::new(format!("{base}/"), "secret");

        let record = source.quote(1).await.unwrap();
        assert_eq!(record["name"], "Bitcoin");

        let err = source.quote(2).await.unwrap_err();
        assert!(matches!(err, ServerError::NotFound(_)));
    }
}
