//! Wire schema of the currency backend.
//!
//! The backend hands out CoinMarketCap records with many more fields than
//! the client shows. Only the fields below are required; everything else is
//! ignored during deserialization.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::ApiError;

/// The unique key of a currency.
///
/// The backend emits numeric ids, but the key is treated as opaque text so
/// that `1` and `"1"` on the wire mean the same currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CurrencyId(String);

impl CurrencyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for CurrencyId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for CurrencyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Minimal listing record used to populate the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySummary {
    pub id: CurrencyId,
    pub name: String,
}

/// Market figures quoted in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsdQuote {
    pub price: f64,
    pub percent_change_24h: f64,
    pub market_cap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "USD")]
    pub usd: UsdQuote,
}

/// The full record rendered by the detail card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDetail {
    pub id: CurrencyId,
    pub name: String,
    pub quote: Quote,
}

impl CurrencyDetail {
    /// Shorthand for the USD quote.
    pub fn usd(&self) -> &UsdQuote {
        &self.quote.usd
    }
}

/// Decodes the body of `GET /cryptocurrency`.
pub fn decode_listing(body: &str) -> Result<Vec<CurrencySummary>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::decode("currency listing", e))
}

/// Decodes the body of `GET /cryptocurrency/{id}`.
pub fn decode_detail(body: &str) -> Result<CurrencyDetail, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::decode("currency detail", e))
}
