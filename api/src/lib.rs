//! This crate contains the client-side data layer shared by every launcher:
//! the backend's wire schema and an HTTP client for it.

pub mod client;
pub mod currency;
mod error;

pub use client::CurrencyClient;
pub use currency::CurrencyDetail;
pub use currency::CurrencyId;
pub use currency::CurrencySummary;
pub use error::ApiError;
