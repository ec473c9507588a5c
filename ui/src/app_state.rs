use api::client::DEFAULT_BASE_URL;
use api::CurrencyClient;
use std::ops::Deref;
use std::sync::Arc;

/// Backend location, fixed at build time.
pub fn backend_url() -> &'static str {
    option_env!("COINBOARD_BACKEND_URL").unwrap_or(DEFAULT_BASE_URL)
}

#[derive(Debug)]
pub struct AppStateData {
    pub client: CurrencyClient,
}

/// Stable, non-reactive state shared with every component through context.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(client: CurrencyClient) -> Self {
        Self(Arc::new(AppStateData { client }))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CurrencyClient::new(backend_url()))
    }
}
