//! The detail card for one currency. Purely presentational: it never fetches.

use api::CurrencyDetail;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::format::group_thousands;
use crate::format::round_to_i64;

const LOGO_URL_BASE: &str = "https://s2.coinmarketcap.com/static/img/coins/64x64";
const ONE_BILLION: f64 = 1_000_000_000.0;

/// Which way the price moved over the last 24 hours.
///
/// Zero counts as non-positive. The static string is the CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs, strum::IntoStaticStr)]
pub enum ChangeDirection {
    #[strum(serialize = "positive")]
    Positive,
    #[strum(serialize = "non-positive")]
    NonPositive,
}

impl ChangeDirection {
    pub fn of(percent_change: f64) -> Self {
        if percent_change > 0.0 {
            Self::Positive
        } else {
            Self::NonPositive
        }
    }

    pub fn css_class(&self) -> &'static str {
        self.into()
    }
}

/// Display strings for the card, derived from a detail record.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub name: String,
    pub logo_url: String,
    /// Whole dollars, grouped.
    pub price: String,
    /// Two decimals, no sign added.
    pub change_24h: String,
    pub change_direction: ChangeDirection,
    /// Whole billions of dollars, grouped.
    pub market_cap_billions: String,
}

impl CardView {
    pub fn new(detail: &CurrencyDetail) -> Self {
        let usd = detail.usd();
        Self {
            name: detail.name.clone(),
            logo_url: logo_url(detail),
            price: group_thousands(round_to_i64(usd.price)),
            change_24h: format!("{:.2}", usd.percent_change_24h),
            change_direction: ChangeDirection::of(usd.percent_change_24h),
            market_cap_billions: group_thousands(round_to_i64(usd.market_cap / ONE_BILLION)),
        }
    }
}

/// CoinMarketCap's static logo for the currency. There is no local fallback.
pub fn logo_url(detail: &CurrencyDetail) -> String {
    format!("{}/{}.png", LOGO_URL_BASE, detail.id)
}

#[component]
pub fn CurrencyCard(detail: CurrencyDetail) -> Element {
    let view = CardView::new(&detail);
    let change_class = view.change_direction.css_class();

    rsx! {
        Card {
            header {
                div {
                    class: "currency-title",
                    img {
                        src: "{view.logo_url}",
                        alt: "{view.name}",
                        width: "64",
                        height: "64",
                    }
                    h3 { "{view.name}" }
                }
            }
            p {
                "Current price: "
                strong { "{view.price}$" }
            }
            p {
                "24h change: "
                strong {
                    class: "{change_class}",
                    "{view.change_24h}%"
                }
            }
            p {
                "Market cap: "
                strong { "{view.market_cap_billions}B$" }
            }
        }
    }
}
