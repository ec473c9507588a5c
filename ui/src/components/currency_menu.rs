// ui/src/components/currency_menu.rs
#![allow(non_snake_case)]

use api::ApiError;
use api::CurrencyDetail;
use api::CurrencyId;
use api::CurrencySummary;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Accordion;
use crate::components::pico::Spinner;
use crate::selection::RequestTag;
use crate::selection::Selection;

pub const MENU_GROUP_KEY: &str = "currencies";
pub const MENU_GROUP_LABEL: &str = "Cryptocurrencies";

#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry {
    pub key: CurrencyId,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub key: &'static str,
    pub label: &'static str,
    pub entries: Vec<MenuEntry>,
}

/// Arranges the listing as a single group with one entry per currency,
/// in backend order.
pub fn menu_groups(currencies: &[CurrencySummary]) -> Vec<MenuGroup> {
    vec![MenuGroup {
        key: MENU_GROUP_KEY,
        label: MENU_GROUP_LABEL,
        entries: currencies
            .iter()
            .map(|currency| MenuEntry {
                key: currency.id.clone(),
                label: currency.name.clone(),
            })
            .collect(),
    }]
}

/// The menu's entries, or none when the listing request failed.
pub fn listing_or_empty(result: Result<Vec<CurrencySummary>, ApiError>) -> Vec<CurrencySummary> {
    match result {
        Ok(currencies) => {
            info!("loaded {} currencies", currencies.len());
            currencies
        }
        Err(e) => {
            warn!("could not load currency list: {}", e);
            Vec::new()
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CurrencyMenuProps {
    /// Called as soon as the selection changes, before the new record is fetched.
    pub on_clear: EventHandler<()>,
    /// Called with the record for the current selection once it arrives.
    pub on_loaded: EventHandler<CurrencyDetail>,
}

/// Side menu listing every currency. Selecting an entry clears the detail
/// card and fetches the record for the new selection.
pub fn CurrencyMenu(props: CurrencyMenuProps) -> Element {
    let app_state = use_context::<AppState>();
    let mut selection = use_signal(Selection::default);

    let listing_client = app_state.client.clone();
    let listing = use_resource(move || {
        let client = listing_client.clone();
        async move { listing_or_empty(client.list_currencies().await) }
    });

    let on_clear = props.on_clear;
    let on_loaded = props.on_loaded;
    let fetch_detail = use_callback(move |tag: RequestTag| {
        let client = app_state.client.clone();
        spawn(async move {
            let result = client.currency(tag.id()).await;
            selection
                .peek()
                .on_response(&tag, result, |detail| on_loaded.call(detail));
        });
    });

    // Initial load for the default selection. The slot starts out empty,
    // so there is nothing to clear.
    use_effect(move || fetch_detail.call(selection.peek().tag()));

    let mut select = move |id: CurrencyId| {
        selection
            .write()
            .on_select(id, || on_clear.call(()), |tag| fetch_detail.call(tag));
    };

    let current = selection.read().current().clone();

    rsx! {
        nav {
            class: "currency-menu",
            match &*listing.read() {
                None => rsx! {
                    Spinner { label: Some("Loading currencies...".to_string()) }
                },
                Some(currencies) if currencies.is_empty() => rsx! {
                    EmptyState {
                        title: "No currencies available".to_string(),
                        description: Some("The backend did not return a currency list.".to_string()),
                    }
                },
                Some(currencies) => rsx! {
                    for group in menu_groups(currencies) {
                        Accordion {
                            key: "{group.key}",
                            title: group.label.to_string(),
                            open: true,
                            ul {
                                {
                                    group.entries.into_iter().map(|MenuEntry { key, label }| {
                                        let is_selected = key == current;
                                        let id = key.clone();
                                        rsx! {
                                            li {
                                                key: "{key}",
                                                a {
                                                    href: "#",
                                                    class: { if is_selected { "selected" } else { "" } },
                                                    "aria-current": { if is_selected { "page" } else { "false" } },
                                                    onclick: move |event| {
                                                        event.prevent_default();
                                                        select(id.clone());
                                                    },
                                                    "{label}"
                                                }
                                            }
                                        }
                                    })
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
