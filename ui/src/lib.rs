// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
pub mod format;
pub mod selection;

use api::CurrencyDetail;
use app_state::AppState;
use components::currency_card::CurrencyCard;
use components::currency_menu::CurrencyMenu;
use components::pico::Container;
use components::pico::Spinner;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let layout_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
    }

    /* --- APP FRAME --- */
    .dashboard {
        display: flex;
        height: 100vh;
        overflow: hidden;
    }

    /* --- MENU COLUMN --- */
    .dashboard .menu-column {
        flex: 0 0 16rem;
        height: 100vh;
        overflow-y: auto;
        padding: 1rem;
        border-right: 1px solid var(--pico-muted-border-color);
    }

    .currency-menu ul {
        padding-left: 0;
    }

    .currency-menu li {
        list-style: none;
    }

    .currency-menu a {
        display: block;
        padding: 0.25rem 0.5rem;
        text-decoration: none;
        color: var(--pico-muted-color);
    }

    .currency-menu a.selected {
        color: var(--pico-primary);
        font-weight: bold;
        border-left: 4px solid var(--pico-primary);
        padding-left: calc(0.5rem - 4px); /* Keep text aligned */
        background-color: var(--pico-card-background-color);
    }

    /* --- DETAIL COLUMN --- */
    .dashboard > main {
        flex: 1;
        display: flex;
        padding: 1rem;
    }

    .dashboard .detail-column {
        flex: 1;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: auto;
    }

    .detail-column article {
        width: 300px;
    }

    .currency-title {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }

    .currency-title h3 { margin: 0; }

    .positive { color: var(--pico-ins-color); }
    .non-positive { color: var(--pico-del-color); }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: "{PICO_CSS}",
        }
        style {
            "{layout_css}"
        }
        Dashboard {}
    }
}

/// The root container. Owns the one piece of shared state: the detail
/// record for the current selection, `None` while it is (re)loading.
#[component]
fn Dashboard() -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(AppState::default);

    let mut currency_data = use_signal(|| None::<CurrencyDetail>);

    rsx! {
        div {
            class: "dashboard",
            aside {
                class: "menu-column",
                CurrencyMenu {
                    on_clear: move |_| currency_data.set(None),
                    on_loaded: move |detail| currency_data.set(Some(detail)),
                }
            }
            Container {
                div {
                    class: "detail-column",
                    match &*currency_data.read() {
                        Some(detail) => rsx! {
                            CurrencyCard {
                                key: "{detail.id}",
                                detail: detail.clone(),
                            }
                        },
                        None => rsx! {
                            Spinner {}
                        },
                    }
                }
            }
        }
    }
}
