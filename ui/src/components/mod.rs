//! Dashboard widgets: the currency menu and detail card, plus the pico.css
//! building blocks they are made of.
pub mod currency_card;
pub mod currency_menu;
pub mod empty_state;
pub mod pico;
