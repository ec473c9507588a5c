//! Tracks which currency the menu has selected and which detail request
//! belongs to that selection.

use api::ApiError;
use api::CurrencyDetail;
use api::CurrencyId;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;

/// The currency shown before the user picks anything (Bitcoin).
pub const DEFAULT_CURRENCY_ID: &str = "1";

/// Identifies one detail request.
///
/// The generation increases on every selection change, so a response can
/// be matched against the selection that was current when it was issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTag {
    id: CurrencyId,
    generation: u64,
}

impl RequestTag {
    pub fn id(&self) -> &CurrencyId {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    current: CurrencyId,
    generation: u64,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(CurrencyId::from(DEFAULT_CURRENCY_ID))
    }
}

impl Selection {
    pub fn new(initial: CurrencyId) -> Self {
        Self {
            current: initial,
            generation: 0,
        }
    }

    pub fn current(&self) -> &CurrencyId {
        &self.current
    }

    /// Tag for a request made on behalf of the current selection.
    pub fn tag(&self) -> RequestTag {
        RequestTag {
            id: self.current.clone(),
            generation: self.generation,
        }
    }

    /// Switches to `id` and returns the tag its detail request must carry.
    ///
    /// Returns `None` when `id` is already selected; nothing needs to be
    /// cleared or fetched then.
    pub fn select(&mut self, id: CurrencyId) -> Option<RequestTag> {
        if self.current == id {
            return None;
        }
        self.current = id;
        self.generation += 1;
        Some(self.tag())
    }

    /// Whether a response carrying `tag` may still be displayed.
    pub fn is_current(&self, tag: &RequestTag) -> bool {
        self.generation == tag.generation && self.current == tag.id
    }

    /// Handles a click on a menu entry.
    ///
    /// When the selection actually changes, `clear` runs before `fetch` is
    /// handed the new request tag.
    pub fn on_select(
        &mut self,
        id: CurrencyId,
        clear: impl FnOnce(),
        fetch: impl FnOnce(RequestTag),
    ) {
        if let Some(tag) = self.select(id) {
            clear();
            fetch(tag);
        }
    }

    /// Handles a finished detail request. `load` only sees records for the
    /// current selection; stale records and errors are logged and dropped.
    pub fn on_response(
        &self,
        tag: &RequestTag,
        result: Result<CurrencyDetail, ApiError>,
        load: impl FnOnce(CurrencyDetail),
    ) {
        match result {
            Ok(detail) if self.is_current(tag) => load(detail),
            Ok(_) => debug!("dropping stale detail for currency {}", tag.id()),
            Err(e) => warn!("could not load currency {}: {}", tag.id(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::currency::Quote;
    use api::currency::UsdQuote;
    use std::cell::RefCell;

    fn detail(id: &str, name: &str, price: f64) -> CurrencyDetail {
        CurrencyDetail {
            id: CurrencyId::from(id),
            name: name.to_string(),
            quote: Quote {
                usd: UsdQuote {
                    price,
                    percent_change_24h: 1.0,
                    market_cap: 1e9,
                },
            },
        }
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        Clear,
        Fetch(RequestTag),
        Load(CurrencyDetail),
    }

    /// Records the callbacks the menu hands to `Selection`.
    #[derive(Default)]
    struct Recorder(RefCell<Vec<Event>>);

    impl Recorder {
        fn click(&self, selection: &mut Selection, id: &str) -> Option<RequestTag> {
            selection.on_select(
                CurrencyId::from(id),
                || self.0.borrow_mut().push(Event::Clear),
                |tag| self.0.borrow_mut().push(Event::Fetch(tag)),
            );
            match self.0.borrow().last() {
                Some(Event::Fetch(tag)) => Some(tag.clone()),
                _ => None,
            }
        }

        fn respond(
            &self,
            selection: &Selection,
            tag: &RequestTag,
            result: Result<CurrencyDetail, ApiError>,
        ) {
            selection.on_response(tag, result, |d| self.0.borrow_mut().push(Event::Load(d)));
        }

        fn take(&self) -> Vec<Event> {
            self.0.take()
        }
    }

    #[test]
    fn initial_request_targets_default_currency() {
        let selection = Selection::default();
        let initial = selection.tag();

        assert_eq!(initial.id().as_str(), DEFAULT_CURRENCY_ID);
        assert!(selection.is_current(&initial));
    }

    #[test]
    fn initial_response_is_loaded() {
        let selection = Selection::default();
        let events = Recorder::default();

        events.respond(&selection, &selection.tag(), Ok(detail("1", "Bitcoin", 67000.0)));

        assert_eq!(events.take(), vec![Event::Load(detail("1", "Bitcoin", 67000.0))]);
    }

    #[test]
    fn selecting_another_currency_clears_before_fetching() {
        let mut selection = Selection::default();
        let events = Recorder::default();

        let tag = events.click(&mut selection, "1027").unwrap();
        assert_eq!(tag.id().as_str(), "1027");
        assert_eq!(events.take(), vec![Event::Clear, Event::Fetch(tag.clone())]);

        events.respond(&selection, &tag, Ok(detail("1027", "Ethereum", 3100.0)));
        assert_eq!(
            events.take(),
            vec![Event::Load(detail("1027", "Ethereum", 3100.0))]
        );
    }

    #[test]
    fn reselecting_the_current_currency_is_a_no_op() {
        let mut selection = Selection::default();
        let events = Recorder::default();

        assert!(events.click(&mut selection, "1").is_none());
        assert!(events.take().is_empty());
    }

    #[test]
    fn late_response_for_an_old_selection_is_dropped() {
        let mut selection = Selection::default();
        let initial = selection.tag();
        let events = Recorder::default();
        let eth = events.click(&mut selection, "1027").unwrap();
        events.take();

        // Bitcoin's slow initial response arrives after Ethereum was picked.
        events.respond(&selection, &initial, Ok(detail("1", "Bitcoin", 67000.0)));
        assert!(events.take().is_empty());

        events.respond(&selection, &eth, Ok(detail("1027", "Ethereum", 3100.0)));
        assert_eq!(
            events.take(),
            vec![Event::Load(detail("1027", "Ethereum", 3100.0))]
        );
    }

    #[test]
    fn switching_back_and_forth_keeps_only_the_newest_request() {
        let mut selection = Selection::default();
        let events = Recorder::default();
        let first_eth = events.click(&mut selection, "1027").unwrap();
        events.click(&mut selection, "1").unwrap();
        let second_eth = events.click(&mut selection, "1027").unwrap();
        events.take();

        assert_ne!(first_eth, second_eth);

        events.respond(&selection, &first_eth, Ok(detail("1027", "Ethereum", 1.0)));
        assert!(events.take().is_empty());

        events.respond(&selection, &second_eth, Ok(detail("1027", "Ethereum", 2.0)));
        assert_eq!(events.take(), vec![Event::Load(detail("1027", "Ethereum", 2.0))]);
    }

    #[test]
    fn failed_detail_request_loads_nothing() {
        let selection = Selection::default();
        let events = Recorder::default();

        events.respond(
            &selection,
            &selection.tag(),
            Err(ApiError::FetchFailed {
                url: "http://127.0.0.1:8000/cryptocurrency/1".to_string(),
                reason: "connection refused".to_string(),
            }),
        );

        assert!(events.take().is_empty());
    }
}
