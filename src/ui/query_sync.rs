use crate::query_store::{QueryStore, PAGE_PARAM, SEARCH_PARAM};
use crate::ui::Route;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use std::cell::RefCell;
use std::collections::BTreeMap;
use tracing::warn;

/// Query store backed by the router location.
///
/// Holds the parameters seen at mount plus every later write, and replaces
/// the current route on each write so no history entry is added.
pub struct RouterQueryStore {
    params: RefCell<BTreeMap<String, String>>,
    navigator: Navigator,
}

impl RouterQueryStore {
    /// Snapshot the query parameters of the route being rendered.
    /// Empty values count as absent.
    pub fn from_route(navigator: Navigator, page: &str, search: &str) -> Self {
        let mut params = BTreeMap::new();
        if !page.is_empty() {
            params.insert(PAGE_PARAM.to_string(), page.to_string());
        }
        if !search.is_empty() {
            params.insert(SEARCH_PARAM.to_string(), search.to_string());
        }

        Self {
            params: RefCell::new(params),
            navigator,
        }
    }

    fn current_route(&self) -> Route {
        let params = self.params.borrow();
        Route::AttendeeList {
            page: params.get(PAGE_PARAM).cloned().unwrap_or_default(),
            search: params.get(SEARCH_PARAM).cloned().unwrap_or_default(),
        }
    }
}

impl QueryStore for RouterQueryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.params.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.params
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        if let Some(failure) = self.navigator.replace(self.current_route()) {
            warn!("Failed to update location for {}={:?}: {:?}", key, value, failure);
        }
    }
}
