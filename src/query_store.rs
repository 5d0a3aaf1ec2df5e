use std::cell::RefCell;
use std::collections::BTreeMap;

pub const PAGE_PARAM: &str = "page";
pub const SEARCH_PARAM: &str = "search";

/// Key/value view over the query string of the current location.
/// Writes replace the current location and never add history entries.
pub trait QueryStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Query store with no location behind it; records writes for inspection
#[derive(Debug, Default)]
pub struct MemoryQueryStore {
    params: RefCell<BTreeMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
}

impl MemoryQueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string such as `?page=3&search=alice`
    pub fn from_query_string(query: &str) -> Self {
        let store = Self::new();
        {
            let mut params = store.params.borrow_mut();
            for (key, value) in parse_query_string(query) {
                params.insert(key, value);
            }
        }
        store
    }

    /// Every write in order, for asserting on URL updates
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl QueryStore for MemoryQueryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.params.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.params
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
    }
}

/// Split a query string into decoded key/value pairs
pub fn parse_query_string(query: &str) -> Vec<(String, String)> {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        return Vec::new();
    }
    // Any base works, only the query part is used
    match reqwest::Url::parse(&format!("http://localhost/?{query}")) {
        Ok(url) => url.query_pairs().into_owned().collect(),
        Err(_) => Vec::new(),
    }
}
