use crate::attendees::client::AttendeeError;
use crate::attendees::models::{Attendee, AttendeePage, AttendeeQuery};
use crate::attendees::pagination::{self, PageNav};
use crate::query_store::{QueryStore, PAGE_PARAM, SEARCH_PARAM};
use tracing::{debug, warn};

/// View state of the attendee list.
///
/// `search` and `page` are user-driven and mirrored into the query store;
/// `attendees` and `total` only ever come from the latest fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendeeListState {
    search: String,
    page: u32,
    attendees: Vec<Attendee>,
    total: u64,
}

impl Default for AttendeeListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            attendees: Vec::new(),
            total: 0,
        }
    }
}

impl AttendeeListState {
    /// Read the initial page and search once from the store.
    /// `search` is only honoured when a non-empty `page` parameter is present.
    pub fn from_query_store(store: &dyn QueryStore) -> Self {
        let Some(raw_page) = store.read(PAGE_PARAM).filter(|p| !p.is_empty()) else {
            return Self::default();
        };

        let page = parse_page(&raw_page).unwrap_or_else(|| {
            warn!("Ignoring invalid page parameter {:?}, using page 1", raw_page);
            1
        });
        let search = store.read(SEARCH_PARAM).unwrap_or_default();

        Self {
            search,
            page,
            ..Self::default()
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.total)
    }

    pub fn set_current_search(&mut self, store: &dyn QueryStore, search: String) {
        store.write(SEARCH_PARAM, &search);
        self.search = search;
    }

    pub fn set_current_page(&mut self, store: &dyn QueryStore, page: u32) {
        store.write(PAGE_PARAM, &page.to_string());
        self.page = page;
    }

    /// Keystroke in the search box: a new search always starts at page 1
    pub fn on_search_input(&mut self, store: &dyn QueryStore, search: String) {
        debug!("Search changed to {:?}", search);
        self.set_current_search(store, search);
        self.set_current_page(store, 1);
    }

    pub fn is_disabled(&self, nav: PageNav) -> bool {
        nav.is_disabled(self.page, self.total_pages())
    }

    /// Apply a footer control. Returns false when the control is disabled.
    pub fn navigate(&mut self, store: &dyn QueryStore, nav: PageNav) -> bool {
        let total_pages = self.total_pages();
        if nav.is_disabled(self.page, total_pages) {
            return false;
        }

        let target = nav.target(self.page, total_pages);
        debug!("Navigating {:?} from page {} to {}", nav, self.page, target);
        self.set_current_page(store, target);
        true
    }

    /// Request for the current page and search
    pub fn query(&self) -> AttendeeQuery {
        AttendeeQuery {
            page_index: self.page - 1,
            query: if self.search.is_empty() {
                None
            } else {
                Some(self.search.clone())
            },
        }
    }

    /// Replace the displayed results with a fetched page
    pub fn apply_page(&mut self, page: AttendeePage) {
        self.attendees = page.attendees;
        self.total = page.total;
    }

    /// Outcome of a fetch: success replaces the results, failure is logged
    /// and leaves everything as it was. Returns whether the state changed.
    pub fn apply_result(&mut self, result: Result<AttendeePage, AttendeeError>) -> bool {
        match result {
            Ok(fetched) => {
                self.apply_page(fetched);
                true
            }
            Err(e) => {
                warn!("Failed to load attendees: {}", e);
                false
            }
        }
    }

    /// "Mostrando {count} de {total}"
    pub fn showing_label(&self) -> String {
        format!("Mostrando {} de {}", self.attendees.len(), self.total)
    }

    /// "Página {page} de {total_pages}"
    pub fn page_label(&self) -> String {
        format!("Página {} de {}", self.page, self.total_pages())
    }
}

fn parse_page(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}
