//! State of a list view: search text, filters, pagination and the rows of
//! the last successful fetch.
//!
//! Server-paged lists refetch whenever search, filters, page or page size
//! change. Client-paged lists fetch the whole collection once and filter and
//! slice it locally. Responses of superseded requests are dropped.

use contracts::shared::api::{ListQuery, Page};
use contracts::shared::pagination::PaginationState;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    Server,
    Client,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub mode: PagingMode,
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub pagination: PaginationState,
    pub items: Vec<T>,
    pub loaded: bool,
    pub loading: bool,
    pub error: Option<String>,
    request_seq: u64,
}

impl<T: Clone> ListState<T> {
    pub fn new(mode: PagingMode, limit: u32) -> Self {
        Self {
            mode,
            search: String::new(),
            filters: BTreeMap::new(),
            pagination: PaginationState::new(limit),
            items: Vec::new(),
            loaded: false,
            loading: false,
            error: None,
            request_seq: 0,
        }
    }

    fn needs_refetch(&self) -> bool {
        self.mode == PagingMode::Server
    }

    /// Returns whether the list must be refetched.
    pub fn set_search(&mut self, value: &str) -> bool {
        if self.search == value {
            return false;
        }
        self.search = value.to_string();
        self.pagination.page = 1;
        self.needs_refetch()
    }

    /// An empty value removes the filter. Any change goes back to page 1.
    pub fn set_filter(&mut self, key: &str, value: &str) -> bool {
        let changed = if value.is_empty() {
            self.filters.remove(key).is_some()
        } else {
            self.filters.insert(key.to_string(), value.to_string()).as_deref() != Some(value)
        };
        if !changed {
            return false;
        }
        self.pagination.page = 1;
        self.needs_refetch()
    }

    pub fn filter(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set_limit(&mut self, limit: u32) -> bool {
        if limit == 0 || limit == self.pagination.limit {
            return false;
        }
        self.pagination.limit = limit;
        self.pagination.page = 1;
        self.needs_refetch()
    }

    /// Move to another page; search and filters are kept.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.pagination.page {
            return false;
        }
        self.pagination.page = page;
        self.needs_refetch()
    }

    /// Query for the next fetch. Client-paged lists ask for everything.
    pub fn query(&self) -> ListQuery {
        match self.mode {
            PagingMode::Client => ListQuery::default(),
            PagingMode::Server => ListQuery {
                page: Some(self.pagination.page),
                limit: Some(self.pagination.limit),
                search: Some(self.search.trim().to_string()).filter(|s| !s.is_empty()),
                filters: self.filters.clone(),
            },
        }
    }

    /// Mark a fetch as started and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a response. Returns false when a newer request superseded it.
    pub fn apply_page(&mut self, seq: u64, page: Page<T>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        self.loaded = true;
        match (self.mode, page.pagination) {
            (PagingMode::Server, Some(p)) => {
                self.pagination.total = p.total;
                self.pagination.page = p.page.max(1);
                if p.limit > 0 {
                    self.pagination.limit = p.limit;
                }
            }
            _ => self.pagination.total = page.items.len() as u64,
        }
        self.items = page.items;
        true
    }

    /// Record a failed fetch; the previous rows stay visible.
    pub fn fail_fetch(&mut self, seq: u64, message: String) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    /// Rows to render and the pagination they belong to. In client mode the
    /// collection is filtered with `keep` and sliced to the current page.
    pub fn visible(&self, keep: impl Fn(&T) -> bool) -> (Vec<T>, PaginationState) {
        if self.mode == PagingMode::Server {
            return (self.items.clone(), self.pagination);
        }
        let matching: Vec<&T> = self.items.iter().filter(|item| keep(item)).collect();
        let mut pagination = PaginationState {
            total: matching.len() as u64,
            ..self.pagination
        };
        pagination.page = pagination.page.min(pagination.total_pages().max(1));
        let (start, end) = pagination.slice_bounds(matching.len());
        let rows = matching[start..end].iter().map(|item| (*item).clone()).collect();
        (rows, pagination)
    }

    /// Drop a deleted row. Returns whether the list must be refetched instead.
    pub fn remove_row(&mut self, is_row: impl Fn(&T) -> bool) -> bool {
        if self.needs_refetch() {
            return true;
        }
        self.items.retain(|item| !is_row(item));
        self.pagination.total = self.items.len() as u64;
        false
    }

    /// Nothing loaded yet: render a full spinner.
    pub fn is_first_load(&self) -> bool {
        self.loading && !self.loaded
    }

    /// Reloading over existing rows: keep them but dim the table.
    pub fn is_dimmed(&self) -> bool {
        self.loading && self.loaded
    }
}

/// Tickets for debounced actions. Only the most recently scheduled ticket is
/// still current when its timer fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::Pagination;

    fn server_state() -> ListState<u32> {
        let mut state = ListState::new(PagingMode::Server, 20);
        let seq = state.begin_fetch();
        state.apply_page(
            seq,
            Page {
                items: (1..=20).collect(),
                pagination: Some(Pagination {
                    total: 95,
                    page: 1,
                    limit: 20,
                    total_pages: 5,
                }),
            },
        );
        state
    }

    #[test]
    fn test_filter_change_resets_page_page_change_keeps_filters() {
        let mut state = server_state();
        assert!(state.set_filter("role", "admin"));
        assert!(state.set_page(3));
        assert_eq!(state.pagination.page, 3);
        assert_eq!(state.filter("role"), "admin");

        assert!(state.set_filter("isActive", "true"));
        assert_eq!(state.pagination.page, 1);

        assert!(state.set_page(2));
        let query = state.query();
        assert_eq!(query.page, Some(2));
        assert_eq!(query.filters.get("role").map(String::as_str), Some("admin"));
        assert_eq!(query.filters.get("isActive").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_search_and_limit_reset_page() {
        let mut state = server_state();
        state.set_page(4);
        assert!(state.set_search("matrix"));
        assert_eq!(state.pagination.page, 1);
        assert!(!state.set_search("matrix"));

        state.set_page(2);
        assert!(state.set_limit(50));
        assert_eq!(state.pagination.page, 1);
        assert_eq!(state.query().search.as_deref(), Some("matrix"));
    }

    #[test]
    fn test_clearing_filter_removes_it() {
        let mut state = server_state();
        state.set_filter("movieId", "m1");
        assert!(state.set_filter("movieId", ""));
        assert!(!state.set_filter("movieId", ""));
        assert!(state.query().filters.is_empty());
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut state: ListState<u32> = ListState::new(PagingMode::Server, 10);
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(!state.apply_page(first, Page { items: vec![1], pagination: None }));
        assert!(state.loading);
        assert!(state.apply_page(second, Page { items: vec![2, 3], pagination: None }));
        assert_eq!(state.items, vec![2, 3]);
        assert!(!state.fail_fetch(first, "late".to_string()));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_client_mode_filters_and_slices_locally() {
        let mut state: ListState<u32> = ListState::new(PagingMode::Client, 10);
        let seq = state.begin_fetch();
        state.apply_page(seq, Page { items: (1..=45).collect(), pagination: None });

        assert!(!state.set_page(2));
        let (rows, pagination) = state.visible(|_| true);
        assert_eq!(rows, (11..=20).collect::<Vec<_>>());
        assert_eq!(pagination.total, 45);

        assert!(!state.set_search("even"));
        assert_eq!(state.pagination.page, 1);
        let (rows, pagination) = state.visible(|n| n % 2 == 0);
        assert_eq!(rows.len(), 10);
        assert_eq!(pagination.total, 22);
        assert_eq!(pagination.total_pages(), 3);
        assert_eq!(state.query(), ListQuery::default());
    }

    #[test]
    fn test_client_mode_clamps_page_after_shrink() {
        let mut state: ListState<u32> = ListState::new(PagingMode::Client, 10);
        let seq = state.begin_fetch();
        state.apply_page(seq, Page { items: (1..=11).collect(), pagination: None });
        state.set_page(2);
        assert!(!state.remove_row(|n| *n == 11));
        let (rows, pagination) = state.visible(|_| true);
        assert_eq!(pagination.page, 1);
        assert_eq!(rows.len(), 10);
    }

    #[test]
    fn test_server_mode_delete_refetches() {
        let mut state = server_state();
        assert!(state.remove_row(|n| *n == 1));
        assert_eq!(state.items.len(), 20);
    }

    #[test]
    fn test_loading_phases() {
        let mut state: ListState<u32> = ListState::new(PagingMode::Server, 10);
        let seq = state.begin_fetch();
        assert!(state.is_first_load());
        state.apply_page(seq, Page { items: vec![], pagination: None });
        state.begin_fetch();
        assert!(!state.is_first_load());
        assert!(state.is_dimmed());
    }

    #[test]
    fn test_debouncer_only_latest_ticket_fires() {
        let mut debouncer = Debouncer::default();
        let a = debouncer.schedule();
        let b = debouncer.schedule();
        assert!(!debouncer.is_current(a));
        assert!(debouncer.is_current(b));
    }
}
