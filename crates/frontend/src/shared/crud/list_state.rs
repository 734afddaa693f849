//! View state of a server-paginated list.
//!
//! Every change to page, page size, status filter or search term yields one
//! [`FetchTicket`]. The view runs the fetch and hands the result back to
//! [`ListViewState::apply`] together with the ticket; results of superseded
//! tickets are dropped. Pagination is manual: rows are exactly what the
//! server returned for the requested page.

use contracts::shared::{EntityId, ListQuery, Paginated, StatusFilter};

use super::Phase;
use crate::shared::http::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub token: u64,
    pub query: ListQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer request was issued after this one.
    Stale,
    Failed(ApiError),
    /// The requested page no longer exists (e.g. the last row of the last
    /// page was deleted); fetch the ticket to land on the new last page.
    OutOfRange(FetchTicket),
}

/// What the table currently shows; restored when a fetch fails.
#[derive(Debug, Clone, PartialEq)]
struct Shown {
    page_index: u32,
    page_size: u32,
    filter_status: StatusFilter,
    search_term: String,
    total_pages: u32,
    total_items: u64,
}

#[derive(Debug, Clone)]
pub struct ListViewState<T> {
    pub page_index: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub filter_status: StatusFilter,
    pub search_term: String,
    pub rows: Vec<T>,
    pub phase: Phase,
    pub pending_delete: Option<EntityId>,
    pub deleting: bool,
    latest_token: u64,
    shown: Option<Shown>,
}

impl<T> ListViewState<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            total_pages: 1,
            total_items: 0,
            filter_status: StatusFilter::All,
            search_term: String::new(),
            rows: Vec::new(),
            phase: Phase::Idle,
            pending_delete: None,
            deleting: false,
            latest_token: 0,
            shown: None,
        }
    }

    fn snapshot(&self) -> Shown {
        Shown {
            page_index: self.page_index,
            page_size: self.page_size,
            filter_status: self.filter_status.clone(),
            search_term: self.search_term.clone(),
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }

    /// Puts page, filters and totals back in line with the rows on screen.
    fn restore_shown(&mut self) {
        if let Some(shown) = self.shown.clone() {
            self.page_index = shown.page_index;
            self.page_size = shown.page_size;
            self.filter_status = shown.filter_status;
            self.search_term = shown.search_term;
            self.total_pages = shown.total_pages;
            self.total_items = shown.total_items;
        }
    }

    fn query_for(&self, page_index: u32) -> ListQuery {
        ListQuery {
            page: page_index + 1,
            page_size: self.page_size,
            status: self.filter_status.clone(),
            search: self.search_term.clone(),
        }
    }

    /// Issues a fetch of the current page. Previous rows stay visible.
    pub fn request(&mut self) -> FetchTicket {
        self.latest_token += 1;
        self.phase = Phase::Loading;
        FetchTicket {
            token: self.latest_token,
            query: self.query_for(self.page_index),
        }
    }

    pub fn refresh(&mut self) -> FetchTicket {
        self.request()
    }

    pub fn set_page(&mut self, page_index: u32) -> Option<FetchTicket> {
        let page_index = page_index.min(self.total_pages.saturating_sub(1));
        if page_index == self.page_index {
            return None;
        }
        self.page_index = page_index;
        Some(self.request())
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Option<FetchTicket> {
        if page_size == 0 || page_size == self.page_size {
            return None;
        }
        self.page_size = page_size;
        self.page_index = 0;
        Some(self.request())
    }

    pub fn set_status(&mut self, status: StatusFilter) -> Option<FetchTicket> {
        if status == self.filter_status {
            return None;
        }
        self.filter_status = status;
        self.page_index = 0;
        Some(self.request())
    }

    pub fn set_search(&mut self, search: &str) -> Option<FetchTicket> {
        let search = search.trim();
        if search == self.search_term {
            return None;
        }
        self.search_term = search.to_string();
        self.page_index = 0;
        Some(self.request())
    }

    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Paginated<T>, ApiError>,
    ) -> ApplyOutcome {
        if ticket.token != self.latest_token {
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(page) => {
                let total_pages = page.meta.total_pages.max(1);
                let requested = ticket.query.page.saturating_sub(1);

                self.total_pages = total_pages;
                self.total_items = page.meta.total_items;

                if requested >= total_pages {
                    self.page_index = total_pages - 1;
                    return ApplyOutcome::OutOfRange(self.request());
                }

                let mut rows = page.data;
                rows.truncate(self.page_size as usize);
                self.rows = rows;
                self.page_index = requested;
                self.phase = Phase::Ready;
                self.shown = Some(self.snapshot());
                ApplyOutcome::Applied
            }
            Err(e) => {
                self.restore_shown();
                self.phase = Phase::Error;
                ApplyOutcome::Failed(e)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.total_pages.max(1))
    }

    // ------------------------------------------------------------------
    // Delete with confirmation
    // ------------------------------------------------------------------

    pub fn request_delete(&mut self, id: EntityId) {
        if !self.deleting {
            self.pending_delete = Some(id);
        }
    }

    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    /// Returns the id to delete once the user confirmed.
    pub fn confirm_delete(&mut self) -> Option<EntityId> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.deleting = true;
        Some(id)
    }

    /// Server state changed: reload the current page, never splice locally.
    pub fn delete_succeeded(&mut self) -> FetchTicket {
        self.deleting = false;
        self.request()
    }

    pub fn delete_failed(&mut self) {
        self.deleting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::PageMeta;

    fn page<T>(data: Vec<T>, total_pages: u32, total_items: u64) -> Paginated<T> {
        Paginated {
            data,
            meta: PageMeta {
                total_pages,
                total_items,
            },
        }
    }

    fn loaded(rows: Vec<&'static str>, total_pages: u32) -> ListViewState<&'static str> {
        let mut state = ListViewState::new(50);
        let ticket = state.request();
        let n = rows.len() as u64;
        state.apply(&ticket, Ok(page(rows, total_pages, n * total_pages as u64)));
        state
    }

    #[test]
    fn first_page_of_banks() {
        let mut state = ListViewState::new(50);
        let ticket = state.request();
        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.page_size, 50);
        assert!(state.is_loading());

        let outcome = state.apply(&ticket, Ok(page(vec!["bankA", "bankB"], 3, 120)));
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.page_label(), "Page 1 of 3");
        assert!(!state.can_previous());
        assert!(state.can_next());
        assert_eq!(state.phase, Phase::Ready);
    }

    #[test]
    fn page_index_follows_the_requested_page() {
        let mut state = loaded(vec!["a"], 3);
        let ticket = state.set_page(2).unwrap();
        assert_eq!(ticket.query.page, 3);
        state.apply(&ticket, Ok(page(vec!["z"], 3, 101)));
        assert_eq!(state.page_index, 2);
        assert!(state.can_previous());
        assert!(!state.can_next());
    }

    #[test]
    fn filter_and_search_reset_to_first_page_with_one_fetch() {
        let mut state = loaded(vec!["a"], 5);
        let t = state.set_page(3).unwrap();
        state.apply(&t, Ok(page(vec!["d"], 5, 250)));

        let ticket = state.set_status(StatusFilter::parse("0")).unwrap();
        assert_eq!(state.page_index, 0);
        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.status, StatusFilter::Code("0".to_string()));

        let t = state.set_page(2).unwrap();
        state.apply(&t, Ok(page(vec!["c"], 5, 250)));
        let ticket = state.set_search("plumb").unwrap();
        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.search, "plumb");
    }

    #[test]
    fn unchanged_inputs_do_not_refetch() {
        let mut state = loaded(vec!["a"], 2);
        assert!(state.set_status(StatusFilter::All).is_none());
        assert!(state.set_search("  ").is_none());
        assert!(state.set_page(0).is_none());
        assert!(state.set_page_size(50).is_none());
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = ListViewState::new(10);
        let first = state.request();
        let second = state.set_search("ac").unwrap();

        assert_eq!(state.apply(&first, Ok(page(vec!["old"], 9, 90))), ApplyOutcome::Stale);
        assert!(state.rows.is_empty());
        assert!(state.is_loading());

        state.apply(&second, Ok(page(vec!["new"], 1, 1)));
        assert_eq!(state.rows, vec!["new"]);
    }

    #[test]
    fn rows_never_exceed_page_size() {
        let mut state = ListViewState::new(2);
        let ticket = state.request();
        state.apply(&ticket, Ok(page(vec!["a", "b", "c"], 2, 4)));
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        let mut state = loaded(vec!["a", "b"], 2);
        let ticket = state.set_page(1).unwrap();
        let outcome = state.apply(&ticket, Err(ApiError::Network("offline".to_string())));
        assert!(matches!(outcome, ApplyOutcome::Failed(_)));
        assert_eq!(state.rows, vec!["a", "b"]);
        assert_eq!(state.phase, Phase::Error);
    }

    #[test]
    fn failed_page_fetch_keeps_label_on_the_shown_page() {
        let mut state = loaded(vec!["a", "b"], 2);
        let ticket = state.set_page(1).unwrap();
        state.apply(&ticket, Err(ApiError::Network("offline".to_string())));

        assert_eq!(state.rows, vec!["a", "b"]);
        assert_eq!(state.page_index, 0);
        assert_eq!(state.page_label(), "Page 1 of 2");
        assert!(state.can_next());

        let retry = state.set_page(1).expect("next page can be retried");
        assert_eq!(retry.query.page, 2);
    }

    #[test]
    fn failed_filter_fetch_restores_previous_query() {
        let mut state = loaded(vec!["a"], 3);
        let t = state.set_page(2).unwrap();
        state.apply(&t, Ok(page(vec!["c"], 3, 3)));

        let ticket = state.set_status(StatusFilter::parse("1")).unwrap();
        state.apply(&ticket, Err(ApiError::Network("offline".to_string())));
        assert_eq!(state.filter_status, StatusFilter::All);
        assert_eq!(state.page_index, 2);
        assert_eq!(state.page_label(), "Page 3 of 3");

        let ticket = state.set_search("plumb").unwrap();
        state.apply(
            &ticket,
            Err(ApiError::Server {
                status: 500,
                message: "boom".to_string(),
            }),
        );
        assert_eq!(state.search_term, "");
        assert_eq!(state.page_index, 2);
        assert_eq!(state.rows, vec!["c"]);

        // the same change can be retried
        assert!(state.set_search("plumb").is_some());
    }

    #[test]
    fn failed_page_size_fetch_restores_previous_size() {
        let mut state = loaded(vec!["a"], 2);
        let ticket = state.set_page_size(10).unwrap();
        state.apply(&ticket, Err(ApiError::Network("offline".to_string())));
        assert_eq!(state.page_size, 50);
        assert!(state.set_page_size(10).is_some());
    }

    #[test]
    fn failed_first_load_keeps_requested_query() {
        let mut state: ListViewState<&str> = ListViewState::new(10);
        let ticket = state.set_search("ac").unwrap();
        state.apply(&ticket, Err(ApiError::Network("offline".to_string())));
        assert_eq!(state.search_term, "ac");
        assert_eq!(state.page_label(), "Page 1 of 1");
        assert_eq!(state.phase, Phase::Error);
    }

    #[test]
    fn failed_delete_leaves_rows_untouched() {
        let mut state = loaded(vec!["a", "b"], 1);
        state.request_delete(EntityId::new("a"));
        assert_eq!(state.confirm_delete(), Some(EntityId::new("a")));
        state.delete_failed();
        assert_eq!(state.rows, vec!["a", "b"]);
        assert!(!state.deleting);
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn successful_delete_refetches_current_page() {
        let mut state = loaded(vec!["a", "b"], 3);
        let t = state.set_page(1).unwrap();
        state.apply(&t, Ok(page(vec!["c", "d"], 3, 6)));

        state.request_delete(EntityId::new("c"));
        state.confirm_delete().unwrap();
        let ticket = state.delete_succeeded();
        assert_eq!(ticket.query.page, 2);
        // rows are not spliced locally
        assert_eq!(state.rows, vec!["c", "d"]);
    }

    #[test]
    fn cancelled_delete_returns_nothing() {
        let mut state = loaded(vec!["a"], 1);
        state.request_delete(EntityId::new("a"));
        state.cancel_delete();
        assert_eq!(state.confirm_delete(), None);
    }

    #[test]
    fn vanished_page_moves_to_last_page() {
        let mut state = loaded(vec!["a"], 3);
        let t = state.set_page(2).unwrap();
        state.apply(&t, Ok(page(vec!["z"], 3, 101)));

        state.request_delete(EntityId::new("z"));
        state.confirm_delete();
        let refetch = state.delete_succeeded();
        let outcome = state.apply(&refetch, Ok(page(vec![], 2, 100)));
        let ApplyOutcome::OutOfRange(next) = outcome else {
            panic!("expected out of range");
        };
        assert_eq!(next.query.page, 2);
        assert_eq!(state.page_index, 1);

        state.apply(&next, Ok(page(vec!["y"], 2, 100)));
        assert_eq!(state.rows, vec!["y"]);
        assert_eq!(state.page_label(), "Page 2 of 2");
    }

    #[test]
    fn failed_follow_up_after_vanished_page_restores_shown_page() {
        let mut state = loaded(vec!["a"], 3);
        let t = state.set_page(2).unwrap();
        state.apply(&t, Ok(page(vec!["z"], 3, 101)));

        let refetch = state.refresh();
        let ApplyOutcome::OutOfRange(next) = state.apply(&refetch, Ok(page(vec![], 2, 100))) else {
            panic!("expected out of range");
        };
        let outcome = state.apply(&next, Err(ApiError::Network("offline".to_string())));
        assert!(matches!(outcome, ApplyOutcome::Failed(_)));

        assert_eq!(state.rows, vec!["z"]);
        assert_eq!(state.page_index, 2);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.total_items, 101);
        assert_eq!(state.page_label(), "Page 3 of 3");
        assert_eq!(state.refresh().query.page, 3);
    }
}
