//! State of a paged table: which page is shown, the rows and total of the
//! last accepted response, and the generation of the request in flight.

use crate::error::ApiError;
use crate::models::Paged;
use crate::query::FilterSet;
use crate::query::Pagination;
use crate::query::TimeRange;
use crate::sequencer::RequestSequencer;
use crate::sequencer::Ticket;

/// What a paged table should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum PagedView {
    /// No response accepted yet.
    Loading,
    /// The collection is empty; show the empty-state message.
    Empty,
    /// Render the rows.
    Rows,
}

/// Outcome of handing a response to [`PagedList::apply`].
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum Applied {
    Updated,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
    /// The request failed; rows were left untouched.
    Failed(ApiError),
}

/// Inputs that select which rows a table shows. Changing any of them sends
/// the table back to its first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryScope {
    pub namespace: String,
    pub time_range: TimeRange,
    pub filters: FilterSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pagination: Pagination,
    rows: Option<Vec<T>>,
    total: usize,
    sequencer: RequestSequencer,
    scope: Option<QueryScope>,
}

impl<T> PagedList<T> {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            pagination: Pagination::new(rows_per_page),
            rows: None,
            total: 0,
            sequencer: RequestSequencer::new(),
            scope: None,
        }
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn rows(&self) -> &[T] {
        self.rows.as_deref().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn view(&self) -> PagedView {
        match &self.rows {
            None => PagedView::Loading,
            Some(rows) if rows.is_empty() && self.total == 0 => PagedView::Empty,
            Some(_) => PagedView::Rows,
        }
    }

    /// Starts a request and returns the ticket its response must carry.
    pub fn begin(&mut self) -> Ticket {
        self.sequencer.issue()
    }

    /// Accepts a response if it belongs to the latest request.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Paged<T>, ApiError>) -> Applied {
        if !self.sequencer.is_current(ticket) {
            return Applied::Stale;
        }
        match result {
            Ok(page) => {
                self.total = page.total;
                self.rows = Some(page.items);
                Applied::Updated
            }
            Err(e) => Applied::Failed(e),
        }
    }

    /// Moves to `new_page` if the known total allows it.
    pub fn change_page(&mut self, new_page: usize) -> bool {
        self.pagination.change_page(new_page, self.total)
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.pagination.set_rows_per_page(rows_per_page);
    }

    /// Goes back to the first page, e.g. after the filters changed.
    pub fn reset_page(&mut self) {
        self.pagination.current_page = 0;
    }

    /// Records the current scope. Returns whether the page was reset, which
    /// happens only when a previously seen scope changed while off the first
    /// page.
    pub fn inputs_changed(&mut self, scope: QueryScope) -> bool {
        let previous = self.scope.replace(scope);
        let changed = previous.is_some_and(|p| Some(&p) != self.scope.as_ref());
        if changed && self.pagination.current_page != 0 {
            self.reset_page();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, total: usize) -> Result<Paged<u32>, ApiError> {
        Ok(Paged { items, total })
    }

    #[test]
    fn empty_collection_shows_empty_state() {
        let mut list = PagedList::<u32>::new(10);
        assert_eq!(list.view(), PagedView::Loading);
        let t = list.begin();
        assert!(list.apply(t, page(vec![], 0)).is_updated());
        assert_eq!(list.view(), PagedView::Empty);
    }

    #[test]
    fn total_comes_from_response_not_row_count() {
        let mut list = PagedList::new(10);
        let t = list.begin();
        list.apply(t, page((0..10).collect(), 95));
        assert_eq!(list.total(), 95);
        assert_eq!(list.rows().len(), 10);
        assert_eq!(list.view(), PagedView::Rows);
        assert!(list.change_page(9));
        assert!(!list.change_page(10));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut list = PagedList::new(10);
        let slow = list.begin();
        let fast = list.begin();
        assert!(list.apply(fast, page(vec![2], 1)).is_updated());
        assert!(list.apply(slow, page(vec![1], 1)).is_stale());
        assert_eq!(list.rows(), &[2]);
    }

    fn scope(namespace: &str, time_range: TimeRange, filters: &[&str]) -> QueryScope {
        QueryScope {
            namespace: namespace.into(),
            time_range,
            filters: FilterSet::from_params(filters.iter().copied()),
        }
    }

    fn on_page_three() -> PagedList<u32> {
        let mut list = PagedList::new(10);
        let t = list.begin();
        list.apply(t, page((0..10).collect(), 100));
        assert!(list.change_page(3));
        list
    }

    #[test]
    fn first_scope_only_records() {
        let mut list = on_page_three();
        assert!(!list.inputs_changed(scope("default", TimeRange::default(), &[])));
        assert_eq!(list.pagination().current_page, 3);
    }

    #[test]
    fn changed_scope_resets_to_first_page() {
        let base = scope("default", TimeRange::default(), &[]);
        let changes = [
            scope("other", TimeRange::default(), &[]),
            scope("default", TimeRange::LastWeek, &[]),
            scope("default", TimeRange::default(), &["type==token_transfer"]),
        ];
        for changed in changes {
            let mut list = on_page_three();
            list.inputs_changed(base.clone());
            assert!(list.inputs_changed(changed.clone()), "{changed:?}");
            assert_eq!(list.pagination().current_page, 0);
        }
    }

    #[test]
    fn same_scope_keeps_page() {
        let mut list = on_page_three();
        let base = scope("default", TimeRange::default(), &["pool==p1"]);
        list.inputs_changed(base.clone());
        // a refresh or an opened slide re-runs the check with equal inputs.
        assert!(!list.inputs_changed(base));
        assert_eq!(list.pagination().current_page, 3);
    }

    #[test]
    fn change_on_first_page_reports_no_reset() {
        let mut list = PagedList::<u32>::new(10);
        list.inputs_changed(scope("default", TimeRange::default(), &[]));
        assert!(!list.inputs_changed(scope("other", TimeRange::default(), &[])));
    }

    #[test]
    fn refresh_reissues_request_and_drops_older_response() {
        let mut list = on_page_three();
        let before_refresh = list.begin();
        let after_refresh = list.begin();
        assert!(list.apply(before_refresh, page(vec![1], 100)).is_stale());
        assert!(list.apply(after_refresh, page(vec![2], 100)).is_updated());
        assert_eq!(list.rows(), &[2]);
        assert_eq!(list.pagination().current_page, 3);
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut list = PagedList::new(10);
        let t = list.begin();
        list.apply(t, page(vec![7], 1));
        let t = list.begin();
        let err = ApiError::Request {
            message: "connection refused".into(),
        };
        assert_eq!(list.apply(t, Err(err.clone())), Applied::Failed(err));
        assert_eq!(list.rows(), &[7]);
    }
}
