//! Fetches one page of a collection whenever the namespace, time window,
//! filters, page or refresh counter change.

use std::future::Future;

use api::models::Paged;
use api::paged::Applied;
use api::paged::PagedList;
use api::paged::PagedView;
use api::paged::QueryScope;
use api::query::CollectionQuery;
use api::query::Pagination;
use api::ApiError;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use super::use_error_reporter::use_error_reporter;
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;

/// Handle to a paged table's state.
pub struct PagedCollection<T: 'static> {
    list: Signal<PagedList<T>>,
    pagination: Signal<Pagination>,
}

impl<T: 'static> Clone for PagedCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PagedCollection<T> {}

impl<T: 'static> PartialEq for PagedCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list && self.pagination == other.pagination
    }
}

impl<T: Clone + 'static> PagedCollection<T> {
    pub fn view(&self) -> PagedView {
        self.list.read().view()
    }

    pub fn rows(&self) -> Vec<T> {
        self.list.read().rows().to_vec()
    }

    pub fn total(&self) -> usize {
        self.list.read().total()
    }

    pub fn pagination(&self) -> Pagination {
        self.list.read().pagination()
    }

    pub fn change_page(&mut self, page: usize) {
        let changed = self.list.write().change_page(page);
        if changed {
            let pagination = self.list.peek().pagination();
            self.pagination.set(pagination);
        }
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.list.write().set_rows_per_page(rows_per_page);
        let pagination = self.list.peek().pagination();
        self.pagination.set(pagination);
    }
}

/// `fetch` receives the namespace and the query for the current page.
pub fn use_paged_collection<T, F, Fut>(fetch: F) -> PagedCollection<T>
where
    T: Clone + 'static,
    F: Fn(String, CollectionQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Paged<T>, ApiError>> + 'static,
{
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut reporter = use_error_reporter();

    let rows_per_page = app_state.prefs.rows_per_page();
    let mut list = use_signal(|| PagedList::new(rows_per_page));
    let mut pagination = use_signal(|| Pagination::new(rows_per_page));

    // memos so that opening a slide or recording a new event does not refetch.
    let filters = use_memo(move || app_state_mut.filters());
    let last_refresh = use_memo(move || app_state_mut.new_events.read().last_refresh());

    // a different namespace, window or filter set starts from the first page.
    use_effect(move || {
        let scope = QueryScope {
            namespace: app_state_mut.namespace.read().clone(),
            time_range: *app_state_mut.time_range.read(),
            filters: filters(),
        };
        if list.write().inputs_changed(scope) {
            let reset = list.peek().pagination();
            pagination.set(reset);
        }
    });

    use_resource(move || {
        let ns = app_state_mut.namespace.read().clone();
        let created = app_state_mut.time_range.read().created_filter(Utc::now());
        let _ = last_refresh();
        let query = CollectionQuery::new(pagination())
            .created(created)
            .filters(filters());

        let ticket = list.write().begin();
        let fut = fetch(ns, query);
        async move {
            let result = fut.await;
            let applied = list.write().apply(ticket, result);
            match applied {
                Applied::Updated => {}
                Applied::Stale => debug!("dropped stale page response"),
                Applied::Failed(e) => reporter.report("Could not load page", &e),
            }
        }
    });

    PagedCollection { list, pagination }
}
