//! Defines the mutable, reactive state for the application's UI.

use api::live::NewEvents;
use api::nav::DashboardLocation;
use api::query::FilterSet;
use api::query::TimeRange;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the core,
/// immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The namespace every request is scoped to.
    pub namespace: Signal<String>,
    /// Events observed since the last refresh.
    pub new_events: Signal<NewEvents>,
    /// Window applied to the `created` field of collection requests.
    pub time_range: Signal<TimeRange>,
    /// The `slide` and `filters` url parameters of the current screen.
    pub location: Signal<DashboardLocation>,
    /// Message of the transient error notification, if one is showing.
    pub snackbar: Signal<Option<String>>,
}

impl AppStateMut {
    /// Filters parsed from the location. Reading subscribes to the location.
    pub fn filters(&self) -> FilterSet {
        FilterSet::from_params(self.location.read().filters.iter().map(String::as_str))
    }

    pub fn set_filters(&mut self, filters: &FilterSet) {
        self.location.write().filters = filters.to_params();
    }

    pub fn open_slide(&mut self, id: impl Into<String>) {
        self.location.write().slide = Some(id.into());
    }

    pub fn close_slide(&mut self) {
        self.location.write().slide = None;
    }
}
