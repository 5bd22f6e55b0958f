use api::histogram::Histogram;
use api::models::MetricBucket;
use api::paths::BucketCollection;
use api::paths::BucketCount;
use chrono::Utc;
use dioxus::prelude::*;

use super::use_error_reporter::use_error_reporter;
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;

/// Histogram of `collection` over the selected time window, folded by `fold`.
///
/// Refetches on every newly observed event, not only on refresh, so the
/// chart stays live while the tables wait for the user. The value is `None`
/// until the first response and after a failed one.
pub fn use_histogram(
    collection: BucketCollection,
    fold: fn(&[MetricBucket]) -> Histogram,
) -> Resource<Option<Histogram>> {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut reporter = use_error_reporter();
    let change = use_memo(move || {
        let new_events = app_state_mut.new_events.read();
        (new_events.len(), new_events.last_refresh())
    });

    use_resource(move || {
        let app_state = app_state.clone();
        let ns = app_state_mut.namespace.read().clone();
        let time_range = *app_state_mut.time_range.read();
        let _ = change();
        async move {
            let now = Utc::now();
            let start = time_range.created_filter(now).filter_time;
            let result = app_state
                .client
                .histogram(&ns, collection, start, now, BucketCount::Large)
                .await;
            reporter
                .check("Could not load chart", result)
                .map(|buckets| fold(&buckets))
        }
    })
}
