//=============================================================================
// File: src/screens/timeline.rs
//=============================================================================
use api::event_types::EventCategory;
use api::format::format_timestamp;
use api::format::relative_time;
use api::models::Event;
use api::paged::PagedView;
use chrono::Utc;
use dioxus::prelude::*;

use super::events::type_name;
use super::events::use_event_slide;
use super::events::EventSlide;
use crate::app_state::AppState;
use crate::components::data_table::Pager;
use crate::components::empty_state::EmptyState;
use crate::components::filter_bar::FilterBar;
use crate::components::hash_popover::HashPopover;
use crate::components::histogram_chart::SERIES_COLORS;
use crate::components::pico::Card;
use crate::hooks::use_paged_collection::use_paged_collection;

/// Marker colour of an event, matching its series in the activity chart.
fn marker_color(event: &Event) -> &'static str {
    event
        .kind()
        .and_then(|k| EventCategory::ALL.iter().position(|c| *c == k.category()))
        .map_or("var(--pico-muted-color)", |idx| SERIES_COLORS[idx % SERIES_COLORS.len()])
}

#[component]
fn TimelineItem(event: Event, on_open: EventHandler<String>) -> Element {
    let id = event.id.clone();
    let name = type_name(&event);
    let color = marker_color(&event);
    let created = relative_time(&event.created, Utc::now());
    let full = format_timestamp(&event.created);

    rsx! {
        li {
            style: "display: flex; gap: 1rem; align-items: flex-start; padding: 0.5rem 0; cursor: pointer; border-left: 2px solid var(--pico-muted-border-color); padding-left: 1rem; margin-left: 0.5rem; list-style: none;",
            onclick: move |_| on_open.call(id.clone()),
            span {
                style: "width: 0.75rem; height: 0.75rem; border-radius: 50%; margin-left: -1.45rem; margin-top: 0.35rem; flex-shrink: 0; background: {color};",
            }
            div {
                style: "flex: 1;",
                strong { "{name}" }
                div {
                    small { "Reference " }
                    HashPopover { value: event.reference.clone() }
                }
            }
            small { title: "{full}", "{created}" }
        }
    }
}

/// Recent events as a vertical timeline, newest first.
#[allow(non_snake_case)]
#[component]
pub fn TimelineScreen() -> Element {
    let app_state = use_context::<AppState>();

    let state = app_state.clone();
    let mut events = use_paged_collection(move |ns, query| {
        let state = state.clone();
        async move { state.client.events(&ns, &query).await }
    });
    let mut slide = use_event_slide();

    rsx! {
        FilterBar {}
        Card {
            h3 { "Timeline" }
            match events.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! { EmptyState { message: "No activity yet" } },
                PagedView::Rows => rsx! {
                    ol {
                        style: "padding: 0;",
                        for event in events.rows() {
                            TimelineItem {
                                key: "{event.id}",
                                event,
                                on_open: move |id: String| slide.open(id),
                            }
                        }
                    }
                    Pager {
                        pagination: events.pagination(),
                        total: events.total(),
                        on_page: move |page| events.change_page(page),
                        on_rows_per_page: move |rows| events.set_rows_per_page(rows),
                    }
                },
            }
        }
        EventSlide { slide }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn event(event_type: &str) -> Event {
        Event {
            id: "e1".into(),
            sequence: 1,
            event_type: event_type.into(),
            namespace: "default".into(),
            reference: "r1".into(),
            tx: None,
            topic: None,
            created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn markers_follow_chart_series() {
        let blockchain = EventCategory::ALL
            .iter()
            .position(|c| *c == EventCategory::Blockchain)
            .unwrap();
        assert_eq!(marker_color(&event("blockchain_event_received")), SERIES_COLORS[blockchain]);
        assert_ne!(
            marker_color(&event("message_confirmed")),
            marker_color(&event("token_transfer_confirmed"))
        );
        assert_eq!(marker_color(&event("made_up_type")), "var(--pico-muted-color)");
    }
}
