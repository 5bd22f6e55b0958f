//=============================================================================
// File: src/screens/events.rs
//=============================================================================
use api::event_types::EventType;
use api::format::format_timestamp;
use api::format::relative_time;
use api::histogram::make_event_histogram;
use api::models::Event;
use api::paged::PagedView;
use api::paths::BucketCollection;
use api::slide::SlideState;
use chrono::Utc;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::data_table::DataTable;
use crate::components::data_table::Pager;
use crate::components::empty_state::EmptyState;
use crate::components::filter_bar::FilterBar;
use crate::components::hash_popover::HashPopover;
use crate::components::histogram_chart::HistogramChart;
use crate::components::list_item::IdListItem;
use crate::components::list_item::ListItem;
use crate::components::pico::Card;
use crate::components::slide_panel::SlideLoading;
use crate::components::slide_panel::SlidePanel;
use crate::hooks::use_histogram::use_histogram;
use crate::hooks::use_paged_collection::use_paged_collection;
use crate::hooks::use_slide::use_slide;
use crate::hooks::use_slide::SlideHandle;
use crate::screen::Screen;

pub fn type_name(event: &Event) -> String {
    event
        .kind()
        .map(|t| t.nice_name())
        .unwrap_or_else(|| event.event_type.clone())
}

#[component]
fn EventRow(event: Event, on_open: EventHandler<String>) -> Element {
    let id = event.id.clone();
    let name = type_name(&event);
    let created = relative_time(&event.created, Utc::now());
    let full = format_timestamp(&event.created);

    rsx! {
        tr {
            style: "cursor: pointer;",
            onclick: move |_| on_open.call(id.clone()),
            td { "{name}" }
            td { HashPopover { value: event.reference.clone() } }
            td { HashPopover { value: event.tx.clone().unwrap_or_default() } }
            td { title: "{full}", "{created}" }
        }
    }
}

/// Where an event's reference leads, when this dashboard shows it.
fn reference_target(ns: &str, kind: EventType, reference: &str) -> Option<(Screen, Option<String>)> {
    let path = kind.reference_path(ns, reference);
    Screen::route(&api::nav::DashboardLocation::parse(&path))
}

#[component]
fn EventDetail(event: Event) -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let ns = app_state_mut.namespace.read().clone();
    let kind = event.kind();
    let name = type_name(&event);
    let reference_label = kind.map(|k| k.reference_label()).unwrap_or("Reference ID");
    let category = kind.map(|k| k.category().label()).unwrap_or("-");
    let target = kind.and_then(|k| reference_target(&ns, k, &event.reference));
    let created = format_timestamp(&event.created);

    rsx! {
        ListItem { label: "Type", "{name}" }
        ListItem { label: "Category", "{category}" }
        IdListItem { label: "ID", value: event.id.clone() }
        IdListItem { label: reference_label.to_string(), value: event.reference.clone() }
        if let Some((screen, slide)) = target {
            ListItem {
                label: "",
                ActionLink { to: screen, slide, "View {reference_label}" }
            }
        }
        if let Some(tx) = event.tx.clone() {
            IdListItem { label: "Transaction ID", value: tx.clone() }
            ListItem {
                label: "",
                ActionLink { to: Screen::Transactions, slide: tx, "View transaction" }
            }
        }
        if let Some(topic) = event.topic.clone() {
            ListItem { label: "Topic", "{topic}" }
        }
        ListItem { label: "Sequence", "{event.sequence}" }
        ListItem { label: "Created", "{created}" }
    }
}

/// Panel for the event named by the `slide` parameter.
#[component]
pub fn EventSlide(slide: SlideHandle<Event>) -> Element {
    let mut slide = slide;
    match slide.state() {
        SlideState::Closed => rsx! {},
        SlideState::Loading { .. } => rsx! {
            SlidePanel { title: "Event", on_close: move |_| slide.close(), SlideLoading {} }
        },
        SlideState::Loaded { detail, .. } => {
            let title = type_name(&detail);
            rsx! {
                SlidePanel {
                    title,
                    on_close: move |_| slide.close(),
                    EventDetail { event: detail }
                }
            }
        }
    }
}

/// Event panel hook shared by the events and timeline screens.
pub fn use_event_slide() -> SlideHandle<Event> {
    let app_state = use_context::<AppState>();
    use_slide(move |ns, id| {
        let state = app_state.clone();
        async move { state.client.event(&ns, &id).await.map(Some) }
    })
}

#[allow(non_snake_case)]
#[component]
pub fn EventsScreen() -> Element {
    let app_state = use_context::<AppState>();
    let histogram = use_histogram(BucketCollection::Events, make_event_histogram);

    let client = app_state.clone();
    let mut events = use_paged_collection(move |ns, query| {
        let client = client.clone();
        async move { client.client.events(&ns, &query).await }
    });

    let mut slide = use_event_slide();

    rsx! {
        FilterBar {}
        Card {
            h3 { "Events" }
            HistogramChart {
                histogram: histogram().flatten(),
                empty_message: "No events in this time range",
            }
        }
        Card {
            match events.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! {
                    EmptyState {
                        message: "No events",
                        hint: "Events show up here as the network records activity.".to_string(),
                    }
                },
                PagedView::Rows => rsx! {
                    DataTable {
                        headers: vec!["Type", "Reference", "Transaction", "Created"],
                        for event in events.rows() {
                            EventRow {
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
