//=============================================================================
// File: src/screens/apis.rs
//=============================================================================
use api::models::FireflyApi;
use api::paged::PagedView;
use api::slide::SlideState;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::data_table::DataTable;
use crate::components::data_table::Pager;
use crate::components::empty_state::EmptyState;
use crate::components::filter_bar::FilterBar;
use crate::components::hash_popover::HashPopover;
use crate::components::list_item::IdListItem;
use crate::components::list_item::ListItem;
use crate::components::pico::Card;
use crate::components::slide_panel::SlideLoading;
use crate::components::slide_panel::SlidePanel;
use crate::hooks::use_paged_collection::use_paged_collection;
use crate::hooks::use_slide::use_slide;

/// Opens in a new tab; an empty url renders as `-`.
#[component]
fn ExternalLink(url: String, label: String) -> Element {
    if url.is_empty() {
        return rsx! { span { "-" } };
    }
    rsx! {
        a {
            href: "{url}",
            target: "_blank",
            rel: "noopener noreferrer",
            onclick: move |evt| evt.stop_propagation(),
            "{label}"
        }
    }
}

#[component]
fn ApiRow(api: FireflyApi, on_open: EventHandler<String>) -> Element {
    let name = api.name.clone();

    rsx! {
        tr {
            style: "cursor: pointer;",
            onclick: move |_| on_open.call(name.clone()),
            td { "{api.name}" }
            td { HashPopover { value: api.interface.id.clone(), label: "Interface ID" } }
            td { ExternalLink { url: api.urls.openapi.clone(), label: "OpenAPI" } }
            td { ExternalLink { url: api.urls.ui.clone(), label: "Swagger UI" } }
        }
    }
}

#[component]
fn ApiDetail(api: FireflyApi) -> Element {
    let location = api
        .location
        .as_ref()
        .map(|l| serde_json::to_string_pretty(l).unwrap_or_else(|_| l.to_string()));

    rsx! {
        IdListItem { label: "ID", value: api.id.clone() }
        ListItem { label: "Name", "{api.name}" }
        ListItem { label: "Namespace", "{api.namespace}" }
        IdListItem { label: "Interface ID", value: api.interface.id.clone() }
        ListItem {
            label: "OpenAPI",
            ExternalLink { url: api.urls.openapi.clone(), label: "swagger.json" }
        }
        ListItem {
            label: "UI",
            ExternalLink { url: api.urls.ui.clone(), label: "Open" }
        }
        if let Some(location) = location {
            details {
                open: true,
                style: "margin-top: 1rem;",
                summary { "Location" }
                pre { style: "white-space: pre-wrap;", "{location}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ApisScreen() -> Element {
    let app_state = use_context::<AppState>();

    let state = app_state.clone();
    let mut apis = use_paged_collection(move |ns, query| {
        let state = state.clone();
        async move { state.client.apis(&ns, &query).await }
    });

    let state = app_state.clone();
    let mut slide = use_slide(move |ns, name| {
        let state = state.clone();
        async move { state.client.api(&ns, &name).await.map(Some) }
    });

    rsx! {
        FilterBar {}
        Card {
            h3 { "Contract APIs" }
            match apis.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! { EmptyState { message: "No contract APIs" } },
                PagedView::Rows => rsx! {
                    DataTable {
                        headers: vec!["Name", "Interface", "OpenAPI", "UI"],
                        for api in apis.rows() {
                            ApiRow {
                                key: "{api.id}",
                                api,
                                on_open: move |name: String| slide.open(name),
                            }
                        }
                    }
                    Pager {
                        pagination: apis.pagination(),
                        total: apis.total(),
                        on_page: move |page| apis.change_page(page),
                        on_rows_per_page: move |rows| apis.set_rows_per_page(rows),
                    }
                },
            }
        }
        match slide.state() {
            SlideState::Closed => rsx! {},
            SlideState::Loading { .. } => rsx! {
                SlidePanel { title: "API", on_close: move |_| slide.close(), SlideLoading {} }
            },
            SlideState::Loaded { detail, .. } => {
                let title = detail.name.clone();
                rsx! {
                    SlidePanel {
                        title,
                        on_close: move |_| slide.close(),
                        ApiDetail { api: detail }
                    }
                }
            }
        }
    }
}
