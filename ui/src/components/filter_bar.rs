use std::str::FromStr;

use api::query::Filter;
use api::query::TimeRange;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Time window select, active filter chips and an input for `field==value`
/// style filters. Everything is kept in the url.
#[component]
pub fn FilterBar() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut draft = use_signal(String::new);
    let mut draft_error = use_signal(|| None::<String>);

    let filters = app_state_mut.filters();
    let time_range = *app_state_mut.time_range.read();

    let mut add_draft = move || {
        let text = draft.peek().trim().to_string();
        if text.is_empty() {
            return;
        }
        match Filter::from_str(&text) {
            Ok(filter) => {
                let mut filters = app_state_mut.filters();
                filters.add(filter);
                app_state_mut.set_filters(&filters);
                draft.set(String::new());
                draft_error.set(None);
            }
            Err(e) => draft_error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; align-items: center; gap: 0.5rem; margin-bottom: 1rem;",
            select {
                style: "width: auto; margin: 0;",
                onchange: move |evt| {
                    match TimeRange::from_str(&evt.value()) {
                        Ok(range) => app_state_mut.time_range.set(range),
                        Err(_) => dioxus_logger::tracing::warn!("unknown time range {}", evt.value()),
                    }
                },
                for range in TimeRange::iter() {
                    {
                        let code: &'static str = range.into();
                        let label = range.label();
                        rsx! {
                            option {
                                value: "{code}",
                                selected: range == time_range,
                                "{label}"
                            }
                        }
                    }
                }
            }
            input {
                r#type: "text",
                style: "width: 16rem; margin: 0;",
                placeholder: "field==value",
                "aria-invalid": if draft_error().is_some() { "true" } else { "" },
                value: "{draft}",
                oninput: move |evt| {
                    draft.set(evt.value());
                    draft_error.set(None);
                },
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        add_draft();
                    }
                },
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| add_draft(),
                "Add filter"
            }
            for filter in filters.iter().cloned() {
                {
                    let shown = filter.to_string();
                    rsx! {
                        mark {
                            key: "{shown}",
                            style: "display: inline-flex; align-items: center; gap: 0.4rem; border-radius: 1rem; padding: 0.1rem 0.6rem;",
                            "{shown}"
                            a {
                                href: "#",
                                "aria-label": "Remove filter",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    let mut filters = app_state_mut.filters();
                                    filters.remove(&filter);
                                    app_state_mut.set_filters(&filters);
                                },
                                "✕"
                            }
                        }
                    }
                }
            }
            if !filters.is_empty() {
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        app_state_mut.location.write().filters.clear();
                    },
                    "Clear filters"
                }
            }
            if let Some(error) = draft_error() {
                small { style: "color: var(--pico-del-color);", "{error}" }
            }
        }
    }
}
