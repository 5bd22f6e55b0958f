use api::models::Namespace;
use api::nav::DashboardLocation;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::hooks::use_error_reporter::use_error_reporter;
use crate::screen::Screen;

/// Names offered by the picker. The current namespace is always listed, even
/// before (or without) a successful fetch.
fn namespace_choices(current: &str, fetched: &[Namespace]) -> Vec<String> {
    let mut names: Vec<String> = fetched.iter().map(|ns| ns.name.clone()).collect();
    if !names.iter().any(|name| name == current) {
        names.insert(0, current.to_string());
    }
    names
}

/// Header select listing the backend's namespaces. Switching keeps the
/// current screen but drops its slide and filters.
#[component]
pub fn NamespacePicker() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut reporter = use_error_reporter();

    let namespaces = use_resource(move || {
        let state = app_state.clone();
        async move {
            reporter
                .check("Could not load namespaces", state.client.namespaces().await)
                .unwrap_or_default()
        }
    });

    let current = app_state_mut.namespace.read().clone();
    let fetched = namespaces.read().clone().unwrap_or_default();
    let choices = namespace_choices(&current, &fetched);

    rsx! {
        select {
            style: "width: auto; margin: 0;",
            "aria-label": "Namespace",
            onchange: move |evt| {
                let ns = evt.value();
                if *app_state_mut.namespace.peek() == ns {
                    return;
                }
                info!("switching to namespace {ns}");
                let screen = active_screen.peek().in_other_namespace();
                app_state_mut.location.set(DashboardLocation {
                    path: screen.path(&ns),
                    ..Default::default()
                });
                app_state_mut.new_events.write().rebaseline();
                app_state_mut.namespace.set(ns);
                active_screen.set(screen);
            },
            for name in choices {
                option {
                    value: "{name}",
                    selected: name == current,
                    "{name}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ns(name: &str) -> Namespace {
        Namespace {
            name: name.into(),
            description: String::new(),
            created: None,
        }
    }

    #[test]
    fn current_namespace_is_always_offered() {
        assert_eq!(namespace_choices("default", &[]), vec!["default"]);
        assert_eq!(
            namespace_choices("ns2", &[ns("default"), ns("ns2")]),
            vec!["default", "ns2"]
        );
        assert_eq!(
            namespace_choices("gone", &[ns("default")]),
            vec!["gone", "default"]
        );
    }
}
