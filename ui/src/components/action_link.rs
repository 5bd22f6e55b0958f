use api::nav::DashboardLocation;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::screen::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Screen to switch to.
    pub to: Screen,

    /// Slide to open on the target screen.
    #[props(optional)]
    pub slide: Option<String>,

    /// `filters` parameters for the target screen, e.g. `pool==p1`.
    #[props(default)]
    pub filters: Vec<String>,

    pub children: Element,
}

/// In-app link: switches screen and replaces the slide and filters.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let href = {
        let ns = app_state_mut.namespace.read();
        DashboardLocation {
            path: props.to.path(&ns),
            slide: props.slide.clone(),
            filters: props.filters.clone(),
        }
        .to_url()
    };

    rsx! {
        a {
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                let ns = app_state_mut.namespace.peek().clone();
                app_state_mut.location.set(DashboardLocation {
                    path: props.to.path(&ns),
                    slide: props.slide.clone(),
                    filters: props.filters.clone(),
                });
                active_screen.set(props.to.clone());
            },
            {props.children}
        }
    }
}
