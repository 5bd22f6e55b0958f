use dioxus::prelude::*;
use dioxus::html::input_data::keyboard_types::Key;

/// Read-only detail panel docked to the right edge. Closing clears the
/// `slide` parameter through `on_close`.
#[component]
pub fn SlidePanel(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "slide-backdrop",
            onclick: move |_| on_close.call(()),
        }
        aside {
            class: "slide-panel",
            tabindex: "0",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            header {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h4 { style: "margin: 0;", "{title}" }
                a {
                    href: "#",
                    "aria-label": "Close",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_close.call(());
                    },
                    "✕"
                }
            }
            {children}
        }
    }
}

/// Loader shown while a slide's record is being fetched.
#[component]
pub fn SlideLoading() -> Element {
    rsx! {
        p { "Loading..." }
        progress {}
    }
}
