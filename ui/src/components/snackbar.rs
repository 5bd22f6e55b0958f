use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;
use crate::hooks::use_error_reporter::use_error_reporter;

const SHOW_FOR: Duration = Duration::from_secs(6);

/// Transient error notification. Hides itself after a few seconds unless a
/// newer message replaced it.
#[component]
pub fn Snackbar() -> Element {
    let mut message = use_error_reporter().message();

    use_effect(move || {
        let Some(shown) = message() else {
            return;
        };
        spawn(async move {
            compat::sleep(SHOW_FOR).await;
            if message.peek().as_deref() == Some(shown.as_str()) {
                message.set(None);
            }
        });
    });

    let Some(text) = message() else {
        return rsx! {};
    };

    rsx! {
        div {
            role: "alert",
            style: "position: fixed; bottom: 1.5rem; left: 50%; transform: translateX(-50%); z-index: 1000; display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.25rem; border-radius: var(--pico-border-radius); background: var(--pico-del-color); color: white; box-shadow: var(--pico-card-box-shadow);",
            span { "{text}" }
            a {
                href: "#",
                style: "color: white;",
                onclick: move |evt| {
                    evt.prevent_default();
                    message.set(None);
                },
                "✕"
            }
        }
    }
}
