use api::format::short_hash;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::CopyButton;
use crate::components::pico::NoTitleModal;

/// An id or hash shown abbreviated; clicking opens the full value with a
/// copy button.
#[component]
pub fn HashPopover(value: String, #[props(default)] label: String) -> Element {
    let mut is_modal_open = use_signal(|| false);

    if value.is_empty() {
        return rsx! { span { "-" } };
    }
    let abbreviated = short_hash(&value);
    let title = if label.is_empty() { "Full value".to_string() } else { label };

    rsx! {
        NoTitleModal {
            is_open: is_modal_open,
            div {
                style: "display: flex; flex-direction: column; align-items: center; text-align: center",
                div {
                    style: "display: flex; justify-content: center; gap: 0.5rem;",
                    CopyButton { text_to_copy: value.clone() }
                    Button {
                        on_click: move |_| is_modal_open.set(false),
                        "Close"
                    }
                }
                h4 {
                    style: "margin-top: 1rem; margin-bottom: 0rem;",
                    "{title}"
                }
                code {
                    style: "text-align: left; word-break: break-all; background-color: var(--pico-muted-background-color); padding: 1rem; border-radius: var(--pico-border-radius); width: 100%; margin-bottom: 1rem;",
                    "{value}"
                }
            }
        }

        span {
            style: "cursor: pointer;",
            title: "{value}",
            onclick: move |evt| {
                evt.stop_propagation();
                is_modal_open.set(true);
            },
            code { "{abbreviated}" }
        }
    }
}
