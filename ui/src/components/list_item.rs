use dioxus::prelude::*;

use crate::components::hash_popover::HashPopover;
use crate::components::pico::CopyButton;

/// One labelled row of a detail panel.
#[component]
pub fn ListItem(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; gap: 1rem; padding: 0.4rem 0; border-bottom: 1px solid var(--pico-muted-border-color);",
            strong { style: "white-space: nowrap;", "{label}" }
            div {
                style: "display: flex; align-items: center; gap: 0.5rem; text-align: right; word-break: break-all;",
                {children}
            }
        }
    }
}

/// A labelled id: abbreviated, expandable and copyable.
#[component]
pub fn IdListItem(label: String, value: String) -> Element {
    rsx! {
        ListItem {
            label: label.clone(),
            HashPopover { value: value.clone(), label }
            if !value.is_empty() {
                CopyButton { text_to_copy: value }
            }
        }
    }
}
