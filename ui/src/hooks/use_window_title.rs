//! Keeps the window (or browser tab) title in step with the namespace.

#[cfg(feature = "dioxus-desktop")]
pub use self::desktop::*;

#[cfg(all(target_arch = "wasm32", not(feature = "dioxus-desktop")))]
pub use self::wasm32::*;

#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
pub use self::fallback::*;

fn title_for(namespace: &str) -> String {
    format!("Exchange Explorer - {namespace}")
}

/// # Desktop Implementation
/// Sets the native window title through `dioxus_desktop::use_window`.
#[cfg(feature = "dioxus-desktop")]
mod desktop {
    use dioxus::prelude::*;
    use dioxus_desktop::use_window;

    pub fn use_window_title(namespace: Signal<String>) {
        let window = use_window();

        use_effect(move || {
            let title = super::title_for(&namespace.read());
            window.window.set_title(&title);
        });
    }
}

/// # WebAssembly (WASM) Implementation
#[cfg(all(target_arch = "wasm32", not(feature = "dioxus-desktop")))]
mod wasm32 {
    use dioxus::prelude::*;

    pub fn use_window_title(namespace: Signal<String>) {
        use_effect(move || {
            let title = super::title_for(&namespace.read());
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&title);
            }
        });
    }
}

/// # Fallback Implementation
/// Headless builds have no title to set.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
mod fallback {
    use dioxus::prelude::*;

    pub fn use_window_title(namespace: Signal<String>) {
        use_effect(move || {
            dioxus_logger::tracing::debug!("namespace: {}", namespace.read());
        });
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn title_names_the_namespace() {
        assert_eq!(super::title_for("default"), "Exchange Explorer - default");
    }
}
