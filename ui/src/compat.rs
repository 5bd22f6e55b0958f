// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Window;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    /// The browser's current url.
    pub fn current_location() -> Option<String> {
        web_sys::window()?.location().href().ok()
    }

    /// Replaces the current history entry so the url reflects the view
    /// without adding a back-button step.
    pub fn replace_location(url: &str) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
            dioxus_logger::tracing::warn!("could not update location: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use dioxus_clipboard::prelude::*;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        let mut clipboard = use_clipboard();
        clipboard.set(text).is_ok()
    }

    /// Native windows have no address bar; the start location may be given
    /// with `EXPLORER_START_PATH`.
    pub fn current_location() -> Option<String> {
        std::env::var("EXPLORER_START_PATH").ok()
    }

    pub fn replace_location(url: &str) {
        dioxus_logger::tracing::debug!("location: {url}");
    }
}
