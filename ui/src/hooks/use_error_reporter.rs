use api::ApiError;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// Hands fetch failures to the snackbar. Views keep whatever they showed
/// before the failed request.
#[derive(Clone, Copy)]
pub struct ErrorReporter {
    snackbar: Signal<Option<String>>,
}

impl ErrorReporter {
    /// Logs `error` and shows it in the snackbar, prefixed with `context`.
    pub fn report(&mut self, context: &str, error: &ApiError) {
        dioxus_logger::tracing::warn!("{context}: {error}");
        self.snackbar.set(Some(format!("{context}: {error}")));
    }

    /// Inspects a Result from an API call.
    /// - If `Ok`: returns the value.
    /// - If `Err`: reports it and returns None.
    pub fn check<T>(&mut self, context: &str, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(val) => Some(val),
            Err(e) => {
                self.report(context, &e);
                None
            }
        }
    }

    /// The signal holding the current notification.
    pub fn message(&self) -> Signal<Option<String>> {
        self.snackbar
    }
}

pub fn use_error_reporter() -> ErrorReporter {
    let app_state_mut = use_context::<AppStateMut>();
    ErrorReporter {
        snackbar: app_state_mut.snackbar,
    }
}
