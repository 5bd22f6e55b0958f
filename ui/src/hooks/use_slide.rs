//! Resolves the `slide` url parameter into a detail record.

use std::future::Future;

use api::slide::Slide;
use api::slide::SlideState;
use api::ApiError;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use super::use_error_reporter::use_error_reporter;
use crate::app_state_mut::AppStateMut;

pub struct SlideHandle<T: 'static> {
    slide: Signal<Slide<T>>,
    app_state_mut: AppStateMut,
}

impl<T: 'static> Clone for SlideHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SlideHandle<T> {}

impl<T: 'static> PartialEq for SlideHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slide == other.slide
    }
}

impl<T: Clone + 'static> SlideHandle<T> {
    pub fn state(&self) -> SlideState<T> {
        self.slide.read().state().clone()
    }

    pub fn open(&mut self, id: impl Into<String>) {
        self.app_state_mut.open_slide(id);
    }

    pub fn close(&mut self) {
        self.app_state_mut.close_slide();
    }
}

/// `fetch` receives the namespace and the slide id. `Ok(None)` means the id
/// does not name a single record: the slide closes without an error.
pub fn use_slide<T, F, Fut>(fetch: F) -> SlideHandle<T>
where
    T: Clone + 'static,
    F: Fn(String, String) -> Fut + 'static,
    Fut: Future<Output = Result<Option<T>, ApiError>> + 'static,
{
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut reporter = use_error_reporter();
    let mut slide = use_signal(Slide::<T>::new);
    let slide_id = use_memo(move || app_state_mut.location.read().slide.clone());

    use_resource(move || {
        let ns = app_state_mut.namespace.read().clone();
        let pending = match slide_id() {
            Some(id) => {
                let ticket = slide.write().open(id.clone());
                Some((ticket, fetch(ns, id)))
            }
            None => {
                slide.write().close();
                None
            }
        };
        async move {
            let Some((ticket, fut)) = pending else {
                return;
            };
            let abandoned = match fut.await {
                Ok(Some(detail)) => {
                    if !slide.write().resolve(ticket, detail) {
                        debug!("dropped detail for a slide that is no longer open");
                    }
                    false
                }
                Ok(None) => {
                    debug!("slide id does not name a single record");
                    slide.write().abandon(ticket)
                }
                Err(e) => {
                    reporter.report("Could not load details", &e);
                    slide.write().abandon(ticket)
                }
            };
            if abandoned {
                app_state_mut.close_slide();
            }
        }
    });

    SlideHandle {
        slide,
        app_state_mut,
    }
}
