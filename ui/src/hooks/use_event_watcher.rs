use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;

/// How many of the newest events each poll looks at.
const WATCH_LIMIT: usize = 25;

/// Polls the newest events and records the ones not seen before. Recorded
/// events light up the refresh button; tables only refetch once the user
/// refreshes.
pub fn use_event_watcher() {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let app_state = app_state.clone();
        let namespace = app_state_mut.namespace;
        let mut new_events = app_state_mut.new_events;

        async move {
            let poll_secs = app_state.prefs.backend().poll_secs;
            if poll_secs == 0 {
                info!("new-event polling disabled");
                return;
            }
            loop {
                let ns = namespace.peek().clone();
                match app_state.client.latest_events(&ns, WATCH_LIMIT).await {
                    // the namespace changed while polling; the next round re-baselines.
                    Ok(_) if *namespace.peek() != ns => {}
                    Ok(mut events) => {
                        events.sort_by_key(|e| e.sequence);
                        let seen = new_events.peek().last_seen_sequence();
                        match seen {
                            // first poll: everything so far is already on screen.
                            None => {
                                if let Some(last) = events.last() {
                                    new_events.write().mark_seen(last.sequence);
                                }
                            }
                            Some(seen) => {
                                let fresh: Vec<_> =
                                    events.iter().filter(|e| e.sequence > seen).collect();
                                if !fresh.is_empty() {
                                    debug!("{} new events in {ns}", fresh.len());
                                    let mut new_events = new_events.write();
                                    for event in fresh {
                                        new_events.observe(event.sequence, &event.event_type);
                                    }
                                }
                            }
                        }
                    }
                    Err(e) => debug!("event poll failed: {e}"),
                }
                compat::sleep(Duration::from_secs(poll_secs)).await;
            }
        }
    });
}
