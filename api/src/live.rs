//! New-event notifications, used only as a "something changed" signal.

use std::collections::BTreeSet;
use std::collections::VecDeque;

use crate::event_types::EventCategory;
use crate::event_types::EventType;

/// How many event types are kept for inspection. Older ones only count.
pub const MAX_RECENT_TYPES: usize = 100;

/// Event types observed since the user last refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvents {
    recent: VecDeque<String>,
    count: usize,
    categories: BTreeSet<EventCategory>,
    has_transfer: bool,
    last_seen_sequence: Option<u64>,
    last_refresh: u64,
}

impl NewEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes that an event of `event_type` arrived.
    pub fn record(&mut self, event_type: impl Into<String>) {
        let event_type = event_type.into();
        if let Some(known) = EventType::parse(&event_type) {
            self.categories.insert(known.category());
            self.has_transfer |= known.is_transfer();
        }
        if self.recent.len() == MAX_RECENT_TYPES {
            self.recent.pop_front();
        }
        self.recent.push_back(event_type);
        self.count += 1;
    }

    /// Records an event unless its sequence was already seen. Returns whether
    /// it was new.
    pub fn observe(&mut self, sequence: u64, event_type: &str) -> bool {
        if self.last_seen_sequence.is_some_and(|seen| sequence <= seen) {
            return false;
        }
        self.last_seen_sequence = Some(sequence);
        self.record(event_type);
        true
    }

    /// Sets the sequence high-water mark without recording anything, e.g.
    /// from the first poll after startup.
    pub fn mark_seen(&mut self, sequence: u64) {
        self.last_seen_sequence = Some(self.last_seen_sequence.map_or(sequence, |s| s.max(sequence)));
    }

    pub fn last_seen_sequence(&self) -> Option<u64> {
        self.last_seen_sequence
    }

    /// Number of events since the last refresh, including ones no longer kept.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The most recent event types, oldest first.
    pub fn recent_types(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    pub fn has_transfer_event(&self) -> bool {
        self.has_transfer
    }

    pub fn has_category(&self, category: EventCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Forgets the recorded events and bumps the refresh counter so every
    /// paged view refetches.
    pub fn clear(&mut self) {
        self.recent.clear();
        self.count = 0;
        self.categories.clear();
        self.has_transfer = false;
        self.last_refresh += 1;
    }

    /// Like [`Self::clear`], and also forgets the last seen sequence so the
    /// next poll starts a new baseline, e.g. after switching namespace.
    pub fn rebaseline(&mut self) {
        self.clear();
        self.last_seen_sequence = None;
    }

    /// Changes whenever the user refreshes.
    pub fn last_refresh(&self) -> u64 {
        self.last_refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_query() {
        let mut events = NewEvents::new();
        assert!(events.is_empty());
        events.record("message_confirmed");
        assert!(!events.has_transfer_event());
        assert!(events.has_category(EventCategory::Messages));
        events.record("token_transfer_confirmed");
        assert!(events.has_transfer_event());
        assert!(events.has_category(EventCategory::Tokens));
        assert!(!events.has_category(EventCategory::Blockchain));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn clear_bumps_refresh() {
        let mut events = NewEvents::new();
        events.record("message_confirmed");
        let before = events.last_refresh();
        events.clear();
        assert!(events.is_empty());
        assert!(!events.has_category(EventCategory::Messages));
        assert_eq!(events.last_refresh(), before + 1);
    }

    #[test]
    fn long_bursts_keep_counting_but_hold_only_recent_types() {
        let mut events = NewEvents::new();
        events.record("token_transfer_confirmed");
        for sequence in 0..10_000u64 {
            events.observe(sequence, "message_confirmed");
        }
        assert_eq!(events.len(), 10_001);
        assert_eq!(events.recent_types().count(), MAX_RECENT_TYPES);
        assert!(events.recent_types().all(|t| t == "message_confirmed"));
        // the evicted transfer still counts.
        assert!(events.has_transfer_event());
        assert!(events.has_category(EventCategory::Tokens));

        events.clear();
        assert_eq!(events.len(), 0);
        assert_eq!(events.recent_types().count(), 0);
        assert!(!events.has_transfer_event());
    }

    #[test]
    fn rebaseline_forgets_sequence_but_still_refreshes() {
        let mut events = NewEvents::new();
        events.mark_seen(40);
        events.observe(41, "token_transfer_confirmed");
        let before = events.last_refresh();
        events.rebaseline();
        assert!(events.is_empty());
        assert_eq!(events.last_seen_sequence(), None);
        assert_eq!(events.last_refresh(), before + 1);
    }

    #[test]
    fn observe_skips_seen_sequences() {
        let mut events = NewEvents::new();
        events.mark_seen(10);
        assert!(!events.observe(9, "message_confirmed"));
        assert!(!events.observe(10, "message_confirmed"));
        assert!(events.observe(11, "message_confirmed"));
        assert_eq!(events.last_seen_sequence(), Some(11));
        assert_eq!(events.len(), 1);
    }
}
