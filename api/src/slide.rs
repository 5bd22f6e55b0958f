//! The side panel driven by the `slide` url parameter.

use crate::sequencer::RequestSequencer;
use crate::sequencer::Ticket;

const DELIM: &str = "||";

/// Detail panel lifecycle.
///
/// `Closed -> Loading -> Loaded -> Closed`, or `Loading -> Closed` when the
/// panel is dismissed before its fetch resolves.
#[derive(Debug, Clone, PartialEq, strum::EnumIs)]
pub enum SlideState<T> {
    Closed,
    Loading { id: String, ticket: Ticket },
    Loaded { id: String, detail: T },
}

/// Tracks the open slide and the generation of its fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide<T> {
    state: SlideState<T>,
    sequencer: RequestSequencer,
}

impl<T> Default for Slide<T> {
    fn default() -> Self {
        Self {
            state: SlideState::Closed,
            sequencer: RequestSequencer::new(),
        }
    }
}

impl<T> Slide<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SlideState<T> {
        &self.state
    }

    /// The id the panel is showing or loading.
    pub fn id(&self) -> Option<&str> {
        match &self.state {
            SlideState::Closed => None,
            SlideState::Loading { id, .. } | SlideState::Loaded { id, .. } => Some(id),
        }
    }

    pub fn detail(&self) -> Option<&T> {
        match &self.state {
            SlideState::Loaded { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// The `slide` parameter was set. Returns the ticket the fetch must carry.
    pub fn open(&mut self, id: impl Into<String>) -> Ticket {
        let ticket = self.sequencer.issue();
        self.state = SlideState::Loading {
            id: id.into(),
            ticket,
        };
        ticket
    }

    /// Hands over a fetched detail. Returns false, dropping `detail`, when the
    /// panel was closed or reopened for another id in the meantime.
    pub fn resolve(&mut self, ticket: Ticket, detail: T) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        match std::mem::replace(&mut self.state, SlideState::Closed) {
            SlideState::Loading { id, .. } => {
                self.state = SlideState::Loaded { id, detail };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Gives up on the fetch for `ticket`, e.g. because the id did not name a
    /// single record. Returns false if the ticket is no longer current.
    pub fn abandon(&mut self, ticket: Ticket) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        self.close();
        true
    }

    /// The `slide` parameter was cleared.
    pub fn close(&mut self) {
        self.sequencer.invalidate();
        self.state = SlideState::Closed;
    }
}

/// Identifies a balance row: the signing key together with its pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BalanceSlideKey {
    pub key: String,
    pub pool: String,
}

impl BalanceSlideKey {
    pub fn new(key: impl Into<String>, pool: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pool: pool.into(),
        }
    }

    /// `key||pool`, with `%` and `|` escaped inside each component.
    pub fn encode(&self) -> String {
        format!("{}{DELIM}{}", escape(&self.key), escape(&self.pool))
    }

    /// Splits on `||`. Anything other than exactly two parts is `None`.
    pub fn decode(s: &str) -> Option<Self> {
        let mut parts = s.split(DELIM);
        let key = parts.next()?;
        let pool = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            key: unescape(key)?,
            pool: unescape(pool)?,
        })
    }
}

fn escape(s: &str) -> String {
    s.replace('%', "%25").replace('|', "%7C")
}

fn unescape(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let code = rest.get(pos + 1..pos + 3)?;
        match code.to_ascii_uppercase().as_str() {
            "25" => out.push('%'),
            "7C" => out.push('|'),
            _ => return None,
        }
        rest = &rest[pos + 3..];
    }
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_key_splits_into_two_parts() {
        let key = BalanceSlideKey::decode("0xKEY||0xPOOL").unwrap();
        assert_eq!(key, BalanceSlideKey::new("0xKEY", "0xPOOL"));
        assert_eq!(key.encode(), "0xKEY||0xPOOL");
    }

    #[test]
    fn other_part_counts_are_rejected() {
        assert_eq!(BalanceSlideKey::decode("a||b||c"), None);
        assert_eq!(BalanceSlideKey::decode("abc"), None);
        assert_eq!(BalanceSlideKey::decode(""), None);
    }

    #[test]
    fn delimiter_inside_component_survives() {
        let key = BalanceSlideKey::new("k||1", "50%|pool");
        let encoded = key.encode();
        assert_eq!(encoded, "k%7C%7C1||50%25%7Cpool");
        assert_eq!(BalanceSlideKey::decode(&encoded), Some(key));
        assert_eq!(BalanceSlideKey::decode("k%zz||p"), None);
    }

    #[test]
    fn slide_walks_through_states() {
        let mut slide = Slide::<u32>::new();
        assert!(slide.state().is_closed());
        let t = slide.open("ev1");
        assert!(slide.state().is_loading());
        assert_eq!(slide.id(), Some("ev1"));
        assert!(slide.resolve(t, 5));
        assert_eq!(slide.detail(), Some(&5));
        slide.close();
        assert!(slide.state().is_closed());
    }

    #[test]
    fn late_result_after_close_is_discarded() {
        let mut slide = Slide::<u32>::new();
        let t = slide.open("ev1");
        slide.close();
        assert!(!slide.resolve(t, 1));
        assert!(slide.state().is_closed());
    }

    #[test]
    fn abandon_only_closes_current_fetch() {
        let mut slide = Slide::<u32>::new();
        let first = slide.open("a");
        let second = slide.open("b");
        assert!(!slide.abandon(first));
        assert!(slide.state().is_loading());
        assert!(slide.abandon(second));
        assert!(slide.state().is_closed());
    }

    #[test]
    fn late_result_for_previous_id_is_discarded() {
        let mut slide = Slide::<&str>::new();
        let first = slide.open("a");
        let second = slide.open("b");
        assert!(!slide.resolve(first, "detail a"));
        assert!(slide.resolve(second, "detail b"));
        assert_eq!(slide.id(), Some("b"));
        assert_eq!(slide.detail(), Some(&"detail b"));
    }
}
