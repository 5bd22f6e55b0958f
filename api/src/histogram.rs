//! Folding the histogram endpoint's per-type counts into chart series.

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::Utc;
use strum::IntoEnumIterator;

use crate::event_types;
use crate::event_types::EventCategory;
use crate::models::MetricBucket;
use crate::models::TransferType;

/// One bar of the chart: a time bucket and the count per series key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramBucket {
    pub timestamp: DateTime<Utc>,
    pub values: BTreeMap<String, u64>,
}

impl HistogramBucket {
    pub fn value(&self, key: &str) -> u64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.values.values().sum()
    }
}

/// Chart data: series keys in legend order and the bars.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Histogram {
    pub keys: Vec<String>,
    pub buckets: Vec<HistogramBucket>,
}

impl Histogram {
    /// Largest bar, used to scale the chart.
    pub fn max_total(&self) -> u64 {
        self.buckets.iter().map(HistogramBucket::total).max().unwrap_or(0)
    }
}

/// Event types folded into Blockchain / Messages / Tokens. Unknown types are
/// dropped.
pub fn make_event_histogram(buckets: &[MetricBucket]) -> Histogram {
    make_histogram(
        EventCategory::ALL.iter().map(|c| c.label().to_string()).collect(),
        buckets,
        |raw| event_types::category_of(raw).map(|c| c.label()),
    )
}

/// Transfers split into Mint / Burn / Transfer.
pub fn make_transfer_histogram(buckets: &[MetricBucket]) -> Histogram {
    make_histogram(
        TransferType::iter().map(|t| t.nice_name().to_string()).collect(),
        buckets,
        |raw| raw.parse::<TransferType>().ok().map(|t| t.nice_name()),
    )
}

fn make_histogram<F>(keys: Vec<String>, buckets: &[MetricBucket], key_of: F) -> Histogram
where
    F: Fn(&str) -> Option<&'static str>,
{
    let buckets = buckets
        .iter()
        .map(|bucket| {
            let mut values: BTreeMap<String, u64> =
                keys.iter().map(|k| (k.clone(), 0)).collect();
            for tc in &bucket.types {
                if let Some(key) = key_of(&tc.metric_type) {
                    *values.entry(key.to_string()).or_default() += tc.count;
                }
            }
            HistogramBucket {
                timestamp: bucket.timestamp,
                values,
            }
        })
        .collect();
    Histogram { keys, buckets }
}

/// True iff every value of every bucket is zero or absent.
pub fn is_histogram_empty(histogram: &Histogram) -> bool {
    histogram
        .buckets
        .iter()
        .all(|b| b.values.values().all(|v| *v == 0))
}

/// What the chart area should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum HistogramView {
    /// No response yet.
    Loading,
    Empty,
    Chart,
}

impl From<Option<&Histogram>> for HistogramView {
    fn from(histogram: Option<&Histogram>) -> Self {
        match histogram {
            None => Self::Loading,
            Some(h) if is_histogram_empty(h) => Self::Empty,
            Some(_) => Self::Chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::MetricTypeCount;

    fn bucket(minute: u32, types: &[(&str, u64)]) -> MetricBucket {
        MetricBucket {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, minute, 0).unwrap(),
            count: types.iter().map(|(_, c)| c).sum(),
            types: types
                .iter()
                .map(|(t, c)| MetricTypeCount {
                    metric_type: t.to_string(),
                    count: *c,
                })
                .collect(),
            is_capped: false,
        }
    }

    #[test]
    fn events_fold_into_categories() {
        let h = make_event_histogram(&[bucket(
            0,
            &[
                ("blockchain_event_received", 2),
                ("message_confirmed", 3),
                ("message_rejected", 1),
                ("token_transfer_confirmed", 4),
                ("not_a_type", 9),
            ],
        )]);
        assert_eq!(h.keys, vec!["Blockchain", "Messages", "Tokens"]);
        let b = &h.buckets[0];
        assert_eq!(b.value("Blockchain"), 2);
        assert_eq!(b.value("Messages"), 4);
        assert_eq!(b.value("Tokens"), 4);
        assert_eq!(b.total(), 10);
    }

    #[test]
    fn transfers_fold_into_types() {
        let h = make_transfer_histogram(&[
            bucket(0, &[("mint", 1), ("transfer", 2)]),
            bucket(5, &[("burn", 7)]),
        ]);
        assert_eq!(h.keys, vec!["Mint", "Burn", "Transfer"]);
        assert_eq!(h.buckets[0].value("Transfer"), 2);
        assert_eq!(h.buckets[1].value("Burn"), 7);
        assert_eq!(h.max_total(), 7);
    }

    #[test]
    fn empty_iff_all_values_zero_or_absent() {
        let zeros = make_event_histogram(&[bucket(0, &[]), bucket(1, &[("message_confirmed", 0)])]);
        assert!(is_histogram_empty(&zeros));
        assert!(is_histogram_empty(&Histogram::default()));
        let unknown_only = make_event_histogram(&[bucket(0, &[("mystery", 3)])]);
        assert!(is_histogram_empty(&unknown_only));
        let one = make_event_histogram(&[bucket(0, &[]), bucket(1, &[("token_pool_confirmed", 1)])]);
        assert!(!is_histogram_empty(&one));
    }

    #[test]
    fn view_separates_loading_from_empty() {
        assert_eq!(HistogramView::from(None), HistogramView::Loading);
        assert_eq!(HistogramView::from(Some(&Histogram::default())), HistogramView::Empty);
        let h = make_transfer_histogram(&[bucket(0, &[("mint", 1)])]);
        assert_eq!(HistogramView::from(Some(&h)), HistogramView::Chart);
    }
}
