use api::format::format_clock;
use api::format::format_timestamp;
use api::histogram::Histogram;
use api::histogram::HistogramView;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;

pub const SERIES_COLORS: [&str; 3] = ["#fbbf24", "#f97316", "#ec4899"];
const CHART_HEIGHT: &str = "200px";

/// Stacked bar chart of a histogram, or a loader / empty state.
#[component]
pub fn HistogramChart(histogram: Option<Histogram>, empty_message: String) -> Element {
    let histogram = match HistogramView::from(histogram.as_ref()) {
        HistogramView::Loading => {
            return rsx! {
                div {
                    style: "height: {CHART_HEIGHT}; display: flex; align-items: center;",
                    progress {}
                }
            }
        }
        HistogramView::Empty => {
            return rsx! {
                EmptyState {
                    message: empty_message,
                    height: CHART_HEIGHT.to_string(),
                }
            }
        }
        HistogramView::Chart => histogram.unwrap_or_default(),
    };

    let max = histogram.max_total().max(1);
    let color_of = |idx: usize| SERIES_COLORS[idx % SERIES_COLORS.len()];

    rsx! {
        div {
            div {
                style: "height: {CHART_HEIGHT}; display: flex; align-items: flex-end; gap: 2px; border-bottom: 1px solid var(--pico-muted-border-color);",
                for bucket in histogram.buckets.iter() {
                    {
                        let tooltip = std::iter::once(format_timestamp(&bucket.timestamp))
                            .chain(histogram.keys.iter().map(|k| format!("{}: {}", k.to_uppercase(), bucket.value(k))))
                            .collect::<Vec<_>>()
                            .join("\n");
                        rsx! {
                            div {
                                key: "{bucket.timestamp}",
                                title: "{tooltip}",
                                style: "flex: 1; height: 100%; display: flex; flex-direction: column-reverse;",
                                for (idx, key) in histogram.keys.iter().enumerate() {
                                    {
                                        let pct = bucket.value(key) as f64 * 100.0 / max as f64;
                                        let color = color_of(idx);
                                        rsx! {
                                            div { style: "height: {pct}%; background: {color};" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                style: "display: flex; gap: 2px; font-size: 0.65rem; color: var(--pico-muted-color);",
                for (i, bucket) in histogram.buckets.iter().enumerate() {
                    {
                        // every fourth tick keeps the labels from overlapping.
                        let tick = if i % 4 == 0 { format_clock(&bucket.timestamp) } else { String::new() };
                        rsx! {
                            span { style: "flex: 1; text-align: center; overflow: hidden;", "{tick}" }
                        }
                    }
                }
            }
            div {
                style: "display: flex; justify-content: center; gap: 1.5rem; margin-top: 0.5rem; font-size: 0.8rem;",
                for (idx, key) in histogram.keys.iter().enumerate() {
                    {
                        let color = color_of(idx);
                        rsx! {
                            span {
                                span {
                                    style: "display: inline-block; width: 0.8rem; height: 0.8rem; border-radius: 50%; margin-right: 0.3rem; background: {color};",
                                }
                                "{key}"
                            }
                        }
                    }
                }
            }
        }
    }
}
