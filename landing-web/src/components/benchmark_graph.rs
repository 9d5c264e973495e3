//! Benchmark Graph
//!
//! Horizontal bar chart of lint latency, rendered as inline SVG from the
//! figures in `assets/benchmark.json`.

use leptos::prelude::*;
use serde::Deserialize;

const BENCHMARK_JSON: &str = include_str!("../../assets/benchmark.json");

const BAR_HEIGHT: f64 = 28.0;
const BAR_GAP: f64 = 12.0;
const LABEL_WIDTH: f64 = 120.0;
const CHART_WIDTH: f64 = 480.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkEntry {
    pub tool: String,
    /// Time to lint the reference document, in milliseconds.
    pub millis: f64,
}

/// Parse the embedded benchmark figures.
pub fn parse_benchmarks(json: &str) -> Result<Vec<BenchmarkEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Bar length for each entry, scaled so the slowest fills `max_len`.
pub fn bar_lengths(entries: &[BenchmarkEntry], max_len: f64) -> Vec<f64> {
    let slowest = entries
        .iter()
        .map(|e| e.millis)
        .fold(0.0_f64, f64::max);
    if slowest <= 0.0 {
        return vec![0.0; entries.len()];
    }
    entries
        .iter()
        .map(|e| (e.millis.max(0.0) / slowest) * max_len)
        .collect()
}

#[component]
pub fn BenchmarkGraph() -> impl IntoView {
    let entries = match parse_benchmarks(BENCHMARK_JSON) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("invalid benchmark data: {}", e);
            Vec::new()
        }
    };

    let track = CHART_WIDTH - LABEL_WIDTH - 60.0;
    let lengths = bar_lengths(&entries, track);
    let height = entries.len() as f64 * (BAR_HEIGHT + BAR_GAP);

    let bars = entries
        .into_iter()
        .zip(lengths)
        .enumerate()
        .map(|(i, (entry, len))| {
            let y = i as f64 * (BAR_HEIGHT + BAR_GAP);
            let text_y = y + BAR_HEIGHT * 0.65;
            view! {
                <g class="bar">
                    <text x="0" y=text_y class="bar-label">{entry.tool}</text>
                    <rect x=LABEL_WIDTH y=y width=len height=BAR_HEIGHT rx="4"/>
                    <text x={LABEL_WIDTH + len + 8.0} y=text_y class="bar-value">
                        {format!("{} ms", entry.millis)}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <figure class="benchmark">
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, height)
                role="img"
                aria-label="Time to lint a document"
            >
                {bars}
            </svg>
            <figcaption>"Time to lint a 1,000 word document (lower is better)"</figcaption>
        </figure>
    }
}
