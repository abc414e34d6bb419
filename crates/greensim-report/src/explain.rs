// SPDX-License-Identifier: PMPL-1.0-or-later
//! Human-readable explanations of what each model assumes and why the
//! green variant helps.

use greensim_metrics::ModelKind;
use greensim_models::Scenario;

/// What a model does and where its costs come from
pub fn explanation(kind: ModelKind) -> &'static str {
    match kind {
        ModelKind::StandardSort => {
            "Bubble-like quadratic sort over full records. Every comparison \
             may swap two complete records, so both CPU work and data \
             movement grow with the square of the record count."
        }
        ModelKind::EfficientSort => {
            "Quicksort-like N log N sort. Far fewer comparisons and swaps, \
             but each swap still moves whole records, and the recursion \
             keeps a small logarithmic stack."
        }
        ModelKind::IndexSort => {
            "Sorts lightweight (key, index) pairs instead of records, then \
             reorders the records in one pass. Data movement collapses to a \
             single reorder at the price of the key list coexisting with \
             the records in memory."
        }
        ModelKind::StandardSalesReport => {
            "Multi-pass aggregation: per-transaction sums are computed and \
             stored, then folded in a second pass. The bulk read is charged \
             a re-read overhead and the intermediates are written and read \
             back."
        }
        ModelKind::GreenSalesReport => {
            "Single-pass aggregation into a handful of running totals. One \
             sequential read, no intermediate lists."
        }
        ModelKind::StandardLogFilter => {
            "Loads the whole log into memory and runs the full regex on \
             every line, matching or not."
        }
        ModelKind::GreenLogFilter => {
            "Streams the log one line at a time and pre-filters with a \
             cheap substring check, so the expensive regex only runs on \
             candidate lines."
        }
    }
}

/// Practical advice tied to a scenario's green strategy
pub fn advice(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Sort => {
            "When records are large relative to their sort key, sort an \
             index instead of the data. The bigger the records, the bigger \
             the win in data movement."
        }
        Scenario::SalesReport => {
            "Prefer streaming aggregation over materializing intermediate \
             collections; most reporting queries only need running totals."
        }
        Scenario::LogFilter => {
            "Guard expensive pattern matching with a cheap pre-filter and \
             process input as a stream. Memory stays flat no matter how \
             large the log grows."
        }
    }
}
