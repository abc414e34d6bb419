// SPDX-License-Identifier: PMPL-1.0-or-later

//! Abstract per-operation cost constants.
//!
//! These encode the *relative* CPU expense of primitive operations; the
//! ratios matter, not the absolute units. A regex match is modeled as
//! 50x the cost of a cheap substring check, a full-record swap as 5x a
//! comparison, and so on.

/// One key comparison
pub const COST_PER_COMPARISON_CPU: f64 = 1.0;

/// Exchanging two complete records (moves far more than a comparison)
pub const COST_PER_SWAP_FULL_RECORD_CPU: f64 = 5.0;

/// Exchanging two small (key, original-index) pairs
pub const COST_PER_SWAP_KEY_INDEX_CPU: f64 = 2.0;

/// One arithmetic step (add, multiply)
pub const COST_PER_ARITHMETIC_OP_CPU: f64 = 0.5;

/// One intermediate-structure memory access
pub const COST_PER_MEMORY_ACCESS_CPU: f64 = 0.1;

/// Applying a regular expression to one line
pub const COST_PER_REGEX_MATCH_CPU: f64 = 10.0;

/// A cheap substring containment check on one line
pub const COST_PER_STRING_CHECK_CPU: f64 = 0.2;

/// Overhead multiplier for the initial bulk read in the multi-pass sales
/// report. An approximation inherited from the modeled workload, not a
/// derived quantity.
pub const MULTI_PASS_READ_OVERHEAD: f64 = 1.5;

/// Slack multiplier for the single-line buffer of the streamed log filter
pub const LINE_BUFFER_OVERHEAD: f64 = 1.5;
