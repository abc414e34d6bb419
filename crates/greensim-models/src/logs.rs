// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log-filtering cost models.
//!
//! L log lines of a given average length, of which `error_percentage` match
//! the filter and yield an extracted message of `error_message_size` units.
//! The standard variant loads everything and runs a regex over every line;
//! the green variant streams line by line, pre-filtering with a cheap
//! substring check and reserving the regex for candidate lines only.

use crate::convert::estimate_energy_co2;
use crate::costs::*;
use greensim_metrics::{
    Complexity, ConversionFactors, MemoryFootprint, ModelKind, ModelResult,
};

const STANDARD_LOG_COMPLEXITY: Complexity = Complexity {
    cpu: "O(L * C_regex)",
    memory: "O(L + E*S_msg)",
};

const GREEN_LOG_COMPLEXITY: Complexity = Complexity {
    cpu: "O(L + E * C_regex)",
    memory: "O(1 line + E*S_msg)",
};

/// Full-load filter: read the whole file into memory and apply the regex
/// to every line.
pub fn standard_log_filter(
    num_lines: f64,
    avg_line_length: f64,
    error_percentage: f64,
    error_message_size: f64,
    factors: &ConversionFactors,
) -> ModelResult {
    if !crate::all_positive(&[num_lines, avg_line_length, error_percentage, error_message_size]) {
        return ModelResult::inapplicable(
            ModelKind::StandardLogFilter,
            MemoryFootprint::Resident(0.0),
            STANDARD_LOG_COMPLEXITY,
        );
    }

    let l = num_lines;
    let error_lines = l * (error_percentage / 100.0);

    let cpu_operations = l * COST_PER_REGEX_MATCH_CPU;

    let all_lines_memory = l * avg_line_length;
    let extracted_memory = error_lines * error_message_size;
    let memory = all_lines_memory + extracted_memory;

    // Every line read in, every extracted message stored out.
    let data_movement = all_lines_memory + extracted_memory;

    let (energy, co2) = estimate_energy_co2(cpu_operations, data_movement, factors);
    ModelResult {
        kind: ModelKind::StandardLogFilter,
        cpu_operations,
        data_movement_units: data_movement,
        memory: MemoryFootprint::Resident(memory),
        aux_stack_units: None,
        estimated_energy: energy,
        estimated_co2: co2,
        complexity: STANDARD_LOG_COMPLEXITY,
    }
}

/// Streamed filter: hold one line at a time, run a cheap substring check on
/// every line, and apply the regex only to lines that pass the pre-filter.
pub fn green_log_filter(
    num_lines: f64,
    avg_line_length: f64,
    error_percentage: f64,
    error_message_size: f64,
    factors: &ConversionFactors,
) -> ModelResult {
    if !crate::all_positive(&[num_lines, avg_line_length, error_percentage, error_message_size]) {
        return ModelResult::inapplicable(
            ModelKind::GreenLogFilter,
            MemoryFootprint::Peak(0.0),
            GREEN_LOG_COMPLEXITY,
        );
    }

    let l = num_lines;
    let error_lines = l * (error_percentage / 100.0);

    let cpu_string_checks = l * COST_PER_STRING_CHECK_CPU;
    let cpu_regex_on_candidates = error_lines * COST_PER_REGEX_MATCH_CPU;
    let cpu_operations = cpu_string_checks + cpu_regex_on_candidates;

    // One line buffered at a time plus the accumulated extracted messages;
    // this is the simultaneous peak, not a cumulative total.
    let line_buffer = avg_line_length * LINE_BUFFER_OVERHEAD;
    let extracted_memory = error_lines * error_message_size;
    let peak_memory = line_buffer + extracted_memory;

    // All lines still pass through the system once even when streamed.
    let data_movement = l * avg_line_length;

    let (energy, co2) = estimate_energy_co2(cpu_operations, data_movement, factors);
    ModelResult {
        kind: ModelKind::GreenLogFilter,
        cpu_operations,
        data_movement_units: data_movement,
        memory: MemoryFootprint::Peak(peak_memory),
        aux_stack_units: None,
        estimated_energy: energy,
        estimated_co2: co2,
        complexity: GREEN_LOG_COMPLEXITY,
    }
}
