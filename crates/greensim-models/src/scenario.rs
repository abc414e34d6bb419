// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scenario selection and workload parameters.
//!
//! A scenario fixes which model variants apply and which numeric inputs are
//! relevant; the parameters themselves are a plain value object so sweep
//! and sensitivity callers can vary one field while holding the rest.

use crate::{logs, sales, sort};
use greensim_metrics::{ConversionFactors, ModelKind, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three canonical data-processing tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    Sort,
    SalesReport,
    LogFilter,
}

impl Scenario {
    pub fn id(&self) -> &'static str {
        match self {
            Scenario::Sort => "sort",
            Scenario::SalesReport => "sales-report",
            Scenario::LogFilter => "log-filter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Sort => "Customer Record Sorting",
            Scenario::SalesReport => "Sales Report Generation",
            Scenario::LogFilter => "Log Filtering and Analysis",
        }
    }

    /// Variants of this scenario, standard first
    pub fn variants(&self) -> &'static [ModelKind] {
        match self {
            Scenario::Sort => &[
                ModelKind::StandardSort,
                ModelKind::EfficientSort,
                ModelKind::IndexSort,
            ],
            Scenario::SalesReport => &[
                ModelKind::StandardSalesReport,
                ModelKind::GreenSalesReport,
            ],
            Scenario::LogFilter => &[
                ModelKind::StandardLogFilter,
                ModelKind::GreenLogFilter,
            ],
        }
    }

    pub const ALL: [Scenario; 3] = [Scenario::Sort, Scenario::SalesReport, Scenario::LogFilter];
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One nameable workload parameter, for sweeps and sensitivity analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamKey {
    Records,
    AvgRecordSize,
    KeyIndexPairSize,
    Transactions,
    AvgItemsPerTransaction,
    HeaderSize,
    ItemSize,
    Lines,
    AvgLineLength,
    ErrorPercentage,
    ErrorMessageSize,
}

impl ParamKey {
    pub const ALL: [ParamKey; 11] = [
        ParamKey::Records,
        ParamKey::AvgRecordSize,
        ParamKey::KeyIndexPairSize,
        ParamKey::Transactions,
        ParamKey::AvgItemsPerTransaction,
        ParamKey::HeaderSize,
        ParamKey::ItemSize,
        ParamKey::Lines,
        ParamKey::AvgLineLength,
        ParamKey::ErrorPercentage,
        ParamKey::ErrorMessageSize,
    ];

    /// Parse a key from its CLI identifier
    pub fn from_id(id: &str) -> Option<ParamKey> {
        ParamKey::ALL.into_iter().find(|k| k.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            ParamKey::Records => "records",
            ParamKey::AvgRecordSize => "avg-record-size",
            ParamKey::KeyIndexPairSize => "key-index-pair-size",
            ParamKey::Transactions => "transactions",
            ParamKey::AvgItemsPerTransaction => "avg-items-per-transaction",
            ParamKey::HeaderSize => "header-size",
            ParamKey::ItemSize => "item-size",
            ParamKey::Lines => "lines",
            ParamKey::AvgLineLength => "avg-line-length",
            ParamKey::ErrorPercentage => "error-percentage",
            ParamKey::ErrorMessageSize => "error-message-size",
        }
    }
}

/// Scenario-specific workload sizes, all in abstract data units.
///
/// All fields must be strictly positive for the models to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "kebab-case")]
pub enum WorkloadParams {
    Sort {
        records: f64,
        avg_record_size: f64,
        key_index_pair_size: f64,
    },
    SalesReport {
        transactions: f64,
        avg_items_per_transaction: f64,
        header_size: f64,
        item_size: f64,
    },
    LogFilter {
        lines: f64,
        avg_line_length: f64,
        error_percentage: f64,
        error_message_size: f64,
    },
}

impl WorkloadParams {
    /// Default workload for a scenario
    pub fn defaults(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Sort => WorkloadParams::Sort {
                records: 1000.0,
                avg_record_size: 100.0,
                key_index_pair_size: 5.0,
            },
            Scenario::SalesReport => WorkloadParams::SalesReport {
                transactions: 10_000.0,
                avg_items_per_transaction: 3.0,
                header_size: 20.0,
                item_size: 10.0,
            },
            Scenario::LogFilter => WorkloadParams::LogFilter {
                lines: 100_000.0,
                avg_line_length: 150.0,
                error_percentage: 5.0,
                error_message_size: 50.0,
            },
        }
    }

    pub fn scenario(&self) -> Scenario {
        match self {
            WorkloadParams::Sort { .. } => Scenario::Sort,
            WorkloadParams::SalesReport { .. } => Scenario::SalesReport,
            WorkloadParams::LogFilter { .. } => Scenario::LogFilter,
        }
    }

    /// The parameter swept in a scalability analysis (N, N, L respectively)
    pub fn primary_key(&self) -> ParamKey {
        match self {
            WorkloadParams::Sort { .. } => ParamKey::Records,
            WorkloadParams::SalesReport { .. } => ParamKey::Transactions,
            WorkloadParams::LogFilter { .. } => ParamKey::Lines,
        }
    }

    /// Secondary parameters worth varying in a sensitivity analysis
    pub fn sensitivity_keys(&self) -> &'static [ParamKey] {
        match self {
            WorkloadParams::Sort { .. } => &[ParamKey::AvgRecordSize],
            WorkloadParams::SalesReport { .. } => {
                &[ParamKey::AvgItemsPerTransaction, ParamKey::ItemSize]
            }
            WorkloadParams::LogFilter { .. } => {
                &[ParamKey::ErrorPercentage, ParamKey::AvgLineLength]
            }
        }
    }

    /// Read one parameter; `None` when the key does not belong to this
    /// scenario.
    pub fn get(&self, key: ParamKey) -> Option<f64> {
        match (self, key) {
            (WorkloadParams::Sort { records, .. }, ParamKey::Records) => Some(*records),
            (WorkloadParams::Sort { avg_record_size, .. }, ParamKey::AvgRecordSize) => {
                Some(*avg_record_size)
            }
            (WorkloadParams::Sort { key_index_pair_size, .. }, ParamKey::KeyIndexPairSize) => {
                Some(*key_index_pair_size)
            }
            (WorkloadParams::SalesReport { transactions, .. }, ParamKey::Transactions) => {
                Some(*transactions)
            }
            (
                WorkloadParams::SalesReport { avg_items_per_transaction, .. },
                ParamKey::AvgItemsPerTransaction,
            ) => Some(*avg_items_per_transaction),
            (WorkloadParams::SalesReport { header_size, .. }, ParamKey::HeaderSize) => {
                Some(*header_size)
            }
            (WorkloadParams::SalesReport { item_size, .. }, ParamKey::ItemSize) => Some(*item_size),
            (WorkloadParams::LogFilter { lines, .. }, ParamKey::Lines) => Some(*lines),
            (WorkloadParams::LogFilter { avg_line_length, .. }, ParamKey::AvgLineLength) => {
                Some(*avg_line_length)
            }
            (WorkloadParams::LogFilter { error_percentage, .. }, ParamKey::ErrorPercentage) => {
                Some(*error_percentage)
            }
            (WorkloadParams::LogFilter { error_message_size, .. }, ParamKey::ErrorMessageSize) => {
                Some(*error_message_size)
            }
            _ => None,
        }
    }

    /// Copy of these parameters with one field replaced; unchanged when the
    /// key does not belong to this scenario.
    pub fn with(&self, key: ParamKey, value: f64) -> Self {
        let mut out = *self;
        match (&mut out, key) {
            (WorkloadParams::Sort { records, .. }, ParamKey::Records) => *records = value,
            (WorkloadParams::Sort { avg_record_size, .. }, ParamKey::AvgRecordSize) => {
                *avg_record_size = value
            }
            (WorkloadParams::Sort { key_index_pair_size, .. }, ParamKey::KeyIndexPairSize) => {
                *key_index_pair_size = value
            }
            (WorkloadParams::SalesReport { transactions, .. }, ParamKey::Transactions) => {
                *transactions = value
            }
            (
                WorkloadParams::SalesReport { avg_items_per_transaction, .. },
                ParamKey::AvgItemsPerTransaction,
            ) => *avg_items_per_transaction = value,
            (WorkloadParams::SalesReport { header_size, .. }, ParamKey::HeaderSize) => {
                *header_size = value
            }
            (WorkloadParams::SalesReport { item_size, .. }, ParamKey::ItemSize) => {
                *item_size = value
            }
            (WorkloadParams::LogFilter { lines, .. }, ParamKey::Lines) => *lines = value,
            (WorkloadParams::LogFilter { avg_line_length, .. }, ParamKey::AvgLineLength) => {
                *avg_line_length = value
            }
            (WorkloadParams::LogFilter { error_percentage, .. }, ParamKey::ErrorPercentage) => {
                *error_percentage = value
            }
            (WorkloadParams::LogFilter { error_message_size, .. }, ParamKey::ErrorMessageSize) => {
                *error_message_size = value
            }
            _ => {}
        }
        out
    }

    /// Run every variant of this workload's scenario, standard first.
    ///
    /// Each call is independent and stateless; an invalid workload yields
    /// sentinel results rather than an error.
    pub fn run_all(&self, factors: &ConversionFactors) -> Vec<ModelResult> {
        match *self {
            WorkloadParams::Sort {
                records,
                avg_record_size,
                key_index_pair_size,
            } => vec![
                sort::standard_sort(records, avg_record_size, factors),
                sort::efficient_sort(records, avg_record_size, factors),
                sort::index_sort(records, avg_record_size, key_index_pair_size, factors),
            ],
            WorkloadParams::SalesReport {
                transactions,
                avg_items_per_transaction,
                header_size,
                item_size,
            } => vec![
                sales::standard_sales_report(
                    transactions,
                    avg_items_per_transaction,
                    header_size,
                    item_size,
                    factors,
                ),
                sales::green_sales_report(
                    transactions,
                    avg_items_per_transaction,
                    header_size,
                    item_size,
                    factors,
                ),
            ],
            WorkloadParams::LogFilter {
                lines,
                avg_line_length,
                error_percentage,
                error_message_size,
            } => vec![
                logs::standard_log_filter(
                    lines,
                    avg_line_length,
                    error_percentage,
                    error_message_size,
                    factors,
                ),
                logs::green_log_filter(
                    lines,
                    avg_line_length,
                    error_percentage,
                    error_message_size,
                    factors,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors() -> ConversionFactors {
        ConversionFactors::new(1.2e-10, 6e-11, 275.0)
    }

    #[test]
    fn test_run_all_variant_order_matches_catalog() {
        for scenario in Scenario::ALL {
            let params = WorkloadParams::defaults(scenario);
            let results = params.run_all(&factors());
            assert_eq!(results.len(), scenario.variants().len());
            for (result, kind) in results.iter().zip(scenario.variants()) {
                assert_eq!(result.kind, *kind);
                assert!(result.is_applicable());
            }
        }
    }

    #[test]
    fn test_param_get_and_with() {
        let params = WorkloadParams::defaults(Scenario::LogFilter);
        assert_eq!(params.get(ParamKey::Lines), Some(100_000.0));
        assert_eq!(params.get(ParamKey::Records), None);

        let varied = params.with(ParamKey::ErrorPercentage, 20.0);
        assert_eq!(varied.get(ParamKey::ErrorPercentage), Some(20.0));
        // Other fields untouched
        assert_eq!(varied.get(ParamKey::Lines), Some(100_000.0));

        // Foreign key is a no-op
        assert_eq!(params.with(ParamKey::ItemSize, 9.0), params);
    }

    #[test]
    fn test_primary_key_per_scenario() {
        assert_eq!(
            WorkloadParams::defaults(Scenario::Sort).primary_key(),
            ParamKey::Records
        );
        assert_eq!(
            WorkloadParams::defaults(Scenario::SalesReport).primary_key(),
            ParamKey::Transactions
        );
        assert_eq!(
            WorkloadParams::defaults(Scenario::LogFilter).primary_key(),
            ParamKey::Lines
        );
    }
}
