pub mod extract;
pub mod format;
pub mod report;
pub mod strategy;
pub mod totals;

// Flat public surface for domain types and functions.
pub use extract::{extract_score, parse_value, RawValue, DEFAULT_SCORE, DEFAULT_VALUE};
pub use format::{format_amount, EURO};
pub use report::{read_report_json, Report, ReportError, TaxEntry, ZERO_AMOUNT};
pub use strategy::Strategy;
pub use totals::{CostLine, YearlyEstimate, YearlyTotal};
