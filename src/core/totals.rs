//! Yearly cost estimate built from a report's tax entries.

use super::extract::parse_value;
use super::format::{format_amount, EURO};
use super::report::Report;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which tax entries make up the yearly estimate, plus the recurring cost
/// that the report does not itemise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct YearlyEstimate {
    /// Label substrings looked up in the report, one line each
    pub labels: Vec<String>,
    /// Estimated recurring yearly cost added to the looked-up amounts
    pub recurring_cost: u64,
    /// Symbol used when rendering totals
    pub currency_symbol: String,
}

impl Default for YearlyEstimate {
    fn default() -> Self {
        YearlyEstimate {
            labels: vec!["IMU".to_string(), "TARI".to_string()],
            recurring_cost: 1200,
            currency_symbol: EURO.to_string(),
        }
    }
}

/// One looked-up amount of the estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostLine {
    pub label: String,
    /// Display text from the report, or the zero placeholder
    pub amount: String,
    pub value: u64,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyTotal {
    pub lines: Vec<CostLine>,
    pub recurring_cost: u64,
    pub total: u64,
}

impl YearlyTotal {
    /// Sum of the looked-up amounts, without the recurring cost.
    pub fn taxes_total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.value))
    }
}

impl YearlyEstimate {
    pub fn calculate(&self, report: &Report) -> YearlyTotal {
        let lines: Vec<CostLine> = self
            .labels
            .iter()
            .map(|label| {
                let amount = report.find_tax_amount(label).into_owned();
                CostLine {
                    label: label.clone(),
                    value: parse_value(amount.as_str()),
                    found: report.find_tax(label).is_some(),
                    amount,
                }
            })
            .collect();

        let mut total = YearlyTotal {
            lines,
            recurring_cost: self.recurring_cost,
            total: 0,
        };
        total.total = total.taxes_total().saturating_add(self.recurring_cost);

        log::debug!(
            "yearly estimate: {} lines, recurring {}, total {}",
            total.lines.len(),
            total.recurring_cost,
            total.total
        );
        total
    }

    /// Render an amount with this estimate's currency symbol.
    pub fn display(&self, value: u64) -> String {
        format_amount(value, &self.currency_symbol)
    }
}
