use super::extract::{parse_value, RawValue, DEFAULT_VALUE};
use super::strategy::Strategy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::Read;
use std::path::PathBuf;

/// Display text of a zero amount, returned when a lookup finds nothing.
pub const ZERO_AMOUNT: &str = "€ 0";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to read report: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed report JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no input received, provide a file or pipe data to stdin")]
    EmptyInput,
    #[error("failed to read estimate config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed estimate config {}: {source}", .path.display())]
    ConfigJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Input root for report JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    /// Fiscal line items, in the order the source lists them
    #[serde(default)]
    pub taxes: Vec<TaxEntry>,
    /// Strategy cards offered with the report
    #[serde(default)]
    pub strategies: Vec<Strategy>,
}

/// A named fiscal line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaxEntry {
    /// Label, usually containing a tax code (e.g. "IMU 2024 - acconto")
    pub name: String,
    /// Display-formatted amount (e.g. "€ 1.200"); bare numbers are accepted
    pub amount: RawValue,
}

impl TaxEntry {
    /// Amount exactly as it should be displayed.
    pub fn amount_text(&self) -> Cow<'_, str> {
        match &self.amount {
            RawValue::Text(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    pub fn value(&self) -> u64 {
        parse_value(&self.amount)
    }
}

impl Report {
    /// First tax entry, in source order, whose name contains `label`.
    /// Matching is case-sensitive.
    pub fn find_tax(&self, label: &str) -> Option<&TaxEntry> {
        let found = self.taxes.iter().find(|t| t.name.contains(label));
        if found.is_none() {
            log::debug!("no tax entry matching '{label}'");
        }
        found
    }

    /// Display amount of the first entry matching `label`, or [`ZERO_AMOUNT`].
    pub fn find_tax_amount(&self, label: &str) -> Cow<'_, str> {
        self.find_tax(label)
            .map_or(Cow::Borrowed(ZERO_AMOUNT), TaxEntry::amount_text)
    }

    /// Numeric value of the first entry matching `label`, 0 when absent.
    pub fn find_tax_value(&self, label: &str) -> u64 {
        self.find_tax(label).map_or(DEFAULT_VALUE, TaxEntry::value)
    }

    /// Strategy selected by `id`, first match wins.
    pub fn strategy(&self, id: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id == id)
    }

    /// Strategies ordered by score, highest first. Equal scores keep their
    /// source order.
    pub fn ranked_strategies(&self) -> Vec<&Strategy> {
        let mut ranked: Vec<_> = self.strategies.iter().collect();
        ranked.sort_by_key(|s| std::cmp::Reverse(s.score()));
        ranked
    }
}

/// Read a report from JSON
pub fn read_report_json<R: Read>(reader: R) -> Result<Report, ReportError> {
    let report: Report = serde_json::from_reader(reader)?;
    log::debug!(
        "read report with {} tax entries and {} strategies",
        report.taxes.len(),
        report.strategies.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, amount: &str) -> TaxEntry {
        TaxEntry {
            name: name.to_string(),
            amount: amount.into(),
        }
    }

    fn report(taxes: Vec<TaxEntry>) -> Report {
        Report {
            taxes,
            strategies: Vec::new(),
        }
    }

    fn strategy(id: &str, score: &str) -> Strategy {
        Strategy {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: None,
            score: Some(score.into()),
        }
    }

    #[test]
    fn find_tax_amount_returns_matching_entry() {
        let r = report(vec![
            entry("TARI rifiuti", "€ 300"),
            entry("IMU seconda casa", "€ 1.200"),
        ]);
        assert_eq!(r.find_tax_amount("IMU"), "€ 1.200");
        assert_eq!(r.find_tax_value("IMU"), 1200);
    }

    #[test]
    fn find_tax_amount_first_match_wins() {
        let first = entry("IMU acconto", "€ 600");
        let full = report(vec![
            entry("TARI", "€ 300"),
            first.clone(),
            entry("IMU saldo", "€ 700"),
        ]);
        let only_first = report(vec![first]);
        assert_eq!(full.find_tax_amount("IMU"), only_first.find_tax_amount("IMU"));
        assert_eq!(full.find_tax_amount("IMU"), "€ 600");
    }

    #[test]
    fn find_tax_amount_is_case_sensitive() {
        let r = report(vec![entry("imu", "€ 5")]);
        assert_eq!(r.find_tax_amount("IMU"), ZERO_AMOUNT);
    }

    #[test]
    fn find_tax_amount_missing_returns_placeholder() {
        let r = report(vec![entry("TARI", "€ 300")]);
        assert_eq!(r.find_tax_amount("IMU"), ZERO_AMOUNT);
        assert_eq!(r.find_tax_value("IMU"), 0);
        assert_eq!(Report::default().find_tax_amount("TARI"), ZERO_AMOUNT);
    }

    #[test]
    fn numeric_amount_is_displayed_as_number() {
        let r = report(vec![TaxEntry {
            name: "IMU".to_string(),
            amount: RawValue::Integer(950),
        }]);
        assert_eq!(r.find_tax_amount("IMU"), "950");
        assert_eq!(r.find_tax_value("IMU"), 950);
    }

    #[test]
    fn malformed_amount_parses_to_zero() {
        let r = report(vec![entry("IMU", "n/d")]);
        assert_eq!(r.find_tax_amount("IMU"), "n/d");
        assert_eq!(r.find_tax_value("IMU"), 0);
    }

    #[test]
    fn strategy_lookup_by_id() {
        let r = Report {
            taxes: Vec::new(),
            strategies: vec![strategy("a", "40"), strategy("b", "90")],
        };
        assert_eq!(r.strategy("b").map(|s| s.score()), Some(90));
        assert!(r.strategy("c").is_none());
    }

    #[test]
    fn ranked_strategies_sorted_by_score_stable() {
        let r = Report {
            taxes: Vec::new(),
            strategies: vec![
                strategy("low", "10"),
                strategy("tie1", "70"),
                strategy("high", "95"),
                strategy("tie2", "70"),
            ],
        };
        let ids: Vec<_> = r.ranked_strategies().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "tie1", "tie2", "low"]);
    }

    #[test]
    fn read_report_json_defaults_missing_sections() {
        let r = read_report_json(r#"{}"#.as_bytes()).unwrap();
        assert_eq!(r, Report::default());
    }

    #[test]
    fn read_report_json_parses_entries() {
        let json = r#"{
            "taxes": [
                { "name": "IMU 2024", "amount": "€ 1.200" },
                { "name": "TARI 2024", "amount": 310 }
            ],
            "strategies": [
                { "id": "donation", "title": "Donation", "score": "87 points" }
            ],
            "generated_by": "ignored"
        }"#;
        let r = read_report_json(json.as_bytes()).unwrap();
        assert_eq!(r.taxes.len(), 2);
        assert_eq!(r.find_tax_value("TARI"), 310);
        assert_eq!(r.strategy("donation").map(Strategy::score), Some(87));
    }

    #[test]
    fn config_error_names_config_path() {
        let source = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = ReportError::ConfigJson {
            path: PathBuf::from("settings/estimate.json"),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("malformed estimate config settings/estimate.json: "));
        assert!(!msg.contains("report"));
    }

    #[test]
    fn read_report_json_rejects_malformed_input() {
        let err = read_report_json("{ not json".as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::Json(_)));
    }
}
