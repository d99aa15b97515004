//! Summary command - yearly cost breakdown for a report

use super::{read_estimate, read_report};
use clap::Args;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use taxview::core::{YearlyEstimate, YearlyTotal};

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// JSON report file (use "-" for stdin)
    #[arg(short, long)]
    report: PathBuf,

    /// JSON file with estimate settings (labels, recurring_cost, currency_symbol)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output as JSON instead of formatted text
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output as CSV instead of formatted text
    #[arg(long)]
    csv: bool,
}

#[derive(Tabled)]
struct CostRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Source amount")]
    source: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// One CSV record per cost line, plus the recurring cost and total
#[derive(Debug, Serialize)]
struct CostRecord<'a> {
    item: &'a str,
    amount: &'a str,
    value: u64,
    found: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData<'a> {
    #[serde(flatten)]
    total: &'a YearlyTotal,
    taxes_total: u64,
    total_display: String,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let report = read_report(&self.report)?;
        let estimate = read_estimate(self.config.as_deref())?;
        let total = estimate.calculate(&report);

        if self.json {
            let data = SummaryData {
                total: &total,
                taxes_total: total.taxes_total(),
                total_display: estimate.display(total.total),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        } else if self.csv {
            write_csv(&total, io::stdout())
        } else {
            print_table(&estimate, &total);
            Ok(())
        }
    }
}

fn print_table(estimate: &YearlyEstimate, total: &YearlyTotal) {
    let mut rows: Vec<CostRow> = total
        .lines
        .iter()
        .map(|line| CostRow {
            item: line.label.clone(),
            source: if line.found {
                line.amount.clone()
            } else {
                "(not in report)".to_string()
            },
            value: estimate.display(line.value),
        })
        .collect();
    rows.push(CostRow {
        item: "Taxes subtotal".to_string(),
        source: String::new(),
        value: estimate.display(total.taxes_total()),
    });
    rows.push(CostRow {
        item: "Recurring (estimated)".to_string(),
        source: String::new(),
        value: estimate.display(total.recurring_cost),
    });
    rows.push(CostRow {
        item: "Yearly total".to_string(),
        source: String::new(),
        value: estimate.display(total.total),
    });

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string();

    println!("Yearly Cost Estimate");
    println!("{table}");
}

fn write_csv<W: io::Write>(total: &YearlyTotal, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for line in &total.lines {
        wtr.serialize(CostRecord {
            item: &line.label,
            amount: &line.amount,
            value: line.value,
            found: line.found,
        })?;
    }
    wtr.serialize(CostRecord {
        item: "recurring",
        amount: "",
        value: total.recurring_cost,
        found: false,
    })?;
    wtr.serialize(CostRecord {
        item: "total",
        amount: "",
        value: total.total,
        found: false,
    })?;
    wtr.flush()?;
    Ok(())
}
