//! Strategies command - ranked strategy cards, or the selected one

use super::read_report;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use taxview::core::Strategy;

#[derive(Args, Debug)]
pub struct StrategiesCommand {
    /// JSON report file (use "-" for stdin)
    #[arg(short, long)]
    report: PathBuf,

    /// Show only the strategy with this id
    #[arg(short, long)]
    select: Option<String>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Tabled)]
struct StrategyRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Strategy")]
    title: String,
    #[tabled(rename = "Score")]
    score: u8,
}

#[derive(Debug, Serialize)]
struct StrategyData<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    score: u8,
}

impl<'a> From<&'a Strategy> for StrategyData<'a> {
    fn from(s: &'a Strategy) -> Self {
        StrategyData {
            id: &s.id,
            title: &s.title,
            description: s.description.as_deref(),
            score: s.score(),
        }
    }
}

impl StrategiesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let report = read_report(&self.report)?;

        let selected: Vec<&Strategy> = match &self.select {
            Some(id) => {
                let strategy = report
                    .strategy(id)
                    .ok_or_else(|| anyhow::anyhow!("no strategy with id '{id}' in report"))?;
                log::info!("Selected strategy {}", strategy.id);
                vec![strategy]
            }
            None => report.ranked_strategies(),
        };

        if self.json {
            let data: Vec<StrategyData> = selected.into_iter().map(StrategyData::from).collect();
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else if self.select.is_some() {
            print_detail(selected[0]);
        } else {
            print_table(&selected);
        }
        Ok(())
    }
}

fn print_table(strategies: &[&Strategy]) {
    if strategies.is_empty() {
        println!("No strategies in report");
        return;
    }

    let rows: Vec<StrategyRow> = strategies
        .iter()
        .map(|s| StrategyRow {
            id: s.id.clone(),
            title: s.title.clone(),
            score: s.score(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

fn print_detail(strategy: &Strategy) {
    println!("{} ({})", strategy.title, strategy.id);
    println!("Score: {}", strategy.score());
    if let Some(description) = &strategy.description {
        println!();
        println!("{description}");
    }
}
