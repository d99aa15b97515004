//! Schema command - print expected input formats

use clap::Args;
use schemars::schema_for;
use taxview::core::{Report, YearlyEstimate};

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which input to describe
    #[arg(value_enum, default_value = "report")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the report payload
    Report,
    /// JSON Schema for the estimate settings file
    Config,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = match self.format {
            SchemaFormat::Report => schema_for!(Report),
            SchemaFormat::Config => schema_for!(YearlyEstimate),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
