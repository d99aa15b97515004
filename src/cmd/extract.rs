//! Extract command - numeric value or score of a single input

use clap::Args;
use taxview::core::{extract_score, parse_value};

#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// Text to extract from (e.g. "€ 1.200" or "87 points")
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Extract a two-digit score instead of a plain amount
    #[arg(long)]
    score: bool,
}

impl ExtractCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.score {
            println!("{}", extract_score(self.value.as_str()));
        } else {
            println!("{}", parse_value(self.value.as_str()));
        }
        Ok(())
    }
}
