use clap::{Parser, Subcommand};

mod cmd;

use cmd::{
    extract::ExtractCommand, schema::SchemaCommand, strategies::StrategiesCommand,
    summary::SummaryCommand,
};

#[derive(Parser, Debug)]
#[command(name = "taxview", version, about = "Fiscal report breakdowns and yearly cost estimates")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Yearly cost breakdown of a report
    Summary(SummaryCommand),
    /// Strategy cards ranked by score
    Strategies(StrategiesCommand),
    /// Extract a numeric value or score from text
    Extract(ExtractCommand),
    /// Print the JSON Schema of the inputs
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Summary(cmd) => cmd.exec(),
        Command::Strategies(cmd) => cmd.exec(),
        Command::Extract(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
