use clap::{Parser, Subcommand};

/// Baktun Maya calendar calculator.
#[derive(Parser)]
#[command(name = "baktun", version, about = "Maya Long Count calendar calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Long Count to its calendar round and western dates.
    Convert(ConvertArgs),
    /// Compute the distance number between two Long Counts.
    Distance(DistanceArgs),
    /// Expand a wildcard date pattern into every matching date.
    Solve(SolveArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Long Count to convert, e.g. "9.17.0.0.0".
    pub date: String,

    /// Correlation constant by name (Bowditch, Smiley, GMT,
    /// Astronomical, Martin-Skidmore).
    #[arg(short, long, default_value = "GMT")]
    pub correlation: String,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `distance` subcommand.
#[derive(clap::Args)]
pub struct DistanceArgs {
    /// Starting Long Count.
    pub from: String,

    /// Ending Long Count.
    pub to: String,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `solve` subcommand.
#[derive(clap::Args)]
pub struct SolveArgs {
    /// Pattern to expand: a Long Count ("9.17.*.0.0"), a calendar round
    /// ("* Ajaw 8 Kumk'u"), or a full date ("9.17.*.0.0 13 Ajaw * *").
    pub pattern: String,

    /// Emit the matches as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
