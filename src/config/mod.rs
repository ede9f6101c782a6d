pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Operation;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "numbers-validator")]
#[command(about = "Check numbers and arrays of numbers")]
pub struct CliConfig {
    /// Operation to run on --input
    #[arg(short, long, value_enum, requires = "input")]
    pub operation: Option<Operation>,

    /// JSON input; text that is not valid JSON is taken as a string
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to a TOML batch file
    #[arg(short, long, conflicts_with = "operation")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}
