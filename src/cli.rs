use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cost-calc", version, about = "Product Cost Calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute a cost breakdown
    Estimate(EstimateArgs),

    /// List the machine catalog (default)
    Machines,

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Request file (TOML, or JSON with a .json extension); flags override its values
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Material cost in euros
    #[arg(short, long, allow_negative_numbers = true)]
    pub material_cost: Option<String>,

    /// Number of units produced
    #[arg(short, long, allow_negative_numbers = true)]
    pub units: Option<String>,

    /// Machine usage as NAME=MINUTES (repeatable)
    #[arg(short = 'M', long = "machine", value_name = "NAME=MINUTES")]
    pub machines: Vec<String>,

    /// Manual labor time in minutes
    #[arg(long, allow_negative_numbers = true)]
    pub manual_minutes: Option<String>,

    /// Product engineering time in minutes
    #[arg(long, allow_negative_numbers = true)]
    pub engineering_minutes: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Machines if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Machines)
    }
}
