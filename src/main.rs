use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod commands;

use product_cost_calc::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Logging settings come from the config file, so load it first and fall
    // back to defaults for the subscriber if it fails
    let loaded = config::load_config(&args.config);
    let logging = loaded
        .as_ref()
        .map(|cfg| cfg.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    let cfg = loaded.with_context(|| {
        format!(
            "Failed to load configuration from {}",
            args.config.display()
        )
    })?;

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Estimate(estimate_args) => {
            commands::estimate::execute(&cfg, &estimate_args)?;
        }
        cli::Commands::Machines => {
            commands::machines::execute(&cfg)?;
        }
        cli::Commands::Test => {
            commands::test::execute(&cfg, &args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg)?,
        },
        cli::Commands::Version => {
            println!("Product Cost Calculator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
