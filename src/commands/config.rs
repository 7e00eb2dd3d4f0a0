use anyhow::Result;
use colored::Colorize;
use product_cost_calc::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file, environment and defaults merged)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file
pub fn validate(cfg: &Config) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let catalog = cfg.catalog()?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Machines: {}", catalog.len());
    println!(
        "  Labor Rates: manual {}/h, engineering {}/h",
        cfg.labor_rates.manual_rate_per_hour, cfg.labor_rates.engineering_rate_per_hour
    );
    println!("  Cheapest Machine: {}", cheapest_machine(cfg).unwrap_or("-"));

    info!("Configuration validation successful");
    Ok(())
}

/// Name of the machine with the lowest hourly rate
fn cheapest_machine(cfg: &Config) -> Option<&str> {
    cfg.machines
        .iter()
        .min_by(|a, b| a.rate_per_hour.total_cmp(&b.rate_per_hour))
        .map(|machine| machine.name.as_str())
}
