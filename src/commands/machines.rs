use anyhow::Result;
use colored::Colorize;
use product_cost_calc::config::Config;
use product_cost_calc::report;
use tracing::info;

/// Execute the machines command
///
/// Prints every catalog machine with its hourly and per-minute rate
pub fn execute(cfg: &Config) -> Result<()> {
    let catalog = cfg.catalog()?;
    info!("Listing {} machines", catalog.len());

    println!("{}", "Machine Catalog".green().bold());
    println!("{}", report::catalog_table(&catalog));
    println!(
        "  {} machines, new usages default to {}",
        catalog.len(),
        catalog.first().name
    );

    Ok(())
}
