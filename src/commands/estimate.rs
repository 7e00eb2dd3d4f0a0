use anyhow::{Context, Result};
use colored::Colorize;
use product_cost_calc::config::Config;
use product_cost_calc::input::{parse_decimal, parse_machine_usage, parse_unit_count};
use product_cost_calc::pricing::{CostCalculator, EstimateRequest};
use product_cost_calc::report;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::cli::{EstimateArgs, OutputFormat};

/// Execute the estimate command
///
/// Builds the request from the optional request file and the command line,
/// then prints the breakdown as a table or JSON
pub fn execute(cfg: &Config, args: &EstimateArgs) -> Result<()> {
    let calculator = CostCalculator::new(Arc::new(cfg.catalog()?), cfg.labor_rates);

    let mut request = match &args.request {
        Some(path) => load_request(path)?,
        None => EstimateRequest::default(),
    };
    apply_overrides(&mut request, args)?;

    info!(
        "Estimating {} machine usage(s) over {} unit(s) against {} catalog machines",
        request.machine_usages.len(),
        request.effective_unit_count(),
        calculator.catalog().len()
    );

    let result = calculator
        .estimate(&request)
        .map_err(|e| {
            warn!(kind = e.kind(), "Estimate rejected: {}", e);
            e
        })
        .context("Estimate failed (run `cost-calc machines` to list known machines)")?;

    match args.format {
        OutputFormat::Table => {
            println!("{}", "Cost Breakdown".green().bold());
            println!("{}", report::breakdown_table(&result));
        }
        OutputFormat::Json => {
            println!("{}", report::render_json(&result)?);
        }
    }

    Ok(())
}

/// Read a request file, JSON when the extension says so and TOML otherwise
fn load_request(path: &Path) -> Result<EstimateRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let request = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON request {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML request {}", path.display()))?
    };

    info!("Loaded request from {}", path.display());
    Ok(request)
}

/// Apply command-line values on top of the request
///
/// Scalars replace file values; machine usages are appended.
fn apply_overrides(request: &mut EstimateRequest, args: &EstimateArgs) -> Result<()> {
    if let Some(text) = &args.material_cost {
        request.material_cost = parse_decimal(text);
    }
    if let Some(text) = &args.units {
        request.unit_count = parse_unit_count(text);
    }
    for text in &args.machines {
        request.machine_usages.push(parse_machine_usage(text)?);
    }
    if let Some(text) = &args.manual_minutes {
        request.manual_minutes = parse_decimal(text);
    }
    if let Some(text) = &args.engineering_minutes {
        request.engineering_minutes = parse_decimal(text);
    }

    Ok(())
}
