//! Environment overrides for configuration
//!
//! Kept in their own test binary: the variables set here are process-wide
//! and would otherwise leak into the file-loading tests running in parallel.

use product_cost_calc::config::load_config;
use std::io::Write;

#[test]
fn test_environment_overrides_file_values() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(b"[labor_rates]\nmanual_rate_per_hour = 22.0\n")?;

    std::env::set_var("COST_CALC__LABOR_RATES__ENGINEERING_RATE_PER_HOUR", "40");
    std::env::set_var("COST_CALC__LOGGING__LEVEL", "debug");
    let cfg = load_config(file.path());
    std::env::remove_var("COST_CALC__LABOR_RATES__ENGINEERING_RATE_PER_HOUR");
    std::env::remove_var("COST_CALC__LOGGING__LEVEL");
    let cfg = cfg?;

    assert_eq!(cfg.labor_rates.engineering_rate_per_hour, 40.0);
    // File value survives where the environment is silent
    assert_eq!(cfg.labor_rates.manual_rate_per_hour, 22.0);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.machines.len(), 25);
    Ok(())
}
