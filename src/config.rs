use crate::catalog::{default_machines, MachineCatalog, MachineRate};
use crate::pricing::LaborRates;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `COST_CALC__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "COST_CALC";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Operator-level labor rates (not exposed to end users)
    #[serde(default)]
    pub labor_rates: LaborRates,

    /// Machine catalog in display order
    #[serde(default = "default_machines")]
    pub machines: Vec<MachineRate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            labor_rates: LaborRates::default(),
            machines: default_machines(),
        }
    }
}

impl Config {
    /// Build the machine catalog described by this configuration
    pub fn catalog(&self) -> anyhow::Result<MachineCatalog> {
        Ok(MachineCatalog::new(self.machines.clone())?)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Load configuration from `path` (optional) layered with environment overrides
///
/// A missing file is not an error: the built-in catalog and default rates apply.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    // Catalog rules (non-empty, unique names, positive rates) live with the catalog
    cfg.catalog()?;

    validate_rate("manual_rate_per_hour", cfg.labor_rates.manual_rate_per_hour)?;
    validate_rate(
        "engineering_rate_per_hour",
        cfg.labor_rates.engineering_rate_per_hour,
    )?;

    match cfg.logging.format.to_ascii_lowercase().as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid logging format '{}': expected 'text' or 'json'", other),
    }

    if cfg.logging.level.trim().is_empty() {
        anyhow::bail!("Logging level cannot be empty");
    }

    Ok(())
}

fn validate_rate(name: &str, rate: f64) -> anyhow::Result<()> {
    if !rate.is_finite() || rate <= 0.0 {
        anyhow::bail!("Labor rate '{}' must be positive, got {}", name, rate);
    }
    Ok(())
}
