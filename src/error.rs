use thiserror::Error;

/// Errors raised while building or evaluating an estimate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// A machine usage references a name absent from the catalog
    #[error("Unknown machine: {name}")]
    UnknownMachine { name: String },

    /// A numeric input is negative or not finite
    #[error("Invalid {field}: {value} (must be a finite, non-negative number)")]
    InvalidInput { field: &'static str, value: f64 },

    /// Editing a machine usage that does not exist
    #[error("Machine usage index {index} out of range (job has {len} entries)")]
    UsageIndexOutOfRange { index: usize, len: usize },

    /// A `NAME=MINUTES` argument could not be split
    #[error("Malformed machine usage '{0}', expected NAME=MINUTES")]
    MalformedUsage(String),
}

impl EstimateError {
    /// Short machine-readable name, used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownMachine { .. } => "unknown_machine",
            Self::InvalidInput { .. } => "invalid_input",
            Self::UsageIndexOutOfRange { .. } => "usage_index_out_of_range",
            Self::MalformedUsage(_) => "malformed_usage",
        }
    }
}

/// Errors raised while building a machine catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Machine catalog must contain at least one machine")]
    Empty,

    #[error("Duplicate machine in catalog: {0}")]
    DuplicateMachine(String),

    #[error("Machine name cannot be empty")]
    EmptyName,

    #[error("Invalid hourly rate for '{name}': {rate} (must be positive)")]
    InvalidRate { name: String, rate: f64 },
}
