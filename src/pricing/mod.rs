pub mod calculator;
pub mod models;

pub use calculator::{estimate, CostCalculator};
pub use models::{
    round_to_cents, EstimateRequest, EstimateResult, LaborRates, MachineUsage,
};
