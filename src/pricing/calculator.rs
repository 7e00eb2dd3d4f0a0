use crate::catalog::MachineCatalog;
use crate::error::EstimateError;
use crate::pricing::models::{EstimateRequest, EstimateResult, LaborRates, MINUTES_PER_HOUR};
use std::sync::Arc;
use tracing::{debug, warn};

/// Calculator bound to one catalog and one set of labor rates
#[derive(Debug, Clone)]
pub struct CostCalculator {
    catalog: Arc<MachineCatalog>,
    rates: LaborRates,
}

impl CostCalculator {
    /// Create a new cost calculator
    pub fn new(catalog: Arc<MachineCatalog>, rates: LaborRates) -> Self {
        Self { catalog, rates }
    }

    pub fn catalog(&self) -> &MachineCatalog {
        &self.catalog
    }

    /// Calculate the cost breakdown for a request
    pub fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult, EstimateError> {
        estimate(request, &self.catalog, &self.rates)
    }
}

/// Compute the cost breakdown of `request`
///
/// Fails with [`EstimateError::UnknownMachine`] if a usage names a machine
/// missing from `catalog`, and with [`EstimateError::InvalidInput`] if any
/// amount or duration is negative or not finite, or if the total overflows.
/// Per-unit figures divide by
/// the effective unit count (0 becomes 1).
pub fn estimate(
    request: &EstimateRequest,
    catalog: &MachineCatalog,
    rates: &LaborRates,
) -> Result<EstimateResult, EstimateError> {
    validate_request(request)?;

    let total_machine_cost = machine_cost(request, catalog)?;
    let total_labor_cost = request.manual_minutes * rates.manual_rate_per_minute();
    let total_engineering_cost = request.engineering_minutes * rates.engineering_rate_per_minute();
    let total_cost =
        request.material_cost + total_machine_cost + total_labor_cost + total_engineering_cost;
    // Finite inputs can still overflow once multiplied and summed
    ensure_non_negative("total_cost", total_cost)?;

    let effective_unit_count = request.effective_unit_count();
    let units = f64::from(effective_unit_count);

    let result = EstimateResult {
        total_material_cost: request.material_cost,
        total_machine_cost,
        total_labor_cost,
        total_engineering_cost,
        total_cost,
        cost_per_unit: total_cost / units,
        material_cost_per_unit: request.material_cost / units,
        labor_cost_per_unit: total_labor_cost / units,
        material_plus_labor_per_unit: (request.material_cost + total_labor_cost) / units,
        effective_unit_count,
    };

    debug!(
        machines = request.machine_usages.len(),
        units = effective_unit_count,
        total_cost = result.total_cost,
        cost_per_unit = result.cost_per_unit,
        "Estimate computed"
    );

    Ok(result)
}

fn machine_cost(request: &EstimateRequest, catalog: &MachineCatalog) -> Result<f64, EstimateError> {
    let mut total = 0.0;

    for usage in &request.machine_usages {
        let rate_per_hour = match catalog.rate_per_hour(&usage.machine_name) {
            Some(rate) => rate,
            None => {
                warn!("No rate in catalog for machine: {}", usage.machine_name);
                return Err(EstimateError::UnknownMachine {
                    name: usage.machine_name.clone(),
                });
            }
        };

        total += (rate_per_hour / MINUTES_PER_HOUR) * usage.minutes;
    }

    Ok(total)
}

fn validate_request(request: &EstimateRequest) -> Result<(), EstimateError> {
    ensure_non_negative("material_cost", request.material_cost)?;
    ensure_non_negative("manual_minutes", request.manual_minutes)?;
    ensure_non_negative("engineering_minutes", request.engineering_minutes)?;

    for usage in &request.machine_usages {
        ensure_non_negative("machine minutes", usage.minutes)?;
    }

    Ok(())
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), EstimateError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        warn!("Rejected {} = {}", field, value);
        Err(EstimateError::InvalidInput { field, value })
    }
}
