use crate::catalog::MachineCatalog;
use crate::error::EstimateError;
use crate::input::parse_unit_count;
use serde::{Deserialize, Deserializer, Serialize};

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const DEFAULT_MANUAL_RATE_PER_HOUR: f64 = 20.0;
pub const DEFAULT_ENGINEERING_RATE_PER_HOUR: f64 = 25.0;

/// One machine applied to the job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineUsage {
    #[serde(alias = "machine")]
    pub machine_name: String,
    #[serde(default)]
    pub minutes: f64,
}

impl MachineUsage {
    pub fn new(machine_name: impl Into<String>, minutes: f64) -> Self {
        Self {
            machine_name: machine_name.into(),
            minutes,
        }
    }
}

/// Input to one cost estimate
///
/// Owned by the caller and edited in place; `estimate` only borrows a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateRequest {
    pub material_cost: f64,
    /// Units the cost is amortized over; 0 is treated as 1
    #[serde(deserialize_with = "deserialize_unit_count")]
    pub unit_count: u32,
    pub machine_usages: Vec<MachineUsage>,
    pub manual_minutes: f64,
    pub engineering_minutes: f64,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self {
            material_cost: 0.0,
            unit_count: 1,
            machine_usages: Vec::new(),
            manual_minutes: 0.0,
            engineering_minutes: 0.0,
        }
    }
}

/// Accept the same unit counts in a request file as on the command line
///
/// Integers, decimals and strings all go through [`parse_unit_count`], so
/// `-3` becomes 1 and `2.5` becomes 2.
fn deserialize_unit_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawUnitCount {
        Integer(i64),
        Decimal(f64),
        Text(String),
    }

    let text = match RawUnitCount::deserialize(deserializer)? {
        RawUnitCount::Integer(count) => count.to_string(),
        RawUnitCount::Decimal(count) => count.to_string(),
        RawUnitCount::Text(text) => text,
    };
    Ok(parse_unit_count(&text))
}

impl EstimateRequest {
    /// Unit count used for every per-unit division
    pub fn effective_unit_count(&self) -> u32 {
        if self.unit_count > 0 {
            self.unit_count
        } else {
            1
        }
    }

    /// Append a usage of `machine_name`, builder style
    pub fn with_machine(mut self, machine_name: impl Into<String>, minutes: f64) -> Self {
        self.machine_usages.push(MachineUsage::new(machine_name, minutes));
        self
    }

    /// Append a zero-minute usage of the catalog's first machine, returning its index
    pub fn add_machine(&mut self, catalog: &MachineCatalog) -> usize {
        self.machine_usages
            .push(MachineUsage::new(catalog.first().name.clone(), 0.0));
        self.machine_usages.len() - 1
    }

    pub fn set_machine(
        &mut self,
        index: usize,
        machine_name: impl Into<String>,
    ) -> Result<(), EstimateError> {
        self.usage_mut(index)?.machine_name = machine_name.into();
        Ok(())
    }

    pub fn set_minutes(&mut self, index: usize, minutes: f64) -> Result<(), EstimateError> {
        self.usage_mut(index)?.minutes = minutes;
        Ok(())
    }

    pub fn remove_machine(&mut self, index: usize) -> Result<MachineUsage, EstimateError> {
        if index >= self.machine_usages.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.machine_usages.remove(index))
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn usage_mut(&mut self, index: usize) -> Result<&mut MachineUsage, EstimateError> {
        let len = self.machine_usages.len();
        self.machine_usages
            .get_mut(index)
            .ok_or(EstimateError::UsageIndexOutOfRange { index, len })
    }

    fn out_of_range(&self, index: usize) -> EstimateError {
        EstimateError::UsageIndexOutOfRange {
            index,
            len: self.machine_usages.len(),
        }
    }
}

/// Hourly labor rates applied to manual and engineering minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborRates {
    #[serde(default = "default_manual_rate_per_hour")]
    pub manual_rate_per_hour: f64,
    #[serde(default = "default_engineering_rate_per_hour")]
    pub engineering_rate_per_hour: f64,
}

impl Default for LaborRates {
    fn default() -> Self {
        Self {
            manual_rate_per_hour: DEFAULT_MANUAL_RATE_PER_HOUR,
            engineering_rate_per_hour: DEFAULT_ENGINEERING_RATE_PER_HOUR,
        }
    }
}

impl LaborRates {
    pub fn manual_rate_per_minute(&self) -> f64 {
        self.manual_rate_per_hour / MINUTES_PER_HOUR
    }

    pub fn engineering_rate_per_minute(&self) -> f64 {
        self.engineering_rate_per_hour / MINUTES_PER_HOUR
    }
}

fn default_manual_rate_per_hour() -> f64 {
    DEFAULT_MANUAL_RATE_PER_HOUR
}

fn default_engineering_rate_per_hour() -> f64 {
    DEFAULT_ENGINEERING_RATE_PER_HOUR
}

/// Cost breakdown for one estimate
///
/// Values are unrounded; call [`EstimateResult::rounded`] for the display copy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EstimateResult {
    pub total_material_cost: f64,
    pub total_machine_cost: f64,
    pub total_labor_cost: f64,
    pub total_engineering_cost: f64,
    pub total_cost: f64,
    pub cost_per_unit: f64,
    pub material_cost_per_unit: f64,
    pub labor_cost_per_unit: f64,
    pub material_plus_labor_per_unit: f64,
    pub effective_unit_count: u32,
}

impl EstimateResult {
    /// Copy with every currency field rounded to cents
    pub fn rounded(&self) -> Self {
        Self {
            total_material_cost: round_to_cents(self.total_material_cost),
            total_machine_cost: round_to_cents(self.total_machine_cost),
            total_labor_cost: round_to_cents(self.total_labor_cost),
            total_engineering_cost: round_to_cents(self.total_engineering_cost),
            total_cost: round_to_cents(self.total_cost),
            cost_per_unit: round_to_cents(self.cost_per_unit),
            material_cost_per_unit: round_to_cents(self.material_cost_per_unit),
            labor_cost_per_unit: round_to_cents(self.labor_cost_per_unit),
            material_plus_labor_per_unit: round_to_cents(self.material_plus_labor_per_unit),
            effective_unit_count: self.effective_unit_count,
        }
    }

    /// Sum of the four cost components
    pub fn components_total(&self) -> f64 {
        self.total_material_cost
            + self.total_machine_cost
            + self.total_labor_cost
            + self.total_engineering_cost
    }
}

/// Round to two decimals, half away from zero
///
/// Noise below 1e-6 cents (1e-8 in currency units) is snapped away first,
/// so values such as 2.365 whose binary form sits just under the midpoint
/// still round up.
pub fn round_to_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    let snapped = (cents * 1e6).round() / 1e6;
    // `+ 0.0` folds -0.0 into 0.0
    snapped.round() / 100.0 + 0.0
}
