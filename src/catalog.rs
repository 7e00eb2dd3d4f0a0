use crate::error::CatalogError;
use crate::pricing::models::MINUTES_PER_HOUR;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Machines shipped with the calculator, in display order (currency units per hour)
const DEFAULT_MACHINES: &[(&str, f64)] = &[
    ("Eurolaser", 4.55),
    ("SEI Laser", 5.83),
    ("Golden Laser", 18.55),
    ("Zund M800 CV Knife Cutter 1", 5.41),
    ("Knife M800 CV Cutter 2", 5.41),
    ("Knife M800 Cutter 3", 5.41),
    ("Knife M800 Cutter 4", 5.41),
    ("Knife S3 Cutter 5", 5.59),
    ("Theame + Oven", 21.42),
    ("Sakurai + Oven", 27.21),
    ("Svecia + Oven", 22.37),
    ("Puokkari", 13.27),
    ("Atma 1", 15.69),
    ("Atma 2", 15.69),
    ("Digital Printer JFX200-2513", 23.75),
    ("Digital Printer JFX200-2513EX", 23.75),
    ("Digital Printer JFX200-2513 (2nd)", 23.75),
    ("Guillotine Perfecta 2", 10.45),
    ("Guillotine 1 Polar Mohr", 13.19),
    ("Suma Cutter", 1.04),
    ("Oven", 4.73),
    ("Neschen Laminator", 1.33),
    ("SEAL 62 Base Metal Laminator", 1.37),
    ("Pressing Machine Festo", 2.59),
    ("Coring Technigraf Machine", 4.84),
];

/// Hourly operating cost of one machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRate {
    pub name: String,
    pub rate_per_hour: f64,
}

impl MachineRate {
    pub fn new(name: impl Into<String>, rate_per_hour: f64) -> Self {
        Self {
            name: name.into(),
            rate_per_hour,
        }
    }

    pub fn rate_per_minute(&self) -> f64 {
        self.rate_per_hour / MINUTES_PER_HOUR
    }
}

/// Immutable, ordered lookup table of machine name to hourly rate
///
/// Always contains at least one machine, every name is unique and
/// every rate is positive and finite.
#[derive(Debug, Clone)]
pub struct MachineCatalog {
    machines: Vec<MachineRate>,
    index: HashMap<String, usize>,
}

impl MachineCatalog {
    /// Build a catalog, rejecting empty lists, duplicate names and bad rates
    pub fn new(machines: Vec<MachineRate>) -> Result<Self, CatalogError> {
        if machines.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(machines.len());
        for (position, machine) in machines.iter().enumerate() {
            if machine.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !machine.rate_per_hour.is_finite() || machine.rate_per_hour <= 0.0 {
                return Err(CatalogError::InvalidRate {
                    name: machine.name.clone(),
                    rate: machine.rate_per_hour,
                });
            }
            if index.insert(machine.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateMachine(machine.name.clone()));
            }
        }

        Ok(Self { machines, index })
    }

    /// The built-in machine list
    pub fn builtin() -> Self {
        let machines = default_machines();
        let index = machines
            .iter()
            .enumerate()
            .map(|(position, machine)| (machine.name.clone(), position))
            .collect();

        Self { machines, index }
    }

    pub fn rate_per_hour(&self, name: &str) -> Option<f64> {
        self.get(name).map(|machine| machine.rate_per_hour)
    }

    pub fn get(&self, name: &str) -> Option<&MachineRate> {
        self.index.get(name).map(|&position| &self.machines[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// First machine in declaration order, used as the default for new usages
    pub fn first(&self) -> &MachineRate {
        &self.machines[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &MachineRate> {
        self.machines.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.machines.iter().map(|machine| machine.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

impl Default for MachineCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in machine list as owned entries (also the config default)
pub fn default_machines() -> Vec<MachineRate> {
    DEFAULT_MACHINES
        .iter()
        .map(|&(name, rate)| MachineRate::new(name, rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = MachineCatalog::builtin();
        let validated = MachineCatalog::new(default_machines()).unwrap();

        assert_eq!(builtin.len(), 25);
        assert_eq!(validated.len(), builtin.len());
        assert_eq!(builtin.first().name, "Eurolaser");
        assert_eq!(builtin.rate_per_hour("Oven"), Some(4.73));
        assert_eq!(builtin.rate_per_hour("Golden Laser"), Some(18.55));
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = MachineCatalog::new(vec![
            MachineRate::new("Zeta", 1.0),
            MachineRate::new("Alpha", 2.0),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(catalog.first().name, "Zeta");
    }

    #[test]
    fn test_unknown_machine_lookup() {
        let catalog = MachineCatalog::builtin();
        assert!(!catalog.contains("Nonexistent"));
        assert_eq!(catalog.rate_per_hour("Nonexistent"), None);
        // Lookups are exact
        assert_eq!(catalog.rate_per_hour("oven"), None);
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert_eq!(MachineCatalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = MachineCatalog::new(vec![
            MachineRate::new("Oven", 4.73),
            MachineRate::new("Oven", 5.0),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateMachine("Oven".to_string())
        );
    }

    #[test]
    fn test_rejects_invalid_rates() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = MachineCatalog::new(vec![MachineRate::new("Oven", rate)]);
            assert!(matches!(result, Err(CatalogError::InvalidRate { .. })));
        }
    }

    #[test]
    fn test_rejects_blank_names() {
        let result = MachineCatalog::new(vec![MachineRate::new("  ", 1.0)]);
        assert_eq!(result.unwrap_err(), CatalogError::EmptyName);
    }

    #[test]
    fn test_rate_per_minute() {
        let machine = MachineRate::new("Golden Laser", 18.0);
        assert_eq!(machine.rate_per_minute(), 0.3);
    }
}
