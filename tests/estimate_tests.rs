//! Integration tests for the cost estimator against the built-in catalog
use product_cost_calc::{
    catalog::MachineCatalog,
    error::EstimateError,
    input::{parse_decimal, parse_machine_usage, parse_unit_count},
    pricing::{estimate, CostCalculator, EstimateRequest, LaborRates},
    report::{breakdown_rows, format_currency},
};
use std::sync::Arc;

fn calculator() -> CostCalculator {
    CostCalculator::new(Arc::new(MachineCatalog::builtin()), LaborRates::default())
}

#[test]
fn test_oven_job_display_values() {
    let request = EstimateRequest {
        material_cost: 10.0,
        unit_count: 2,
        manual_minutes: 60.0,
        ..EstimateRequest::default()
    }
    .with_machine("Oven", 30.0);

    let result = calculator().estimate(&request).unwrap();
    let displayed: Vec<(&str, String)> = breakdown_rows(&result)
        .into_iter()
        .map(|row| (row.label, format_currency(row.value)))
        .collect();

    assert_eq!(
        displayed,
        vec![
            ("Total Material Cost", "€10.00".to_string()),
            ("Total Machine Cost", "€2.37".to_string()),
            ("Total Labor Cost", "€20.00".to_string()),
            ("Total Engineering Cost", "€0.00".to_string()),
            ("Total Cost", "€32.37".to_string()),
            ("Cost Per Unit", "€16.18".to_string()),
            ("Material Cost Per Unit", "€5.00".to_string()),
            ("Labor Cost Per Unit", "€10.00".to_string()),
            ("Material + Labor Per Unit", "€15.00".to_string()),
        ]
    );
}

#[test]
fn test_form_style_session() {
    // Build a job the way the form does: add rows, edit them, drop one
    let catalog = MachineCatalog::builtin();
    let mut request = EstimateRequest::default();

    let laser = request.add_machine(&catalog);
    request.set_minutes(laser, 12.0).unwrap();

    let scratch = request.add_machine(&catalog);
    let printer = request.add_machine(&catalog);
    request.set_machine(printer, "Digital Printer JFX200-2513").unwrap();
    request.set_minutes(printer, 90.0).unwrap();
    request.remove_machine(scratch).unwrap();

    request.material_cost = parse_decimal("84.20");
    request.unit_count = parse_unit_count("50");
    request.engineering_minutes = parse_decimal("120");

    let result = estimate(&request, &catalog, &LaborRates::default()).unwrap();

    // Eurolaser 12 min + printer 90 min
    let expected_machine = 4.55 / 60.0 * 12.0 + 23.75 / 60.0 * 90.0;
    assert!((result.total_machine_cost - expected_machine).abs() < 1e-9);
    assert!((result.total_engineering_cost - 50.0).abs() < 1e-9);
    assert!((result.cost_per_unit * 50.0 - result.total_cost).abs() < 1e-9);

    request.reset();
    assert_eq!(request, EstimateRequest::default());
}

#[test]
fn test_every_builtin_machine_is_priced() {
    let catalog = MachineCatalog::builtin();
    let mut request = EstimateRequest::default();
    for name in catalog.names() {
        request = request.with_machine(name, 60.0);
    }

    let result = estimate(&request, &catalog, &LaborRates::default()).unwrap();
    let hourly_sum: f64 = catalog.iter().map(|machine| machine.rate_per_hour).sum();

    assert!((result.total_machine_cost - hourly_sum).abs() < 1e-9);
}

#[test]
fn test_unknown_machine_from_cli_argument() {
    let usage = parse_machine_usage("Nonexistent=15").unwrap();
    let mut request = EstimateRequest::default();
    request.machine_usages.push(usage);

    let error = calculator().estimate(&request).unwrap_err();
    assert_eq!(
        error,
        EstimateError::UnknownMachine {
            name: "Nonexistent".to_string()
        }
    );
    assert_eq!(error.to_string(), "Unknown machine: Nonexistent");
}

#[test]
fn test_zero_units_never_divides_by_zero() {
    let request = EstimateRequest {
        material_cost: 40.0,
        unit_count: 0,
        manual_minutes: 30.0,
        ..EstimateRequest::default()
    };

    let result = calculator().estimate(&request).unwrap().rounded();

    assert_eq!(result.effective_unit_count, 1);
    assert_eq!(result.cost_per_unit, 50.0);
    assert_eq!(result.material_cost_per_unit, 40.0);
    assert_eq!(result.labor_cost_per_unit, 10.0);
    assert_eq!(result.material_plus_labor_per_unit, 50.0);
}
