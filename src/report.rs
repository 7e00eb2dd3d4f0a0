//! Display formatting for estimates and the machine catalog

use crate::catalog::MachineCatalog;
use crate::pricing::{round_to_cents, EstimateResult};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub const CURRENCY_SYMBOL: &str = "€";

/// One line of the cost breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub value: f64,
    /// Rendered bold (total cost and cost per unit)
    pub emphasized: bool,
}

/// Format an amount as `€1234.50`: two decimals, no thousands separator
pub fn format_currency(value: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, round_to_cents(value))
}

/// The nine breakdown rows in display order
pub fn breakdown_rows(result: &EstimateResult) -> Vec<BreakdownRow> {
    let row = |label, value, emphasized| BreakdownRow {
        label,
        value,
        emphasized,
    };

    vec![
        row("Total Material Cost", result.total_material_cost, false),
        row("Total Machine Cost", result.total_machine_cost, false),
        row("Total Labor Cost", result.total_labor_cost, false),
        row("Total Engineering Cost", result.total_engineering_cost, false),
        row("Total Cost", result.total_cost, true),
        row("Cost Per Unit", result.cost_per_unit, true),
        row("Material Cost Per Unit", result.material_cost_per_unit, false),
        row("Labor Cost Per Unit", result.labor_cost_per_unit, false),
        row(
            "Material + Labor Per Unit",
            result.material_plus_labor_per_unit,
            false,
        ),
    ]
}

/// Render the cost breakdown table
pub fn breakdown_table(result: &EstimateResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ITEM").fg(Color::Cyan),
        Cell::new("COST").fg(Color::Cyan),
    ]);

    for row in breakdown_rows(result) {
        let mut label = Cell::new(row.label);
        let mut value =
            Cell::new(format_currency(row.value)).set_alignment(CellAlignment::Right);
        if row.emphasized {
            label = label.add_attribute(Attribute::Bold);
            value = value.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![label, value]);
    }

    table
}

/// Render the machine catalog with hourly and per-minute rates
pub fn catalog_table(catalog: &MachineCatalog) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("MACHINE").fg(Color::Cyan),
        Cell::new("PER HOUR").fg(Color::Cyan),
        Cell::new("PER MINUTE").fg(Color::Cyan),
    ]);

    for machine in catalog.iter() {
        table.add_row(vec![
            Cell::new(&machine.name),
            Cell::new(format_currency(machine.rate_per_hour)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}{:.4}", CURRENCY_SYMBOL, machine.rate_per_minute()))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Serialize the rounded breakdown as pretty JSON
pub fn render_json(result: &EstimateResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&result.rounded())
}
