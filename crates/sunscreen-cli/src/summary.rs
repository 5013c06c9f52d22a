use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use sunscreen_cli::batch::BatchResult;
use sunscreen_model::{FilterCatalog, Warning};
use sunscreen_standards::CatalogReport;

pub fn print_batch_summary(result: &BatchResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Brand"),
        header_cell("Product"),
        header_cell("Type"),
        header_cell("Ingredients"),
        header_cell("Filters"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for (slot, sunscreen) in result.sunscreens.iter().enumerate() {
        let warnings = result.warnings_for(slot).len();
        let filters = sunscreen
            .filters
            .iter()
            .map(|filter| filter.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&sunscreen.id),
            Cell::new(&sunscreen.brand)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&sunscreen.product),
            Cell::new(&sunscreen.kind),
            Cell::new(sunscreen.ingredients.len()),
            if filters.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(filters)
            },
            count_cell(warnings, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{} sanitized", result.sunscreens.len())).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(result.warning_count(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_warning_table(result);
    if result.has_errors() {
        eprintln!("Errors:");
        for failure in &result.errors {
            match &failure.id {
                Some(id) => eprintln!("- [{}] {id}: {}", failure.index, failure.error),
                None => eprintln!("- [{}] {}", failure.index, failure.error),
            }
        }
    }
}

fn print_warning_table(result: &BatchResult) {
    if result.warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("ID"),
        header_cell("Warning"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in &result.warnings {
        for warning in &entry.warnings {
            table.add_row(vec![
                dim_cell(entry.index),
                Cell::new(&entry.id),
                Cell::new(warning.code()).fg(Color::Yellow),
                Cell::new(warning_detail(warning)),
            ]);
        }
    }
    println!();
    println!("Warnings:");
    println!("{table}");
}

fn warning_detail(warning: &Warning) -> &str {
    match warning {
        Warning::BrandRemovedFromProduct { brand } => brand,
        Warning::SpfPaRemovedFromProduct { original } => original,
        Warning::UnknownUvFilter { ingredient } => ingredient,
        Warning::InferredFilter { filter } => filter,
    }
}

pub fn print_catalog_report(catalog: &FilterCatalog, report: &CatalogReport) {
    println!(
        "Catalog: {} filters, {} aliases, {} ignored ingredients",
        report.counts.filters, report.counts.aliases, report.counts.ignored
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("INCI Name"),
        header_cell("Category"),
        header_cell("Aliases"),
    ]);
    apply_table_style(&mut table);
    for filter in catalog.filters() {
        let aliases = if filter.aliases.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(filter.aliases.join(", "))
        };
        table.add_row(vec![
            Cell::new(&filter.inci).add_attribute(Attribute::Bold),
            Cell::new(&filter.category),
            aliases,
        ]);
    }
    println!("{table}");

    if report.is_clean() {
        return;
    }
    let mut conflicts = Table::new();
    conflicts.set_header(vec![
        header_cell("Key"),
        header_cell("Winner"),
        header_cell("Shadowed"),
    ]);
    apply_table_style(&mut conflicts);
    for conflict in &report.conflicts {
        conflicts.add_row(vec![
            Cell::new(&conflict.key).fg(Color::Yellow),
            Cell::new(&conflict.winner),
            Cell::new(conflict.shadowed.join(", ")).fg(Color::DarkGrey),
        ]);
    }
    println!();
    println!("Conflicts:");
    println!("{conflicts}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
