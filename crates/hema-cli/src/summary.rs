use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use hema_model::{AnalysisResult, DiagnosticCandidate, Likelihood, Status};

pub fn print_analysis(result: &AnalysisResult) {
    let patient = &result.patient;
    match patient.age {
        Some(age) => println!("Patient: {}, {age} years", patient.sex),
        None => println!("Patient: {}", patient.sex),
    }
    println!("Profile: {}", result.profile);

    if result.abnormal_findings.is_empty() {
        println!("All measured parameters are within their normal ranges.");
    } else {
        print_findings(result);
    }

    print_candidates(&result.candidates);

    let primary = &result.primary_diagnosis;
    println!(
        "Primary diagnosis: {} ({:.2}, {})",
        primary.name, primary.probability, primary.likelihood
    );
    println!("{}", primary.explanation);
    for recommendation in &primary.recommendations {
        println!("- {recommendation}");
    }
}

fn print_findings(result: &AnalysisResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Value"),
        header_cell("Status"),
        header_cell("Normal range"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for finding in result.abnormal_findings.values() {
        table.add_row(vec![
            Cell::new(finding.parameter.label()),
            Cell::new(finding.value),
            status_cell(finding.status),
            dim_cell(&finding.range_text),
        ]);
    }
    println!("{table}");
}

fn print_candidates(candidates: &[DiagnosticCandidate]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Condition"),
        header_cell("Probability"),
        header_cell("Likelihood"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for candidate in candidates {
        table.add_row(vec![
            Cell::new(&candidate.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", candidate.probability)),
            likelihood_cell(candidate.likelihood),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: Status) -> Cell {
    let color = match status {
        Status::Low => Color::Blue,
        Status::High => Color::Red,
    };
    Cell::new(status.display_name())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn likelihood_cell(likelihood: Likelihood) -> Cell {
    let color = match likelihood {
        Likelihood::High => Color::Red,
        Likelihood::Moderate => Color::Yellow,
        Likelihood::Low => Color::DarkGrey,
    };
    Cell::new(likelihood.display_name()).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
