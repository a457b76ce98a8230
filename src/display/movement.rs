//! Movement file display formatting

use chrono::NaiveDate;

use crate::audit::AuditEntry;
use crate::models::{MovementField, MovementFile, MovementRecord};
use crate::selection::SelectionOutcome;
use crate::services::BatchSummary;

/// Format one movement as a table row
pub fn format_movement_row(index: usize, movement: &MovementRecord, symbol: &str) -> String {
    format!(
        "{:>5} {:2} {:8} {:20} {:>3} {:>16} {:8} {:9} {:15} {:7}",
        index,
        movement.acquirer_code(),
        movement.movement_date(),
        truncate(movement.card_number(), 20),
        movement.installments(),
        movement.value().format_with_symbol(symbol),
        movement.sale_date(),
        movement.nsu(),
        movement.tax_id(),
        movement.order_number()
    )
}

/// Format the listed movements of a file as a table
///
/// `indices` select which movements to show, in the given order.
pub fn format_movement_table(file: &MovementFile, indices: &[usize], symbol: &str) -> String {
    if indices.is_empty() {
        return "No movements found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5} {:2} {:8} {:20} {:>3} {:>16} {:8} {:9} {:15} {:7}\n",
        "#", "Aq", "Mov date", "Card", "Ins", "Value", "Sale", "NSU", "Tax id", "Order"
    ));
    output.push_str(&"-".repeat(102));
    output.push('\n');

    for &index in indices {
        if let Some(movement) = file.movements().get(index) {
            output.push_str(&format_movement_row(index, movement, symbol));
            output.push('\n');
        }
    }

    output
}

/// Format the header and trailer of a file
pub fn format_file_summary(file: &MovementFile, symbol: &str) -> String {
    let header = file.header();
    let trailer = file.trailer();

    let mut output = String::new();
    let processing = header
        .processing_naive_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| header.processing_date().to_string());
    output.push_str(&format!("Processing date: {}\n", processing));
    output.push_str(&format!("Unit:            {}\n", header.unit_code()));
    output.push_str(&format!("Movements:       {}\n", trailer.record_count()));
    output.push_str(&format!(
        "Total:           {}\n",
        trailer.total_value().format_with_symbol(symbol)
    ));
    output
}

/// Format every field of one movement
pub fn format_movement_details(index: usize, movement: &MovementRecord, symbol: &str) -> String {
    let mut output = format!("Movement {}\n", index);
    for field in MovementField::ALL {
        let text = match field {
            MovementField::SaleValue => movement.value().format_with_symbol(symbol),
            MovementField::MovementDate => {
                format_date(movement.movement_naive_date(), movement.movement_date())
            }
            MovementField::SaleDate => format_date(movement.sale_naive_date(), movement.sale_date()),
            _ => movement.field_text(field),
        };
        output.push_str(&format!(
            "  {:16} {:15} {}\n",
            format!("{}:", field),
            format!("[{}]", field.key()),
            text
        ));
    }
    output.push_str(&format!("  Line: {}\n", movement.encode()));
    output
}

/// Describe a selection outcome
pub fn format_selection(outcome: &SelectionOutcome, symbol: &str) -> String {
    match outcome {
        SelectionOutcome::Found(selection) => {
            let indices: Vec<String> = selection.indices.iter().map(|i| i.to_string()).collect();
            let mut output = format!(
                "Found {} movement(s) totalling {} via {}: [{}]\n",
                selection.indices.len(),
                selection.total.format_with_symbol(symbol),
                selection.strategy,
                indices.join(", ")
            );
            if selection.is_best_effort() {
                output.push_str("Note: found by best-effort search; other combinations were not checked.\n");
            }
            output
        }
        SelectionOutcome::NoExactCombination { exhaustive: true } => {
            "No combination of movements adds up to the target.\n".to_string()
        }
        SelectionOutcome::NoExactCombination { exhaustive: false } => {
            "No combination found within the search limits; one may still exist.\n".to_string()
        }
    }
}

pub fn format_batch_summary(summary: &BatchSummary) -> String {
    format!("Kept {}, removed {}.\n", summary.kept, summary.removed)
}

/// Format log entries, oldest first
pub fn format_log_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No log entries.\n".to_string();
    }
    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

/// ISO date when the field holds a real date, the raw field otherwise
fn format_date(date: Option<NaiveDate>, raw: &str) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
