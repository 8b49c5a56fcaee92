//! Terminal preview of output tables

use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::remap::{OutputTable, output_cols};

const COLUMN_GAP: &str = "  ";

/// Render up to `max_rows` rows of a table as aligned text
pub fn render_table(table: &OutputTable, max_rows: usize) -> String {
    let title = format!("Preview {} Output ({} rows)", table.planning_type, table.len());
    let mut out = format!("{}\n", title.bold());

    if table.is_empty() {
        out.push_str(&format!("{}\n", "(no rows)".dimmed()));
        return out;
    }

    let shown: Vec<Vec<String>> = table
        .rows
        .iter()
        .take(max_rows)
        .map(|row| (0..output_cols::ALL.len()).map(|c| row.cell_text(c)).collect())
        .collect();

    let widths: Vec<usize> = output_cols::ALL
        .iter()
        .enumerate()
        .map(|(col, header)| {
            shown
                .iter()
                .map(|cells| cells[col].width())
                .max()
                .unwrap_or(0)
                .max(header.width())
        })
        .collect();

    let header_cells: Vec<String> = output_cols::ALL.iter().map(|h| h.to_string()).collect();
    out.push_str(&format!("{}\n", format_line(&header_cells, &widths).cyan()));

    for cells in &shown {
        out.push_str(&format_line(cells, &widths));
        out.push('\n');
    }

    if table.len() > shown.len() {
        let more = format!("... {} more rows", table.len() - shown.len());
        out.push_str(&format!("{}\n", more.dimmed()));
    }

    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remap::{OutputRow, PlanningType, end_effective_sentinel};

    fn table(n: usize) -> OutputTable {
        let mut table = OutputTable::new(PlanningType::Operational);
        for i in 0..n {
            table.rows.push(OutputRow {
                forecast_item_id: format!("FI-{}", i),
                product_id: "SKU2".into(),
                customer_id: "C1".into(),
                location_id: "L1".into(),
                forecast_item_type: PlanningType::Operational,
                source: "Manual Tarun Kumar 01/15/2025".into(),
                end_effective: end_effective_sentinel(),
            });
        }
        table
    }

    #[test]
    fn test_empty_table() {
        colored::control::set_override(false);
        let text = render_table(&table(0), 10);
        assert!(text.contains("Preview Operational Output (0 rows)"));
        assert!(text.contains("(no rows)"));
    }

    #[test]
    fn test_truncation() {
        colored::control::set_override(false);
        let text = render_table(&table(5), 2);
        assert!(text.contains("FI-0"));
        assert!(text.contains("FI-1"));
        assert!(!text.contains("FI-2"));
        assert!(text.contains("... 3 more rows"));
    }

    #[test]
    fn test_columns_are_aligned() {
        let line = format_line(
            &["a".to_string(), "bb".to_string(), "c".to_string()],
            &[3, 2, 1],
        );
        assert_eq!(line, "a    bb  c");
    }
}
