//! Read the data manager and user request workbooks

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::remap::{MasterRecord, MasterTable, RemapRequest, request_cols};

/// First worksheet of a workbook, every cell as text
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub sheet_name: String,
    /// Trimmed header names (first row)
    pub headers: Vec<String>,
    /// Non-blank data rows with their Excel row number (1-based)
    pub rows: Vec<(usize, Vec<String>)>,
}

impl SheetTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Map header -> cell for one row. The first occurrence of a duplicated header wins.
    pub fn row_cells(&self, row: &[String]) -> HashMap<String, String> {
        let mut cells = HashMap::new();
        for (col_idx, header) in self.headers.iter().enumerate() {
            if header.is_empty() || cells.contains_key(header) {
                continue;
            }
            let value = row.get(col_idx).cloned().unwrap_or_default();
            cells.insert(header.clone(), value);
        }
        cells
    }
}

/// Read the first worksheet of an Excel file
pub fn read_sheet_table<P: AsRef<Path>>(path: P) -> Result<SheetTable> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .with_context(|| format!("Excel file has no sheets: {}", path.display()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet '{}' in {}", sheet_name, path.display()))?;

    // Range starts at the first used cell, keep Excel row numbers for messages
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .map(|c| cell_to_string(c).trim().to_string())
            .collect(),
        None => {
            return Ok(SheetTable {
                sheet_name,
                ..Default::default()
            });
        }
    };

    let mut table = SheetTable {
        sheet_name,
        headers,
        rows: Vec::new(),
    };

    for (idx, row) in rows.enumerate() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();

        // Skip empty rows
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        // header is first_row + 1 in Excel numbering, data starts one below
        table.rows.push((first_row + idx + 2, cells));
    }

    log::debug!(
        "Read sheet '{}' from {}: {} columns, {} rows",
        table.sheet_name,
        path.display(),
        table.headers.len(),
        table.rows.len()
    );

    Ok(table)
}

/// Read the data manager workbook
pub fn read_master_excel<P: AsRef<Path>>(path: P) -> Result<MasterTable> {
    let path = path.as_ref();
    let table = read_sheet_table(path)
        .with_context(|| format!("Failed to read data manager file: {}", path.display()))?;

    let records = table
        .rows
        .iter()
        .map(|(_, row)| MasterRecord::from_cells(&table.row_cells(row)))
        .collect();

    let columns = table.headers.into_iter().filter(|h| !h.is_empty()).collect();
    Ok(MasterTable::new(columns, records))
}

/// Read the user request workbook
pub fn read_requests_excel<P: AsRef<Path>>(path: P) -> Result<Vec<RemapRequest>> {
    let path = path.as_ref();
    let table = read_sheet_table(path)
        .with_context(|| format!("Failed to read user request file: {}", path.display()))?;

    if !table.has_column(request_cols::NEW_SKU) {
        bail!(
            "User request file {} is missing required column '{}'",
            path.display(),
            request_cols::NEW_SKU
        );
    }

    Ok(table
        .rows
        .iter()
        .map(|(row_num, row)| RemapRequest::from_cells(*row_num, &table.row_cells(row)))
        .collect())
}

/// Convert an Excel cell to its text form. Blank and error cells become "".
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // whole numbers read as integers, e.g. an id typed as 1001
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => (if *b { "True" } else { "False" }).to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}
