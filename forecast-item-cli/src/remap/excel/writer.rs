//! Write the Tactical and Operational output workbooks

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};
use tempfile::{NamedTempFile, TempPath};

use crate::remap::{
    END_EFFECTIVE_EXCEL_FORMAT, OutputRow, OutputTable, PlanningType, RemapResult, output_cols,
};

/// MIME type of the output workbooks
pub const OUTPUT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Padding added to the widest cell of each column
const COLUMN_PADDING: usize = 2;

/// Where the two output workbooks were written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub tactical: PathBuf,
    pub operational: PathBuf,
}

/// Render one output table to an in-memory xlsx file
pub fn render_output_workbook(table: &OutputTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(table.planning_type.sheet_name())?;

    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(END_EFFECTIVE_EXCEL_FORMAT);

    for (col, name) in output_cols::ALL.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (row_idx, record) in table.rows.iter().enumerate() {
        write_row(worksheet, (row_idx + 1) as u32, record, &date_format)?;
    }

    for (col, width) in table.column_widths().into_iter().enumerate() {
        worksheet.set_column_width(col as u16, (width + COLUMN_PADDING) as f64)?;
    }

    workbook
        .save_to_buffer()
        .with_context(|| format!("Failed to build {} workbook", table.planning_type))
}

/// Render both workbooks, then write them into `output_dir` under their fixed names.
///
/// Both files are staged as temporary files in `output_dir` and only then renamed
/// into place. If either step fails, neither output is left behind.
pub fn write_output_workbooks(result: &RemapResult, output_dir: &Path) -> Result<OutputPaths> {
    let tactical_bytes = render_output_workbook(&result.tactical)?;
    let operational_bytes = render_output_workbook(&result.operational)?;

    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let paths = OutputPaths {
        tactical: output_dir.join(PlanningType::Tactical.file_name()),
        operational: output_dir.join(PlanningType::Operational.file_name()),
    };

    // TempPath removes the staged file when dropped, so early returns clean up
    let tactical_tmp = stage_bytes(output_dir, &tactical_bytes)?;
    let operational_tmp = stage_bytes(output_dir, &operational_bytes)?;

    tactical_tmp
        .persist(&paths.tactical)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to save Excel file: {}", paths.tactical.display()))?;

    if let Err(e) = operational_tmp.persist(&paths.operational) {
        if let Err(remove_err) = std::fs::remove_file(&paths.tactical) {
            log::warn!(
                "Failed to remove {} after a failed save: {}",
                paths.tactical.display(),
                remove_err
            );
        }
        return Err(anyhow::Error::new(e.error)
            .context(format!("Failed to save Excel file: {}", paths.operational.display())));
    }

    for path in [&paths.tactical, &paths.operational] {
        log::info!("Excel file exported to: {} ({})", path.display(), OUTPUT_MIME_TYPE);
    }

    Ok(paths)
}

/// Write bytes to a new temporary file in `dir`
fn stage_bytes(dir: &Path, bytes: &[u8]) -> Result<TempPath> {
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .with_context(|| format!("Failed to write temporary file in {}", dir.display()))?;
    Ok(tmp.into_temp_path())
}

fn write_row(ws: &mut Worksheet, row: u32, record: &OutputRow, date_format: &Format) -> Result<()> {
    ws.write_string(row, 0, &record.forecast_item_id)?;
    ws.write_string(row, 1, &record.product_id)?;
    ws.write_string(row, 2, &record.customer_id)?;
    ws.write_string(row, 3, &record.location_id)?;
    ws.write_string(row, 4, record.forecast_item_type.as_str())?;
    ws.write_string(row, 5, &record.source)?;
    ws.write_datetime_with_format(
        row,
        output_cols::END_EFFECTIVE_INDEX as u16,
        &to_excel_datetime(&record.end_effective)?,
        date_format,
    )?;
    Ok(())
}

fn to_excel_datetime(dt: &NaiveDateTime) -> Result<ExcelDateTime> {
    let excel = ExcelDateTime::from_ymd(dt.year() as u16, dt.month() as u8, dt.day() as u8)?
        .and_hms(dt.hour() as u16, dt.minute() as u8, dt.second() as f64)?;
    Ok(excel)
}
