//! `generate` command: run the remap batch

mod handler;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

pub use handler::handle_generate_command;

#[derive(Args, Debug, Clone)]
pub struct GenerateCommands {
    /// Data manager workbook (forecast item master table)
    #[arg(long, short = 'd', value_name = "XLSX")]
    pub data_manager: PathBuf,

    /// User request workbook (SKU remap instructions)
    #[arg(long, short = 'r', value_name = "XLSX")]
    pub user_request: PathBuf,

    /// Directory to write tactical_output.xlsx and operational_output.xlsx into
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Name stamped into the SOURCE column
    #[arg(long)]
    pub author: Option<String>,

    /// Run date for the SOURCE column (MM/DD/YYYY), defaults to today
    #[arg(long, value_parser = parse_run_date)]
    pub run_date: Option<NaiveDate>,

    /// Print a preview of both output tables
    #[arg(long)]
    pub preview: bool,

    /// Maximum rows per preview
    #[arg(long, value_name = "N")]
    pub preview_rows: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_run_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%m/%d/%Y")
        .map_err(|e| format!("expected MM/DD/YYYY, got '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_date() {
        assert_eq!(
            parse_run_date("12/01/2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
        );
        assert!(parse_run_date("2024-12-01").is_err());
        assert!(parse_run_date("13/01/2024").is_err());
    }
}
