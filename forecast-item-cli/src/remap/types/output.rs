//! Output rows and tables written to the Tactical / Operational workbooks

use chrono::{NaiveDate, NaiveDateTime};

use super::PlanningType;

/// Author stamped into SOURCE when none is configured
pub const DEFAULT_AUTHOR: &str = "Tarun Kumar";

/// Display format of ENDEFF, both in Excel and in previews
pub const END_EFFECTIVE_EXCEL_FORMAT: &str = "mm/dd/yyyy hh:mm";
pub const END_EFFECTIVE_DISPLAY_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Output column headers, in order
pub mod output_cols {
    pub const FORECAST_ITEM_ID: &str = "ForecastItemId";
    pub const PRODUCT_ID: &str = "ProductId";
    pub const CUSTOMER_ID: &str = "CUSTOMERID";
    pub const LOCATION_ID: &str = "LOCATIONID";
    pub const FORECAST_ITEM_TYPE: &str = "ForecastItemType";
    pub const SOURCE: &str = "SOURCE";
    pub const END_EFFECTIVE: &str = "ENDEFF";

    pub const ALL: [&str; 7] = [
        FORECAST_ITEM_ID,
        PRODUCT_ID,
        CUSTOMER_ID,
        LOCATION_ID,
        FORECAST_ITEM_TYPE,
        SOURCE,
        END_EFFECTIVE,
    ];

    pub const END_EFFECTIVE_INDEX: usize = 6;
}

/// End-effective sentinel, 2998-12-31 23:59:59 ("never expires")
pub fn end_effective_sentinel() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2998, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Who ran the batch and when, used for the SOURCE column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStamp {
    pub author: String,
    pub run_date: NaiveDate,
}

impl RunStamp {
    pub fn new(author: impl Into<String>, run_date: NaiveDate) -> Self {
        Self {
            author: author.into(),
            run_date,
        }
    }

    /// Stamp for today's local date
    pub fn today(author: impl Into<String>) -> Self {
        Self::new(author, chrono::Local::now().date_naive())
    }

    /// SOURCE value, e.g. "Manual Tarun Kumar 03/07/2025"
    pub fn source(&self) -> String {
        format!("Manual {} {}", self.author, self.run_date.format("%m/%d/%Y"))
    }
}

/// A projected output row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub forecast_item_id: String,
    pub product_id: String,
    pub customer_id: String,
    pub location_id: String,
    pub forecast_item_type: PlanningType,
    pub source: String,
    pub end_effective: NaiveDateTime,
}

impl OutputRow {
    /// Text of the cell at `col` (index into `output_cols::ALL`), as shown to a user
    pub fn cell_text(&self, col: usize) -> String {
        match col {
            0 => self.forecast_item_id.clone(),
            1 => self.product_id.clone(),
            2 => self.customer_id.clone(),
            3 => self.location_id.clone(),
            4 => self.forecast_item_type.to_string(),
            5 => self.source.clone(),
            6 => self
                .end_effective
                .format(END_EFFECTIVE_DISPLAY_FORMAT)
                .to_string(),
            _ => String::new(),
        }
    }
}

/// All rows of one planning type, in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    pub planning_type: PlanningType,
    pub rows: Vec<OutputRow>,
}

impl OutputTable {
    pub fn new(planning_type: PlanningType) -> Self {
        Self {
            planning_type,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Character width of each column: longest cell text or header
    pub fn column_widths(&self) -> Vec<usize> {
        output_cols::ALL
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|r| r.cell_text(col).chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header.chars().count())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> OutputRow {
        OutputRow {
            forecast_item_id: id.to_string(),
            product_id: "SKU2".to_string(),
            customer_id: "C1".to_string(),
            location_id: "L1".to_string(),
            forecast_item_type: PlanningType::Tactical,
            source: "Manual Tarun Kumar 01/02/2025".to_string(),
            end_effective: end_effective_sentinel(),
        }
    }

    #[test]
    fn test_sentinel_value() {
        assert_eq!(
            end_effective_sentinel().format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2998-12-31T23:59:59"
        );
    }

    #[test]
    fn test_source_stamp_format() {
        let stamp = RunStamp::new(DEFAULT_AUTHOR, NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(stamp.source(), "Manual Tarun Kumar 03/07/2025");
    }

    #[test]
    fn test_cell_text_end_effective() {
        assert_eq!(row("FI-1").cell_text(output_cols::END_EFFECTIVE_INDEX), "12/31/2998 23:59");
        assert_eq!(row("FI-1").cell_text(4), "Tactical");
    }

    #[test]
    fn test_column_widths() {
        let mut table = OutputTable::new(PlanningType::Tactical);
        assert_eq!(table.column_widths()[0], "ForecastItemId".len());

        table.rows.push(row("FI-A-VERY-LONG-FORECAST-ITEM"));
        let widths = table.column_widths();
        assert_eq!(widths[0], "FI-A-VERY-LONG-FORECAST-ITEM".len());
        assert_eq!(widths[1], "ProductId".len());
        assert_eq!(widths[5], "Manual Tarun Kumar 01/02/2025".len());
        assert_eq!(widths[6], "12/31/2998 23:59".len());
    }
}
