//! Data manager records (the master forecast item table)

use std::collections::HashMap;

/// Column names used by the data manager workbook
pub mod master_cols {
    pub const PRODUCT_ID: &str = "ProductId";
    pub const SALES_CHANNEL: &str = "SCHSALESCHANNELCD";
    pub const LOCATION_ID: &str = "LOCATIONID";
    pub const PLANNING_ACCOUNT_ID: &str = "IntegratedPLanningAccountId";
    pub const FORECAST_ITEM_ID: &str = "ForecastItemId";
    pub const CUSTOMER_ID: &str = "CUSTOMERID";
    pub const FORECAST_ITEM_TYPE: &str = "ForecastItemType";

    /// Columns every data manager sheet must carry
    pub const REQUIRED: [&str; 5] = [
        FORECAST_ITEM_ID,
        PRODUCT_ID,
        CUSTOMER_ID,
        LOCATION_ID,
        FORECAST_ITEM_TYPE,
    ];
}

/// Planning category a forecast item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanningType {
    Tactical,
    Operational,
}

impl PlanningType {
    /// Parse a ForecastItemType cell. Matching is exact: "tactical" or " Tactical" is
    /// not a planning type.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Tactical" => Some(PlanningType::Tactical),
            "Operational" => Some(PlanningType::Operational),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanningType::Tactical => "Tactical",
            PlanningType::Operational => "Operational",
        }
    }

    /// Worksheet name used in the output workbook
    pub fn sheet_name(&self) -> &'static str {
        self.as_str()
    }

    /// Fixed file name of the output workbook
    pub fn file_name(&self) -> &'static str {
        match self {
            PlanningType::Tactical => "tactical_output.xlsx",
            PlanningType::Operational => "operational_output.xlsx",
        }
    }
}

impl std::fmt::Display for PlanningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single row of the data manager table. Every field is text; blank cells are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterRecord {
    pub product_id: String,
    pub sales_channel: String,
    pub location_id: String,
    pub planning_account_id: String,
    pub forecast_item_id: String,
    pub customer_id: String,
    pub forecast_item_type: String,
}

impl MasterRecord {
    /// Build a record from a header -> cell map, missing columns become ""
    pub fn from_cells(cells: &HashMap<String, String>) -> Self {
        let get = |col: &str| cells.get(col).cloned().unwrap_or_default();
        Self {
            product_id: get(master_cols::PRODUCT_ID),
            sales_channel: get(master_cols::SALES_CHANNEL),
            location_id: get(master_cols::LOCATION_ID),
            planning_account_id: get(master_cols::PLANNING_ACCOUNT_ID),
            forecast_item_id: get(master_cols::FORECAST_ITEM_ID),
            customer_id: get(master_cols::CUSTOMER_ID),
            forecast_item_type: get(master_cols::FORECAST_ITEM_TYPE),
        }
    }

    /// Planning type, or None when ForecastItemType is anything else
    pub fn planning_type(&self) -> Option<PlanningType> {
        PlanningType::parse(&self.forecast_item_type)
    }
}

/// The data manager table as loaded from Excel
#[derive(Debug, Clone, Default)]
pub struct MasterTable {
    /// Header names present in the source sheet
    pub columns: Vec<String>,
    pub records: Vec<MasterRecord>,
}

impl MasterTable {
    pub fn new(columns: Vec<String>, records: Vec<MasterRecord>) -> Self {
        Self { columns, records }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planning_type_parse_is_exact() {
        assert_eq!(PlanningType::parse("Tactical"), Some(PlanningType::Tactical));
        assert_eq!(PlanningType::parse("Operational"), Some(PlanningType::Operational));
        assert_eq!(PlanningType::parse("tactical"), None);
        assert_eq!(PlanningType::parse(" Tactical"), None);
        assert_eq!(PlanningType::parse(""), None);
        assert_eq!(PlanningType::parse("Strategic"), None);
    }

    #[test]
    fn test_from_cells_defaults_missing_columns() {
        let mut cells = HashMap::new();
        cells.insert("ProductId".to_string(), "SKU1".to_string());
        cells.insert("ForecastItemType".to_string(), "Tactical".to_string());

        let record = MasterRecord::from_cells(&cells);
        assert_eq!(record.product_id, "SKU1");
        assert_eq!(record.planning_account_id, "");
        assert_eq!(record.customer_id, "");
        assert_eq!(record.planning_type(), Some(PlanningType::Tactical));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(PlanningType::Tactical.file_name(), "tactical_output.xlsx");
        assert_eq!(PlanningType::Operational.file_name(), "operational_output.xlsx");
    }
}
