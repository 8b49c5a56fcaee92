//! User remap requests

use std::collections::HashMap;

/// Column names used by the user request workbook
pub mod request_cols {
    pub use crate::remap::master_cols::{LOCATION_ID, PLANNING_ACCOUNT_ID, PRODUCT_ID, SALES_CHANNEL};

    pub const NEW_SKU: &str = "New SKU";
}

/// One SKU remap instruction.
///
/// Filter fields keep the cell text exactly as read. A filter is active only when its
/// value is non-blank after trimming; exact-match filters compare against the
/// untrimmed text while the planning account prefix is trimmed first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapRequest {
    /// Excel row number the request came from (1-based, header is row 1)
    pub row: usize,
    pub product_id: String,
    pub sales_channel: String,
    pub location_id: String,
    pub planning_account_prefix: String,
    pub new_sku: String,
}

impl RemapRequest {
    pub fn from_cells(row: usize, cells: &HashMap<String, String>) -> Self {
        let get = |col: &str| cells.get(col).cloned().unwrap_or_default();
        Self {
            row,
            product_id: get(request_cols::PRODUCT_ID),
            sales_channel: get(request_cols::SALES_CHANNEL),
            location_id: get(request_cols::LOCATION_ID),
            planning_account_prefix: get(request_cols::PLANNING_ACCOUNT_ID),
            new_sku: get(request_cols::NEW_SKU),
        }
    }

    pub fn product_filter(&self) -> Option<&str> {
        active(&self.product_id)
    }

    pub fn sales_channel_filter(&self) -> Option<&str> {
        active(&self.sales_channel)
    }

    pub fn location_filter(&self) -> Option<&str> {
        active(&self.location_id)
    }

    /// Trimmed prefix, or None when blank
    pub fn planning_account_filter(&self) -> Option<&str> {
        let trimmed = self.planning_account_prefix.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }

    /// True when no filter is active, i.e. the request selects every record
    pub fn is_unfiltered(&self) -> bool {
        self.product_filter().is_none()
            && self.sales_channel_filter().is_none()
            && self.location_filter().is_none()
            && self.planning_account_filter().is_none()
    }
}

fn active(value: &str) -> Option<&str> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_inactive() {
        let request = RemapRequest {
            product_id: "   ".into(),
            new_sku: "SKU2".into(),
            ..Default::default()
        };
        assert!(request.is_unfiltered());
        assert_eq!(request.product_filter(), None);
    }

    #[test]
    fn test_exact_filters_keep_raw_text() {
        let request = RemapRequest {
            product_id: " SKU1 ".into(),
            planning_account_prefix: "  ACC-1 ".into(),
            ..Default::default()
        };
        assert_eq!(request.product_filter(), Some(" SKU1 "));
        assert_eq!(request.planning_account_filter(), Some("ACC-1"));
        assert!(!request.is_unfiltered());
    }

    #[test]
    fn test_from_cells() {
        let mut cells = HashMap::new();
        cells.insert("ProductId".to_string(), "SKU1".to_string());
        cells.insert("New SKU".to_string(), "SKU2".to_string());

        let request = RemapRequest::from_cells(4, &cells);
        assert_eq!(request.row, 4);
        assert_eq!(request.product_id, "SKU1");
        assert_eq!(request.new_sku, "SKU2");
        assert_eq!(request.location_id, "");
    }
}
