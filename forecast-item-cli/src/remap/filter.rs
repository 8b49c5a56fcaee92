//! Record filters derived from a remap request

use crate::remap::{MasterRecord, RemapRequest, master_cols};

/// A single predicate a master record must satisfy to be remapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// ProductId equals the value
    ProductId { value: String },
    /// SCHSALESCHANNELCD equals the value
    SalesChannel { value: String },
    /// LOCATIONID equals the value
    Location { value: String },
    /// IntegratedPLanningAccountId starts with the (trimmed) prefix
    PlanningAccountPrefix { prefix: String },
}

impl RecordFilter {
    /// Active filters for a request, in evaluation order. Blank request fields
    /// produce no filter.
    pub fn for_request(request: &RemapRequest) -> Vec<RecordFilter> {
        let mut filters = Vec::new();

        if let Some(value) = request.product_filter() {
            filters.push(RecordFilter::ProductId {
                value: value.to_string(),
            });
        }
        if let Some(value) = request.sales_channel_filter() {
            filters.push(RecordFilter::SalesChannel {
                value: value.to_string(),
            });
        }
        if let Some(value) = request.location_filter() {
            filters.push(RecordFilter::Location {
                value: value.to_string(),
            });
        }
        if let Some(prefix) = request.planning_account_filter() {
            filters.push(RecordFilter::PlanningAccountPrefix {
                prefix: prefix.to_string(),
            });
        }

        filters
    }

    /// Evaluate this filter against a record
    pub fn matches(&self, record: &MasterRecord) -> bool {
        match self {
            RecordFilter::ProductId { value } => record.product_id == *value,
            RecordFilter::SalesChannel { value } => record.sales_channel == *value,
            RecordFilter::Location { value } => record.location_id == *value,
            RecordFilter::PlanningAccountPrefix { prefix } => {
                // blank accounts never match a prefix
                !record.planning_account_id.is_empty()
                    && record.planning_account_id.starts_with(prefix.as_str())
            }
        }
    }

    /// Data manager column this filter reads
    pub fn column(&self) -> &'static str {
        match self {
            RecordFilter::ProductId { .. } => master_cols::PRODUCT_ID,
            RecordFilter::SalesChannel { .. } => master_cols::SALES_CHANNEL,
            RecordFilter::Location { .. } => master_cols::LOCATION_ID,
            RecordFilter::PlanningAccountPrefix { .. } => master_cols::PLANNING_ACCOUNT_ID,
        }
    }
}

impl std::fmt::Display for RecordFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFilter::PlanningAccountPrefix { prefix } => {
                write!(f, "{} starts with '{}'", self.column(), prefix)
            }
            RecordFilter::ProductId { value }
            | RecordFilter::SalesChannel { value }
            | RecordFilter::Location { value } => write!(f, "{} = '{}'", self.column(), value),
        }
    }
}

/// True when the record passes every filter (vacuously true for no filters)
pub fn matches_all(filters: &[RecordFilter], record: &MasterRecord) -> bool {
    filters.iter().all(|f| f.matches(record))
}
