//! Remap engine - applies user requests to the data manager table

use anyhow::{Result, bail};

use crate::remap::{
    MasterRecord, MasterTable, OutputRow, OutputTable, PlanningType, RemapRequest, RunStamp,
    end_effective_sentinel, master_cols,
};

use super::filter::{RecordFilter, matches_all};

/// Rows produced by a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOutcome {
    /// Excel row of the request
    pub request_row: usize,
    /// Records that passed the filters
    pub matched: usize,
    pub tactical: Vec<OutputRow>,
    pub operational: Vec<OutputRow>,
    /// Matched records dropped because ForecastItemType is neither planning type
    pub dropped: usize,
}

/// Per-request counts kept for the run summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    pub request_row: usize,
    pub new_sku: String,
    pub matched: usize,
    pub tactical: usize,
    pub operational: usize,
    pub dropped: usize,
}

/// Result of a whole batch
#[derive(Debug, Clone)]
pub struct RemapResult {
    pub tactical: OutputTable,
    pub operational: OutputTable,
    pub summaries: Vec<RequestSummary>,
}

impl RemapResult {
    pub fn table(&self, planning_type: PlanningType) -> &OutputTable {
        match planning_type {
            PlanningType::Tactical => &self.tactical,
            PlanningType::Operational => &self.operational,
        }
    }

    pub fn total_dropped(&self) -> usize {
        self.summaries.iter().map(|s| s.dropped).sum()
    }
}

/// Remap engine for applying requests to master records
pub struct RemapEngine;

impl RemapEngine {
    /// Check that the data manager carries every column the requests will read
    pub fn validate(master: &MasterTable, requests: &[RemapRequest]) -> Result<()> {
        for col in master_cols::REQUIRED {
            if !master.has_column(col) {
                bail!("Data manager file is missing required column '{}'", col);
            }
        }

        for request in requests {
            for filter in RecordFilter::for_request(request) {
                if !master.has_column(filter.column()) {
                    bail!(
                        "Request on row {} filters on '{}' but the data manager file has no such column",
                        request.row,
                        filter.column()
                    );
                }
            }
        }

        Ok(())
    }

    /// Run every request in order and concatenate their buckets
    pub fn run(
        master: &MasterTable,
        requests: &[RemapRequest],
        stamp: &RunStamp,
    ) -> Result<RemapResult> {
        Self::validate(master, requests)?;

        let mut result = RemapResult {
            tactical: OutputTable::new(PlanningType::Tactical),
            operational: OutputTable::new(PlanningType::Operational),
            summaries: Vec::with_capacity(requests.len()),
        };

        for request in requests {
            let outcome = Self::apply_request(&master.records, request, stamp);

            result.summaries.push(RequestSummary {
                request_row: outcome.request_row,
                new_sku: request.new_sku.clone(),
                matched: outcome.matched,
                tactical: outcome.tactical.len(),
                operational: outcome.operational.len(),
                dropped: outcome.dropped,
            });

            result.tactical.rows.extend(outcome.tactical);
            result.operational.rows.extend(outcome.operational);
        }

        log::info!(
            "Remapped {} requests: {} tactical rows, {} operational rows, {} dropped",
            requests.len(),
            result.tactical.len(),
            result.operational.len(),
            result.total_dropped()
        );

        Ok(result)
    }

    /// Apply a single request to the master records.
    ///
    /// Pure: the master slice is not modified, every surviving record is cloned and
    /// rewritten.
    pub fn apply_request(
        master: &[MasterRecord],
        request: &RemapRequest,
        stamp: &RunStamp,
    ) -> RequestOutcome {
        let filters = RecordFilter::for_request(request);
        let source = stamp.source();
        let end_effective = end_effective_sentinel();

        if request.new_sku.trim().is_empty() {
            log::warn!("Request on row {} has a blank New SKU", request.row);
        }
        if request.is_unfiltered() {
            log::debug!("Request on row {} has no filters, selecting every record", request.row);
        }
        if request.product_id.is_empty() {
            log::warn!(
                "Request on row {} has no ProductId, New SKU is inserted around every character of ForecastItemId",
                request.row
            );
        }

        let mut outcome = RequestOutcome {
            request_row: request.row,
            ..Default::default()
        };

        for record in master.iter().filter(|r| matches_all(&filters, r)) {
            outcome.matched += 1;

            let Some(planning_type) = record.planning_type() else {
                log::debug!(
                    "Request row {}: dropping '{}' with ForecastItemType '{}'",
                    request.row,
                    record.forecast_item_id,
                    record.forecast_item_type
                );
                outcome.dropped += 1;
                continue;
            };

            let row = OutputRow {
                forecast_item_id: substitute_sku(
                    &record.forecast_item_id,
                    &request.product_id,
                    &request.new_sku,
                ),
                product_id: request.new_sku.clone(),
                customer_id: record.customer_id.clone(),
                location_id: record.location_id.clone(),
                forecast_item_type: planning_type,
                source: source.clone(),
                end_effective,
            };

            match planning_type {
                PlanningType::Tactical => outcome.tactical.push(row),
                PlanningType::Operational => outcome.operational.push(row),
            }
        }

        log::debug!(
            "Request row {} [{}]: {} matched, {} tactical, {} operational",
            request.row,
            filters
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            outcome.matched,
            outcome.tactical.len(),
            outcome.operational.len()
        );

        outcome
    }
}

/// Replace every occurrence of `old_sku` in a forecast item id with `new_sku`.
///
/// Plain substring replacement, so an old SKU embedded in a longer token is replaced
/// too. An empty `old_sku` matches at every position, so `new_sku` lands between
/// every character.
pub fn substitute_sku(forecast_item_id: &str, old_sku: &str, new_sku: &str) -> String {
    forecast_item_id.replace(old_sku, new_sku)
}
