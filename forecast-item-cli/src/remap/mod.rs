//! SKU remapping of forecast items
//!
//! Reads the data manager and user request workbooks, applies every request to a
//! fresh copy of the data manager records and splits the results into the
//! Tactical and Operational output workbooks.

pub mod types;
pub mod filter;
pub mod engine;
pub mod excel;

pub use types::*;
pub use engine::{RemapEngine, RemapResult};
pub use excel::{OutputPaths, read_master_excel, read_requests_excel, write_output_workbooks};
