//! Excel I/O for the data manager, user request and output workbooks
//!
//! Inputs are read from the first worksheet of each file, header in the first row.
//! Every cell is read as text (see `cell_to_string`), blank rows are skipped.

mod reader;
mod writer;

pub use reader::{read_master_excel, read_requests_excel};
pub use writer::{OutputPaths, write_output_workbooks};
