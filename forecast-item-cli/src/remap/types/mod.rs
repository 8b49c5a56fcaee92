//! Core types for SKU remapping

mod record;
mod request;
mod output;

pub use record::*;
pub use request::*;
pub use output::*;
