//! Report rendering
//!
//! - `report` - the text report: structure diagram plus content appendix
//! - `json` - JSON serialization of the built tree

mod json;
mod report;

pub use json::print_json;
pub use report::{ReportFormatter, ReportOptions};
