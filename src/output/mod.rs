//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod catalog;
mod common;
mod requests;

pub use catalog::output_catalog_items;
pub use common::{escape_csv, print_json, print_yaml};
pub use requests::{output_request_json, output_requests, output_status};
