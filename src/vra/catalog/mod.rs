//! Catalog items module

mod api;
mod commands;
mod models;

pub use commands::run_catalog_command;
pub use models::{CatalogItem, CatalogItemSummary, CatalogItemView};
