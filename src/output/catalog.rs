//! Catalog item output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::vra::CatalogItemSummary;

/// Output catalog items in the specified format
pub fn output_catalog_items(items: &[CatalogItemSummary], format: OutputFormat) {
    match format {
        OutputFormat::Table => output_table(items),
        OutputFormat::Csv => output_csv(items),
        OutputFormat::Json => print_json(items),
        OutputFormat::Yaml => print_yaml(items),
    }
}

fn output_table(items: &[CatalogItemSummary]) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["NAME", "ID", "SUBMIT URL"]);

    for item in items {
        table.add_row(vec![
            item.name.as_str(),
            item.id.as_str(),
            item.submit_request_url.as_str(),
        ]);
    }

    println!("{table}");
}

fn output_csv(items: &[CatalogItemSummary]) {
    println!("name,id,submit_url,submit_method");
    for item in items {
        println!(
            "{},{},{},{}",
            escape_csv(&item.name),
            escape_csv(&item.id),
            escape_csv(&item.submit_request_url),
            escape_csv(&item.submit_request_method)
        );
    }
}
