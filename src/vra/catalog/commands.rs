//! Catalog command handlers

use crate::cli::{Cli, Command};
use crate::output::output_catalog_items;
use crate::ui::{create_spinner, finish_spinner};
use crate::vra::VraClient;

use super::models::CatalogItemSummary;

/// Run the catalog list command
pub async fn run_catalog_command(
    client: &VraClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Catalog(args) = &cli.command else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching catalog items...", cli.batch);
    let result = client.get_catalog_items().await;
    finish_spinner(spinner);

    let items = filter_items(result?, args.filter.as_deref());

    if items.is_empty() {
        eprintln!("No catalog items found.");
        return Ok(());
    }

    output_catalog_items(&items, args.output);
    Ok(())
}

/// Keep items whose name contains `filter`, ignoring case
fn filter_items(items: Vec<CatalogItemSummary>, filter: Option<&str>) -> Vec<CatalogItemSummary> {
    match filter {
        Some(f) => {
            let needle = f.to_lowercase();
            items
                .into_iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => items,
    }
}
