//! Request command handlers

use log::debug;
use std::path::Path;

use crate::cli::{Cli, Command, RequestsCommand};
use crate::error::Result;
use crate::output::{output_request_json, output_requests, output_status};
use crate::ui::{create_spinner, finish_spinner};
use crate::vra::{FieldOverride, VraClient};

use super::models::DeploymentOptions;
use super::status::StatusQuery;

/// Run the submit command
pub async fn run_submit_command(
    client: &VraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Submit(args) = &cli.command else {
        unreachable!()
    };

    // File overrides first so --set can refine them
    let mut template_data = match &args.overrides_file {
        Some(path) => load_overrides(path)?,
        None => Vec::new(),
    };
    template_data.extend(args.set.iter().cloned());

    debug!(
        "Submitting '{}' with {} override(s)",
        args.blueprint,
        template_data.len()
    );

    let options = DeploymentOptions::new(&args.blueprint, template_data);

    let spinner = create_spinner(&format!("Submitting '{}'...", args.blueprint), cli.batch);
    let result = client.submit_deployment(&options).await;
    finish_spinner(spinner);

    output_request_json(&result?);
    Ok(())
}

/// Run the status command
pub async fn run_status_command(
    client: &VraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Status(args) = &cli.command else {
        unreachable!()
    };

    let query = StatusQuery::new(&args.id, args.raw);
    let status = client.get_request_status(&query).await?;
    output_status(&status);
    Ok(())
}

/// Run the requests list command
pub async fn run_requests_list_command(
    client: &VraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Requests(RequestsCommand::List(args)) = &cli.command else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching requests...", cli.batch);
    let result = client.get_all_requests().await;
    finish_spinner(spinner);
    let requests = result?;

    if requests.is_empty() {
        eprintln!("No requests found.");
        return Ok(());
    }

    output_requests(&requests, args.output);
    Ok(())
}

/// Run the requests find command
pub async fn run_requests_find_command(
    client: &VraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Requests(RequestsCommand::Find(args)) = &cli.command else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Searching requests of '{}'...", args.catalog_item),
        cli.batch,
    );
    let result = client
        .find_requests_by_field(&args.catalog_item, &args.key, &args.value)
        .await;
    finish_spinner(spinner);
    let requests = result?;

    if requests.is_empty() {
        eprintln!(
            "No requests of '{}' with {}={}.",
            args.catalog_item, args.key, args.value
        );
        return Ok(());
    }

    output_requests(&requests, args.output);
    Ok(())
}

/// Read a JSON array of overrides from a file
fn load_overrides(path: &Path) -> Result<Vec<FieldOverride>> {
    debug!("Loading overrides from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
