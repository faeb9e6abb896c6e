//! Request output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::vra::{RequestStatus, SubmittedRequest};

/// Flattened request for table/CSV output
#[derive(Debug, PartialEq)]
struct RequestRow {
    id: String,
    number: String,
    item: String,
    state: String,
    completion: String,
    created: String,
}

impl From<&SubmittedRequest> for RequestRow {
    fn from(request: &SubmittedRequest) -> Self {
        Self {
            id: request.id.clone(),
            number: request
                .request_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            item: request.item_name().to_string(),
            state: request.state().to_string(),
            completion: request.completion_state().to_string(),
            created: request.created_at().to_string(),
        }
    }
}

/// Output requests in the specified format
///
/// JSON and YAML carry the full server records; table and CSV the summary.
pub fn output_requests(requests: &[SubmittedRequest], format: OutputFormat) {
    match format {
        OutputFormat::Table => output_table(requests),
        OutputFormat::Csv => output_csv(requests),
        OutputFormat::Json => print_json(requests),
        OutputFormat::Yaml => print_yaml(requests),
    }
}

/// Print a single request record as JSON
pub fn output_request_json(request: &SubmittedRequest) {
    print_json(request);
}

/// Print a request status: the bare state, or the full record when raw
pub fn output_status(status: &RequestStatus) {
    match status {
        RequestStatus::Raw(record) => print_json(record),
        other => println!("{}", other),
    }
}

fn output_table(requests: &[SubmittedRequest]) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["ID", "NUMBER", "ITEM", "STATE", "COMPLETION", "CREATED"]);

    for row in requests.iter().map(RequestRow::from) {
        table.add_row(vec![
            row.id,
            row.number,
            row.item,
            row.state,
            row.completion,
            row.created,
        ]);
    }

    println!("{table}");
}

fn output_csv(requests: &[SubmittedRequest]) {
    println!("id,number,item,state,completion,created");
    for row in requests.iter().map(RequestRow::from) {
        println!(
            "{},{},{},{},{},{}",
            escape_csv(&row.id),
            row.number,
            escape_csv(&row.item),
            escape_csv(&row.state),
            escape_csv(&row.completion),
            escape_csv(&row.created)
        );
    }
}
