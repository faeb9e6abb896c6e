//! Request command arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::common::OutputFormat;
use crate::vra::FieldOverride;

/// Arguments for 'submit' command
#[derive(Parser, Debug)]
pub struct SubmitArgs {
    /// Catalog item (blueprint) name
    pub blueprint: String,

    /// Template override, repeatable
    ///
    ///   description=web tier          sets a root field
    ///   data.Machine.data.cpu=2       sets a nested field (value parsed as JSON when valid)
    ///   description='"123"'           quote JSON-looking values to keep them strings
    #[arg(short = 's', long = "set", value_name = "PATH.LEAF=VALUE", verbatim_doc_comment)]
    pub set: Vec<FieldOverride>,

    /// JSON file with an array of {"path", "leaf", "value"} overrides (applied before --set)
    #[arg(short = 'f', long)]
    pub overrides_file: Option<PathBuf>,
}

/// Arguments for 'status' command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Request ID
    pub id: String,

    /// Print the full request record instead of the normalized status
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

/// Subcommands of 'requests'
#[derive(Subcommand, Debug)]
pub enum RequestsCommand {
    /// List all requests visible to the caller
    #[command(visible_alias = "ls")]
    List(RequestsListArgs),

    /// Find requests of a catalog item by a request data key/value pair
    Find(RequestsFindArgs),
}

/// Arguments for 'requests list'
#[derive(Parser, Debug)]
pub struct RequestsListArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'requests find'
#[derive(Parser, Debug)]
pub struct RequestsFindArgs {
    /// Catalog item name the requests were made against
    #[arg(short, long)]
    pub catalog_item: String,

    /// Request data entry key
    #[arg(long)]
    pub key: String,

    /// Request data entry value (exact match)
    #[arg(long)]
    pub value: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
