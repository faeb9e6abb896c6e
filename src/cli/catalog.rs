//! Catalog command arguments

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'catalog' command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Filter catalog items by name (case-insensitive substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
