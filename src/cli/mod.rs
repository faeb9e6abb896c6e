//! CLI argument parsing

mod catalog;
mod common;
mod login;
mod requests;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use catalog::CatalogArgs;
pub use common::OutputFormat;
pub use login::LoginArgs;
pub use requests::{RequestsCommand, RequestsFindArgs, RequestsListArgs, StatusArgs, SubmitArgs};

/// vRealize Automation request CLI
#[derive(Parser, Debug)]
#[command(name = "vractl")]
#[command(version)]
#[command(about = "Submit and track vRealize Automation catalog requests", long_about = None)]
pub struct Cli {
    /// vRA host (falls back to VRA_HOSTNAME)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// API token (overrides VRA_TOKEN)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Accept invalid TLS certificates (self-signed appliances)
    #[arg(short = 'k', long, global = true, default_value_t = false)]
    pub insecure: bool,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Issue an API token and print it
    Login(LoginArgs),

    /// Check whether the API token is still valid
    TokenCheck,

    /// List entitled catalog items
    #[command(visible_alias = "catalog-items")]
    Catalog(CatalogArgs),

    /// Submit a catalog item request, merging field overrides into its template
    Submit(SubmitArgs),

    /// Show the status of a submitted request
    Status(StatusArgs),

    /// List or search submitted requests
    #[command(subcommand, visible_alias = "req")]
    Requests(RequestsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["vractl", "token-check"]);
        assert!(cli.host.is_none());
        assert!(cli.token.is_none());
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.insecure);
        assert!(!cli.batch);
        assert!(cli.timeout.is_none());
        assert!(matches!(cli.command, Command::TokenCheck));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "vractl",
            "catalog",
            "-H",
            "vra.example.com",
            "-t",
            "tok",
            "-k",
            "--timeout",
            "30",
        ]);
        assert_eq!(cli.host, Some("vra.example.com".to_string()));
        assert_eq!(cli.token, Some("tok".to_string()));
        assert!(cli.insecure);
        assert_eq!(cli.timeout, Some(30));
    }

    #[test]
    fn test_cli_submit_with_overrides() {
        let cli = Cli::parse_from([
            "vractl",
            "submit",
            "CentOS 7",
            "--set",
            "description=web tier",
            "-s",
            "data.Machine.data.cpu=2",
        ]);
        let Command::Submit(args) = cli.command else {
            panic!("Expected submit command");
        };
        assert_eq!(args.blueprint, "CentOS 7");
        assert_eq!(args.set.len(), 2);
        assert_eq!(args.set[0].leaf, "description");
        assert_eq!(args.set[1].path, vec!["data", "Machine", "data"]);
        assert_eq!(args.set[1].value, serde_json::json!(2));
    }

    #[test]
    fn test_cli_submit_quoted_value_stays_string() {
        let cli = Cli::parse_from(["vractl", "submit", "web", "--set", "description=\"123\""]);
        let Command::Submit(args) = cli.command else {
            panic!("Expected submit command");
        };
        assert_eq!(args.set[0].value, serde_json::json!("123"));
    }

    #[test]
    fn test_cli_submit_rejects_malformed_override() {
        let result = Cli::try_parse_from(["vractl", "submit", "web", "--set", "nope"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_status_raw() {
        let cli = Cli::parse_from(["vractl", "status", "req-123", "--raw"]);
        let Command::Status(args) = cli.command else {
            panic!("Expected status command");
        };
        assert_eq!(args.id, "req-123");
        assert!(args.raw);
    }

    #[test]
    fn test_cli_requests_find() {
        let cli = Cli::parse_from([
            "vractl",
            "requests",
            "find",
            "--catalog-item",
            "CentOS 7",
            "--key",
            "customerId",
            "--value",
            "cust-42",
            "-o",
            "json",
        ]);
        let Command::Requests(RequestsCommand::Find(args)) = cli.command else {
            panic!("Expected requests find command");
        };
        assert_eq!(args.catalog_item, "CentOS 7");
        assert_eq!(args.key, "customerId");
        assert_eq!(args.value, "cust-42");
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_login() {
        let cli = Cli::parse_from(["vractl", "login", "-u", "admin", "--tenant", "corp"]);
        let Command::Login(args) = cli.command else {
            panic!("Expected login command");
        };
        assert_eq!(args.username, "admin");
        assert_eq!(args.tenant, "corp");
        assert!(args.password.is_none());
    }
}
