//! vractl - vRealize Automation catalog request client
//!
//! A client library and CLI for requesting catalog items and tracking the
//! resulting requests on a vRealize Automation appliance.
//!
//! # Features
//!
//! - Issue and validate identity tokens
//! - Resolve catalog items by name and list entitled items
//! - Submit requests, merging dotted-path overrides into the item's template
//! - Poll request status and search requests by request data
//!
//! # Example
//!
//! ```bash
//! # Get a token
//! export VRA_HOSTNAME=vra.example.com
//! export VRA_TOKEN=$(vractl login -u admin@vsphere.local)
//!
//! # Request a machine with 2 CPUs
//! vractl submit "CentOS 7" --set description="web tier" --set data.Machine.data.cpu=2
//!
//! # Check on it
//! vractl status 7aaf9baf-aa4e-47c4-997b-edd7c7983a5b
//!
//! # Find requests by a request data value
//! vractl requests find -c "CentOS 7" --key customerId --value cust-42 -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;
pub mod vra;

pub use cli::{
    CatalogArgs, Cli, Command, LoginArgs, OutputFormat, RequestsCommand, RequestsFindArgs,
    RequestsListArgs, StatusArgs, SubmitArgs,
};
pub use error::{Result, VraError};
pub use vra::{
    apply_overrides, run_catalog_command, run_login_command, run_requests_find_command,
    run_requests_list_command, run_status_command, run_submit_command, run_token_check_command,
    CatalogItem, CatalogItemSummary, ClientConfig, Credentials, DeploymentOptions, FieldOverride,
    HostResolver, IssuedToken, RequestStatus, StatusQuery, SubmittedRequest, TokenResolver,
    VraClient,
};
