//! Catalog requests module

mod api;
mod commands;
mod models;
mod status;

pub use commands::{
    run_requests_find_command, run_requests_list_command, run_status_command,
    run_submit_command,
};
pub use models::{
    DeploymentOptions, RequestCompletion, RequestData, RequestEntry, SubmittedRequest,
};
pub use status::{RequestStatus, StatusQuery};
