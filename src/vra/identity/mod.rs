//! Identity (token) module

mod api;
mod commands;
mod models;

pub use commands::{run_login_command, run_token_check_command, PasswordResolver};
pub use models::{Credentials, IssuedToken};
