//! Login command arguments

use clap::Parser;

use crate::config::{defaults, env};

/// Arguments for 'login' command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// User name
    #[arg(short, long, env = env::USERNAME)]
    pub username: String,

    /// Identity tenant
    #[arg(long, default_value = defaults::TENANT)]
    pub tenant: String,

    /// Password (falls back to VRA_PASSWORD, then an interactive prompt)
    #[arg(short, long)]
    pub password: Option<String>,
}
