//! Identity command handlers

use log::{debug, info};

use crate::cli::{Cli, Command};
use crate::config::env;
use crate::error::{Result, VraError};
use crate::ui::prompt_password;
use crate::vra::VraClient;

use super::models::Credentials;

/// Password resolution with fallback logic
pub struct PasswordResolver;

impl PasswordResolver {
    /// Resolve the login password:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (VRA_PASSWORD)
    /// 3. Interactive prompt (not in batch mode)
    pub fn resolve(cli_password: Option<&str>, username: &str, batch: bool) -> Result<String> {
        if let Some(password) = cli_password {
            debug!("Using password from CLI argument");
            return Ok(password.to_string());
        }

        match std::env::var(env::PASSWORD) {
            Ok(password) if !password.is_empty() => {
                debug!("Using password from {} environment variable", env::PASSWORD);
                return Ok(password);
            }
            _ => {}
        }

        if batch {
            return Err(VraError::Config(format!(
                "No password given for '{}'. Use --password or set {} in batch mode.",
                username,
                env::PASSWORD
            )));
        }

        prompt_password(username).map_err(|e| VraError::Config(e.to_string()))
    }
}

/// Run the login command: issue a token and print its id
pub async fn run_login_command(
    client: &VraClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Login(args) = &cli.command else {
        unreachable!()
    };

    let password = PasswordResolver::resolve(args.password.as_deref(), &args.username, cli.batch)?;
    let credentials = Credentials::new(&args.username, password, &args.tenant);

    let token = client.issue_token(&credentials).await?;
    info!(
        "Logged in as {}@{} on {}",
        args.username,
        args.tenant,
        client.host()
    );

    println!("{}", token.id);
    Ok(())
}

/// Run the token check command
///
/// Returns whether the token is valid so the caller can set the exit code.
pub async fn run_token_check_command(
    client: &VraClient,
) -> std::result::Result<bool, Box<dyn std::error::Error>> {
    let token = client
        .token()
        .ok_or_else(|| VraError::TokenNotFound("No token to check".to_string()))?;

    let valid = client.is_token_authorized(token).await?;
    println!("{}", if valid { "valid" } else { "invalid" });
    Ok(valid)
}
