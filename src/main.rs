//! vractl - main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;
use std::time::Duration;

use vractl::{
    run_catalog_command, run_login_command, run_requests_find_command, run_requests_list_command,
    run_status_command, run_submit_command, run_token_check_command, Cli, ClientConfig, Command,
    HostResolver, RequestsCommand, TokenResolver, VraClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting vractl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Dispatch the command; `Ok(false)` means a negative answer (invalid token)
async fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let host = HostResolver::resolve(cli.host.as_deref())?;

    let mut config = ClientConfig::new(&host);
    config.accept_invalid_certs = cli.insecure;
    config.timeout = cli.timeout.map(Duration::from_secs);

    // Login is the only unauthenticated command
    if !matches!(cli.command, Command::Login(_)) {
        let token_resolver = TokenResolver::new(&host);
        config = config.with_token(token_resolver.resolve(cli.token.as_deref())?);
    }

    debug!(
        "Using host {} (insecure={}, timeout={:?})",
        host, config.accept_invalid_certs, config.timeout
    );

    let client = VraClient::from_config(config)?;

    match &cli.command {
        Command::Login(_) => run_login_command(&client, cli).await?,
        Command::TokenCheck => return run_token_check_command(&client).await,
        Command::Catalog(_) => run_catalog_command(&client, cli).await?,
        Command::Submit(_) => run_submit_command(&client, cli).await?,
        Command::Status(_) => run_status_command(&client, cli).await?,
        Command::Requests(RequestsCommand::List(_)) => {
            run_requests_list_command(&client, cli).await?
        }
        Command::Requests(RequestsCommand::Find(_)) => {
            run_requests_find_command(&client, cli).await?
        }
    }

    Ok(true)
}
