mod cli;
mod commands;
mod config;
mod display;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use casita_api::{ClientConfig, HomeClient};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a running server
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "casita", &mut std::io::stdout());
            Ok(())
        }

        // Everything else talks to the server
        cmd => {
            let client = build_client(&cli.global)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &client, &cli.global).await
        }
    }
}

/// Build a `HomeClient` from the config file plus CLI flag overrides.
fn build_client(global: &GlobalOpts) -> Result<HomeClient, CliError> {
    let mut cfg = config::load_config_or_default();
    if let Some(ref host) = global.host {
        cfg.host = host.clone();
    }
    if let Some(port) = global.port {
        cfg.port = port;
    }

    let url_str = cfg.base_url();
    let base_url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "host".into(),
        reason: format!("invalid server URL: {url_str}"),
    })?;

    HomeClient::new(ClientConfig {
        base_url,
        timeout: std::time::Duration::from_secs(global.timeout),
    })
    .map_err(Into::into)
}
