//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            if global.json {
                return output::print_json(&cfg);
            }
            println!("Host: {}", cfg.host);
            println!("Port: {}", cfg.port);
            println!("URL:  {}", cfg.base_url());
            println!("File: {}", config::config_path().display());
            Ok(())
        }

        ConfigCommand::Set { host, port } => {
            if host.is_none() && port.is_none() {
                return Err(CliError::Validation {
                    field: "set".into(),
                    reason: "nothing to set; pass --host and/or --port".into(),
                });
            }

            let mut cfg = config::load_config_or_default();
            if let Some(host) = host {
                cfg.host = host;
            }
            if let Some(port) = port {
                cfg.port = port;
            }

            config::save_config(&cfg)?;
            println!("Configuration saved.");
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
    }
}
