//! Control command handlers: plain actions (toggle, on, off, ...) and
//! valued actions (brightness, position, temp, color).
//!
//! The server reports command failures inside a 200 body; the API client
//! surfaces those as errors, so reaching the print below means success.

use casita_api::HomeClient;

use crate::cli::{GlobalOpts, TargetArgs, ValueArgs};
use crate::error::CliError;
use crate::output;

pub async fn simple(
    client: &HomeClient,
    action: &str,
    args: &TargetArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let resp = client.run_action(action, &args.joined()).await?;

    if global.json {
        return output::print_json(&resp);
    }
    println!("{}", resp.status);
    Ok(())
}

pub async fn valued(
    client: &HomeClient,
    action: &str,
    args: &ValueArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let resp = client
        .run_value_action(action, &args.value, &args.joined_target())
        .await?;

    if global.json {
        return output::print_json(&resp);
    }
    println!("{}", resp.status);
    Ok(())
}
