//! Command dispatch: bridges CLI args -> API client calls -> output.

pub mod config_cmd;
pub mod control;
pub mod info;
pub mod list;
pub mod status;

use casita_api::HomeClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &HomeClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Status(args) => status::handle(client, args, global).await,
        Command::List(args) => list::handle(client, args, global).await,
        Command::Info(args) => info::handle(client, args, global).await,

        Command::Toggle(args) => control::simple(client, "toggle", &args, global).await,
        Command::On(args) => control::simple(client, "on", &args, global).await,
        Command::Off(args) => control::simple(client, "off", &args, global).await,
        Command::Lock(args) => control::simple(client, "lock", &args, global).await,
        Command::Unlock(args) => control::simple(client, "unlock", &args, global).await,
        Command::Open(args) => control::simple(client, "open", &args, global).await,
        Command::Close(args) => control::simple(client, "close", &args, global).await,
        Command::Scene(args) => control::simple(client, "scene", &args, global).await,

        Command::Brightness(args) => control::valued(client, "brightness", &args, global).await,
        Command::Position(args) => control::valued(client, "position", &args, global).await,
        Command::Temp(args) => control::valued(client, "temp", &args, global).await,
        Command::Color(args) => control::valued(client, "color", &args, global).await,

        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
