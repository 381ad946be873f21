//! Clap argument definitions for the `casita` binary.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "casita",
    version,
    about = "Control your smart-home devices through the Casita app",
    long_about = "A CLI for the Casita desktop app's local HTTP server.\n\
                  Query home status, list rooms and devices, and send control\n\
                  commands. Webhook/CLI access requires Casita Pro."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout: u64,

    /// Override the configured server host
    #[arg(long, global = true, env = "CASITA_HOST")]
    pub host: Option<String>,

    /// Override the configured server port
    #[arg(long, global = true, env = "CASITA_PORT")]
    pub port: Option<u16>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show home status summary, or device states for a room
    Status(StatusArgs),

    /// List rooms, devices, scenes, or groups
    #[command(subcommand)]
    List(ListCommand),

    /// Show detailed info about a device, room, or group
    Info(TargetArgs),

    /// Toggle a device or group
    Toggle(TargetArgs),
    /// Turn on a device or group
    On(TargetArgs),
    /// Turn off a device or group
    Off(TargetArgs),
    /// Lock a device
    Lock(TargetArgs),
    /// Unlock a device
    Unlock(TargetArgs),
    /// Open a device (blinds, garage)
    Open(TargetArgs),
    /// Close a device (blinds, garage)
    Close(TargetArgs),
    /// Activate a scene
    Scene(TargetArgs),

    /// Set brightness (0-100)
    Brightness(ValueArgs),
    /// Set position (0-100)
    Position(ValueArgs),
    /// Set color temperature (140-500 mireds)
    Temp(ValueArgs),
    /// Set color (hex)
    Color(ValueArgs),

    /// Show or update CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Summary when no room is given; per-room drill-down otherwise.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Room, device, or group name (may span multiple words)
    pub target: Vec<String>,
}

/// A target name, taken as trailing words joined with spaces.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Device, room, scene, or group name (may span multiple words)
    #[arg(required = true)]
    pub target: Vec<String>,
}

impl TargetArgs {
    pub fn joined(&self) -> String {
        self.target.join(" ")
    }
}

/// A value followed by a target name.
#[derive(Debug, Args)]
pub struct ValueArgs {
    /// Value to set
    pub value: String,

    /// Device or group name (may span multiple words)
    #[arg(required = true)]
    pub target: Vec<String>,
}

impl ValueArgs {
    pub fn joined_target(&self) -> String {
        self.target.join(" ")
    }
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// List all rooms
    Rooms,
    /// List devices, optionally filtered by room
    Devices {
        /// Room name
        room: Option<String>,
    },
    /// List all scenes
    Scenes,
    /// List all groups
    Groups,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved configuration
    Show,
    /// Set configuration values
    Set {
        /// Server host address
        #[arg(long)]
        host: Option<String>,

        /// Server port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
