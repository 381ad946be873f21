// casita-api: Async Rust client for the Casita app's local HTTP control server

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{ClientConfig, HomeClient};
pub use error::Error;
pub use types::{
    ActionResponse, ActionStatus, Device, DeviceInfo, DeviceState, Group, Room, Scene,
    StatusSummary,
};
