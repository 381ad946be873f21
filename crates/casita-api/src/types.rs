// Typed models for the Casita HTTP API.
//
// The server is loosely typed: device state is a free-form JSON bag, the
// `room` field is omitted when not requested, and the info endpoint returns
// either a single object or an array. These types stay permissive
// (`#[serde(default)]` everywhere a field may be absent) so decode order in
// the client, not serde strictness, decides how a body is interpreted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A device's state bag: string keys to dynamically typed values.
///
/// Known keys are `on`, `brightness`, `temperature`, `targetTemperature`,
/// `position`, `humidity`, `speed`, and `locked`; anything else is carried
/// through untouched. `serde_json::Map` keeps keys sorted, which the CLI
/// relies on for stable property listings.
pub type DeviceState = serde_json::Map<String, serde_json::Value>;

/// Outcome of a control command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: ActionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Error,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Home-wide counters returned by `/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSummary {
    pub rooms: u32,
    pub devices: u32,
    pub accessories: u32,
    pub reachable: u32,
    pub unreachable: u32,
    pub scenes: u32,
    pub groups: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub room: String,
    pub reachable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub icon: String,
    pub devices: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub room: String,
}

/// Full per-device record returned by `/info/<target>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub room: String,
    pub reachable: bool,
    #[serde(default, skip_serializing_if = "DeviceState::is_empty")]
    pub state: DeviceState,
}
