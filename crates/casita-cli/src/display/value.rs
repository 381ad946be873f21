//! Turns a device's untyped state bag into a compact display string.
//!
//! The order of fragments is fixed (brightness, temperature, position,
//! humidity, speed, lock state), independent of the order keys arrive in.
//! Malformed values degrade silently: a non-numeric value formats as 0, a
//! non-boolean `locked` contributes nothing. Formatting never fails.

use casita_api::DeviceState;
use serde_json::Value;

/// Shown when a state bag produces no displayable fragments (em dash).
pub const PLACEHOLDER: &str = "\u{2014}";

/// Format a state bag as e.g. `"75%, 22.5°"`, or [`PLACEHOLDER`] if
/// nothing in it is displayable.
pub fn format_state(state: &DeviceState) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(v) = state.get("brightness") {
        parts.push(format!("{:.0}%", as_f64(v)));
    }
    // Current temperature wins over the setpoint; they never both appear.
    if let Some(v) = state.get("temperature") {
        parts.push(format!("{:.1}\u{b0}", as_f64(v)));
    } else if let Some(v) = state.get("targetTemperature") {
        parts.push(format!("{:.1}\u{b0}", as_f64(v)));
    }
    if let Some(v) = state.get("position") {
        parts.push(format!("{:.0}%", as_f64(v)));
    }
    if let Some(v) = state.get("humidity") {
        parts.push(format!("{:.0}% RH", as_f64(v)));
    }
    if let Some(v) = state.get("speed") {
        parts.push(format!("speed {:.0}%", as_f64(v)));
    }
    if let Some(Value::Bool(locked)) = state.get("locked") {
        parts.push(if *locked { "locked" } else { "unlocked" }.to_string());
    }

    if parts.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        parts.join(", ")
    }
}

/// Whether the `on` key is present and strictly `true`.
pub fn is_on(state: &DeviceState) -> bool {
    state.get("on").and_then(Value::as_bool).unwrap_or(false)
}

/// Numeric coercion: integers and floats pass through, everything else
/// (strings, booleans, nulls, containers) coerces to 0.
fn as_f64(v: &Value) -> f64 {
    v.as_f64().unwrap_or(0.0)
}
