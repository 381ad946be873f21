//! Structured output helpers.
//!
//! JSON mode bypasses the table/tree renderers and emits the decoded data
//! pretty-printed with serde_json's 2-space indent. Nothing is printed
//! until the data for the whole view is in hand, so a failure never leaves
//! partial structured output behind.

use serde::Serialize;

use crate::error::CliError;

/// Pretty-print a value as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
