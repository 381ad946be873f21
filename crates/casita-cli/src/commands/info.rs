//! Info command: detailed view of a device, room, or group.
//!
//! A single result renders as a property table; multiple results render as
//! one row per device. Unlike `status <room>`, the multi-device view folds
//! reachability into the State column.

use casita_api::{DeviceInfo, HomeClient};
use serde_json::Value;

use crate::cli::{GlobalOpts, TargetArgs};
use crate::display::Table;
use crate::display::value::{format_state, is_on};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &HomeClient,
    args: TargetArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let infos = client.info(&args.joined()).await?;

    if global.json {
        return output::print_json(&infos);
    }

    if let [info] = infos.as_slice() {
        print!("{}", single_info_table(info).render());
    } else {
        print!("{}", multi_info_table(&infos).render());
    }
    Ok(())
}

fn single_info_table(info: &DeviceInfo) -> Table {
    let mut tbl = Table::new(["Property", "Value"]);
    tbl.add_row(["Name", info.name.as_str()]);
    tbl.add_row(["Type", info.kind.as_str()]);
    if !info.room.is_empty() {
        tbl.add_row(["Room", info.room.as_str()]);
    }
    tbl.add_row([
        "Status",
        if info.reachable { "reachable" } else { "unreachable" },
    ]);

    // serde_json::Map iterates in key order, so the listing is stable.
    for (key, value) in &info.state {
        tbl.add_row([key.clone(), scalar_display(value)]);
    }
    tbl
}

fn multi_info_table(infos: &[DeviceInfo]) -> Table {
    let mut tbl = Table::new(["Device", "Type", "State", "Value"]);
    for info in infos {
        let state = if !info.reachable {
            "unreachable"
        } else if is_on(&info.state) {
            "on"
        } else {
            "off"
        };
        let value = format_state(&info.state);
        tbl.add_row([info.name.as_str(), info.kind.as_str(), state, value.as_str()]);
    }
    tbl
}

/// Render a state value bare: strings without quotes, everything else in
/// its JSON form.
fn scalar_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
