//! Status command: whole-home summary tree, or a per-target device table.
//!
//! The two views treat reachability differently on purpose: the summary
//! tree folds it into the state column ("unreachable" wins over on/off),
//! while the per-target table reports only on/off from the state bag and
//! leaves reachability to `list devices` / `info`.

use casita_api::{DeviceInfo, HomeClient};

use crate::cli::{GlobalOpts, StatusArgs};
use crate::display::value::{PLACEHOLDER, format_state, is_on};
use crate::display::{Table, Tree, TreeNode};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &HomeClient,
    args: StatusArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if args.target.is_empty() {
        summary(client, global).await
    } else {
        target_status(client, &args.target.join(" "), global).await
    }
}

/// One tree-line entry per device, precomputed so column widths can be
/// taken across all rooms before any label is built.
struct DeviceEntry {
    info: DeviceInfo,
    state: String,
    value: String,
}

/// Whole-home summary: `/status` counters as the root label, one child per
/// room, one grandchild per device.
async fn summary(client: &HomeClient, global: &GlobalOpts) -> Result<(), CliError> {
    let status = client.status().await?;

    // Structured mode reports the counters exactly as the server returned
    // them; the per-room drill-down below is text-only.
    if global.json {
        return output::print_json(&status);
    }

    let rooms = client.list_rooms().await?;

    let mut room_devices: Vec<Vec<DeviceEntry>> = Vec::with_capacity(rooms.len());
    let mut max_name = 0;
    let mut max_type = 0;

    for room in &rooms {
        let infos = client.info(&room.name).await?;
        let mut entries = Vec::with_capacity(infos.len());
        for info in infos {
            let state = device_state(&info).to_string();
            let value = if state == "on" {
                let v = format_state(&info.state);
                if v == PLACEHOLDER { String::new() } else { v }
            } else {
                String::new()
            };
            max_name = max_name.max(info.name.chars().count());
            max_type = max_type.max(info.kind.chars().count());
            entries.push(DeviceEntry { info, state, value });
        }
        room_devices.push(entries);
    }

    let header = format!(
        "Home ({} rooms, {} devices, {} unreachable)",
        status.rooms, status.devices, status.unreachable
    );

    let room_nodes = rooms
        .iter()
        .zip(room_devices)
        .map(|(room, entries)| {
            let device_nodes = entries
                .into_iter()
                .map(|entry| {
                    let mut label = format!(
                        "{:<max_name$}  {:<max_type$}  {}",
                        entry.info.name, entry.info.kind, entry.state
                    );
                    if !entry.value.is_empty() {
                        label.push_str("    ");
                        label.push_str(&entry.value);
                    }
                    TreeNode::leaf(label)
                })
                .collect();
            TreeNode::new(room.name.clone(), device_nodes)
        })
        .collect();

    let tree = Tree {
        root: TreeNode::new(header, room_nodes),
    };
    print!("{}", tree.render());
    Ok(())
}

/// Display state for the summary tree: reachability wins, then the `on`
/// key (strictly boolean true) decides on/off.
fn device_state(info: &DeviceInfo) -> &'static str {
    if !info.reachable {
        return "unreachable";
    }
    if is_on(&info.state) { "on" } else { "off" }
}

/// Per-target drill-down: a flat `Device | State | Value` table.
async fn target_status(
    client: &HomeClient,
    target: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let infos = client.info(target).await?;

    if global.json {
        return output::print_json(&infos);
    }

    let mut tbl = Table::new(["Device", "State", "Value"]);
    for info in &infos {
        let state = if is_on(&info.state) { "on" } else { "off" };
        let value = format_state(&info.state);
        tbl.add_row([info.name.as_str(), state, value.as_str()]);
    }
    print!("{}", tbl.render());
    Ok(())
}
