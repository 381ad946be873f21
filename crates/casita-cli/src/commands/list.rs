//! List command handlers: rooms, devices, scenes, groups.

use casita_api::HomeClient;

use crate::cli::{GlobalOpts, ListCommand};
use crate::display::Table;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &HomeClient,
    cmd: ListCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        ListCommand::Rooms => {
            let rooms = client.list_rooms().await?;
            if global.json {
                return output::print_json(&rooms);
            }
            let mut tbl = Table::new(["Room"]);
            for room in &rooms {
                tbl.add_row([room.name.as_str()]);
            }
            print!("{}", tbl.render());
            Ok(())
        }

        ListCommand::Devices { room } => {
            let devices = client.list_devices(room.as_deref()).await?;
            if global.json {
                return output::print_json(&devices);
            }
            let mut tbl = Table::new(["Device", "Type", "Room", "Status"]);
            for device in &devices {
                let status = if device.reachable { "ok" } else { "unreachable" };
                tbl.add_row([
                    device.name.as_str(),
                    device.kind.as_str(),
                    device.room.as_str(),
                    status,
                ]);
            }
            print!("{}", tbl.render());
            Ok(())
        }

        ListCommand::Scenes => {
            let scenes = client.list_scenes().await?;
            if global.json {
                return output::print_json(&scenes);
            }
            let mut tbl = Table::new(["Scene"]);
            for scene in &scenes {
                tbl.add_row([scene.name.as_str()]);
            }
            print!("{}", tbl.render());
            Ok(())
        }

        ListCommand::Groups => {
            let groups = client.list_groups().await?;
            if global.json {
                return output::print_json(&groups);
            }
            let mut tbl = Table::new(["Group", "Icon", "Devices"]);
            for group in &groups {
                tbl.add_row([
                    group.name.clone(),
                    group.icon.clone(),
                    group.devices.to_string(),
                ]);
            }
            print!("{}", tbl.render());
            Ok(())
        }
    }
}
