use comfy_table::{ContentArrangement, Table};

use hunt_core::CaveId;
use hunt_core::graph::adjacent_caves;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Cave", "Tunnels"]);

    for cave in CaveId::all() {
        table.add_row(vec![cave.to_string(), super::join_caves(&adjacent_caves(cave))]);
    }

    println!("{table}");
    println!();
    println!("  {} caves, 3 tunnels each", hunt_core::CAVE_COUNT);

    Ok(())
}
