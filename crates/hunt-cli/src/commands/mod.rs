pub mod map;
pub mod play;

use hunt_core::CaveId;

/// Cave numbers as a comma-separated list.
fn join_caves(caves: &[CaveId]) -> String {
    caves
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
