//! The fixed cave graph.
//!
//! Caves sit on the vertices of a dodecahedron: twenty caves, each joined
//! by tunnels to exactly three others. The table never changes during a
//! game.

use crate::cave::{CAVE_COUNT, CaveId};

/// Tunnels out of each cave, indexed by cave number minus one.
const TUNNELS: [[u8; 3]; CAVE_COUNT] = [
    [2, 5, 6],
    [1, 3, 7],
    [2, 4, 8],
    [3, 5, 9],
    [4, 1, 10],
    [1, 16, 20],
    [2, 16, 17],
    [3, 17, 18],
    [4, 18, 19],
    [5, 19, 20],
    [16, 15, 12],
    [17, 11, 13],
    [18, 12, 14],
    [19, 13, 15],
    [20, 14, 11],
    [6, 7, 11],
    [7, 8, 12],
    [8, 9, 13],
    [9, 10, 14],
    [6, 10, 15],
];

/// The three caves reachable from `cave`, in table order.
pub fn adjacent_caves(cave: CaveId) -> [CaveId; 3] {
    TUNNELS[cave.index()].map(CaveId::known)
}

/// Whether a tunnel joins `a` and `b`.
pub fn is_adjacent(a: CaveId, b: CaveId) -> bool {
    adjacent_caves(a).contains(&b)
}
