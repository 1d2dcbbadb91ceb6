//! Position evaluation via shortest weighted edge-to-edge path

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::board::{Board, Cell, Occupancy, Player};

/// Distance reported when no goal cell is reachable
pub const NO_PATH: u32 = 1000;

/// Cost of stepping onto `cell` for `player`: own stones are free, empty
/// cells cost one stone, obstacles and opponent stones are impassable.
fn entry_cost(board: &Board, cell: Cell, player: Player) -> Option<u32> {
    match board.get(cell)? {
        Occupancy::Empty => Some(1),
        Occupancy::Owned(owner) if owner == player => Some(0),
        _ => None,
    }
}

/// Minimum number of empty cells `player` still has to claim to join their
/// edges, or [`NO_PATH`].
///
/// Multi-source Dijkstra: every passable start-edge cell is seeded at 0 and
/// only later steps pay their entry cost. A completed chain always scores 0,
/// but 0 does not imply one: the start cell itself may still be empty.
pub fn shortest_distance(board: &Board, player: Player) -> u32 {
    let size = board.size();
    let mut dist = vec![u32::MAX; size.cell_count()];
    let mut heap = BinaryHeap::new();

    for cell in board.start_edge(player) {
        if entry_cost(board, cell, player).is_some() {
            let idx = size.index(cell);
            dist[idx] = 0;
            heap.push(Reverse((0, idx)));
        }
    }

    while let Some(Reverse((d, idx))) = heap.pop() {
        if d > dist[idx] {
            continue;
        }
        let cell = size.cell_at(idx);
        if board.is_goal(cell, player) {
            return d;
        }
        for next in size.neighbors(cell) {
            let Some(cost) = entry_cost(board, next, player) else {
                continue;
            };
            let next_idx = size.index(next);
            let nd = d + cost;
            if nd < dist[next_idx] {
                dist[next_idx] = nd;
                heap.push(Reverse((nd, next_idx)));
            }
        }
    }

    NO_PATH
}

/// Static score of the board for `player` (higher is better)
pub fn evaluate(board: &Board, player: Player) -> i32 {
    -(shortest_distance(board, player) as i32)
}
