//! Win detection: does a player's chain join their two edges?

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::board::{Board, Cell, Player};

/// True iff `player` owns an unbroken chain from their start edge to their goal edge
pub fn has_connection(board: &Board, player: Player) -> bool {
    search(board, player).is_some()
}

/// The chain found by the breadth-first search, start edge first
pub fn connection_path(board: &Board, player: Player) -> Option<Vec<Cell>> {
    let (goal, parents) = search(board, player)?;

    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&Some(prev)) = parents.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Some(path)
}

/// BFS over cells owned by `player`. Cells are marked when discovered, so each
/// is enqueued at most once. Returns the first goal cell reached together with
/// the parent links (start cells map to `None`).
fn search(board: &Board, player: Player) -> Option<(Cell, FxHashMap<Cell, Option<Cell>>)> {
    let size = board.size();
    let mut parents: FxHashMap<Cell, Option<Cell>> = FxHashMap::default();
    let mut queue = VecDeque::new();

    for cell in board.start_edge(player) {
        if board.is_owned_by(cell, player) {
            parents.insert(cell, None);
            queue.push_back(cell);
        }
    }

    while let Some(cell) = queue.pop_front() {
        if board.is_goal(cell, player) {
            return Some((cell, parents));
        }
        for next in size.neighbors(cell) {
            if board.is_owned_by(next, player) && !parents.contains_key(&next) {
                parents.insert(next, Some(cell));
                queue.push_back(next);
            }
        }
    }

    None
}
