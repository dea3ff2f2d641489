//! Manhattan-distance heuristic.

use crate::board::{Board, CELLS, SIDE};

/// Sum over all non-blank tiles of the grid distance between the tile's
/// cell in `board` and its cell in `goal`. The blank contributes 0.
///
/// Admissible and consistent for the sliding-tile metric: one move changes
/// exactly one tile's position by one grid step, so the estimate never
/// overshoots the true cost and never drops by more than 1 per edge. A*'s
/// optimality guarantee rests on this.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // bounded by 8 tiles × 4 steps
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    // Position table: goal_cell[tile] = the cell holding `tile` in `goal`.
    let mut goal_cell = [0usize; CELLS];
    for (cell, &tile) in goal.tiles().iter().enumerate() {
        goal_cell[usize::from(tile)] = cell;
    }

    let mut distance = 0usize;
    for (cell, &tile) in board.tiles().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let target = goal_cell[usize::from(tile)];
        distance += (cell / SIDE).abs_diff(target / SIDE);
        distance += (cell % SIDE).abs_diff(target % SIDE);
    }
    distance as u32
}
