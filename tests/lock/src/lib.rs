//! Shared helpers for the lock tests.
//!
//! The BFS oracle provides ground-truth shortest distances and
//! reachability, so the locks cross-check A* against brute force instead
//! of against itself.

#![forbid(unsafe_code)]

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use taquin_board::board::Board;

/// Brute-force shortest distance from `start` to `goal`.
///
/// Plain breadth-first search; stops at the goal's depth, so cost scales
/// with the true distance, not the full state space. `None` when the
/// goal is unreachable.
#[must_use]
pub fn bfs_distance(start: Board, goal: Board) -> Option<u32> {
    let mut dist: HashMap<Board, u32> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(board) = queue.pop_front() {
        let d = dist[&board];
        if board == goal {
            return Some(d);
        }
        for (next, _) in board.neighbors() {
            if let Entry::Vacant(slot) = dist.entry(next) {
                slot.insert(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Every board reachable from `start` by blank moves.
///
/// Enumerates one full half of the 9! permutation space (181,440
/// boards). Heavy, but the reachability lock depends on the exact count.
#[must_use]
pub fn reachable_from(start: Board) -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(board) = queue.pop_front() {
        for (next, _) in board.neighbors() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// The worked example instance: solvable, four moves from the goal.
///
/// # Panics
///
/// Never; the fixture is a permutation.
#[must_use]
pub fn worked_example() -> Board {
    Board::new([1, 2, 3, 7, 4, 5, 0, 8, 6]).expect("fixture is a permutation")
}

/// One adjacent transposition away from the goal: odd parity, unsolvable
/// against it.
///
/// # Panics
///
/// Never; the fixture is a permutation.
#[must_use]
pub fn odd_parity_example() -> Board {
    Board::new([1, 2, 3, 4, 5, 6, 8, 7, 0]).expect("fixture is a permutation")
}
