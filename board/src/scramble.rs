//! Random solvable-puzzle generation.
//!
//! A scramble is a random walk of the blank, so every output is reachable
//! from its origin by construction and the parity pre-filter will always
//! pass for it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::moves::Move;

/// Conventional walk length for an interactive shuffle.
pub const DEFAULT_STEPS: usize = 100;

/// Random-walk the blank `steps` times starting from the canonical goal.
pub fn scramble<R: Rng>(rng: &mut R, steps: usize) -> Board {
    scramble_from(rng, Board::goal(), steps)
}

/// Random-walk the blank `steps` times starting from `start`.
///
/// The immediate undo of the previous step is excluded so short walks do
/// not oscillate in place. Every cell has at least two legal moves, so
/// excluding one always leaves an option.
pub fn scramble_from<R: Rng>(rng: &mut R, start: Board, steps: usize) -> Board {
    let mut board = start;
    let mut last: Option<Move> = None;
    for _ in 0..steps {
        let options: Vec<(Board, Move)> = board
            .neighbors()
            .into_iter()
            .filter(|&(_, mv)| Some(mv.opposite()) != last)
            .collect();
        if let Some(&(next, mv)) = options.choose(rng) {
            board = next;
            last = Some(mv);
        }
    }
    board
}
