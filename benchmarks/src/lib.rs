//! Shared helpers for the taquin benchmark suites.

use rand::rngs::StdRng;
use rand::SeedableRng;

use taquin_board::board::Board;
use taquin_board::scramble::scramble;

/// Fixed seed so benchmark inputs are identical across machines and runs.
pub const BENCH_SEED: u64 = 0x5eed;

/// A batch of scrambled boards at the given walk depth.
#[must_use]
pub fn scrambled_boards(depth: usize, count: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    (0..count).map(|_| scramble(&mut rng, depth)).collect()
}
