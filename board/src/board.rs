//! `Board`: the validated 3×3 configuration.
//!
//! A board is a permutation of {0,…,8} in row-major order; 0 is the blank.
//! The permutation invariant is enforced by the constructors, so a `Board`
//! that exists is valid and the search layer never re-validates.
//!
//! # Equality semantics
//!
//! Equality and hashing are by tile content. A board is its own identity:
//! it keys the best-cost map and the closed set directly, with no derived
//! fingerprint in between.

use std::fmt;

use crate::moves::Move;

/// Grid side length. This crate is 3×3 only.
pub const SIDE: usize = 3;

/// Number of cells (and of tiles, counting the blank).
pub const CELLS: usize = SIDE * SIDE;

/// Validation failure for a would-be board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Input does not have exactly [`CELLS`] entries.
    WrongLength { found: usize },
    /// A tile value outside `0..=8`.
    TileOutOfRange { tile: u8 },
    /// A tile value appearing more than once.
    DuplicateTile { tile: u8 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { found } => {
                write!(f, "expected {CELLS} tiles, found {found}")
            }
            Self::TileOutOfRange { tile } => {
                write!(f, "tile {tile} is outside 0..={}", CELLS - 1)
            }
            Self::DuplicateTile { tile } => {
                write!(f, "tile {tile} appears more than once")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A 3×3 sliding-puzzle configuration.
///
/// Immutable value type, 10 bytes, `Copy`. The `blank` field caches the
/// blank's cell index; it is derived from `tiles` and kept consistent by
/// every constructor and by [`Board::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
}

impl Board {
    /// Construct from row-major tile values, validating the permutation
    /// invariant.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TileOutOfRange`] or
    /// [`BoardError::DuplicateTile`] when the input is not a permutation
    /// of `0..=8`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        let mut blank = 0u8;
        for (cell, &tile) in tiles.iter().enumerate() {
            let Some(slot) = seen.get_mut(usize::from(tile)) else {
                return Err(BoardError::TileOutOfRange { tile });
            };
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
            if tile == 0 {
                blank = cell_index_u8(cell);
            }
        }
        Ok(Self { tiles, blank })
    }

    /// Construct from a slice of any length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongLength`] for anything but exactly
    /// [`CELLS`] entries, then validates as [`Board::new`].
    pub fn from_slice(tiles: &[u8]) -> Result<Self, BoardError> {
        let tiles: [u8; CELLS] = tiles
            .try_into()
            .map_err(|_| BoardError::WrongLength { found: tiles.len() })?;
        Self::new(tiles)
    }

    /// The canonical goal: tiles 1..=8 row-major, blank last.
    #[must_use]
    pub const fn goal() -> Self {
        Self {
            tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
            blank: 8,
        }
    }

    /// Row-major tile values.
    #[must_use]
    pub const fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Cell index of the blank.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        usize::from(self.blank)
    }

    /// Apply a move to the blank, returning the resulting board.
    ///
    /// Returns `None` when the move would leave the grid.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Option<Self> {
        let blank = self.blank_index();
        let (dr, dc) = mv.delta();
        let row = (blank / SIDE).checked_add_signed(isize::from(dr))?;
        let col = (blank % SIDE).checked_add_signed(isize::from(dc))?;
        if row >= SIDE || col >= SIDE {
            return None;
        }
        let target = row * SIDE + col;
        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Some(Self {
            tiles,
            blank: cell_index_u8(target),
        })
    }

    /// Every board one blank move away, paired with the move producing it,
    /// in [`Move::ALL`] emission order.
    ///
    /// A corner blank yields 2 results, an edge blank 3, the center 4.
    #[must_use]
    pub fn neighbors(&self) -> Vec<(Self, Move)> {
        let mut out = Vec::with_capacity(Move::ALL.len());
        for mv in Move::ALL {
            if let Some(next) = self.apply(mv) {
                out.push((next, mv));
            }
        }
        out
    }
}

impl fmt::Display for Board {
    /// Comma-separated row-major tiles, e.g. `1,2,3,7,4,5,0,8,6`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, tile) in self.tiles.iter().enumerate() {
            if cell > 0 {
                f.write_str(",")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

/// Narrow a cell index to its stored width. Callers pass indices < [`CELLS`].
#[allow(clippy::cast_possible_truncation)]
const fn cell_index_u8(cell: usize) -> u8 {
    cell as u8
}
