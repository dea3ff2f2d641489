//! Textual board input.
//!
//! Accepts the comma-separated form an entry field produces, e.g.
//! `"1,2,3,7,4,5,0,8,6"`. Whitespace around tokens is tolerated and
//! empty fragments are skipped, so sloppy input like `"1, 2,,3"` parses
//! the same way a forgiving entry field accepts it. Validation proper
//! (count, range, uniqueness) is the board's own constructor; this
//! module only turns text into numbers.

use std::fmt;

use taquin_board::board::{Board, BoardError};

/// Failure turning text into a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A fragment that is not a base-10 tile number.
    InvalidToken { token: String },
    /// Numeric input that is not a permutation of `0..=8`.
    Board(BoardError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { token } => write!(f, "not a tile number: {token:?}"),
            Self::Board(err) => write!(f, "invalid board: {err}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a comma-separated board.
///
/// # Errors
///
/// [`InputError::InvalidToken`] for non-numeric fragments;
/// [`InputError::Board`] when the numbers are not a permutation of
/// `0..=8` (wrong count, out of range, or repeated).
pub fn parse_board(text: &str) -> Result<Board, InputError> {
    let mut tiles = Vec::with_capacity(9);
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let tile: u8 = token.parse().map_err(|_| InputError::InvalidToken {
            token: token.to_string(),
        })?;
        tiles.push(tile);
    }
    Board::from_slice(&tiles).map_err(InputError::Board)
}
