//! Taquin Board: the pure 3×3 sliding-puzzle carrier.
//!
//! This crate holds the board value type and the state utilities the
//! search layer is built on. It does NOT depend on `taquin_search` or
//! `taquin_session`.
//!
//! # Crate dependency graph
//!
//! ```text
//! taquin_board  ←  taquin_search  ←  taquin_session
//! (pure carrier)    (frontier, solve)    (worker, parsing, reports)
//! ```
//!
//! # Key items
//!
//! - [`board::Board`] — validated configuration, `Copy + Eq + Hash` by content
//! - [`moves::Move`] — blank travel direction with fixed emission order
//! - [`heuristic::manhattan_distance`] — the A* heuristic
//! - [`parity::is_solvable`] — inversion-parity reachability pre-filter
//! - [`scramble::scramble`] — random-walk puzzle generation

#![forbid(unsafe_code)]

pub mod board;
pub mod heuristic;
pub mod moves;
pub mod parity;
pub mod scramble;
