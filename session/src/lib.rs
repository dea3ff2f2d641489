//! Taquin Session: the boundary collaborator an interactive front end
//! talks to.
//!
//! Owns everything such a front end needs that is not rendering:
//! background solving with a polled one-shot handoff, textual board
//! parsing, solve-report archival, and playback pacing. No windowing,
//! widgets, or drawing live here.
//!
//! # Crate dependency graph
//!
//! ```text
//! taquin_board  ←  taquin_search  ←  taquin_session
//! ```

#![forbid(unsafe_code)]

pub mod archive;
pub mod input;
pub mod playback;
pub mod worker;
