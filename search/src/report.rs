//! JSON solve report.
//!
//! The report is the artifact a surrounding application archives or logs
//! after a solve: the outcome tag plus, for solved instances, the search
//! statistics and the rendered path.

use serde_json::{json, Value};

use crate::search::{Solution, SolveOutcome};

/// Build the JSON report for an outcome.
#[must_use]
pub fn report(outcome: &SolveOutcome) -> Value {
    match outcome {
        SolveOutcome::Solved(solution) => solved_report(solution),
        SolveOutcome::Unsolvable => json!({ "outcome": "unsolvable" }),
        SolveOutcome::FrontierExhausted => json!({ "outcome": "frontier_exhausted" }),
    }
}

fn solved_report(solution: &Solution) -> Value {
    json!({
        "outcome": "solved",
        "move_count": solution.move_count,
        "explored": solution.explored,
        "frontier_high_water": solution.frontier_high_water,
        "elapsed_ms": u64::try_from(solution.elapsed.as_millis()).unwrap_or(u64::MAX),
        "moves": solution.moves.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "path": solution.path.iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}

/// Serialize the report for archival.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails.
pub fn to_json_bytes(outcome: &SolveOutcome) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(&report(outcome))
}
