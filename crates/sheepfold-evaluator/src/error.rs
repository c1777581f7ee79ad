//! Error types for submission grading.

use thiserror::Error;

/// Result type alias for grading operations.
pub type GradeResult<T> = Result<T, GradeError>;

/// Refusals raised before a construction can be graded.
///
/// Evaluation itself never fails: rejection, stuck states, and dead ends
/// are ordinary outcomes carried in the result. Grading is the one surface
/// that refuses, mirroring the submit flow's pre-checks on a half-finished
/// construction.
#[derive(Debug, Error)]
pub enum GradeError {
    /// No state is accepting, so no pattern could ever be accepted.
    #[error("construction has no accepting state")]
    NoAcceptingState,

    /// Some transitions have no label yet.
    #[error("{count} transition(s) have no label")]
    UnlabeledTransitions { count: usize },
}
