//! Acceptance evaluation and grading for sheep-herding automata.
//!
//! This crate is the judging side of the sheepfold game: given a machine
//! built from [`sheepfold_core`] parts and a pattern of sheep, it walks the
//! pattern symbol by symbol and reports exactly where a rejected flock got
//! stuck. On top of the walk it enumerates every pattern a machine accepts
//! up to a depth bound, and grades a player's construction against a
//! level's target patterns.
//!
//! ## Core Concepts
//!
//! - **Evaluation**: A deterministic walk from the start state, one
//!   transition per symbol, first matching transition wins
//! - **Verdict**: Accepted, or rejected with a structured [`Rejection`]
//!   naming the failure and where it happened
//! - **Enumeration**: Depth-bounded search for every accepted pattern,
//!   revisiting a transition only at new depths so loops terminate
//! - **Coverage**: The partition of a level's targets into patterns the
//!   machine accepts and patterns it misses
//!
//! ## The Evaluation Model
//!
//! ```text
//! PathResult = {
//!     steps: Vec<PathStep>,     // transitions actually taken
//!     verdict: Accepted
//!            | Rejected(no-start | no-path at i | incomplete | wrong-state)
//! }
//! ```
//!
//! A rejection keeps the steps taken before the walk stopped, so a caller
//! can replay the partial journey.

mod enumerate;
mod error;
mod evaluate;
mod grade;
pub mod levels;
mod result;

pub use enumerate::{enumerate_accepted_paths, DEFAULT_MAX_DEPTH};
pub use error::{GradeError, GradeResult};
pub use evaluate::{evaluate, evaluate_all};
pub use grade::{coverage, grade, PatternCoverage};
pub use result::{BatchResult, PathResult, PathStep, PatternResult, Rejection, Verdict};

// Level catalog
pub use levels::{
    accept_reject_question, accept_reject_questions, build_level, build_levels, drag_level,
    drag_levels, AcceptRejectQuestion, Answer, BuildLevel, DragLevel,
    ACCEPT_REJECT_QUESTION_COUNT, BUILD_LEVEL_COUNT, DRAG_LEVEL_COUNT,
};
