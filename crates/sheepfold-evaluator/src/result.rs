//! Evaluation results: step traces, verdicts, and batch aggregates.

use serde::{Deserialize, Serialize};
use sheepfold_core::{Label, Pattern, StateId, TransitionId};
use std::fmt;

/// One consumed symbol: the transition taken and the states it connects.
///
/// The step list drives the caller's animated replay; the evaluator only
/// records what happened, at no particular pace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    /// State the step left from.
    pub from: StateId,
    /// State the step arrived at.
    pub to: StateId,
    /// The transition taken.
    pub transition: TransitionId,
    /// The symbol consumed.
    pub label: Label,
    /// Whether the transition loops back to its own source. Flagged for
    /// the caller's rendering; the step is otherwise ordinary.
    pub is_self_loop: bool,
}

/// Why a pattern was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    /// The graph has no start state; nothing was evaluated.
    NoStart,
    /// No transition out of the current state matched the symbol at index
    /// `at`; matching stopped there.
    NoPath { at: usize },
    /// Every symbol was consumed and the final state is not accepting,
    /// but usable transitions lead onward. Advisory: a longer pattern
    /// might have made it.
    Incomplete,
    /// Every symbol was consumed and the walk halted in a non-accepting
    /// state with no way onward.
    WrongState,
}

impl Rejection {
    /// Index of the symbol that could not be consumed, for `NoPath`.
    pub fn stuck_at(&self) -> Option<usize> {
        match self {
            Rejection::NoPath { at } => Some(*at),
            _ => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoStart => write!(f, "no-start"),
            Rejection::NoPath { at } => write!(f, "no-path at symbol {}", at),
            Rejection::Incomplete => write!(f, "incomplete"),
            Rejection::WrongState => write!(f, "wrong-state"),
        }
    }
}

/// Outcome of evaluating one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// The whole pattern was consumed and the walk halted on an accepting
    /// state.
    Accepted,
    /// The pattern was rejected.
    Rejected(Rejection),
}

/// Result of evaluating one pattern against one graph snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Steps taken up to acceptance or the point of failure, in order.
    pub steps: Vec<PathStep>,
    /// Acceptance, or the rejection reason.
    pub verdict: Verdict,
}

impl PathResult {
    /// Whether the pattern was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted)
    }

    /// The rejection reason, if rejected.
    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.verdict {
            Verdict::Accepted => None,
            Verdict::Rejected(rejection) => Some(rejection),
        }
    }

    /// Index of the symbol matching got stuck at, if it did.
    pub fn stuck_at(&self) -> Option<usize> {
        self.rejection().and_then(Rejection::stuck_at)
    }

    /// Number of steps recorded.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The state the walk ended on, if any step was taken.
    pub fn final_state(&self) -> Option<&StateId> {
        self.steps.last().map(|step| &step.to)
    }
}

/// One pattern's result within a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternResult {
    /// The pattern as supplied by the caller.
    pub pattern: Pattern,
    /// Its evaluation result.
    pub result: PathResult,
}

/// Results of evaluating a list of patterns against one snapshot, in
/// caller order. Evaluation continues past failed patterns so feedback
/// can list every verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Per-pattern results, one per supplied pattern.
    pub results: Vec<PatternResult>,
}

impl BatchResult {
    /// Whether every pattern in the batch was accepted.
    pub fn all_accepted(&self) -> bool {
        self.results.iter().all(|r| r.result.is_accepted())
    }

    /// Number of accepted patterns.
    pub fn accepted_count(&self) -> usize {
        self.results.iter().filter(|r| r.result.is_accepted()).count()
    }

    /// Number of patterns evaluated.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over per-pattern results in caller order.
    pub fn iter(&self) -> std::slice::Iter<'_, PatternResult> {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: &str, to: &str, transition: &str, label: &str) -> PathStep {
        PathStep {
            from: StateId::new(from),
            to: StateId::new(to),
            transition: TransitionId::new(transition),
            label: Label::new(label),
            is_self_loop: from == to,
        }
    }

    #[test]
    fn test_path_result_helpers() {
        let accepted = PathResult {
            steps: vec![step("start", "end", "e1", "sheep-3")],
            verdict: Verdict::Accepted,
        };
        assert!(accepted.is_accepted());
        assert_eq!(accepted.rejection(), None);
        assert_eq!(accepted.stuck_at(), None);
        assert_eq!(accepted.final_state(), Some(&StateId::new("end")));

        let rejected = PathResult {
            steps: vec![],
            verdict: Verdict::Rejected(Rejection::NoPath { at: 0 }),
        };
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.stuck_at(), Some(0));
        assert_eq!(rejected.final_state(), None);
    }

    #[test]
    fn test_rejection_display_tags() {
        assert_eq!(Rejection::NoStart.to_string(), "no-start");
        assert_eq!(Rejection::NoPath { at: 2 }.to_string(), "no-path at symbol 2");
        assert_eq!(Rejection::Incomplete.to_string(), "incomplete");
        assert_eq!(Rejection::WrongState.to_string(), "wrong-state");
    }

    #[test]
    fn test_rejection_serializes_kebab_case() {
        let no_start = serde_json::to_value(Rejection::NoStart).unwrap();
        assert_eq!(no_start, serde_json::json!("no-start"));

        let no_path = serde_json::to_value(Rejection::NoPath { at: 1 }).unwrap();
        assert_eq!(no_path, serde_json::json!({ "no-path": { "at": 1 } }));

        let wrong = serde_json::to_value(Rejection::WrongState).unwrap();
        assert_eq!(wrong, serde_json::json!("wrong-state"));
    }

    #[test]
    fn test_batch_aggregates() {
        let ok = PathResult {
            steps: vec![],
            verdict: Verdict::Accepted,
        };
        let bad = PathResult {
            steps: vec![],
            verdict: Verdict::Rejected(Rejection::WrongState),
        };
        let batch = BatchResult {
            results: vec![
                PatternResult {
                    pattern: Pattern::of(["a"]),
                    result: ok,
                },
                PatternResult {
                    pattern: Pattern::of(["b"]),
                    result: bad,
                },
            ],
        };

        assert!(!batch.all_accepted());
        assert_eq!(batch.accepted_count(), 1);
        assert_eq!(batch.len(), 2);

        let empty = BatchResult { results: vec![] };
        assert!(empty.all_accepted());
        assert!(empty.is_empty());
    }
}
