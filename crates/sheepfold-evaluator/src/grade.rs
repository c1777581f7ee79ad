//! Submission grading for learner-built constructions.

use crate::enumerate::{enumerate_accepted_paths, DEFAULT_MAX_DEPTH};
use crate::error::{GradeError, GradeResult};
use serde::{Deserialize, Serialize};
use sheepfold_core::{AutomatonGraph, Pattern};
use tracing::info;

/// Which of a level's target patterns a construction achieves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCoverage {
    /// Targets the construction accepts, in target order.
    pub matched: Vec<Pattern>,
    /// Targets the construction does not accept, in target order.
    pub unmatched: Vec<Pattern>,
}

impl PatternCoverage {
    /// Whether every target pattern is matched.
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }

    /// Total number of targets examined.
    pub fn target_count(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }
}

/// Partition `targets` by membership in `accepted`.
///
/// Comparison is exact sequence equality, order- and length-sensitive;
/// both partitions keep the targets' own order.
pub fn coverage(accepted: &[Pattern], targets: &[Pattern]) -> PatternCoverage {
    let (matched, unmatched): (Vec<Pattern>, Vec<Pattern>) = targets
        .iter()
        .cloned()
        .partition(|target| accepted.contains(target));
    PatternCoverage { matched, unmatched }
}

/// Grade a construction against its level's target patterns.
///
/// Refuses half-finished constructions the way the submit flow does,
/// checking in the same order: first that some state is accepting, then
/// that every arrow carries a sheep. A refusal is about the construction,
/// not about any pattern; pattern-level failure only ever shows up as an
/// unmatched target.
///
/// Sound constructions are enumerated at [`DEFAULT_MAX_DEPTH`] and the
/// targets partitioned against the result.
pub fn grade(graph: &AutomatonGraph, targets: &[Pattern]) -> GradeResult<PatternCoverage> {
    if !graph.has_accepting_state() {
        return Err(GradeError::NoAcceptingState);
    }

    let unlabeled = graph.unlabeled_transitions().count();
    if unlabeled > 0 {
        return Err(GradeError::UnlabeledTransitions { count: unlabeled });
    }

    let accepted = enumerate_accepted_paths(graph, DEFAULT_MAX_DEPTH);
    let report = coverage(&accepted, targets);

    info!(
        targets = targets.len(),
        matched = report.matched.len(),
        complete = report.is_complete(),
        "construction_graded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheepfold_core::{State, Transition};

    fn solved_chain() -> AutomatonGraph {
        AutomatonGraph::new(
            vec![
                State::start("start"),
                State::new("middle"),
                State::accepting("end"),
            ],
            vec![
                Transition::labeled("e1", "start", "middle", "sheep-3"),
                Transition::labeled("e2", "middle", "end", "sheep-8"),
            ],
        )
    }

    #[test]
    fn test_refuses_without_accepting_state() {
        // Also unlabeled, but the accepting check comes first.
        let graph = AutomatonGraph::new(
            vec![State::start("start"), State::new("middle")],
            vec![Transition::unlabeled("e1", "start", "middle")],
        );

        let err = grade(&graph, &[Pattern::of(["sheep-3"])]).unwrap_err();
        assert!(matches!(err, GradeError::NoAcceptingState));
    }

    #[test]
    fn test_refuses_unlabeled_transitions_with_count() {
        let graph = AutomatonGraph::new(
            vec![State::start("start"), State::accepting("end")],
            vec![
                Transition::labeled("e1", "start", "end", "sheep-3"),
                Transition::unlabeled("e2", "end", "start"),
                Transition::unlabeled("e3", "start", "start"),
            ],
        );

        let err = grade(&graph, &[]).unwrap_err();
        assert!(matches!(err, GradeError::UnlabeledTransitions { count: 2 }));
    }

    #[test]
    fn test_complete_solution_matches_all_targets() {
        let targets = vec![Pattern::of(["sheep-3", "sheep-8"])];
        let report = grade(&solved_chain(), &targets).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.matched, targets);
        assert!(report.unmatched.is_empty());
        assert_eq!(report.target_count(), 1);
    }

    #[test]
    fn test_partial_coverage_keeps_target_order() {
        let targets = vec![
            Pattern::of(["sheep-3", "sheep-8"]),
            Pattern::of(["sheep-8", "sheep-3"]),
            Pattern::of(["sheep-3"]),
        ];
        let report = grade(&solved_chain(), &targets).unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.matched, vec![Pattern::of(["sheep-3", "sheep-8"])]);
        assert_eq!(
            report.unmatched,
            vec![Pattern::of(["sheep-8", "sheep-3"]), Pattern::of(["sheep-3"])]
        );
    }

    #[test]
    fn test_coverage_is_exact_sequence_equality() {
        let accepted = vec![Pattern::of(["A", "B"])];

        let report = coverage(&accepted, &[Pattern::of(["A"])]);
        assert!(report.matched.is_empty());

        let report = coverage(&accepted, &[Pattern::of(["B", "A"])]);
        assert!(report.matched.is_empty());

        let report = coverage(&accepted, &[Pattern::of(["A", "B"])]);
        assert!(report.is_complete());
    }
}
