//! Symbol-by-symbol acceptance evaluation.

use crate::result::{BatchResult, PathResult, PathStep, PatternResult, Rejection, Verdict};
use sheepfold_core::{AutomatonGraph, Label, Pattern, StateId, Transition};
use tracing::{debug, warn};

/// Evaluate one pattern against one graph snapshot.
///
/// Walks the graph from the start state, consuming the pattern one symbol
/// at a time. For each symbol the first transition in caller order whose
/// source is the current state and whose label equals the symbol is taken;
/// that ordering is the whole tie-break policy, there is no search for a
/// better path. Unlabeled transitions never match, and transitions whose
/// target state is missing from the snapshot are skipped as if absent.
///
/// Nothing here throws: a missing start state, a symbol with no matching
/// transition, or a halt on the wrong state all come back as a
/// [`Rejection`] inside the result.
pub fn evaluate(graph: &AutomatonGraph, pattern: &Pattern) -> PathResult {
    let Some(start) = graph.start_state() else {
        debug!(pattern = %pattern, "evaluation_no_start");
        return PathResult {
            steps: Vec::new(),
            verdict: Verdict::Rejected(Rejection::NoStart),
        };
    };

    let mut current = start.id.clone();
    let mut steps = Vec::with_capacity(pattern.len());

    for (index, symbol) in pattern.iter().enumerate() {
        let Some(transition) = first_match(graph, &current, symbol) else {
            debug!(
                pattern = %pattern,
                stuck_at = index,
                state = %current,
                "evaluation_no_path"
            );
            return PathResult {
                steps,
                verdict: Verdict::Rejected(Rejection::NoPath { at: index }),
            };
        };

        steps.push(PathStep {
            from: current.clone(),
            to: transition.target.clone(),
            transition: transition.id.clone(),
            label: symbol.clone(),
            is_self_loop: transition.is_self_loop(),
        });
        current = transition.target.clone();
    }

    let accepted = graph.state(&current).map(|s| s.is_accepting).unwrap_or(false);
    let verdict = if accepted {
        Verdict::Accepted
    } else if has_usable_exit(graph, &current) {
        // Halted short of the bed with arrows still leading onward.
        Verdict::Rejected(Rejection::Incomplete)
    } else {
        Verdict::Rejected(Rejection::WrongState)
    };

    debug!(
        pattern = %pattern,
        steps = steps.len(),
        accepted = accepted,
        "evaluation_complete"
    );
    PathResult { steps, verdict }
}

/// Evaluate a list of patterns against the same snapshot, in caller order.
///
/// Every pattern is evaluated even after failures, so drag/build feedback
/// can show a verdict per pattern.
pub fn evaluate_all(graph: &AutomatonGraph, patterns: &[Pattern]) -> BatchResult {
    let results: Vec<PatternResult> = patterns
        .iter()
        .map(|pattern| PatternResult {
            pattern: pattern.clone(),
            result: evaluate(graph, pattern),
        })
        .collect();

    debug!(
        patterns = results.len(),
        accepted = results.iter().filter(|r| r.result.is_accepted()).count(),
        "batch_evaluation_complete"
    );
    BatchResult { results }
}

/// First transition in caller order leaving `from` that consumes `symbol`.
///
/// Transitions with an unresolvable target are skipped; the caller's graph
/// may be transiently inconsistent while it is being edited.
fn first_match<'g>(
    graph: &'g AutomatonGraph,
    from: &StateId,
    symbol: &Label,
) -> Option<&'g Transition> {
    for transition in &graph.transitions {
        if &transition.source != from || !transition.matches(symbol) {
            continue;
        }
        if !graph.contains_state(&transition.target) {
            warn!(
                transition = %transition.id,
                target = %transition.target,
                "skipping_transition_with_unresolved_target"
            );
            continue;
        }
        return Some(transition);
    }
    None
}

/// Whether any labeled, resolvable transition leaves `state`.
fn has_usable_exit(graph: &AutomatonGraph, state: &StateId) -> bool {
    graph
        .transitions_from(state)
        .any(|t| t.is_labeled() && graph.contains_state(&t.target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheepfold_core::State;

    /// start --sheep-3--> middle --sheep-7--> end(accepting)
    fn chain_graph() -> AutomatonGraph {
        AutomatonGraph::new(
            vec![
                State::start("start"),
                State::new("middle"),
                State::accepting("end"),
            ],
            vec![
                Transition::labeled("e1", "start", "middle", "sheep-3"),
                Transition::labeled("e2", "middle", "end", "sheep-7"),
            ],
        )
    }

    /// start --A--> mid, mid --B--> mid (self-loop), mid --C--> end(accepting)
    fn loop_graph() -> AutomatonGraph {
        AutomatonGraph::new(
            vec![
                State::start("start"),
                State::new("mid"),
                State::accepting("end"),
            ],
            vec![
                Transition::labeled("e1", "start", "mid", "A"),
                Transition::labeled("e2", "mid", "mid", "B"),
                Transition::labeled("e3", "mid", "end", "C"),
            ],
        )
    }

    #[test]
    fn test_accepts_full_walk_to_accepting_state() {
        let result = evaluate(&chain_graph(), &Pattern::of(["sheep-3", "sheep-7"]));

        assert!(result.is_accepted());
        assert_eq!(result.step_count(), 2);
        assert_eq!(result.steps[0].from, StateId::new("start"));
        assert_eq!(result.steps[0].to, StateId::new("middle"));
        assert_eq!(result.steps[1].to, StateId::new("end"));
        assert_eq!(result.final_state(), Some(&StateId::new("end")));
    }

    #[test]
    fn test_unknown_symbol_rejects_no_path_at_index() {
        let result = evaluate(&chain_graph(), &Pattern::of(["sheep-8"]));

        assert!(!result.is_accepted());
        assert_eq!(result.rejection(), Some(&Rejection::NoPath { at: 0 }));
        assert_eq!(result.step_count(), 0);

        // Steps before the stuck symbol are kept.
        let result = evaluate(&chain_graph(), &Pattern::of(["sheep-3", "sheep-8"]));
        assert_eq!(result.rejection(), Some(&Rejection::NoPath { at: 1 }));
        assert_eq!(result.step_count(), 1);
    }

    #[test]
    fn test_empty_pattern_accepted_iff_start_accepting() {
        let not_accepting = chain_graph();
        let result = evaluate(&not_accepting, &Pattern::empty());
        assert!(!result.is_accepted());
        assert_eq!(result.step_count(), 0);

        let accepting_start = AutomatonGraph::new(
            vec![State::start_accepting("lone")],
            vec![],
        );
        let result = evaluate(&accepting_start, &Pattern::empty());
        assert!(result.is_accepted());
        assert_eq!(result.step_count(), 0);
    }

    #[test]
    fn test_no_start_rejects_immediately() {
        let graph = AutomatonGraph::new(
            vec![State::new("a"), State::accepting("b")],
            vec![Transition::labeled("e1", "a", "b", "x")],
        );

        let result = evaluate(&graph, &Pattern::of(["x"]));
        assert_eq!(result.rejection(), Some(&Rejection::NoStart));
        assert_eq!(result.step_count(), 0);
    }

    #[test]
    fn test_multiple_starts_first_in_caller_order_wins() {
        let graph = AutomatonGraph::new(
            vec![State::start("first"), State::start("second"), State::accepting("end")],
            vec![
                Transition::labeled("e1", "first", "end", "x"),
                Transition::labeled("e2", "second", "end", "y"),
            ],
        );

        assert!(evaluate(&graph, &Pattern::of(["x"])).is_accepted());
        assert!(!evaluate(&graph, &Pattern::of(["y"])).is_accepted());
    }

    #[test]
    fn test_self_loop_chain_flags_loop_steps() {
        let result = evaluate(&loop_graph(), &Pattern::of(["A", "B", "B", "C"]));

        assert!(result.is_accepted());
        assert_eq!(result.step_count(), 4);
        assert!(!result.steps[0].is_self_loop);
        assert!(result.steps[1].is_self_loop);
        assert!(result.steps[2].is_self_loop);
        assert!(!result.steps[3].is_self_loop);
    }

    #[test]
    fn test_consumed_but_short_is_incomplete() {
        // Halt on middle, which still has a usable way onward.
        let result = evaluate(&chain_graph(), &Pattern::of(["sheep-3"]));

        assert!(!result.is_accepted());
        assert_eq!(result.rejection(), Some(&Rejection::Incomplete));
        assert_eq!(result.stuck_at(), None);
    }

    #[test]
    fn test_consumed_into_dead_non_accepting_state_is_wrong_state() {
        let graph = AutomatonGraph::new(
            vec![State::start("start"), State::new("dead")],
            vec![Transition::labeled("e1", "start", "dead", "x")],
        );

        let result = evaluate(&graph, &Pattern::of(["x"]));
        assert_eq!(result.rejection(), Some(&Rejection::WrongState));

        // An unlabeled exit does not count as a way onward.
        let graph = AutomatonGraph::new(
            vec![State::start("start"), State::new("dead"), State::new("extra")],
            vec![
                Transition::labeled("e1", "start", "dead", "x"),
                Transition::unlabeled("e2", "dead", "extra"),
            ],
        );
        let result = evaluate(&graph, &Pattern::of(["x"]));
        assert_eq!(result.rejection(), Some(&Rejection::WrongState));
    }

    #[test]
    fn test_unlabeled_transitions_never_match() {
        let graph = AutomatonGraph::new(
            vec![State::start("start"), State::accepting("end")],
            vec![Transition::unlabeled("e1", "start", "end")],
        );

        let result = evaluate(&graph, &Pattern::of(["sheep-3"]));
        assert_eq!(result.rejection(), Some(&Rejection::NoPath { at: 0 }));
    }

    #[test]
    fn test_same_label_tie_break_is_caller_order() {
        let graph = AutomatonGraph::new(
            vec![
                State::start("start"),
                State::accepting("upper"),
                State::new("lower"),
            ],
            vec![
                Transition::labeled("e1", "start", "upper", "x"),
                Transition::labeled("e2", "start", "lower", "x"),
            ],
        );

        let result = evaluate(&graph, &Pattern::of(["x"]));
        assert!(result.is_accepted());
        assert_eq!(result.steps[0].transition, sheepfold_core::TransitionId::new("e1"));

        // Swapping the caller's ordering swaps the outcome.
        let swapped = AutomatonGraph::new(
            graph.states.clone(),
            vec![
                Transition::labeled("e2", "start", "lower", "x"),
                Transition::labeled("e1", "start", "upper", "x"),
            ],
        );
        let result = evaluate(&swapped, &Pattern::of(["x"]));
        assert!(!result.is_accepted());
    }

    #[test]
    fn test_dangling_target_is_skipped() {
        // The first x-transition points at a state missing from the
        // snapshot; the next one is taken instead.
        let graph = AutomatonGraph::new(
            vec![State::start("start"), State::accepting("end")],
            vec![
                Transition::labeled("e1", "start", "ghost", "x"),
                Transition::labeled("e2", "start", "end", "x"),
            ],
        );
        let result = evaluate(&graph, &Pattern::of(["x"]));
        assert!(result.is_accepted());
        assert_eq!(result.steps[0].transition, sheepfold_core::TransitionId::new("e2"));

        // With only the dangling transition the symbol has no path.
        let graph = AutomatonGraph::new(
            vec![State::start("start"), State::accepting("end")],
            vec![Transition::labeled("e1", "start", "ghost", "x")],
        );
        let result = evaluate(&graph, &Pattern::of(["x"]));
        assert_eq!(result.rejection(), Some(&Rejection::NoPath { at: 0 }));
    }

    #[test]
    fn test_evaluate_all_keeps_order_and_continues_past_failures() {
        let patterns = vec![
            Pattern::of(["sheep-3", "sheep-7"]),
            Pattern::of(["sheep-8"]),
            Pattern::of(["sheep-3"]),
        ];

        let batch = evaluate_all(&chain_graph(), &patterns);

        assert_eq!(batch.len(), 3);
        assert!(!batch.all_accepted());
        assert_eq!(batch.accepted_count(), 1);
        assert_eq!(batch.results[0].pattern, patterns[0]);
        assert!(batch.results[0].result.is_accepted());
        assert_eq!(batch.results[1].result.stuck_at(), Some(0));
        assert_eq!(
            batch.results[2].result.rejection(),
            Some(&Rejection::Incomplete)
        );
    }
}
