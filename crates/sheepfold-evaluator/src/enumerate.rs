//! Bounded enumeration of the label sequences a graph accepts.

use sheepfold_core::{AutomatonGraph, Label, Pattern, StateId};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Default bound on enumerated sequence length.
///
/// Depth-bounding stands in for unbounded search so cyclic graphs
/// terminate. It is a deliberate, lossy approximation: sequences longer
/// than the bound are never discovered.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Enumerate every label sequence the graph accepts, up to `max_depth`
/// symbols long.
///
/// Depth-first from the start state, following every labeled transition
/// in caller order and recording the sequence so far at each accepting
/// visit. Traversal continues past accepting states, since longer
/// sequences may also be accepted. Sequences of exactly `max_depth`
/// symbols are recorded; nothing longer is explored. Visited bookkeeping
/// is per (transition, depth) pair, not per state, so loops may be walked
/// repeatedly up to the bound.
///
/// The result is deduplicated, in first-discovery order. A graph with no
/// start state or no accepting state yields nothing.
pub fn enumerate_accepted_paths(graph: &AutomatonGraph, max_depth: usize) -> Vec<Pattern> {
    let Some(start) = graph.start_state() else {
        debug!("enumeration_no_start");
        return Vec::new();
    };
    if !graph.has_accepting_state() {
        debug!("enumeration_no_accepting_state");
        return Vec::new();
    }

    let mut search = Search {
        graph,
        max_depth,
        prefix: Vec::new(),
        visited: HashSet::new(),
        found: Vec::new(),
        seen: HashSet::new(),
    };
    search.walk(&start.id);

    debug!(
        max_depth = max_depth,
        sequences = search.found.len(),
        "enumeration_complete"
    );
    search.found
}

/// Working state for one depth-first enumeration.
struct Search<'g> {
    graph: &'g AutomatonGraph,
    max_depth: usize,
    /// Labels along the current walk.
    prefix: Vec<Label>,
    /// (transition index, depth) pairs taken on the current walk.
    visited: HashSet<(usize, usize)>,
    /// Accepted sequences in discovery order.
    found: Vec<Pattern>,
    /// Dedup guard over `found`.
    seen: HashSet<Pattern>,
}

impl Search<'_> {
    fn walk(&mut self, current: &StateId) {
        let graph = self.graph;

        let accepting = graph.state(current).map(|s| s.is_accepting).unwrap_or(false);
        if accepting && !self.prefix.is_empty() {
            let sequence = Pattern::new(self.prefix.clone());
            if self.seen.insert(sequence.clone()) {
                self.found.push(sequence);
            }
        }

        if self.prefix.len() >= self.max_depth {
            return;
        }

        for (index, transition) in graph.transitions.iter().enumerate() {
            if &transition.source != current {
                continue;
            }
            let Some(label) = transition.label.as_ref() else {
                // Unfilled arrows are invisible to traversal.
                continue;
            };
            if !graph.contains_state(&transition.target) {
                warn!(
                    transition = %transition.id,
                    target = %transition.target,
                    "skipping_transition_with_unresolved_target"
                );
                continue;
            }

            let key = (index, self.prefix.len());
            if !self.visited.insert(key) {
                continue;
            }
            self.prefix.push(label.clone());
            self.walk(&transition.target);
            self.prefix.pop();
            self.visited.remove(&key);
        }
    }
}
