//! Core domain types shared across the Sheepfold workspace.
//!
//! Sheepfold models the little automata a player assembles on the play
//! surface: fences (states) connected by arrows (transitions), each arrow
//! carrying at most one sheep (its label). The types here are plain data,
//! rebuilt from the caller's editing surface before every evaluation call
//! and discarded afterwards; nothing in this crate holds state between
//! calls.
//!
//! Ordering matters: [`AutomatonGraph`] keeps states and transitions in
//! exactly the order the caller supplied them, because transition lookup
//! during evaluation is defined as "first match in caller order". No helper
//! in this crate may sort or otherwise reorder them.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier for states within an [`AutomatonGraph`].
///
/// Stable within one graph snapshot; level data uses semantic ids such as
/// `"start"` while the editing surface generates `"state-3"` style ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateId(String);

impl StateId {
    /// Create a new state id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier for transitions within an [`AutomatonGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionId(String);

impl TransitionId {
    /// Create a new transition id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransitionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TransitionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A symbol from the finite alphabet, carried by a transition.
///
/// In the game these are sheep identifiers such as `"sheep-3"`. Labels are
/// compared for exact string equality; pattern symbols and transition
/// labels live in the same identifier domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Create a new label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Label {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Label {
    fn from(label: String) -> Self {
        Self(label)
    }
}

// =============================================================================
// States and Transitions
// =============================================================================

/// A node in the automaton (a fence on the play surface).
///
/// Positional and display attributes stay with the presentation layer; the
/// core only carries what evaluation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Unique identifier within the snapshot.
    pub id: StateId,
    /// Whether this is the entry point. A well-formed graph has exactly
    /// one; lookups tolerate zero or many (first found wins).
    pub is_start: bool,
    /// Whether halting here after a full pattern signifies acceptance
    /// (the farmer's bed).
    pub is_accepting: bool,
}

impl State {
    /// A plain state, neither start nor accepting.
    pub fn new(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            is_start: false,
            is_accepting: false,
        }
    }

    /// A start state.
    pub fn start(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            is_start: true,
            is_accepting: false,
        }
    }

    /// An accepting state.
    pub fn accepting(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            is_start: false,
            is_accepting: true,
        }
    }

    /// A state that is both start and accepting (accepts the empty
    /// pattern).
    pub fn start_accepting(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            is_start: true,
            is_accepting: true,
        }
    }
}

/// A directed, labeled edge between two states (an arrow).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Unique identifier within the snapshot.
    pub id: TransitionId,
    /// Originating state id.
    pub source: StateId,
    /// Destination state id; may equal `source` (a self-loop).
    pub target: StateId,
    /// The symbol this transition consumes. `None` means the player has
    /// not placed a sheep on the arrow yet; such a transition can never be
    /// traversed.
    pub label: Option<Label>,
}

impl Transition {
    /// A transition carrying a label.
    pub fn labeled(
        id: impl Into<TransitionId>,
        source: impl Into<StateId>,
        target: impl Into<StateId>,
        label: impl Into<Label>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: Some(label.into()),
        }
    }

    /// A transition with no label yet.
    pub fn unlabeled(
        id: impl Into<TransitionId>,
        source: impl Into<StateId>,
        target: impl Into<StateId>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    /// Whether source and target are the same state.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Whether a label has been placed on this transition.
    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }

    /// Whether this transition consumes `symbol`. Unlabeled transitions
    /// match nothing.
    pub fn matches(&self, symbol: &Label) -> bool {
        self.label.as_ref() == Some(symbol)
    }
}

// =============================================================================
// Patterns
// =============================================================================

/// An ordered sequence of labels presented for matching.
///
/// Equality is order- and length-sensitive element equality; `[A, B]`
/// equals neither `[B, A]` nor `[A]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern(Vec<Label>);

impl Pattern {
    /// Create a pattern from a list of labels.
    pub fn new(labels: Vec<Label>) -> Self {
        Self(labels)
    }

    /// Create a pattern from anything label-like.
    ///
    /// `Pattern::of(["sheep-3", "sheep-7"])` is the common form in level
    /// data and tests.
    pub fn of<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// The empty pattern.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pattern has no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the symbols in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.0.iter()
    }

    /// The symbols as a slice.
    pub fn labels(&self) -> &[Label] {
        &self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", label)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Label>> for Pattern {
    fn from(labels: Vec<Label>) -> Self {
        Self(labels)
    }
}

impl FromIterator<Label> for Pattern {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Graph snapshots
// =============================================================================

/// The automaton at one point in time: all states and transitions, in the
/// order the caller supplied them.
///
/// Entirely owned by the caller and rebuilt on every edit; evaluation
/// borrows it and never mutates it. The stored order is part of the
/// contract: when several transitions from the same state carry the same
/// label, the first one in `transitions` wins.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AutomatonGraph {
    /// All states in the snapshot.
    pub states: Vec<State>,
    /// All transitions in the snapshot.
    pub transitions: Vec<Transition>,
}

impl AutomatonGraph {
    /// Create a graph from parts.
    pub fn new(states: Vec<State>, transitions: Vec<Transition>) -> Self {
        Self {
            states,
            transitions,
        }
    }

    /// An empty graph with no states or transitions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Look up a state by id (first match in caller order).
    pub fn state(&self, id: &StateId) -> Option<&State> {
        self.states.iter().find(|s| &s.id == id)
    }

    /// Whether a state with this id exists.
    pub fn contains_state(&self, id: &StateId) -> bool {
        self.state(id).is_some()
    }

    /// Look up a transition by id.
    pub fn transition(&self, id: &TransitionId) -> Option<&Transition> {
        self.transitions.iter().find(|t| &t.id == id)
    }

    /// The start state, if any. With multiple starts the first in caller
    /// order wins; with none, evaluation fails immediately.
    pub fn start_state(&self) -> Option<&State> {
        self.states.iter().find(|s| s.is_start)
    }

    /// All accepting states, in caller order.
    pub fn accepting_states(&self) -> impl Iterator<Item = &State> {
        self.states.iter().filter(|s| s.is_accepting)
    }

    /// Whether any state is accepting.
    pub fn has_accepting_state(&self) -> bool {
        self.states.iter().any(|s| s.is_accepting)
    }

    /// All transitions leaving `state`, preserving caller order.
    pub fn transitions_from(&self, state: &StateId) -> impl Iterator<Item = &Transition> {
        let state = state.clone();
        self.transitions.iter().filter(move |t| t.source == state)
    }

    /// All transitions still missing a label, in caller order.
    pub fn unlabeled_transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(|t| !t.is_labeled())
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for assembling an [`AutomatonGraph`] incrementally, the way the
/// editing surface does.
///
/// Generated ids follow the surface's scheme: `state-1`, `state-2`, ... and
/// `edge-1`, `edge-2`, ... with counters starting at 1. When editing
/// continues from a level's initial fragment, seed the counters with
/// [`AutomatonGraphBuilder::from_graph`] so generated ids do not collide
/// with the fragment's.
#[derive(Debug, Default)]
pub struct AutomatonGraphBuilder {
    states: Vec<State>,
    transitions: Vec<Transition>,
    next_state_id: u64,
    next_transition_id: u64,
}

impl AutomatonGraphBuilder {
    /// Create an empty builder with id counters at 1.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            next_state_id: 1,
            next_transition_id: 1,
        }
    }

    /// Continue from an existing graph, seeding the id counters past its
    /// contents.
    pub fn from_graph(graph: AutomatonGraph) -> Self {
        let next_state_id = graph.states.len() as u64 + 1;
        let next_transition_id = graph.transitions.len() as u64 + 1;
        Self {
            states: graph.states,
            transitions: graph.transitions,
            next_state_id,
            next_transition_id,
        }
    }

    /// Add a state with an explicit id, echoing the id back.
    pub fn add_state(&mut self, state: State) -> StateId {
        let id = state.id.clone();
        self.states.push(state);
        id
    }

    /// Add a transition with an explicit id, echoing the id back.
    pub fn add_transition(&mut self, transition: Transition) -> TransitionId {
        let id = transition.id.clone();
        self.transitions.push(transition);
        id
    }

    /// Add a state with a generated `state-{n}` id.
    pub fn new_state(&mut self, is_start: bool, is_accepting: bool) -> StateId {
        let id = StateId::new(format!("state-{}", self.next_state_id));
        self.next_state_id += 1;
        self.states.push(State {
            id: id.clone(),
            is_start,
            is_accepting,
        });
        id
    }

    /// Add a transition with a generated `edge-{n}` id.
    pub fn new_transition(
        &mut self,
        source: &StateId,
        target: &StateId,
        label: Option<Label>,
    ) -> TransitionId {
        let id = TransitionId::new(format!("edge-{}", self.next_transition_id));
        self.next_transition_id += 1;
        self.transitions.push(Transition {
            id: id.clone(),
            source: source.clone(),
            target: target.clone(),
            label,
        });
        id
    }

    /// Current number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Current number of transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Build the final [`AutomatonGraph`].
    pub fn build(self) -> AutomatonGraph {
        AutomatonGraph {
            states: self.states,
            transitions: self.transitions,
        }
    }
}
