//! The built-in level catalog.
//!
//! The shipped game content, stripped to what evaluation needs: ids,
//! titles, graphs, alphabets, targets, and authored answers. Positions,
//! hints, and narration belong to the presentation layer and are not
//! carried here.
//!
//! Three families, in the order the game teaches them:
//! - accept/reject questions: read a finished machine, judge one pattern;
//! - drag levels: a fixed graph whose arrows start bare, label them;
//! - build levels: an initial fragment, extend it into a machine.

use serde::{Deserialize, Serialize};
use sheepfold_core::{AutomatonGraph, Label, Pattern, State, Transition};

// =============================================================================
// Level types
// =============================================================================

/// A drag level: a fixed graph whose transitions start unlabeled; the
/// player places sheep from the alphabet until every target pattern is
/// accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragLevel {
    /// Level number, 1-based.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// The level's graph; every transition starts unlabeled.
    pub graph: AutomatonGraph,
    /// Patterns the finished machine must accept.
    pub targets: Vec<Pattern>,
    /// Labels the player may place.
    pub alphabet: Vec<Label>,
}

/// A build level: an initial fragment the player extends with arrows,
/// labels, and (where allowed) new states until every target pattern is
/// accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildLevel {
    /// Level number, 1-based.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Starting fragment; may be as little as the start state.
    pub initial: AutomatonGraph,
    /// Patterns the finished machine must accept.
    pub targets: Vec<Pattern>,
    /// Labels the player may place.
    pub alphabet: Vec<Label>,
    /// Whether the player may add further states.
    pub can_add_states: bool,
    /// Whether arrows may loop back to their own source.
    pub can_self_loop: bool,
}

/// Authored answer to an accept/reject question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Answer {
    /// The machine accepts the test pattern.
    Accept,
    /// The machine rejects the test pattern.
    Reject,
}

/// An accept/reject question: a complete labeled machine, one test
/// pattern, and the authored answer the player must arrive at. The
/// evaluator's verdict on the pattern agrees with the authored answer for
/// every shipped question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptRejectQuestion {
    /// Question number, 1-based.
    pub id: u32,
    /// The machine under judgment.
    pub graph: AutomatonGraph,
    /// The pattern to judge.
    pub pattern: Pattern,
    /// The authored answer.
    pub answer: Answer,
}

// =============================================================================
// Accept/reject questions
// =============================================================================

/// Number of accept/reject questions.
pub const ACCEPT_REJECT_QUESTION_COUNT: usize = 10;

/// All accept/reject questions, in play order.
pub fn accept_reject_questions() -> Vec<AcceptRejectQuestion> {
    vec![
        // A single arrow, the matching sheep.
        AcceptRejectQuestion {
            id: 1,
            graph: AutomatonGraph::new(
                vec![State::start("start"), State::accepting("end")],
                vec![Transition::labeled("e1", "start", "end", "sheep-3")],
            ),
            pattern: Pattern::of(["sheep-3"]),
            answer: Answer::Accept,
        },
        // Same machine, the wrong sheep.
        AcceptRejectQuestion {
            id: 2,
            graph: AutomatonGraph::new(
                vec![State::start("start"), State::accepting("end")],
                vec![Transition::labeled("e1", "start", "end", "sheep-3")],
            ),
            pattern: Pattern::of(["sheep-8"]),
            answer: Answer::Reject,
        },
        // A two-sheep sequence.
        AcceptRejectQuestion {
            id: 3,
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("middle"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::labeled("e1", "start", "middle", "sheep-3"),
                    Transition::labeled("e2", "middle", "end", "sheep-8"),
                ],
            ),
            pattern: Pattern::of(["sheep-3", "sheep-8"]),
            answer: Answer::Accept,
        },
        // Stopping halfway is not sleeping.
        AcceptRejectQuestion {
            id: 4,
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("middle"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::labeled("e1", "start", "middle", "sheep-3"),
                    Transition::labeled("e2", "middle", "end", "sheep-8"),
                ],
            ),
            pattern: Pattern::of(["sheep-3"]),
            answer: Answer::Reject,
        },
        // Two branches; the bottom one works.
        AcceptRejectQuestion {
            id: 5,
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("top"),
                    State::new("bottom"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::labeled("e1", "start", "top", "sheep-3"),
                    Transition::labeled("e2", "start", "bottom", "sheep-8"),
                    Transition::labeled("e3", "top", "end", "sheep-7"),
                    Transition::labeled("e4", "bottom", "end", "sheep-13"),
                ],
            ),
            pattern: Pattern::of(["sheep-8", "sheep-13"]),
            answer: Answer::Accept,
        },
        // Branches cannot be mixed.
        AcceptRejectQuestion {
            id: 6,
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("top"),
                    State::new("bottom"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::labeled("e1", "start", "top", "sheep-3"),
                    Transition::labeled("e2", "start", "bottom", "sheep-8"),
                    Transition::labeled("e3", "top", "end", "sheep-7"),
                    Transition::labeled("e4", "bottom", "end", "sheep-13"),
                ],
            ),
            pattern: Pattern::of(["sheep-3", "sheep-13"]),
            answer: Answer::Reject,
        },
        // A loop consumes as many sheep-8 as the pattern brings.
        //
        // ```text
        //               sheep-8
        //               (loop)
        //  start --3--> middle --7--> end((bed))
        // ```
        AcceptRejectQuestion {
            id: 7,
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("middle"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::labeled("e1", "start", "middle", "sheep-3"),
                    Transition::labeled("e2", "middle", "middle", "sheep-8"),
                    Transition::labeled("e3", "middle", "end", "sheep-7"),
                ],
            ),
            pattern: Pattern::of(["sheep-3", "sheep-8", "sheep-8", "sheep-7"]),
            answer: Answer::Accept,
        },
        // The trap fence has no way out.
        AcceptRejectQuestion {
            id: 8,
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("good"),
                    State::new("trap"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::labeled("e1", "start", "good", "sheep-3"),
                    Transition::labeled("e2", "start", "trap", "sheep-8"),
                    Transition::labeled("e3", "good", "end", "sheep-7"),
                ],
            ),
            pattern: Pattern::of(["sheep-8", "sheep-7"]),
            answer: Answer::Reject,
        },
        // Two beds; either one counts.
        AcceptRejectQuestion {
            id: 9,
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("middle"),
                    State::accepting("end1"),
                    State::accepting("end2"),
                ],
                vec![
                    Transition::labeled("e1", "start", "middle", "sheep-3"),
                    Transition::labeled("e2", "middle", "end1", "sheep-7"),
                    Transition::labeled("e3", "middle", "end2", "sheep-8"),
                ],
            ),
            pattern: Pattern::of(["sheep-3", "sheep-8"]),
            answer: Answer::Accept,
        },
        // A looping path to bed, and a trap that loops forever.
        //
        // ```text
        //  start --3--> path --7--> end((bed))    path loops on sheep-8
        //    |
        //    8--> trap                            trap loops on sheep-8
        // ```
        AcceptRejectQuestion {
            id: 10,
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("path"),
                    State::new("trap"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::labeled("e1", "start", "path", "sheep-3"),
                    Transition::labeled("e2", "start", "trap", "sheep-8"),
                    Transition::labeled("e3", "path", "path", "sheep-8"),
                    Transition::labeled("e4", "path", "end", "sheep-7"),
                    Transition::labeled("e5", "trap", "trap", "sheep-8"),
                ],
            ),
            pattern: Pattern::of(["sheep-3", "sheep-8", "sheep-8", "sheep-7"]),
            answer: Answer::Accept,
        },
    ]
}

/// Look up an accept/reject question by its 1-based id.
pub fn accept_reject_question(id: u32) -> Option<AcceptRejectQuestion> {
    accept_reject_questions().into_iter().find(|q| q.id == id)
}

// =============================================================================
// Drag levels
// =============================================================================

/// Number of drag levels.
pub const DRAG_LEVEL_COUNT: usize = 10;

/// All drag levels, in play order. Every transition starts unlabeled.
pub fn drag_levels() -> Vec<DragLevel> {
    vec![
        DragLevel {
            id: 1,
            title: "Level 1: One Sheep".to_string(),
            graph: AutomatonGraph::new(
                vec![State::start("start"), State::accepting("end")],
                vec![Transition::unlabeled("e-start-end", "start", "end")],
            ),
            targets: targets(&[&["sheep-3"]]),
            alphabet: labels(&["sheep-3", "sheep-8"]),
        },
        DragLevel {
            id: 2,
            title: "Level 2: Two in a Row".to_string(),
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("middle"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::unlabeled("e-start-middle", "start", "middle"),
                    Transition::unlabeled("e-middle-end", "middle", "end"),
                ],
            ),
            targets: targets(&[&["sheep-3", "sheep-8"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8"]),
        },
        DragLevel {
            id: 3,
            title: "Level 3: The Longer Path".to_string(),
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("a"),
                    State::new("b"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::unlabeled("e-start-a", "start", "a"),
                    Transition::unlabeled("e-a-b", "a", "b"),
                    Transition::unlabeled("e-b-end", "b", "end"),
                ],
            ),
            targets: targets(&[&["sheep-3", "sheep-7", "sheep-8"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8", "sheep-13"]),
        },
        DragLevel {
            id: 4,
            title: "Level 4: Two Paths".to_string(),
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("top"),
                    State::new("bottom"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::unlabeled("e-start-top", "start", "top"),
                    Transition::unlabeled("e-start-bottom", "start", "bottom"),
                    Transition::unlabeled("e-top-end", "top", "end"),
                    Transition::unlabeled("e-bottom-end", "bottom", "end"),
                ],
            ),
            targets: targets(&[&["sheep-3", "sheep-13"], &["sheep-8", "sheep-16"]]),
            alphabet: labels(&["sheep-3", "sheep-8", "sheep-13", "sheep-16"]),
        },
        DragLevel {
            id: 5,
            title: "Level 5: The Diamond".to_string(),
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("top"),
                    State::new("bottom"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::unlabeled("e-start-top", "start", "top"),
                    Transition::unlabeled("e-start-bottom", "start", "bottom"),
                    Transition::unlabeled("e-top-end", "top", "end"),
                    Transition::unlabeled("e-bottom-end", "bottom", "end"),
                ],
            ),
            targets: targets(&[&["sheep-3", "sheep-13"], &["sheep-8", "sheep-16"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8", "sheep-13", "sheep-16"]),
        },
        // Paths cross over: state1 leads both home and down to state2.
        DragLevel {
            id: 6,
            title: "Level 6: Crossing Paths".to_string(),
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("state1"),
                    State::new("state2"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::unlabeled("e-start-1", "start", "state1"),
                    Transition::unlabeled("e-start-2", "start", "state2"),
                    Transition::unlabeled("e-1-end", "state1", "end"),
                    Transition::unlabeled("e-1-2", "state1", "state2"),
                    Transition::unlabeled("e-2-end", "state2", "end"),
                ],
            ),
            targets: targets(&[
                &["sheep-3", "sheep-13"],
                &["sheep-8", "sheep-16"],
                &["sheep-3", "sheep-7", "sheep-16"],
            ]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8", "sheep-13", "sheep-16"]),
        },
        DragLevel {
            id: 7,
            title: "Level 7: Round and Round".to_string(),
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("loop"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::unlabeled("e-start-loop", "start", "loop"),
                    Transition::unlabeled("e-loop-self", "loop", "loop"),
                    Transition::unlabeled("e-loop-end", "loop", "end"),
                ],
            ),
            targets: targets(&[&["sheep-3", "sheep-8"], &["sheep-3", "sheep-7", "sheep-8"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8", "sheep-13"]),
        },
        DragLevel {
            id: 8,
            title: "Level 8: Loop the Loop".to_string(),
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("top"),
                    State::new("bottom"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::unlabeled("e-start-top", "start", "top"),
                    Transition::unlabeled("e-start-bottom", "start", "bottom"),
                    Transition::unlabeled("e-top-self", "top", "top"),
                    Transition::unlabeled("e-top-end", "top", "end"),
                    Transition::unlabeled("e-bottom-end", "bottom", "end"),
                ],
            ),
            targets: targets(&[
                &["sheep-3", "sheep-13"],
                &["sheep-3", "sheep-7", "sheep-13"],
                &["sheep-8", "sheep-16"],
            ]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8", "sheep-13", "sheep-16"]),
        },
        DragLevel {
            id: 9,
            title: "Level 9: Two Farmers".to_string(),
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("middle"),
                    State::accepting("end-top"),
                    State::accepting("end-bottom"),
                ],
                vec![
                    Transition::unlabeled("e-start-middle", "start", "middle"),
                    Transition::unlabeled("e-middle-top", "middle", "end-top"),
                    Transition::unlabeled("e-middle-bottom", "middle", "end-bottom"),
                ],
            ),
            targets: targets(&[&["sheep-3", "sheep-13"], &["sheep-3", "sheep-16"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-13", "sheep-16"]),
        },
        // Everything at once: branches into a shared lane with a loop.
        DragLevel {
            id: 10,
            title: "Level 10: The Grand Flock".to_string(),
            graph: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("a"),
                    State::new("b"),
                    State::new("c"),
                    State::accepting("end"),
                ],
                vec![
                    Transition::unlabeled("e-start-a", "start", "a"),
                    Transition::unlabeled("e-start-b", "start", "b"),
                    Transition::unlabeled("e-a-c", "a", "c"),
                    Transition::unlabeled("e-b-c", "b", "c"),
                    Transition::unlabeled("e-c-self", "c", "c"),
                    Transition::unlabeled("e-c-end", "c", "end"),
                ],
            ),
            targets: targets(&[
                &["sheep-3", "sheep-7", "sheep-16"],
                &["sheep-8", "sheep-7", "sheep-16"],
                &["sheep-3", "sheep-7", "sheep-13", "sheep-16"],
            ]),
            alphabet: labels(&[
                "sheep-1", "sheep-3", "sheep-7", "sheep-8", "sheep-13", "sheep-16",
            ]),
        },
    ]
}

/// Look up a drag level by its 1-based id.
pub fn drag_level(id: u32) -> Option<DragLevel> {
    drag_levels().into_iter().find(|level| level.id == id)
}

// =============================================================================
// Build levels
// =============================================================================

/// Number of build levels.
pub const BUILD_LEVEL_COUNT: usize = 10;

/// All build levels, in play order. Initial fragments carry no
/// transitions; connecting them is the exercise.
pub fn build_levels() -> Vec<BuildLevel> {
    vec![
        BuildLevel {
            id: 1,
            title: "Level 1: Your First Connection".to_string(),
            initial: AutomatonGraph::new(
                vec![State::start("start"), State::accepting("end")],
                vec![],
            ),
            targets: targets(&[&["sheep-3"]]),
            alphabet: labels(&["sheep-3", "sheep-8"]),
            can_add_states: false,
            can_self_loop: true,
        },
        BuildLevel {
            id: 2,
            title: "Level 2: A Longer Path".to_string(),
            initial: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("middle"),
                    State::accepting("end"),
                ],
                vec![],
            ),
            targets: targets(&[&["sheep-3", "sheep-8"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8"]),
            can_add_states: false,
            can_self_loop: true,
        },
        BuildLevel {
            id: 3,
            title: "Level 3: Two Ways Home".to_string(),
            initial: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("top"),
                    State::new("bottom"),
                    State::accepting("end"),
                ],
                vec![],
            ),
            targets: targets(&[&["sheep-3", "sheep-13"], &["sheep-8", "sheep-16"]]),
            alphabet: labels(&["sheep-3", "sheep-8", "sheep-13", "sheep-16"]),
            can_add_states: false,
            can_self_loop: true,
        },
        // No bed yet; the player must mark one before grading passes.
        BuildLevel {
            id: 4,
            title: "Level 4: Choose the Bed".to_string(),
            initial: AutomatonGraph::new(
                vec![State::start("start"), State::new("middle")],
                vec![],
            ),
            targets: targets(&[&["sheep-3", "sheep-8"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8"]),
            can_add_states: false,
            can_self_loop: true,
        },
        BuildLevel {
            id: 5,
            title: "Level 5: Build a Fence".to_string(),
            initial: AutomatonGraph::new(
                vec![State::start("start"), State::accepting("end")],
                vec![],
            ),
            targets: targets(&[&["sheep-3", "sheep-8"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8"]),
            can_add_states: true,
            can_self_loop: true,
        },
        BuildLevel {
            id: 6,
            title: "Level 6: The Diamond".to_string(),
            initial: AutomatonGraph::new(
                vec![State::start("start"), State::accepting("end")],
                vec![],
            ),
            targets: targets(&[&["sheep-3", "sheep-13"], &["sheep-8", "sheep-16"]]),
            alphabet: labels(&["sheep-3", "sheep-8", "sheep-13", "sheep-16"]),
            can_add_states: true,
            can_self_loop: true,
        },
        BuildLevel {
            id: 7,
            title: "Level 7: Going in Circles".to_string(),
            initial: AutomatonGraph::new(
                vec![
                    State::start("start"),
                    State::new("loop"),
                    State::accepting("end"),
                ],
                vec![],
            ),
            targets: targets(&[&["sheep-3", "sheep-8"], &["sheep-3", "sheep-7", "sheep-8"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8"]),
            can_add_states: false,
            can_self_loop: true,
        },
        BuildLevel {
            id: 8,
            title: "Level 8: Your Design".to_string(),
            initial: AutomatonGraph::new(vec![State::start("start")], vec![]),
            targets: targets(&[&["sheep-3", "sheep-8", "sheep-13"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8", "sheep-13"]),
            can_add_states: true,
            can_self_loop: true,
        },
        BuildLevel {
            id: 9,
            title: "Level 9: Double Trouble".to_string(),
            initial: AutomatonGraph::new(vec![State::start("start")], vec![]),
            targets: targets(&[&["sheep-3", "sheep-13"], &["sheep-8", "sheep-7", "sheep-16"]]),
            alphabet: labels(&["sheep-3", "sheep-7", "sheep-8", "sheep-13", "sheep-16"]),
            can_add_states: true,
            can_self_loop: true,
        },
        // Three patterns sharing sheep; a loop is the tidy answer.
        BuildLevel {
            id: 10,
            title: "Level 10: Master Builder".to_string(),
            initial: AutomatonGraph::new(vec![State::start("start")], vec![]),
            targets: targets(&[
                &["sheep-3", "sheep-7", "sheep-16"],
                &["sheep-8", "sheep-7", "sheep-16"],
                &["sheep-3", "sheep-7", "sheep-7", "sheep-16"],
            ]),
            alphabet: labels(&["sheep-1", "sheep-3", "sheep-7", "sheep-8", "sheep-16"]),
            can_add_states: true,
            can_self_loop: true,
        },
    ]
}

/// Look up a build level by its 1-based id.
pub fn build_level(id: u32) -> Option<BuildLevel> {
    build_levels().into_iter().find(|level| level.id == id)
}

// =============================================================================
// Helpers
// =============================================================================

fn labels(names: &[&str]) -> Vec<Label> {
    names.iter().map(|name| Label::new(*name)).collect()
}

fn targets(patterns: &[&[&str]]) -> Vec<Pattern> {
    patterns
        .iter()
        .map(|pattern| Pattern::of(pattern.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_counts_and_ids() {
        let questions = accept_reject_questions();
        assert_eq!(questions.len(), ACCEPT_REJECT_QUESTION_COUNT);
        for (index, question) in questions.iter().enumerate() {
            assert_eq!(question.id as usize, index + 1);
        }

        let drags = drag_levels();
        assert_eq!(drags.len(), DRAG_LEVEL_COUNT);
        for (index, level) in drags.iter().enumerate() {
            assert_eq!(level.id as usize, index + 1);
        }

        let builds = build_levels();
        assert_eq!(builds.len(), BUILD_LEVEL_COUNT);
        for (index, level) in builds.iter().enumerate() {
            assert_eq!(level.id as usize, index + 1);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(drag_level(7).unwrap().title, "Level 7: Round and Round");
        assert_eq!(build_level(10).unwrap().title, "Level 10: Master Builder");
        assert_eq!(accept_reject_question(8).unwrap().answer, Answer::Reject);

        assert!(drag_level(0).is_none());
        assert!(drag_level(99).is_none());
        assert!(build_level(11).is_none());
        assert!(accept_reject_question(11).is_none());
    }

    #[test]
    fn test_questions_are_complete_machines() {
        for question in accept_reject_questions() {
            assert!(question.graph.start_state().is_some(), "question {}", question.id);
            assert!(question.graph.has_accepting_state(), "question {}", question.id);
            assert!(
                question.graph.transitions.iter().all(|t| t.is_labeled()),
                "question {}",
                question.id
            );
        }
    }

    #[test]
    fn test_drag_levels_start_bare() {
        for level in drag_levels() {
            assert!(level.graph.start_state().is_some(), "level {}", level.id);
            assert!(level.graph.has_accepting_state(), "level {}", level.id);
            assert!(
                level.graph.transitions.iter().all(|t| !t.is_labeled()),
                "level {}",
                level.id
            );
            assert!(!level.targets.is_empty(), "level {}", level.id);
            assert!(!level.alphabet.is_empty(), "level {}", level.id);
        }
    }

    #[test]
    fn test_drag_targets_draw_from_the_alphabet() {
        for level in drag_levels() {
            for target in &level.targets {
                for symbol in target {
                    assert!(
                        level.alphabet.contains(symbol),
                        "level {} target {} uses {} outside the alphabet",
                        level.id,
                        target,
                        symbol
                    );
                }
            }
        }
    }

    #[test]
    fn test_build_levels_start_with_a_start_and_no_arrows() {
        for level in build_levels() {
            assert!(level.initial.start_state().is_some(), "level {}", level.id);
            assert_eq!(level.initial.transition_count(), 0, "level {}", level.id);
        }

        // Level 4 is the one whose fragment has no bed yet.
        assert!(!build_level(4).unwrap().initial.has_accepting_state());
        assert!(build_level(5).unwrap().initial.has_accepting_state());
    }
}
