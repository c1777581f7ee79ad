//! Counting sheep with a small herding machine.
//!
//! Builds the classic night-pen machine (one lane home, with a loop that
//! absorbs extra sheep-8s), walks a handful of patterns through it, lists
//! everything it accepts, grades it against a target set, and finishes by
//! solving a level from the built-in catalog.
//!
//! Run with:
//! ```bash
//! cargo run --example counting_sheep -p sheepfold-evaluator
//! ```

use sheepfold_core::{AutomatonGraph, AutomatonGraphBuilder, Label, Pattern};
use sheepfold_evaluator::{
    drag_level, enumerate_accepted_paths, evaluate, evaluate_all, grade, Verdict,
};

// =============================================================================
// Machine assembly
// =============================================================================

/// start --sheep-3--> pen --sheep-7--> bed((accepting))
///                     |
///                  sheep-8 (loop)
fn night_pen() -> AutomatonGraph {
    let mut builder = AutomatonGraphBuilder::new();

    let start = builder.new_state(true, false);
    let pen = builder.new_state(false, false);
    let bed = builder.new_state(false, true);

    builder.new_transition(&start, &pen, Some(Label::new("sheep-3")));
    builder.new_transition(&pen, &pen, Some(Label::new("sheep-8")));
    builder.new_transition(&pen, &bed, Some(Label::new("sheep-7")));

    builder.build()
}

// =============================================================================
// Reporting
// =============================================================================

/// Walk one pattern and print every hop the flock takes.
fn report(graph: &AutomatonGraph, pattern: &Pattern) {
    println!("  Pattern {}", pattern);

    let result = evaluate(graph, pattern);
    for (index, step) in result.steps.iter().enumerate() {
        let loop_mark = if step.is_self_loop { " (loop)" } else { "" };
        println!(
            "    {}. {} --{}--> {}{}",
            index + 1,
            step.from,
            step.label,
            step.to,
            loop_mark
        );
    }

    match &result.verdict {
        Verdict::Accepted => println!("  ✓ accepted\n"),
        Verdict::Rejected(reason) => println!("  ✗ rejected: {}\n", reason),
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> anyhow::Result<()> {
    let graph = night_pen();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Counting Sheep - the night-pen machine");
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!(
        "  {} states, {} transitions",
        graph.state_count(),
        graph.transition_count()
    );
    println!();

    // A few flocks at the gate.
    report(&graph, &Pattern::of(["sheep-3", "sheep-7"]));
    report(&graph, &Pattern::of(["sheep-3", "sheep-8", "sheep-8", "sheep-7"]));
    report(&graph, &Pattern::of(["sheep-3", "sheep-8"]));
    report(&graph, &Pattern::of(["sheep-8"]));
    report(&graph, &Pattern::of(["sheep-3", "sheep-7", "sheep-7"]));

    // Everything the machine accepts, up to five sheep.
    let accepted = enumerate_accepted_paths(&graph, 5);
    println!("  Accepted patterns up to length 5 ({}):", accepted.len());
    for pattern in &accepted {
        println!("    - {}", pattern);
    }
    println!();

    // Grade against a level-style target set.
    let targets = vec![
        Pattern::of(["sheep-3", "sheep-7"]),
        Pattern::of(["sheep-3", "sheep-8", "sheep-8", "sheep-7"]),
        Pattern::of(["sheep-3", "sheep-13", "sheep-7"]),
    ];
    let coverage = grade(&graph, &targets)?;

    println!(
        "  Grade: {}/{} targets matched",
        coverage.matched.len(),
        coverage.target_count()
    );
    for pattern in &coverage.unmatched {
        println!("    ✗ still missing {}", pattern);
    }
    println!();

    solve_catalog_level()
}

/// Play one drag level from the built-in catalog: place sheep on its bare
/// arrows, run every target, and grade the result.
fn solve_catalog_level() -> anyhow::Result<()> {
    let level = drag_level(2).expect("catalog ships level 2");
    println!("  {}", level.title);

    let mut graph = level.graph;
    for transition in &mut graph.transitions {
        let label = match transition.id.as_str() {
            "e-start-middle" => "sheep-3",
            _ => "sheep-8",
        };
        transition.label = Some(Label::new(label));
    }

    let batch = evaluate_all(&graph, &level.targets);
    for entry in batch.iter() {
        let mark = if entry.result.is_accepted() { "✓" } else { "✗" };
        println!("    {} {}", mark, entry.pattern);
    }

    let coverage = grade(&graph, &level.targets)?;
    println!(
        "  Level solved: {} ({}/{} targets)",
        coverage.is_complete(),
        coverage.matched.len(),
        coverage.target_count()
    );

    Ok(())
}
