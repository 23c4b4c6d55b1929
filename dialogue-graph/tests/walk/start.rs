//! Start-node resolution.

use dialogue_graph::{HandlerRegistry, TraversalEngine, WalkStatus};

use crate::common::{silent_dialogue, start_then_dialogue, DIALOGUE};

/// **Scenario**: start() then one step() reaches the start node's sole target.
///
/// Given: start S linked to dialogue D
/// When: start() and step() are called
/// Then: the engine is Running(D)
#[test]
fn start_then_step_reaches_first_target() {
    let doc = start_then_dialogue();
    let registry = HandlerRegistry::new();
    let mut engine = TraversalEngine::new(&doc, &registry);

    let started = engine.start().unwrap();
    assert_eq!(started.node().map(|n| n.id.as_str()), Some("S"));

    let status = engine.step().unwrap();
    match status {
        WalkStatus::Running(node) => assert_eq!(node.id, "D"),
        other => panic!("expected Running(D), got {:?}", other),
    }
}

/// **Scenario**: The walk completes once the last dialogue has no outgoing link.
#[test]
fn walk_completes_after_last_node() {
    let doc = start_then_dialogue();
    let mut registry = HandlerRegistry::new();
    registry.register(DIALOGUE, silent_dialogue());
    let mut engine = TraversalEngine::new(&doc, &registry);

    engine.start().unwrap();
    engine.step().unwrap();
    assert_eq!(engine.step().unwrap(), WalkStatus::Completed);
    assert_eq!(engine.status(), WalkStatus::Completed);
    assert_eq!(engine.steps_taken(), 2);
}

/// **Scenario**: Two engines walk the same document independently.
#[test]
fn two_engines_share_a_document() {
    let doc = start_then_dialogue();
    let registry = HandlerRegistry::new();
    let mut first = TraversalEngine::new(&doc, &registry);
    let mut second = TraversalEngine::new(&doc, &registry);

    first.start().unwrap();
    first.step().unwrap();
    second.start().unwrap();

    assert_eq!(first.status().node().map(|n| n.id.as_str()), Some("D"));
    assert_eq!(second.status().node().map(|n| n.id.as_str()), Some("S"));
}
