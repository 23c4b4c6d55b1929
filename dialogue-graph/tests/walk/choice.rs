//! Choice branching driven by step(): the engine stays suspended until the host answers.

use dialogue_graph::{ChoiceHandler, HandlerRegistry, TraversalEngine, WalkStatus, CHOICE_KIND};

use crate::common::yes_no_choice;

fn walk_with_selection(label: &str) -> String {
    let doc = yes_no_choice();
    let (handler, mut requests) = ChoiceHandler::channel();
    let mut registry = HandlerRegistry::new();
    registry.register(CHOICE_KIND, handler);
    let mut engine = TraversalEngine::new(&doc, &registry);

    engine.start().unwrap();
    engine.step().unwrap();
    assert!(engine.step().unwrap().is_suspended());

    let request = requests.try_recv().expect("choice request published");
    assert_eq!(request.choices, ["Yes", "No"]);
    request.select(label);

    match engine.step().unwrap() {
        WalkStatus::Running(node) => node.id.clone(),
        WalkStatus::Completed => "<completed>".to_string(),
        other => panic!("unexpected status {:?}", other),
    }
}

/// **Scenario**: Selecting "Yes" follows the Yes port to B.
#[test]
fn selecting_yes_advances_to_b() {
    assert_eq!(walk_with_selection("Yes"), "B");
}

/// **Scenario**: Selecting "No" follows the No port to A.
#[test]
fn selecting_no_advances_to_a() {
    assert_eq!(walk_with_selection("No"), "A");
}

/// **Scenario**: Without a selection the engine stays suspended on the choice node.
///
/// Given: a walk waiting at choice Q with the request still held by the host
/// When: step() is called repeatedly
/// Then: every step returns Suspended(Q) and no node is evaluated twice
#[test]
fn no_selection_stays_suspended() {
    let doc = yes_no_choice();
    let (handler, mut requests) = ChoiceHandler::channel();
    let mut registry = HandlerRegistry::new();
    registry.register(CHOICE_KIND, handler);
    let mut engine = TraversalEngine::new(&doc, &registry);

    engine.start().unwrap();
    engine.step().unwrap();
    assert!(engine.step().unwrap().is_suspended());
    let request = requests.try_recv().expect("choice request published");

    for _ in 0..3 {
        match engine.step().unwrap() {
            WalkStatus::Suspended(node) => assert_eq!(node.id, "Q"),
            other => panic!("expected Suspended, got {:?}", other),
        }
    }
    assert_eq!(engine.steps_taken(), 2);
    drop(request);
}

/// **Scenario**: A label with no matching link completes the walk.
#[test]
fn selection_without_link_completes() {
    assert_eq!(walk_with_selection("Maybe"), "<completed>");
}

/// **Scenario**: select_index picks the label at that position.
#[test]
fn select_by_index() {
    let doc = yes_no_choice();
    let (handler, mut requests) = ChoiceHandler::channel();
    let mut registry = HandlerRegistry::new();
    registry.register(CHOICE_KIND, handler);
    let mut engine = TraversalEngine::new(&doc, &registry);

    engine.start().unwrap();
    engine.step().unwrap();
    engine.step().unwrap();
    requests.try_recv().unwrap().select_index(1).unwrap();
    let status = engine.step().unwrap();
    assert_eq!(status.node().map(|n| n.id.as_str()), Some("A"));
}
