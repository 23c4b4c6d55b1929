//! Walk failures: missing start node, missing handler, failing handler.

use dialogue_graph::{
    GraphDocument, HandlerError, HandlerRegistry, NodeRecord, PassThroughHandler, TraversalEngine,
    WalkError, WalkStatus, DIALOGUE_KIND,
};

use crate::common::{dialogue, start_then_dialogue};

/// **Scenario**: start() on a document without a start node fails with NoStartNode.
#[test]
fn start_without_start_node_fails() {
    let mut doc = GraphDocument::new();
    doc.add_node(dialogue("D", "orphan"));
    let registry = HandlerRegistry::new();
    let mut engine = TraversalEngine::new(&doc, &registry);
    assert_eq!(engine.start(), Err(WalkError::NoStartNode));
    assert_eq!(engine.status(), WalkStatus::Failed(WalkError::NoStartNode));
    assert_eq!(engine.step(), Err(WalkError::NoStartNode));
}

/// **Scenario**: Reaching a kind with no handler fails with that kind's tag, and stays failed.
///
/// Given: start S → dialogue D, and no dialogue handler
/// When: the walk reaches D and steps again
/// Then: step() fails with NoHandlerForKind("dialogue") on every later call
#[test]
fn missing_handler_fails_and_stays_failed() {
    let doc = start_then_dialogue();
    let registry = HandlerRegistry::new();
    let mut engine = TraversalEngine::new(&doc, &registry);
    engine.start().unwrap();
    engine.step().unwrap();

    let expected = WalkError::NoHandlerForKind(DIALOGUE_KIND.to_string());
    assert_eq!(engine.step(), Err(expected.clone()));
    assert_eq!(engine.step(), Err(expected.clone()));
    assert_eq!(engine.status(), WalkStatus::Failed(expected));
}

/// **Scenario**: Missing start handler is reported like any other kind.
#[test]
fn empty_registry_fails_on_start_kind() {
    let doc = start_then_dialogue();
    let registry = HandlerRegistry::empty();
    let mut engine = TraversalEngine::new(&doc, &registry);
    engine.start().unwrap();
    assert_eq!(
        engine.step(),
        Err(WalkError::NoHandlerForKind("start".to_string()))
    );
}

/// **Scenario**: A handler error fails the walk with the node id and reason.
#[test]
fn handler_error_fails_walk() {
    let doc = start_then_dialogue();
    let mut registry = HandlerRegistry::new();
    registry.register(
        DIALOGUE_KIND,
        PassThroughHandler::new(|_node: &NodeRecord| {
            Err(HandlerError::Failed("speaker not found".into()))
        }),
    );
    let mut engine = TraversalEngine::new(&doc, &registry);
    engine.start().unwrap();
    engine.step().unwrap();
    match engine.step() {
        Err(WalkError::HandlerFailed { node_id, reason }) => {
            assert_eq!(node_id, "D");
            assert_eq!(reason, HandlerError::Failed("speaker not found".into()));
        }
        other => panic!("expected HandlerFailed, got {:?}", other),
    }
}
