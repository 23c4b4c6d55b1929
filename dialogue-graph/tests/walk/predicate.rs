//! Predicate branching on a computed port name.

use dialogue_graph::{
    bool_port, HandlerError, HandlerRegistry, NodeRecord, PredicateHandler, TraversalEngine,
    WalkStatus,
};

use crate::common::{flag_branch, Flag};

fn flag_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register(
        "flag",
        PredicateHandler::new(|node: &NodeRecord| {
            let flag = node
                .custom_payload::<Flag>()
                .ok_or_else(|| HandlerError::Failed("not a flag node".into()))?
                .map_err(|e| HandlerError::Failed(e.to_string()))?;
            Ok(bool_port(flag.value).to_string())
        }),
    );
    registry
}

/// **Scenario**: A false condition follows the "False" port.
#[test]
fn false_condition_advances_to_false_target() {
    let doc = flag_branch(false, true);
    let registry = flag_registry();
    let mut engine = TraversalEngine::new(&doc, &registry);
    engine.start().unwrap();
    engine.step().unwrap();
    let status = engine.step().unwrap();
    assert_eq!(status.node().map(|n| n.id.as_str()), Some("B"));
}

/// **Scenario**: A true condition follows the "True" port.
#[test]
fn true_condition_advances_to_true_target() {
    let doc = flag_branch(true, true);
    let registry = flag_registry();
    let mut engine = TraversalEngine::new(&doc, &registry);
    engine.start().unwrap();
    engine.step().unwrap();
    let status = engine.step().unwrap();
    assert_eq!(status.node().map(|n| n.id.as_str()), Some("A"));
}

/// **Scenario**: With no "False" link, a false condition completes the walk instead of failing.
#[test]
fn missing_port_completes_walk() {
    let doc = flag_branch(false, false);
    let registry = flag_registry();
    let mut engine = TraversalEngine::new(&doc, &registry);
    engine.start().unwrap();
    engine.step().unwrap();
    assert_eq!(engine.step().unwrap(), WalkStatus::Completed);
}
