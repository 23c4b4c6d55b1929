//! Async run(): the walk awaits choices answered by a concurrent host task.

use std::sync::{Arc, Mutex};

use dialogue_graph::{
    ChoiceHandler, HandlerRegistry, NodeKind, NodeRecord, PassThroughHandler, TraversalEngine,
    WalkError, CHOICE_KIND, DIALOGUE_KIND,
};

use crate::common::yes_no_choice;

/// **Scenario**: run() completes after the host answers the choice from another task.
///
/// Given: start → choice ["Yes","No"] → dialogue, and a host task that always picks "Yes"
/// When: run() is awaited
/// Then: the walk completes and the "yes" line was presented
#[tokio::test]
async fn run_completes_with_host_answering() {
    let doc = yes_no_choice();
    let spoken = Arc::new(Mutex::new(Vec::<String>::new()));
    let (handler, mut requests) = ChoiceHandler::channel();

    let mut registry = HandlerRegistry::new();
    registry.register(CHOICE_KIND, handler);
    let sink = spoken.clone();
    registry.register(
        DIALOGUE_KIND,
        PassThroughHandler::new(move |node: &NodeRecord| {
            if let NodeKind::Dialogue(line) = &node.kind {
                sink.lock().unwrap().push(line.text.clone());
            }
            Ok(())
        }),
    );

    let host = tokio::spawn(async move {
        while let Some(request) = requests.recv().await {
            request.select("Yes");
        }
    });

    {
        let mut engine = TraversalEngine::new(&doc, &registry);
        engine.run().await.unwrap();
    }
    // Dropping the registry drops the choice sender and ends the host loop.
    drop(registry);
    host.await.unwrap();

    assert_eq!(*spoken.lock().unwrap(), vec!["You said yes".to_string()]);
}

/// **Scenario**: run() surfaces a failure the same way step() does.
#[tokio::test]
async fn run_reports_missing_handler() {
    let doc = yes_no_choice();
    let registry = HandlerRegistry::new();
    let mut engine = TraversalEngine::new(&doc, &registry);
    let result = engine.run().await;
    assert_eq!(
        result,
        Err(WalkError::NoHandlerForKind(CHOICE_KIND.to_string()))
    );
}
