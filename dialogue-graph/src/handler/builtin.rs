//! Built-in handler patterns: start, pass-through side effect, predicate branch.

use async_trait::async_trait;

use crate::document::NodeRecord;
use crate::error::HandlerError;

use super::{HandlerOutcome, NodeHandler, NodeLink};

/// Target of the first link, or `None` when there are no links.
pub fn first_target<'a>(links: &[NodeLink<'a>]) -> Option<&'a NodeRecord> {
    links.first().map(|link| link.target)
}

/// Target of the first link leaving through `port`, or `None`.
pub fn target_for_port<'a>(links: &[NodeLink<'a>], port: &str) -> Option<&'a NodeRecord> {
    links
        .iter()
        .find(|link| link.port == port)
        .map(|link| link.target)
}

/// Port name for a boolean condition: `"True"` or `"False"`.
pub fn bool_port(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Start node: follows the first outgoing link immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartHandler;

#[async_trait]
impl NodeHandler for StartHandler {
    async fn handle<'a>(
        &'a self,
        _node: &'a NodeRecord,
        links: Vec<NodeLink<'a>>,
    ) -> HandlerOutcome<'a> {
        Ok(first_target(&links))
    }
}

/// Runs a side effect for the node, then follows the first outgoing link.
///
/// For kinds that mutate external state (e.g. quest progress) without branching.
pub struct PassThroughHandler<F> {
    effect: F,
}

impl<F> PassThroughHandler<F>
where
    F: Fn(&NodeRecord) -> Result<(), HandlerError> + Send + Sync,
{
    pub fn new(effect: F) -> Self {
        Self { effect }
    }
}

#[async_trait]
impl<F> NodeHandler for PassThroughHandler<F>
where
    F: Fn(&NodeRecord) -> Result<(), HandlerError> + Send + Sync,
{
    async fn handle<'a>(
        &'a self,
        node: &'a NodeRecord,
        links: Vec<NodeLink<'a>>,
    ) -> HandlerOutcome<'a> {
        (self.effect)(node)?;
        Ok(first_target(&links))
    }
}

/// Evaluates an external condition into a port name and follows the first link on it.
///
/// No link on the computed port ends the walk. A kind that wants a different fallback
/// computes it inside its condition.
pub struct PredicateHandler<F> {
    condition: F,
}

impl<F> PredicateHandler<F>
where
    F: Fn(&NodeRecord) -> Result<String, HandlerError> + Send + Sync,
{
    pub fn new(condition: F) -> Self {
        Self { condition }
    }
}

#[async_trait]
impl<F> NodeHandler for PredicateHandler<F>
where
    F: Fn(&NodeRecord) -> Result<String, HandlerError> + Send + Sync,
{
    async fn handle<'a>(
        &'a self,
        node: &'a NodeRecord,
        links: Vec<NodeLink<'a>>,
    ) -> HandlerOutcome<'a> {
        let port = (self.condition)(node)?;
        tracing::debug!(node_id = %node.id, port = %port, "Predicate evaluated");
        Ok(target_for_port(&links, &port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::executor::block_on;

    use crate::document::Position;

    fn nodes() -> (NodeRecord, NodeRecord, NodeRecord) {
        (
            NodeRecord::start("s", Position::ZERO),
            NodeRecord::dialogue("a", Position::ZERO, None, "A"),
            NodeRecord::dialogue("b", Position::ZERO, None, "B"),
        )
    }

    /// **Scenario**: Start handler yields the first link's target, or None with no links.
    #[test]
    fn start_follows_first_link() {
        let (s, a, b) = nodes();
        let links = vec![
            NodeLink { target: &a, port: "Next" },
            NodeLink { target: &b, port: "Next" },
        ];
        assert_eq!(block_on(StartHandler.handle(&s, links)).unwrap(), Some(&a));
        assert_eq!(block_on(StartHandler.handle(&s, vec![])).unwrap(), None);
    }

    /// **Scenario**: Pass-through runs its effect once, then follows the first link.
    #[test]
    fn pass_through_runs_effect() {
        let (s, a, _) = nodes();
        let calls = AtomicUsize::new(0);
        let handler = PassThroughHandler::new(|_node: &NodeRecord| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        let links = vec![NodeLink { target: &a, port: "Output" }];
        assert_eq!(block_on(handler.handle(&s, links)).unwrap(), Some(&a));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    /// **Scenario**: A failing effect propagates its error.
    #[test]
    fn pass_through_propagates_error() {
        let (s, _, _) = nodes();
        let handler =
            PassThroughHandler::new(|_node: &NodeRecord| Err(HandlerError::Failed("no quest".into())));
        let result = block_on(handler.handle(&s, vec![]));
        assert_eq!(result, Err(HandlerError::Failed("no quest".into())));
    }

    /// **Scenario**: Predicate follows the port named by the condition; missing port ends.
    #[test]
    fn predicate_branches_by_port() {
        let (s, a, b) = nodes();
        let links = || {
            vec![
                NodeLink { target: &a, port: "True" },
                NodeLink { target: &b, port: "False" },
            ]
        };
        let falsy = PredicateHandler::new(|_node: &NodeRecord| Ok(bool_port(false).to_string()));
        assert_eq!(block_on(falsy.handle(&s, links())).unwrap(), Some(&b));

        let other = PredicateHandler::new(|_node: &NodeRecord| Ok("Maybe".to_string()));
        assert_eq!(block_on(other.handle(&s, links())).unwrap(), None);
    }

    #[test]
    fn bool_port_names() {
        assert_eq!(bool_port(true), "True");
        assert_eq!(bool_port(false), "False");
    }
}
