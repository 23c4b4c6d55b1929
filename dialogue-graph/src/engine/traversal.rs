//! Traversal engine: drives one walk from the start node to completion or failure.
//!
//! The engine borrows the document and handler registry for the whole walk. Each
//! `step()` either evaluates the current node (look up its handler, resolve its links,
//! start the handler's computation) or re-polls a suspended computation. A computation
//! that is still waiting leaves the engine suspended; the caller steps again later.

use std::task::{Context, Poll};

use futures::future::{poll_fn, BoxFuture};
use futures::task::noop_waker;
use futures::FutureExt;

use crate::document::{GraphDocument, NodeRecord};
use crate::error::WalkError;
use crate::handler::{HandlerOutcome, HandlerRegistry, NodeLink};
use crate::logging::{
    log_dangling_link, log_node_enter, log_node_exit, log_walk_complete, log_walk_error,
    log_walk_start, log_walk_suspended,
};

use super::WalkStatus;

type PendingHandler<'a> = BoxFuture<'a, HandlerOutcome<'a>>;

enum WalkState<'a> {
    NotStarted,
    Running(&'a NodeRecord),
    Suspended {
        node: &'a NodeRecord,
        pending: PendingHandler<'a>,
    },
    Completed,
    Failed(WalkError),
}

/// A single walk over a [`GraphDocument`].
///
/// Single-threaded and cooperative: nothing runs between calls to [`step`](Self::step)
/// (or while [`run`](Self::run) is not polled). Dropping the engine mid-walk is always
/// safe; a suspended handler computation is dropped with it.
///
/// Cycles are not detected. A walk ends only when a handler yields no next node, or
/// when the optional step budget runs out.
pub struct TraversalEngine<'a> {
    document: &'a GraphDocument,
    registry: &'a HandlerRegistry,
    state: WalkState<'a>,
    steps: usize,
    step_budget: Option<usize>,
}

impl<'a> TraversalEngine<'a> {
    /// New walk over `document` using `registry`; not started yet.
    pub fn new(document: &'a GraphDocument, registry: &'a HandlerRegistry) -> Self {
        Self {
            document,
            registry,
            state: WalkState::NotStarted,
            steps: 0,
            step_budget: None,
        }
    }

    /// Fails the walk with `StepBudgetExhausted` once `max_steps` nodes have been evaluated.
    pub fn with_step_budget(mut self, max_steps: usize) -> Self {
        self.step_budget = Some(max_steps);
        self
    }

    /// Number of node evaluations so far.
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn status(&self) -> WalkStatus<'a> {
        match &self.state {
            WalkState::NotStarted => WalkStatus::NotStarted,
            WalkState::Running(node) => WalkStatus::Running(node),
            WalkState::Suspended { node, .. } => WalkStatus::Suspended(node),
            WalkState::Completed => WalkStatus::Completed,
            WalkState::Failed(error) => WalkStatus::Failed(error.clone()),
        }
    }

    /// Moves to the document's start node.
    ///
    /// Fails with `NoStartNode` (and the walk enters the failed state) when the document
    /// has none, or with `AlreadyStarted` (state unchanged) when called twice.
    pub fn start(&mut self) -> Result<WalkStatus<'a>, WalkError> {
        if !matches!(self.state, WalkState::NotStarted) {
            return Err(WalkError::AlreadyStarted);
        }
        match self.document.start_node() {
            Some(start) => {
                log_walk_start(start);
                self.state = WalkState::Running(start);
                Ok(WalkStatus::Running(start))
            }
            None => self.fail(WalkError::NoStartNode),
        }
    }

    /// Advances the walk by at most one node.
    ///
    /// Returns `Suspended` without progress while the current handler is waiting.
    /// On a completed walk returns `Completed`; on a failed walk returns its error again.
    pub fn step(&mut self) -> Result<WalkStatus<'a>, WalkError> {
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        self.advance(&mut cx)
    }

    /// Drives the walk to completion, starting it if needed.
    ///
    /// Suspended handler computations are awaited with the caller's waker, so the host
    /// must resolve them concurrently (e.g. answer choice requests from another task).
    pub async fn run(&mut self) -> Result<(), WalkError> {
        if matches!(self.state, WalkState::NotStarted) {
            self.start()?;
        }
        loop {
            let status = poll_fn(|cx| match self.advance(cx) {
                Ok(WalkStatus::Suspended(_)) => Poll::Pending,
                other => Poll::Ready(other),
            })
            .await?;
            if matches!(status, WalkStatus::Completed) {
                return Ok(());
            }
        }
    }

    fn advance(&mut self, cx: &mut Context<'_>) -> Result<WalkStatus<'a>, WalkError> {
        match std::mem::replace(&mut self.state, WalkState::NotStarted) {
            WalkState::NotStarted => Err(WalkError::NotStarted),
            WalkState::Completed => {
                self.state = WalkState::Completed;
                Ok(WalkStatus::Completed)
            }
            WalkState::Failed(error) => {
                self.state = WalkState::Failed(error.clone());
                Err(error)
            }
            WalkState::Running(node) => self.evaluate(node, cx),
            WalkState::Suspended { node, pending } => self.poll_handler(node, pending, false, cx),
        }
    }

    fn evaluate(
        &mut self,
        node: &'a NodeRecord,
        cx: &mut Context<'_>,
    ) -> Result<WalkStatus<'a>, WalkError> {
        if let Some(budget) = self.step_budget {
            if self.steps >= budget {
                return self.fail(WalkError::StepBudgetExhausted(budget));
            }
        }
        let registry = self.registry;
        let handler = match registry.get(node.kind_tag()) {
            Some(handler) => handler,
            None => return self.fail(WalkError::NoHandlerForKind(node.kind_tag().to_string())),
        };
        self.steps += 1;
        log_node_enter(node);
        let links = self.resolve_links(node);
        let pending = handler.handle(node, links);
        self.poll_handler(node, pending, true, cx)
    }

    fn poll_handler(
        &mut self,
        node: &'a NodeRecord,
        mut pending: PendingHandler<'a>,
        first_poll: bool,
        cx: &mut Context<'_>,
    ) -> Result<WalkStatus<'a>, WalkError> {
        match pending.poll_unpin(cx) {
            Poll::Pending => {
                if first_poll {
                    log_walk_suspended(node);
                }
                self.state = WalkState::Suspended { node, pending };
                Ok(WalkStatus::Suspended(node))
            }
            Poll::Ready(Ok(Some(next))) => {
                log_node_exit(node, Some(next));
                self.state = WalkState::Running(next);
                Ok(WalkStatus::Running(next))
            }
            Poll::Ready(Ok(None)) => {
                log_node_exit(node, None);
                log_walk_complete(self.steps);
                self.state = WalkState::Completed;
                Ok(WalkStatus::Completed)
            }
            Poll::Ready(Err(reason)) => self.fail(WalkError::HandlerFailed {
                node_id: node.id.clone(),
                reason,
            }),
        }
    }

    /// Outgoing links of `node` paired with their target nodes; dangling links are dropped.
    fn resolve_links(&self, node: &'a NodeRecord) -> Vec<NodeLink<'a>> {
        let document = self.document;
        document
            .outgoing_links(&node.id)
            .filter_map(|link| match document.find_node_by_id(&link.to_id) {
                Some(target) => Some(NodeLink {
                    target,
                    port: &link.from_port,
                }),
                None => {
                    log_dangling_link(link);
                    None
                }
            })
            .collect()
    }

    fn fail(&mut self, error: WalkError) -> Result<WalkStatus<'a>, WalkError> {
        log_walk_error(&error);
        self.state = WalkState::Failed(error.clone());
        Err(error)
    }
}
