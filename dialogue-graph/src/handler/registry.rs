//! Handler trait and the kind tag → handler registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::document::{NodeRecord, START_KIND};
use crate::error::HandlerError;

use super::StartHandler;

/// One resolved outgoing link: the target node and the port it leaves through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLink<'a> {
    pub target: &'a NodeRecord,
    pub port: &'a str,
}

/// What a handler computation yields: the next node, or `None` to end the walk.
pub type HandlerOutcome<'a> = Result<Option<&'a NodeRecord>, HandlerError>;

/// Logic for one node kind.
///
/// `links` are the node's outgoing links in document order, with dangling targets
/// already dropped. The returned future may stay pending across many engine steps
/// while it waits for an external actor.
#[async_trait]
pub trait NodeHandler: Send + Sync {
    async fn handle<'a>(&'a self, node: &'a NodeRecord, links: Vec<NodeLink<'a>>)
        -> HandlerOutcome<'a>;
}

/// Mapping from node kind tag to handler, built by the host before a walk.
///
/// [`HandlerRegistry::new`] comes with the start handler registered;
/// [`HandlerRegistry::empty`] has nothing. Registering a tag again replaces the handler.
#[derive(Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn NodeHandler>>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.kinds().collect();
        kinds.sort_unstable();
        f.debug_struct("HandlerRegistry").field("kinds", &kinds).finish()
    }
}

impl HandlerRegistry {
    /// Registry with the built-in start handler.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(START_KIND, StartHandler);
        registry
    }

    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `kind`; last registration wins.
    pub fn register(&mut self, kind: impl Into<String>, handler: impl NodeHandler + 'static) -> &mut Self {
        self.register_arc(kind, Arc::new(handler))
    }

    /// Registers a shared handler for `kind`; last registration wins.
    pub fn register_arc(&mut self, kind: impl Into<String>, handler: Arc<dyn NodeHandler>) -> &mut Self {
        let kind = kind.into();
        if self.handlers.insert(kind.clone(), handler).is_some() {
            tracing::debug!(kind = %kind, "Replaced node handler");
        }
        self
    }

    pub fn get(&self, kind: &str) -> Option<&Arc<dyn NodeHandler>> {
        self.handlers.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}
