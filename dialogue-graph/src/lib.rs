//! # dialogue-graph
//!
//! Branching dialogue graphs for games and interactive fiction: a document of typed
//! nodes joined by links on named output ports, a polymorphic JSON codec for it, and a
//! traversal engine that walks the graph one node at a time and can suspend while a
//! node waits for the player, a timer or a world-state check.
//!
//! ## Main Modules
//!
//! - [`document`]: `GraphDocument`, `NodeRecord`, `NodeKind`, `LinkRecord`, `Position`.
//! - [`codec`]: `DocumentCodec` (encode, decode, validate, import) and `KindRegistry`.
//! - [`handler`]: `NodeHandler`, `HandlerRegistry` and the built-in handler patterns
//!   (start, choice, predicate, pass-through).
//! - [`engine`]: `TraversalEngine` and `WalkStatus`.
//!
//! ## Node kinds
//!
//! `start`, `dialogue` and `choice` are built in. Applications add their own kinds by
//! implementing [`CustomKind`] for a serde struct, registering it in the codec's
//! [`KindRegistry`], and registering a handler under the same tag.
//!
//! ## Quick Start
//!
//! ```rust
//! use dialogue_graph::{
//!     DocumentCodec, GraphDocument, HandlerRegistry, LinkRecord, NodeRecord,
//!     PassThroughHandler, Position, TraversalEngine, WalkStatus, DIALOGUE_KIND,
//! };
//!
//! let mut doc = GraphDocument::new();
//! doc.add_node(NodeRecord::start("start", Position::ZERO))
//!     .add_node(NodeRecord::dialogue("hello", Position::new(200.0, 0.0), None, "Hello!"))
//!     .add_link(LinkRecord::new("start", "Next", "hello"));
//!
//! let codec = DocumentCodec::default();
//! let doc = codec.decode(&codec.encode(&doc).unwrap()).unwrap();
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register(DIALOGUE_KIND, PassThroughHandler::new(|_node: &NodeRecord| Ok(())));
//!
//! let mut engine = TraversalEngine::new(&doc, &registry);
//! engine.start().unwrap();
//! assert!(matches!(engine.step().unwrap(), WalkStatus::Running(n) if n.id == "hello"));
//! assert_eq!(engine.step().unwrap(), WalkStatus::Completed);
//! ```

pub mod codec;
pub mod document;
pub mod engine;
pub mod error;
pub mod handler;
pub mod logging;

pub use codec::{DocumentCodec, ImportIssue, ImportReport, KindDecoder, KindRegistry};
pub use document::{
    ChoiceSet, CustomKind, CustomNode, DialogueLine, GraphDocument, LinkRecord, NodeId, NodeKind,
    NodeRecord, Position, CHOICE_KIND, DIALOGUE_KIND, RESERVED_FIELDS, START_KIND,
};
pub use engine::{TraversalEngine, WalkStatus};
pub use error::{CodecError, HandlerError, WalkError};
pub use handler::{
    bool_port, first_target, target_for_port, ChoiceHandler, ChoiceRequest, HandlerOutcome,
    HandlerRegistry, NodeHandler, NodeLink, PassThroughHandler, PredicateHandler, StartHandler,
};
