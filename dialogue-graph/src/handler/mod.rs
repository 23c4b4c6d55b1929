//! Node handlers: per-kind logic that picks the next node of a walk.
//!
//! A handler receives the current node and its resolved outgoing links and returns a
//! future that eventually yields the next node (or `None` to end the walk). The engine
//! polls that future once per `step()`, so a handler suspends simply by awaiting
//! external input.

mod builtin;
mod choice;
mod registry;

pub use builtin::{
    bool_port, first_target, target_for_port, PassThroughHandler, PredicateHandler, StartHandler,
};
pub use choice::{ChoiceHandler, ChoiceRequest};
pub use registry::{HandlerOutcome, HandlerRegistry, NodeHandler, NodeLink};
