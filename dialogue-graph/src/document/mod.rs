//! Dialogue document model: node records, link records and the graph that owns them.
//!
//! A [`GraphDocument`] is built by an editor (or decoded by the codec) and is read-only
//! for the duration of a walk.

mod graph;
mod link;
mod node;
mod position;

pub use graph::GraphDocument;
pub use link::LinkRecord;
pub use node::{
    ChoiceSet, CustomKind, CustomNode, DialogueLine, NodeId, NodeKind, NodeRecord, CHOICE_KIND,
    DIALOGUE_KIND, RESERVED_FIELDS, START_KIND,
};
pub use position::Position;
