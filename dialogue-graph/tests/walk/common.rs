//! Shared documents and kinds for walk tests.

use dialogue_graph::{
    CustomKind, GraphDocument, HandlerError, LinkRecord, NodeRecord, PassThroughHandler,
    Position, DIALOGUE_KIND,
};
use serde::{Deserialize, Serialize};

/// Condition node whose outcome is fixed in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flag {
    pub value: bool,
}

impl CustomKind for Flag {
    const TAG: &'static str = "flag";
}

pub fn dialogue(id: &str, text: &str) -> NodeRecord {
    NodeRecord::dialogue(id, Position::ZERO, None, text)
}

/// start S → dialogue D.
pub fn start_then_dialogue() -> GraphDocument {
    let mut doc = GraphDocument::new();
    doc.add_node(NodeRecord::start("S", Position::ZERO))
        .add_node(dialogue("D", "Hello there"))
        .add_link(LinkRecord::new("S", "Next", "D"));
    doc
}

/// start → choice Q ["Yes", "No"]; No → A, Yes → B.
pub fn yes_no_choice() -> GraphDocument {
    let mut doc = GraphDocument::new();
    doc.add_node(NodeRecord::start("S", Position::ZERO))
        .add_node(NodeRecord::choice("Q", Position::ZERO, ["Yes", "No"]))
        .add_node(dialogue("A", "You said no"))
        .add_node(dialogue("B", "You said yes"))
        .add_link(LinkRecord::new("S", "Next", "Q"))
        .add_link(LinkRecord::new("Q", "No", "A"))
        .add_link(LinkRecord::new("Q", "Yes", "B"));
    doc
}

/// start → flag F(value); True → A, and False → B when `with_false_link`.
pub fn flag_branch(value: bool, with_false_link: bool) -> GraphDocument {
    let mut doc = GraphDocument::new();
    doc.add_node(NodeRecord::start("S", Position::ZERO))
        .add_node(NodeRecord::custom("F", Position::ZERO, &Flag { value }).unwrap())
        .add_node(dialogue("A", "true branch"))
        .add_node(dialogue("B", "false branch"))
        .add_link(LinkRecord::new("S", "Next", "F"))
        .add_link(LinkRecord::new("F", "True", "A"));
    if with_false_link {
        doc.add_link(LinkRecord::new("F", "False", "B"));
    }
    doc
}

/// Dialogue handler that does nothing and follows the first link.
pub fn silent_dialogue(
) -> PassThroughHandler<impl Fn(&NodeRecord) -> Result<(), HandlerError> + Send + Sync> {
    PassThroughHandler::new(|_node: &NodeRecord| Ok(()))
}

pub const DIALOGUE: &str = DIALOGUE_KIND;
