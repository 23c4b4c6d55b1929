//! Link between two nodes, leaving the source node through a named output port.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// One outgoing connection: `from_id` through port `from_port` to `to_id`.
///
/// Either endpoint may be dangling after a partial edit or in corrupt input; the
/// engine drops such links when resolving a node's outgoing targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub from_id: NodeId,
    pub from_port: String,
    pub to_id: NodeId,
}

impl LinkRecord {
    pub fn new(
        from_id: impl Into<NodeId>,
        from_port: impl Into<String>,
        to_id: impl Into<NodeId>,
    ) -> Self {
        Self {
            from_id: from_id.into(),
            from_port: from_port.into(),
            to_id: to_id.into(),
        }
    }
}
