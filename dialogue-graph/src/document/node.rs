//! Node records and the tagged set of node kinds.
//!
//! Built-in kinds (start, dialogue line, choice) are plain variants; application kinds
//! travel as [`CustomNode`] keyed by their tag and are read back through [`CustomKind`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Position;

/// Caller-generated node identifier, stable across save/load.
pub type NodeId = String;

/// Tag of the distinguished start kind.
pub const START_KIND: &str = "start";
/// Tag of the built-in dialogue line kind.
pub const DIALOGUE_KIND: &str = "dialogue";
/// Tag of the built-in branching choice kind.
pub const CHOICE_KIND: &str = "choice";

/// Field names owned by the encoded node entry; payloads may not use them.
pub const RESERVED_FIELDS: [&str; 3] = ["kind", "id", "position"];

/// A line of dialogue: optional speaker reference plus text.
///
/// `speaker` is a key into an external character store; the core never resolves it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// Ordered choice labels; each label is also the name of an output port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceSet {
    #[serde(default)]
    pub choices: Vec<String>,
}

/// Application-defined node kind payload.
///
/// Implement for a serde struct and register it with
/// [`KindRegistry::register`](crate::codec::KindRegistry::register); `TAG` is the
/// discriminator written to documents and the key handlers are registered under.
pub trait CustomKind: Serialize + DeserializeOwned {
    const TAG: &'static str;
}

/// Payload of an application-defined kind: its tag and raw fields.
///
/// Fields are kept exactly as decoded so unknown keys survive a round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomNode {
    pub tag: String,
    pub fields: Map<String, Value>,
}

impl CustomNode {
    /// Builds a custom payload from a typed value. The value must serialize to a JSON object.
    pub fn from_kind<K: CustomKind>(payload: &K) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(payload)? {
            Value::Object(fields) => {
                if let Some(key) = RESERVED_FIELDS.iter().find(|key| fields.contains_key(**key)) {
                    return Err(serde::ser::Error::custom(format!(
                        "payload of custom kind `{}` uses the reserved field `{}`",
                        K::TAG,
                        key
                    )));
                }
                Ok(Self {
                    tag: K::TAG.to_string(),
                    fields,
                })
            }
            _ => Err(serde::ser::Error::custom(format!(
                "payload of custom kind `{}` must serialize to an object",
                K::TAG
            ))),
        }
    }

    /// Reads the fields back as the typed payload `K`.
    pub fn decode<K: CustomKind>(&self) -> Result<K, serde_json::Error> {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }
}

/// Concrete kind of a node, with its kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Entry point of a walk. No payload.
    Start,
    Dialogue(DialogueLine),
    Choice(ChoiceSet),
    Custom(CustomNode),
}

impl NodeKind {
    /// Discriminator tag used in documents and as the handler registry key.
    pub fn tag(&self) -> &str {
        match self {
            NodeKind::Start => START_KIND,
            NodeKind::Dialogue(_) => DIALOGUE_KIND,
            NodeKind::Choice(_) => CHOICE_KIND,
            NodeKind::Custom(custom) => &custom.tag,
        }
    }

    /// Named choices exposed by this kind, if it is a branching choice.
    pub fn choice_labels(&self) -> Option<&[String]> {
        match self {
            NodeKind::Choice(set) => Some(&set.choices),
            NodeKind::Start | NodeKind::Dialogue(_) | NodeKind::Custom(_) => None,
        }
    }
}

/// One node of a dialogue graph.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub position: Position,
    pub kind: NodeKind,
}

impl NodeRecord {
    pub fn new(id: impl Into<NodeId>, position: Position, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            position,
            kind,
        }
    }

    pub fn start(id: impl Into<NodeId>, position: Position) -> Self {
        Self::new(id, position, NodeKind::Start)
    }

    pub fn dialogue(
        id: impl Into<NodeId>,
        position: Position,
        speaker: Option<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            position,
            NodeKind::Dialogue(DialogueLine {
                speaker,
                text: text.into(),
            }),
        )
    }

    pub fn choice<I, S>(id: impl Into<NodeId>, position: Position, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            id,
            position,
            NodeKind::Choice(ChoiceSet {
                choices: choices.into_iter().map(Into::into).collect(),
            }),
        )
    }

    /// Builds a node of an application-defined kind from its typed payload.
    pub fn custom<K: CustomKind>(
        id: impl Into<NodeId>,
        position: Position,
        payload: &K,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            id,
            position,
            NodeKind::Custom(CustomNode::from_kind(payload)?),
        ))
    }

    pub fn kind_tag(&self) -> &str {
        self.kind.tag()
    }

    pub fn is_start(&self) -> bool {
        matches!(self.kind, NodeKind::Start)
    }

    /// Typed payload of a custom node, or `None` if this node is not of kind `K::TAG`.
    pub fn custom_payload<K: CustomKind>(&self) -> Option<Result<K, serde_json::Error>> {
        match &self.kind {
            NodeKind::Custom(custom) if custom.tag == K::TAG => Some(custom.decode()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct HasItem {
        item_id: u32,
    }

    impl CustomKind for HasItem {
        const TAG: &'static str = "has_item";
    }

    #[derive(Serialize, Deserialize)]
    struct NotAnObject(u32);

    impl CustomKind for NotAnObject {
        const TAG: &'static str = "bad";
    }

    #[test]
    fn builtin_tags() {
        assert_eq!(NodeRecord::start("s", Position::ZERO).kind_tag(), START_KIND);
        assert_eq!(
            NodeRecord::dialogue("d", Position::ZERO, None, "hi").kind_tag(),
            DIALOGUE_KIND
        );
        assert_eq!(
            NodeRecord::choice("c", Position::ZERO, ["Yes", "No"]).kind_tag(),
            CHOICE_KIND
        );
    }

    /// **Scenario**: A typed custom payload is tagged with K::TAG and reads back unchanged.
    #[test]
    fn custom_payload_roundtrip() {
        let node = NodeRecord::custom("h", Position::ZERO, &HasItem { item_id: 7 }).unwrap();
        assert_eq!(node.kind_tag(), "has_item");
        let payload = node.custom_payload::<HasItem>().unwrap().unwrap();
        assert_eq!(payload, HasItem { item_id: 7 });
    }

    /// **Scenario**: Asking for a payload of another kind yields None.
    #[test]
    fn custom_payload_of_other_kind_is_none() {
        let node = NodeRecord::start("s", Position::ZERO);
        assert!(node.custom_payload::<HasItem>().is_none());
    }

    /// **Scenario**: A payload that is not a JSON object is refused.
    #[test]
    fn non_object_payload_is_rejected() {
        assert!(CustomNode::from_kind(&NotAnObject(3)).is_err());
    }

    #[derive(Serialize, Deserialize)]
    struct SetFlag {
        kind: String,
    }

    impl CustomKind for SetFlag {
        const TAG: &'static str = "set_flag";
    }

    /// **Scenario**: A payload with a field named like an envelope key is refused.
    #[test]
    fn payload_with_reserved_field_is_rejected() {
        let err = CustomNode::from_kind(&SetFlag {
            kind: "quest".into(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("`kind`"), "{}", err);
    }

    #[test]
    fn choice_labels_only_for_choice_kind() {
        let c = NodeRecord::choice("c", Position::ZERO, ["A", "B"]);
        assert_eq!(c.kind.choice_labels().unwrap(), ["A", "B"]);
        assert!(NodeKind::Start.choice_labels().is_none());
    }
}
