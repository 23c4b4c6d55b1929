//! JSON shape of documents: `{ "nodes": [...], "links": [...] }`.
//!
//! Node entries flatten their payload next to the reserved `kind`, `id` and
//! `position` keys. A payload that uses a reserved key, or a non-finite position,
//! is refused at encode time since it could not be decoded again.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::{LinkRecord, NodeKind, NodeRecord, Position, RESERVED_FIELDS};
use crate::error::CodecError;

use super::KindRegistry;

pub(crate) const KIND_KEY: &str = "kind";
pub(crate) const ID_KEY: &str = "id";
pub(crate) const POSITION_KEY: &str = "position";

#[derive(Serialize)]
pub(crate) struct DocumentOut<'a> {
    pub nodes: Vec<Value>,
    pub links: &'a [LinkRecord],
}

/// Raw document: entries are decoded one by one so import can skip bad ones.
#[derive(Deserialize)]
pub(crate) struct DocumentIn {
    pub nodes: Vec<Value>,
    #[serde(default)]
    pub links: Vec<Value>,
}

impl DocumentIn {
    pub fn parse(bytes: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::MalformedDocument(e.to_string()))
    }
}

fn to_object<T: Serialize>(payload: &T) -> Result<Map<String, Value>, CodecError> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CodecError::MalformedDocument(
            "node payload did not serialize to an object".into(),
        )),
        Err(e) => Err(CodecError::MalformedDocument(e.to_string())),
    }
}

pub(crate) fn node_to_value(node: &NodeRecord) -> Result<Value, CodecError> {
    let mut entry = match &node.kind {
        NodeKind::Start => Map::new(),
        NodeKind::Dialogue(line) => to_object(line)?,
        NodeKind::Choice(set) => to_object(set)?,
        NodeKind::Custom(custom) => custom.fields.clone(),
    };
    if let Some(key) = RESERVED_FIELDS.iter().find(|key| entry.contains_key(**key)) {
        return Err(CodecError::MalformedDocument(format!(
            "node {} of kind `{}` has a payload field named `{}`, which is reserved",
            node.id,
            node.kind_tag(),
            key
        )));
    }
    if !(node.position.x.is_finite() && node.position.y.is_finite()) {
        return Err(CodecError::MalformedDocument(format!(
            "node {} has a non-finite position ({}, {})",
            node.id, node.position.x, node.position.y
        )));
    }
    entry.insert(KIND_KEY.into(), Value::String(node.kind_tag().to_string()));
    entry.insert(ID_KEY.into(), Value::String(node.id.clone()));
    entry.insert(POSITION_KEY.into(), to_object(&node.position).map(Value::Object)?);
    Ok(Value::Object(entry))
}

pub(crate) fn node_from_value(entry: Value, kinds: &KindRegistry) -> Result<NodeRecord, CodecError> {
    let mut fields = match entry {
        Value::Object(map) => map,
        other => {
            return Err(CodecError::MalformedDocument(format!(
                "node entry must be an object, found {}",
                other
            )))
        }
    };
    let tag = match fields.remove(KIND_KEY) {
        Some(Value::String(tag)) => tag,
        _ => {
            return Err(CodecError::MalformedDocument(
                "node entry is missing its `kind` tag".into(),
            ))
        }
    };
    let id = match fields.remove(ID_KEY) {
        Some(Value::String(id)) => id,
        _ => {
            return Err(CodecError::MalformedDocument(format!(
                "`{}` node entry is missing a string `id`",
                tag
            )))
        }
    };
    let position = match fields.remove(POSITION_KEY) {
        Some(value) => serde_json::from_value::<Position>(value).map_err(|e| {
            CodecError::MalformedDocument(format!("node {} has an invalid position: {}", id, e))
        })?,
        None => {
            return Err(CodecError::MalformedDocument(format!(
                "node {} is missing its position",
                id
            )))
        }
    };
    let kind = kinds.decode(&tag, fields)?;
    Ok(NodeRecord { id, position, kind })
}

pub(crate) fn link_from_value(entry: Value) -> Result<LinkRecord, CodecError> {
    serde_json::from_value(entry)
        .map_err(|e| CodecError::MalformedDocument(format!("invalid link entry: {}", e)))
}
