//! Kind registry: discriminator tag → payload decoder.
//!
//! Supplied by the embedding application; must match whatever produced a document.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::document::{
    ChoiceSet, CustomKind, CustomNode, DialogueLine, NodeKind, CHOICE_KIND, DIALOGUE_KIND,
    START_KIND,
};
use crate::error::CodecError;

/// Decodes the fields of one node entry (reserved keys already removed) into a kind.
pub type KindDecoder =
    Arc<dyn Fn(Map<String, Value>) -> Result<NodeKind, serde_json::Error> + Send + Sync>;

/// Mapping from discriminator tag to decoder, consulted for every node entry at decode time.
///
/// `with_builtins()` (also `Default`) knows `start`, `dialogue` and `choice`. Registering a
/// tag that is already present replaces its decoder.
#[derive(Clone)]
pub struct KindRegistry {
    decoders: HashMap<String, KindDecoder>,
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for KindRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.tags().collect();
        tags.sort_unstable();
        f.debug_struct("KindRegistry").field("tags", &tags).finish()
    }
}

impl KindRegistry {
    /// Registry with no kinds at all; every decode fails with `UnknownNodeKind`.
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registry with the built-in start, dialogue and choice kinds.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry
            .register_decoder(START_KIND, |_| Ok(NodeKind::Start))
            .register_decoder(DIALOGUE_KIND, |fields| {
                serde_json::from_value::<DialogueLine>(Value::Object(fields)).map(NodeKind::Dialogue)
            })
            .register_decoder(CHOICE_KIND, |fields| {
                serde_json::from_value::<ChoiceSet>(Value::Object(fields)).map(NodeKind::Choice)
            });
        registry
    }

    /// Registers an application kind by its `K::TAG`.
    ///
    /// Decoding validates the fields against `K` but keeps them verbatim in the
    /// resulting [`CustomNode`].
    pub fn register<K: CustomKind + 'static>(&mut self) -> &mut Self {
        self.register_decoder(K::TAG, |fields| {
            serde_json::from_value::<K>(Value::Object(fields.clone()))?;
            Ok(NodeKind::Custom(CustomNode {
                tag: K::TAG.to_string(),
                fields,
            }))
        })
    }

    /// Registers a raw decoder for `tag`.
    pub fn register_decoder<F>(&mut self, tag: impl Into<String>, decoder: F) -> &mut Self
    where
        F: Fn(Map<String, Value>) -> Result<NodeKind, serde_json::Error> + Send + Sync + 'static,
    {
        self.decoders.insert(tag.into(), Arc::new(decoder));
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.decoders.keys().map(String::as_str)
    }

    /// Decodes one entry's fields for `tag`.
    ///
    /// Fails with `UnknownNodeKind` when the tag is not registered and with
    /// `MalformedDocument` when the fields do not fit the kind.
    pub fn decode(&self, tag: &str, fields: Map<String, Value>) -> Result<NodeKind, CodecError> {
        let decoder = self
            .decoders
            .get(tag)
            .ok_or_else(|| CodecError::UnknownNodeKind(tag.to_string()))?;
        decoder(fields).map_err(|e| {
            CodecError::MalformedDocument(format!("invalid fields for node kind `{}`: {}", tag, e))
        })
    }
}
