//! Polymorphic JSON codec for dialogue documents.
//!
//! Every node entry carries an explicit `kind` tag; decoding looks the tag up in a
//! [`KindRegistry`] supplied by the embedding application. Positions are always
//! `{ "x", "y" }` objects.
//!
//! ## Operations
//!
//! - [`DocumentCodec::encode`] / [`DocumentCodec::decode`]: whole-document save/load.
//!   Decode is all-or-nothing.
//! - [`DocumentCodec::validate`]: pre-check untrusted input without keeping anything.
//! - [`DocumentCodec::import`]: paste-style merge into an existing document with fresh
//!   ids and an offset; bad entries and dangling links are skipped and reported.

mod import;
mod kind_registry;
mod wire;

use std::path::Path;

use crate::document::GraphDocument;
use crate::error::CodecError;

pub use import::{ImportIssue, ImportReport};
pub use kind_registry::{KindDecoder, KindRegistry};

use wire::{link_from_value, node_from_value, node_to_value, DocumentIn, DocumentOut};

/// Encoder/decoder bound to one kind registry.
#[derive(Debug, Clone, Default)]
pub struct DocumentCodec {
    kinds: KindRegistry,
}

impl DocumentCodec {
    pub fn new(kinds: KindRegistry) -> Self {
        Self { kinds }
    }

    pub fn kinds(&self) -> &KindRegistry {
        &self.kinds
    }

    pub fn kinds_mut(&mut self) -> &mut KindRegistry {
        &mut self.kinds
    }

    /// Encodes the document as compact JSON.
    ///
    /// Fails with `MalformedDocument` for a non-finite coordinate or a custom payload
    /// field named `kind`, `id` or `position`; neither could be decoded again.
    pub fn encode(&self, document: &GraphDocument) -> Result<Vec<u8>, CodecError> {
        let out = Self::document_out(document)?;
        serde_json::to_vec(&out).map_err(|e| CodecError::MalformedDocument(e.to_string()))
    }

    /// Encodes the document as indented JSON, the form written to files.
    pub fn encode_pretty(&self, document: &GraphDocument) -> Result<String, CodecError> {
        let out = Self::document_out(document)?;
        serde_json::to_string_pretty(&out).map_err(|e| CodecError::MalformedDocument(e.to_string()))
    }

    /// Decodes a whole document. Any bad entry fails the call; nothing partial is returned.
    pub fn decode(&self, bytes: &[u8]) -> Result<GraphDocument, CodecError> {
        let raw = DocumentIn::parse(bytes)?;
        let mut document = GraphDocument::new();
        for entry in raw.nodes {
            document.add_node(node_from_value(entry, &self.kinds)?);
        }
        for entry in raw.links {
            document.add_link(link_from_value(entry)?);
        }
        Ok(document)
    }

    pub fn decode_str(&self, text: &str) -> Result<GraphDocument, CodecError> {
        self.decode(text.as_bytes())
    }

    /// Whether `bytes` would decode successfully.
    pub fn validate(&self, bytes: &[u8]) -> bool {
        self.decode(bytes).is_ok()
    }

    /// Reads and decodes a document file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<GraphDocument, CodecError> {
        let bytes = std::fs::read(path.as_ref())?;
        self.decode(&bytes)
    }

    /// Encodes (indented) and writes a document file, replacing any existing file.
    pub fn save_file(
        &self,
        document: &GraphDocument,
        path: impl AsRef<Path>,
    ) -> Result<(), CodecError> {
        let text = self.encode_pretty(document)?;
        std::fs::write(path.as_ref(), text)?;
        Ok(())
    }

    fn document_out(document: &GraphDocument) -> Result<DocumentOut<'_>, CodecError> {
        let nodes = document
            .nodes()
            .iter()
            .map(node_to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DocumentOut {
            nodes,
            links: document.links(),
        })
    }
}
