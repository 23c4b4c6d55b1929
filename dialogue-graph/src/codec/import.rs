//! Paste-style import: merge a document into another with fresh ids.
//!
//! Only a structurally broken document is fatal. Entries that fail to decode,
//! start nodes and links whose endpoints were not imported are skipped, logged and
//! listed in the [`ImportReport`].

use std::collections::HashMap;

use uuid::Uuid;

use crate::document::{GraphDocument, LinkRecord, NodeId, Position};
use crate::error::CodecError;
use crate::logging::log_import_issue;

use super::wire::{link_from_value, node_from_value, DocumentIn};
use super::DocumentCodec;

/// An entry left out of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportIssue {
    /// A start node in the source; a document never gains a second start node by import.
    SkippedStartNode { id: NodeId },
    /// A node entry that failed to decode (unknown kind, bad fields).
    SkippedEntry { index: usize, reason: String },
    /// A link entry that failed to decode.
    SkippedLink { index: usize, reason: String },
    /// A link whose source or target was not among the imported nodes.
    DanglingLinkReference {
        from_id: NodeId,
        from_port: String,
        to_id: NodeId,
    },
}

/// Outcome of [`DocumentCodec::import`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Source id → fresh id, for every imported node.
    pub id_map: HashMap<NodeId, NodeId>,
    pub nodes_added: usize,
    pub links_added: usize,
    pub issues: Vec<ImportIssue>,
}

impl ImportReport {
    /// Fresh id given to the node that had `source_id` in the imported document.
    pub fn fresh_id(&self, source_id: &str) -> Option<&str> {
        self.id_map.get(source_id).map(String::as_str)
    }

    fn skip(&mut self, issue: ImportIssue) {
        log_import_issue(&issue);
        self.issues.push(issue);
    }
}

impl DocumentCodec {
    /// Imports `bytes` into `target`, giving every node a fresh id and moving it by `-offset`.
    ///
    /// Fails only with `MalformedDocument` when `bytes` is not a document at all; in that
    /// case `target` is unchanged.
    pub fn import(
        &self,
        target: &mut GraphDocument,
        bytes: &[u8],
        offset: Position,
    ) -> Result<ImportReport, CodecError> {
        let raw = DocumentIn::parse(bytes)?;
        let mut report = ImportReport::default();

        for (index, entry) in raw.nodes.into_iter().enumerate() {
            let mut node = match node_from_value(entry, &self.kinds) {
                Ok(node) => node,
                Err(e) => {
                    report.skip(ImportIssue::SkippedEntry {
                        index,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            if node.is_start() {
                report.skip(ImportIssue::SkippedStartNode { id: node.id });
                continue;
            }
            let fresh = Uuid::new_v4().to_string();
            report
                .id_map
                .entry(std::mem::replace(&mut node.id, fresh.clone()))
                .or_insert(fresh);
            node.position = node.position - offset;
            target.add_node(node);
            report.nodes_added += 1;
        }

        for (index, entry) in raw.links.into_iter().enumerate() {
            let link = match link_from_value(entry) {
                Ok(link) => link,
                Err(e) => {
                    report.skip(ImportIssue::SkippedLink {
                        index,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            match (report.id_map.get(&link.from_id), report.id_map.get(&link.to_id)) {
                (Some(from), Some(to)) => {
                    target.add_link(LinkRecord::new(from.clone(), link.from_port, to.clone()));
                    report.links_added += 1;
                }
                _ => report.skip(ImportIssue::DanglingLinkReference {
                    from_id: link.from_id,
                    from_port: link.from_port,
                    to_id: link.to_id,
                }),
            }
        }

        Ok(report)
    }
}
