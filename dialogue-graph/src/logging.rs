//! Logging helpers for walks and imports.
//!
//! Structured `tracing` events for walk start/completion, node enter/exit,
//! suspension, failures and non-fatal document inconsistencies.

use crate::codec::ImportIssue;
use crate::document::{LinkRecord, NodeRecord};
use crate::error::WalkError;

/// Log walk start at the given start node.
pub fn log_walk_start(start: &NodeRecord) {
    tracing::info!(node_id = %start.id, "Starting dialogue walk");
}

/// Log entering a node, before its handler runs.
pub fn log_node_enter(node: &NodeRecord) {
    tracing::debug!(node_id = %node.id, kind = node.kind_tag(), "Entering node");
}

/// Log the handler's decision for a node.
pub fn log_node_exit(node: &NodeRecord, next: Option<&NodeRecord>) {
    match next {
        Some(next) => {
            tracing::debug!(node_id = %node.id, next = %next.id, "Node handler selected next node")
        }
        None => tracing::debug!(node_id = %node.id, "Node handler ended the walk"),
    }
}

/// Log that a handler is waiting on external input.
pub fn log_walk_suspended(node: &NodeRecord) {
    tracing::debug!(node_id = %node.id, kind = node.kind_tag(), "Walk suspended");
}

/// Log walk completion.
pub fn log_walk_complete(steps: usize) {
    tracing::info!(steps, "Dialogue walk complete");
}

/// Log walk failure.
pub fn log_walk_error(error: &WalkError) {
    tracing::error!(?error, "Dialogue walk failed");
}

/// Log a link dropped because its target is not in the document.
pub fn log_dangling_link(link: &LinkRecord) {
    tracing::warn!(
        from_id = %link.from_id,
        from_port = %link.from_port,
        to_id = %link.to_id,
        "Dropping link to missing node"
    );
}

/// Log an entry skipped while importing a document.
pub fn log_import_issue(issue: &ImportIssue) {
    tracing::warn!(?issue, "Import skipped an entry");
}
