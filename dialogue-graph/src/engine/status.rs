//! Observable state of a walk.

use crate::document::NodeRecord;
use crate::error::WalkError;

/// Where a walk stands.
///
/// `Running` holds the node whose handler runs on the next step; `Suspended` holds the
/// node whose handler is waiting on external input.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkStatus<'a> {
    NotStarted,
    Running(&'a NodeRecord),
    Suspended(&'a NodeRecord),
    Completed,
    Failed(WalkError),
}

impl<'a> WalkStatus<'a> {
    /// Node the walk is at, if running or suspended.
    pub fn node(&self) -> Option<&'a NodeRecord> {
        match self {
            WalkStatus::Running(node) | WalkStatus::Suspended(node) => Some(node),
            WalkStatus::NotStarted | WalkStatus::Completed | WalkStatus::Failed(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WalkStatus::Completed | WalkStatus::Failed(_))
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, WalkStatus::Suspended(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Position;

    #[test]
    fn node_and_terminal_flags() {
        let node = NodeRecord::start("s", Position::ZERO);
        assert_eq!(WalkStatus::Suspended(&node).node(), Some(&node));
        assert!(WalkStatus::Suspended(&node).is_suspended());
        assert!(WalkStatus::Completed.is_terminal());
        assert!(WalkStatus::Failed(WalkError::NoStartNode).is_terminal());
        assert!(!WalkStatus::Running(&node).is_terminal());
        assert_eq!(WalkStatus::NotStarted.node(), None);
    }
}
