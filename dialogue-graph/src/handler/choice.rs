//! Branching choice handler: waits for an external actor to pick a labelled option.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::document::{NodeId, NodeRecord, CHOICE_KIND};
use crate::error::HandlerError;

use super::{target_for_port, HandlerOutcome, NodeHandler, NodeLink};

/// A pending choice published to the host.
///
/// The host presents `choices` and answers with [`select`](Self::select) or
/// [`select_index`](Self::select_index). Dropping the request abandons the choice
/// and fails the walk.
#[derive(Debug)]
pub struct ChoiceRequest {
    pub node_id: NodeId,
    pub choices: Vec<String>,
    reply: oneshot::Sender<String>,
}

impl ChoiceRequest {
    /// Answers with a label. The walk follows the first link on the port of that name.
    pub fn select(self, label: impl Into<String>) {
        // The walk may have been discarded already; nothing to resume then.
        let _ = self.reply.send(label.into());
    }

    /// Answers with the label at `index`; gives the request back if out of range.
    pub fn select_index(self, index: usize) -> Result<(), ChoiceRequest> {
        match self.choices.get(index).cloned() {
            Some(label) => {
                self.select(label);
                Ok(())
            }
            None => Err(self),
        }
    }
}

/// Handler for kinds exposing named choices.
///
/// Publishes a [`ChoiceRequest`] on its channel and stays pending until the host
/// answers; then yields the target of the first link whose port equals the chosen
/// label, or `None` if there is none.
#[derive(Debug, Clone)]
pub struct ChoiceHandler {
    requests: mpsc::UnboundedSender<ChoiceRequest>,
}

impl ChoiceHandler {
    pub fn new(requests: mpsc::UnboundedSender<ChoiceRequest>) -> Self {
        Self { requests }
    }

    /// Handler plus the receiving end the host reads requests from.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ChoiceRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl NodeHandler for ChoiceHandler {
    async fn handle<'a>(
        &'a self,
        node: &'a NodeRecord,
        links: Vec<NodeLink<'a>>,
    ) -> HandlerOutcome<'a> {
        let choices = node
            .kind
            .choice_labels()
            .ok_or_else(|| HandlerError::UnexpectedKind {
                expected: CHOICE_KIND.to_string(),
                found: node.kind_tag().to_string(),
            })?
            .to_vec();

        let (reply, selection) = oneshot::channel();
        self.requests
            .send(ChoiceRequest {
                node_id: node.id.clone(),
                choices,
                reply,
            })
            .map_err(|_| HandlerError::Abandoned("no host is listening for choices".into()))?;

        let label = selection.await.map_err(|_| {
            HandlerError::Abandoned(format!("choice at node {} was dropped unanswered", node.id))
        })?;
        tracing::debug!(node_id = %node.id, choice = %label, "Choice selected");
        Ok(target_for_port(&links, &label))
    }
}
