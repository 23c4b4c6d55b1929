//! Handlers for the kinds the CLI plays: dialogue lines, choices, quests, inventory.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dialogue_graph::{
    bool_port, first_target, ChoiceHandler, ChoiceRequest, CustomKind, HandlerError,
    HandlerOutcome, HandlerRegistry, NodeHandler, NodeKind, NodeLink, NodeRecord,
    PassThroughHandler, PredicateHandler, CHOICE_KIND, DIALOGUE_KIND,
};
use tokio::sync::mpsc;

use crate::kinds::{HasItem, QuestCondition, QuestState, UpdateQuest};
use crate::world::{lock, SharedWorld};

/// Where spoken lines and prompts are written.
pub type LineSink = Arc<dyn Fn(String) + Send + Sync>;

/// Speaks a dialogue line as `Name: text` (or bare `text` without a known speaker),
/// waits `delay`, then follows the first link.
pub struct LineHandler {
    world: SharedWorld,
    sink: LineSink,
    delay: Duration,
}

impl LineHandler {
    pub fn new(world: SharedWorld, sink: LineSink, delay: Duration) -> Self {
        Self { world, sink, delay }
    }
}

#[async_trait]
impl NodeHandler for LineHandler {
    async fn handle<'a>(
        &'a self,
        node: &'a NodeRecord,
        links: Vec<NodeLink<'a>>,
    ) -> HandlerOutcome<'a> {
        let line = match &node.kind {
            NodeKind::Dialogue(line) => line,
            other => {
                return Err(HandlerError::UnexpectedKind {
                    expected: DIALOGUE_KIND.to_string(),
                    found: other.tag().to_string(),
                })
            }
        };
        let spoken = {
            let world = lock(&self.world)?;
            let speaker = line.speaker.as_deref().and_then(|key| world.speaker_name(key));
            match speaker {
                Some(name) => format!("{}: {}", name, line.text),
                None => line.text.clone(),
            }
        };
        (self.sink)(spoken);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(first_target(&links))
    }
}

fn payload<K: CustomKind>(node: &NodeRecord) -> Result<K, HandlerError> {
    match node.custom_payload::<K>() {
        Some(Ok(payload)) => Ok(payload),
        Some(Err(e)) => Err(HandlerError::Failed(format!(
            "invalid {} payload: {}",
            K::TAG,
            e
        ))),
        None => Err(HandlerError::UnexpectedKind {
            expected: K::TAG.to_string(),
            found: node.kind_tag().to_string(),
        }),
    }
}

/// Applies an [`UpdateQuest`]. Unknown quests are logged and left alone; the walk continues.
pub fn update_quest_handler(world: SharedWorld) -> impl NodeHandler {
    PassThroughHandler::new(move |node: &NodeRecord| {
        let update = payload::<UpdateQuest>(node)?;
        let mut world = lock(&world)?;
        match world.quests.get_mut(&update.quest_id) {
            Some(quest) => {
                tracing::info!(
                    quest_id = %update.quest_id,
                    from = %quest.state,
                    to = %update.new_state,
                    "Quest updated"
                );
                quest.state = update.new_state;
                quest.result = update.new_result;
            }
            None => {
                tracing::error!(quest_id = %update.quest_id, node_id = %node.id, "Unknown quest");
            }
        }
        Ok(())
    })
}

/// Ports on the quest's state name. An unknown quest counts as `Undiscovered`.
pub fn quest_condition_handler(world: SharedWorld) -> impl NodeHandler {
    PredicateHandler::new(move |node: &NodeRecord| {
        let condition = payload::<QuestCondition>(node)?;
        let world = lock(&world)?;
        let state = match world.quest(&condition.quest_id) {
            Some(quest) => quest.state,
            None => {
                tracing::error!(quest_id = %condition.quest_id, node_id = %node.id, "Unknown quest");
                QuestState::Undiscovered
            }
        };
        Ok(state.to_string())
    })
}

/// Ports `True` / `False` on whether the inventory holds the item.
pub fn has_item_handler(world: SharedWorld) -> impl NodeHandler {
    PredicateHandler::new(move |node: &NodeRecord| {
        let check = payload::<HasItem>(node)?;
        let held = lock(&world)?.has_item(&check.item_id);
        Ok(bool_port(held).to_string())
    })
}

/// Registry with every kind the CLI plays, plus the receiver for choice requests.
pub fn build_registry(
    world: SharedWorld,
    sink: LineSink,
    line_delay: Duration,
) -> (HandlerRegistry, mpsc::UnboundedReceiver<ChoiceRequest>) {
    let (choices, requests) = ChoiceHandler::channel();
    let mut registry = HandlerRegistry::new();
    registry
        .register(DIALOGUE_KIND, LineHandler::new(world.clone(), sink, line_delay))
        .register(CHOICE_KIND, choices)
        .register(UpdateQuest::TAG, update_quest_handler(world.clone()))
        .register(QuestCondition::TAG, quest_condition_handler(world.clone()))
        .register(HasItem::TAG, has_item_handler(world));
    (registry, requests)
}
