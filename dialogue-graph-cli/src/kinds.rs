//! Quest and inventory node kinds played by the CLI.
//!
//! Each kind is a [`CustomKind`] registered with the codec's [`KindRegistry`] so documents
//! can carry it, and with the [`HandlerRegistry`](dialogue_graph::HandlerRegistry) via
//! [`crate::handlers`] so walks can evaluate it.

use std::fmt;

use dialogue_graph::{CustomKind, KindRegistry};
use serde::{Deserialize, Serialize};

/// Progress of a quest. The display name doubles as the output port of a quest condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestState {
    #[default]
    Undiscovered,
    Active,
    Completed,
    Failed,
}

impl fmt::Display for QuestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestState::Undiscovered => "Undiscovered",
            QuestState::Active => "Active",
            QuestState::Completed => "Completed",
            QuestState::Failed => "Failed",
        };
        f.write_str(name)
    }
}

/// Outcome recorded alongside a quest state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestResult {
    #[default]
    None,
    Success,
    Failure,
}

/// Sets a quest's state and result, then continues along the first link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuest {
    pub quest_id: String,
    pub new_state: QuestState,
    #[serde(default)]
    pub new_result: QuestResult,
}

impl CustomKind for UpdateQuest {
    const TAG: &'static str = "update_quest";
}

/// Branches on a quest's current state; each state name is an output port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCondition {
    pub quest_id: String,
}

impl CustomKind for QuestCondition {
    const TAG: &'static str = "quest_condition";
}

/// Branches on whether the player holds an item: ports `True` / `False`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HasItem {
    pub item_id: String,
}

impl CustomKind for HasItem {
    const TAG: &'static str = "has_item";
}

/// Registers the quest and inventory kinds on top of whatever `kinds` already holds.
pub fn register_kinds(kinds: &mut KindRegistry) -> &mut KindRegistry {
    kinds
        .register::<UpdateQuest>()
        .register::<QuestCondition>()
        .register::<HasItem>()
}
