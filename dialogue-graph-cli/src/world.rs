//! Game state the CLI's handlers read and mutate: characters, quests, inventory.
//!
//! Loaded from a JSON world file; shared between handlers as [`SharedWorld`].

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use dialogue_graph::HandlerError;
use serde::{Deserialize, Serialize};

use crate::config::Error;
use crate::kinds::{QuestResult, QuestState};

/// World shared by all handlers of one play session.
pub type SharedWorld = Arc<Mutex<World>>;

/// A speaking character. Dialogue lines reference characters by their key in [`World::characters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub name: String,
}

/// Current state and result of one quest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    #[serde(default)]
    pub state: QuestState,
    #[serde(default)]
    pub result: QuestResult,
}

/// Characters, quests and held items.
///
/// Every section is optional in the file; `{}` is an empty world.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    #[serde(default)]
    pub characters: HashMap<String, Character>,
    #[serde(default)]
    pub quests: HashMap<String, Quest>,
    #[serde(default)]
    pub inventory: BTreeSet<String>,
}

impl World {
    /// Reads a world file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read world file {}: {}", path.display(), e))?;
        let world = serde_json::from_str(&text)
            .map_err(|e| format!("invalid world file {}: {}", path.display(), e))?;
        Ok(world)
    }

    /// Display name for a speaker key, if the character exists and has a non-blank name.
    pub fn speaker_name(&self, key: &str) -> Option<&str> {
        self.characters
            .get(key)
            .map(|c| c.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.get(id)
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.inventory.contains(id)
    }

    pub fn into_shared(self) -> SharedWorld {
        Arc::new(Mutex::new(self))
    }
}

/// Locks the shared world for a handler; a poisoned lock fails the node.
pub(crate) fn lock(world: &SharedWorld) -> Result<MutexGuard<'_, World>, HandlerError> {
    world
        .lock()
        .map_err(|_| HandlerError::Failed("world state lock poisoned".to_string()))
}
