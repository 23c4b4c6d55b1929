//! dialogue-graph-cli library: plays dialogue documents in the terminal.
//!
//! Adds quest and inventory node kinds on top of the core graph, loads a world file
//! (characters, quests, items), and walks a document printing lines and asking for choices.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), dialogue_graph_cli::Error> {
//! let outcome = dialogue_graph_cli::play("intro.json", Default::default()).await?;
//! println!("{} nodes visited", outcome.steps);
//! # Ok(())
//! # }
//! ```

mod config;
mod handlers;
mod kinds;
mod play;
mod world;

pub use config::{Error, PlayConfig, PlayOptions};
pub use handlers::{build_registry, LineHandler, LineSink};
pub use kinds::{register_kinds, HasItem, QuestCondition, QuestResult, QuestState, UpdateQuest};
pub use play::{answer_choices, codec, play, play_document, play_with_config, PlayOutcome};
pub use world::{Character, Quest, SharedWorld, World};

#[cfg(test)]
mod tests;
