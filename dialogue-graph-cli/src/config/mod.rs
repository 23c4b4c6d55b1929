//! Configuration for playing a dialogue document.
//!
//! Re-exports [`PlayConfig`], [`PlayOptions`] and config [`Error`].

mod play_config;
mod play_options;

pub use play_config::{Error, PlayConfig};
pub use play_options::PlayOptions;
