//! Play entry points: load a document and world, walk it, answer choices from input.
//!
//! [`play`] is what the binary runs (env + options, stdin/stdout).
//! [`play_with_config`] and [`play_document`] take explicit input and output for tests and embedding.

mod prompt;

pub use prompt::answer_choices;

use std::path::Path;
use std::sync::Arc;

use dialogue_graph::{DocumentCodec, GraphDocument, KindRegistry, TraversalEngine};
use tokio::io::AsyncBufRead;

use crate::config::{Error, PlayConfig, PlayOptions};
use crate::handlers::{build_registry, LineSink};
use crate::kinds::register_kinds;
use crate::world::{SharedWorld, World};

/// Result of a finished walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Nodes evaluated, the start node included.
    pub steps: usize,
}

/// Codec that understands the built-in kinds plus the quest and inventory kinds.
pub fn codec() -> DocumentCodec {
    let mut kinds = KindRegistry::with_builtins();
    register_kinds(&mut kinds);
    DocumentCodec::new(kinds)
}

/// Loads config from env (and .env), applies `options`, and plays the document on stdin/stdout.
pub async fn play(document_path: impl AsRef<Path>, options: PlayOptions) -> Result<PlayOutcome, Error> {
    dotenv::dotenv().ok();
    let mut config = PlayConfig::from_env()?;
    config.apply_options(&options);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let sink: LineSink = Arc::new(|line: String| println!("{}", line));
    play_with_config(document_path, &config, stdin, sink).await
}

/// Loads the document and the configured world, then plays with the given input and output.
pub async fn play_with_config<R>(
    document_path: impl AsRef<Path>,
    config: &PlayConfig,
    input: R,
    sink: LineSink,
) -> Result<PlayOutcome, Error>
where
    R: AsyncBufRead + Unpin,
{
    let document = codec().load_file(document_path.as_ref())?;
    let world = match &config.world_path {
        Some(path) => World::load(path)?,
        None => World::default(),
    };
    play_document(&document, world.into_shared(), config, input, sink).await
}

/// Walks `document` against `world`, printing lines to `sink` and reading choices from `input`.
pub async fn play_document<R>(
    document: &GraphDocument,
    world: SharedWorld,
    config: &PlayConfig,
    input: R,
    sink: LineSink,
) -> Result<PlayOutcome, Error>
where
    R: AsyncBufRead + Unpin,
{
    let (registry, requests) = build_registry(world, sink.clone(), config.line_delay);
    let mut engine = TraversalEngine::new(document, &registry);
    if let Some(max_steps) = config.max_steps {
        engine = engine.with_step_budget(max_steps);
    }

    let answering = answer_choices(requests, input, sink);
    tokio::pin!(answering);
    let walked: Result<(), Error> = tokio::select! {
        walked = engine.run() => walked.map_err(|e| Box::new(e) as Error),
        answered = &mut answering => match answered {
            Ok(()) => Err("choice channel closed during the walk".into()),
            Err(e) => Err(e),
        },
    };
    walked?;

    Ok(PlayOutcome {
        steps: engine.steps_taken(),
    })
}
