//! Play config: line delay, step budget, world file. Can be filled from env / .env.
//!
//! Interacts with [`PlayOptions`](super::PlayOptions) and [`play_with_config`](crate::play_with_config).

use std::path::PathBuf;
use std::time::Duration;

/// Error type used for config loading and play entry points.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Play config. Defaults: no line delay, no step budget, empty world.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayConfig {
    /// Pause after each dialogue line.
    pub line_delay: Duration,
    /// Optional step budget for the walk; unset means unbounded.
    pub max_steps: Option<usize>,
    /// World file (characters, quests, inventory). Unset means an empty world.
    pub world_path: Option<PathBuf>,
}

impl PlayConfig {
    /// Fill config from env vars (and .env). Requires `dotenv::dotenv().ok()` or load inside `play()`.
    ///
    /// `DIALOGUE_LINE_DELAY_MS`, `DIALOGUE_MAX_STEPS`, `DIALOGUE_WORLD` are all optional.
    /// A non-numeric delay or step budget is an error naming the variable.
    pub fn from_env() -> Result<Self, Error> {
        let line_delay = match parse_env::<u64>("DIALOGUE_LINE_DELAY_MS")? {
            Some(ms) => Duration::from_millis(ms),
            None => Duration::ZERO,
        };
        let max_steps = parse_env::<usize>("DIALOGUE_MAX_STEPS")?;
        let world_path = std::env::var("DIALOGUE_WORLD").ok().map(PathBuf::from);
        Ok(Self {
            line_delay,
            max_steps,
            world_path,
        })
    }

    /// Apply optional overrides from `PlayOptions`; only set fields override.
    pub fn apply_options(&mut self, options: &super::PlayOptions) {
        if let Some(ms) = options.line_delay_ms {
            self.line_delay = Duration::from_millis(ms);
        }
        if let Some(max) = options.max_steps {
            self.max_steps = Some(max);
        }
        if options.world.is_some() {
            self.world_path = options.world.clone();
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, Error> {
    match std::env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} must be a non-negative integer, got {:?}", name, raw),
            )) as Error
        }),
        Err(_) => Ok(None),
    }
}
