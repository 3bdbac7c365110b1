//! Runtime configuration.
//!
//! Read from `config.toml` in the data directory. Every field is optional; a missing file
//! means defaults. The `LABYRINTH_SEED` environment variable overrides the shuffle seed.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use serde::{Deserialize, Serialize};

use crate::world::DEFAULT_REROLL_THRESHOLD;

/// Environment variable that overrides `seed`.
pub const SEED_ENV_VAR: &str = "LABYRINTH_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the puzzle shuffle; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Wrong answers before a new puzzle is offered.
    pub reroll_threshold: usize,
    /// Persist line-editor history between sessions.
    pub history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reroll_threshold: DEFAULT_REROLL_THRESHOLD,
            history: true,
        }
    }
}

impl GameConfig {
    /// Load configuration from `path`, using defaults if the file does not exist.
    ///
    /// # Errors
    /// - if the file exists but cannot be read, parsed or validated
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("no config at '{}', using defaults", path.display());
                return Ok(Self::default());
            },
            Err(err) => return Err(err).with_context(|| format!("reading config from '{}'", path.display())),
        };
        let config = Self::from_toml(&text).with_context(|| format!("parsing config from '{}'", path.display()))?;
        info!("config loaded from '{}': {config:?}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML config document.
    ///
    /// # Errors
    /// - on malformed TOML or a zero `reroll_threshold`
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(text)?;
        if config.reroll_threshold == 0 {
            bail!("reroll_threshold must be at least 1");
        }
        Ok(config)
    }

    /// Apply `LABYRINTH_SEED` from the environment, if set.
    ///
    /// # Errors
    /// - if the variable is set but is not an unsigned integer
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_seed_override(env::var(SEED_ENV_VAR).ok().as_deref())
    }

    fn with_seed_override(mut self, raw: Option<&str>) -> Result<Self> {
        if let Some(raw) = raw {
            let seed = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{SEED_ENV_VAR} must be an unsigned integer, got '{raw}'"))?;
            info!("puzzle seed {seed} taken from {SEED_ENV_VAR}");
            self.seed = Some(seed);
        }
        Ok(self)
    }
}
