//! Evaluation settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Settings file (TOML), when a path is given
//! 3. Environment variables: `TREEGAMI_*` prefix

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TreeError, TreeResult};

/// How unfold and fold walk the tree.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Plain recursion, depth bounded by the call stack.
    #[default]
    Recursive,
    /// Explicit heap-allocated stack.
    Iterative,
    /// Sibling subtrees evaluated on the rayon pool.
    Parallel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub strategy: Strategy,
    /// Maximum number of levels `unfold` may produce; unbounded when unset.
    pub max_depth: Option<usize>,
}

impl Settings {
    /// Load settings from defaults, an optional file and `TREEGAMI_*` env vars.
    ///
    /// A given `path` must exist. Unset keys fall back to [`Settings::default`].
    /// Environment variables take a single `_` after the prefix and `__` as
    /// the nesting separator, e.g. `TREEGAMI_STRATEGY=iterative` or
    /// `TREEGAMI_MAX_DEPTH=4096`.
    pub fn load(path: Option<&Path>) -> TreeResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!("Settings::load: file={}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("TREEGAMI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;

        debug!(
            "Settings::load: strategy={:?} max_depth={:?}",
            settings.strategy, settings.max_depth
        );
        Ok(settings)
    }

    pub fn validate(&self) -> TreeResult<()> {
        if self.max_depth == Some(0) {
            return Err(TreeError::Config {
                message: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config {
        message: e.to_string(),
    }
}
