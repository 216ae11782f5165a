use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::task::TaskDefaults;

/// Looked up in the working directory; absence is fine.
pub const CONFIG_FILE: &str = "intima";
pub const ENV_PREFIX: &str = "INTIMA";

/// `INTIMA_DEFAULTS__AREA` sets `defaults.area`: one underscore after the
/// prefix, two between nested keys.
fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: TaskDefaults,
}

impl Settings {
    /// `intima.toml` (optional), then `INTIMA_DEFAULTS__*` variables on top.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(env_source()),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        builder
            .build()
            .context("failed to read settings")?
            .try_deserialize()
            .context("invalid settings")
    }
}
