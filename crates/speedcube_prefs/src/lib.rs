//! User preferences.
//!
//! Preferences are layered from the built-in defaults, the user preferences
//! file, and environment variables such as
//! `SPEEDCUBE__ANIMATION__TWIST_DURATION=0.5`.

#![allow(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate strum;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

mod animation;
mod interaction;
pub mod paths;

pub use animation::*;
pub use interaction::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "SPEEDCUBE";
const ENV_SEPARATOR: &str = "__";

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
    pub solver: SolverPreferences,
}

/// Preferences for the external solving service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverPreferences {
    /// Base URL of the service.
    pub url: String,
}
impl Default for SolverPreferences {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_owned(),
        }
    }
}

impl Preferences {
    /// Loads preferences from `path`, or from the default location if `path`
    /// is `None`. If loading fails, the default preferences are returned.
    pub fn load(path: Option<&Path>) -> Self {
        let env = config::Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true);
        Self::load_with_env(path, env)
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        // Load default preferences.
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        // Load user preferences.
        match user_prefs_path(path) {
            Ok(path) => {
                log::debug!("loading preferences from {}", path.display());
                config = config.add_source(
                    config::File::from(path)
                        .format(PREFS_FILE_FORMAT)
                        .required(false),
                );
            }
            Err(e) => log::warn!("error locating user preferences: {e}"),
        }

        config
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("error loading preferences: {e}");
                DEFAULT_PREFS.clone()
            })
    }

    /// Saves preferences to `path`, or to the default location if `path` is
    /// `None`.
    pub fn save(&self, path: Option<&Path>) -> eyre::Result<()> {
        let path = user_prefs_path(path)?;
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(&path)?, self)?;
        log::info!("saved preferences to {}", path.display());
        Ok(())
    }
}

fn user_prefs_path(path: Option<&Path>) -> eyre::Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_owned()),
        None => paths::prefs_file(),
    }
}
