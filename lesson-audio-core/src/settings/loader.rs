use crate::error::GenerateError;
use crate::settings::config::Settings;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit settings file
pub const CONFIG_ENV: &str = "LESSON_AUDIO_CONFIG";

/// Settings file picked up from the working directory when present
pub const LOCAL_CONFIG_FILE: &str = "lesson-audio.toml";

/// Resolve settings for this process: `$LESSON_AUDIO_CONFIG` if set, then
/// `./lesson-audio.toml` if it exists, otherwise built-in defaults.
pub fn load_settings() -> Result<Settings, GenerateError> {
    let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let cwd = std::env::current_dir().map_err(|e| GenerateError::Config {
        path: PathBuf::from("."),
        source: e.into(),
    })?;
    load_settings_from(explicit.as_deref(), &cwd)
}

/// Same as [`load_settings`] with the environment lookups already done.
pub fn load_settings_from(explicit: Option<&Path>, cwd: &Path) -> Result<Settings, GenerateError> {
    if let Some(path) = explicit {
        return Settings::from_path(path);
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Settings::from_path(&local);
    }

    debug!("No settings file found, using defaults");
    Ok(Settings::default())
}

impl Settings {
    /// Load settings from a TOML file. Missing fields fall back to defaults.
    pub fn from_path(path: &Path) -> Result<Self, GenerateError> {
        let parse = || -> anyhow::Result<Settings> {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {path:?}"))?;
            toml::from_str(&contents).context("Failed to parse settings")
        };

        let settings = parse().map_err(|source| GenerateError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Read the API key from the configured environment variable. An empty
    /// value counts as missing; anything else is passed through untouched.
    pub fn api_key(&self) -> Result<String, GenerateError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(GenerateError::MissingCredential {
                var: self.api_key_env.clone(),
            }),
        }
    }
}
