//! Master settings: the typed, eagerly-validated configuration file.
//!
//! The file is YAML, located through the `TRESTLE_SETTINGS` environment
//! variable. An unset variable, an unreadable file, or bad YAML all
//! abort configuration load; the master never starts from partial
//! settings.

use crate::status::ChatNotifierConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use trestle_core::worker::WorkerRegistry;
use trestle_core::{Error, Result};

/// Environment variable naming the settings file.
pub const SETTINGS_ENV_VAR: &str = "TRESTLE_SETTINGS";

/// Settings for the master role. Every field is named and defaulted
/// here instead of being looked up dynamically at use sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MasterSettings {
    /// Port the web status listens on.
    #[serde(default = "default_web_port")]
    pub web_port: u16,
    /// Optional `user:pass,user:pass` list gating destructive actions.
    /// Absent means those actions stay open.
    #[serde(default)]
    pub http_users: Option<String>,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_title_url")]
    pub title_url: String,
    /// Externally visible URL of the master itself.
    pub buildbot_url: String,
    /// Raw worker list, `name:credential` pairs separated by commas.
    pub slaves: String,
    /// Source repository the builders check out.
    pub repository: String,
    /// Branch the derived plan covers.
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Optional chat notifier block.
    #[serde(default)]
    pub chat: Option<ChatNotifierConfig>,
}

fn default_web_port() -> u16 {
    8010
}

fn default_title() -> String {
    "Trestle".to_string()
}

fn default_title_url() -> String {
    "https://trestle-ci.dev".to_string()
}

fn default_branch() -> String {
    "master".to_string()
}

impl MasterSettings {
    /// Load from the file named by [`SETTINGS_ENV_VAR`].
    pub fn load() -> Result<Self> {
        Self::load_from_env(SETTINGS_ENV_VAR)
    }

    pub fn load_from_env(variable: &str) -> Result<Self> {
        let path = std::env::var(variable).map_err(|_| Error::MissingConfigurationSource {
            variable: variable.to_string(),
        })?;
        Self::load_file(Path::new(&path))
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.display().to_string(),
            source,
        })?;
        let settings: Self =
            serde_yaml::from_str(&content).map_err(|err| Error::SettingsParse {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        tracing::debug!(path = %path.display(), "loaded master settings");
        Ok(settings)
    }

    /// Parse the raw worker list into a registry.
    pub fn workers(&self) -> Result<WorkerRegistry> {
        WorkerRegistry::parse(&self.slaves)
    }
}
