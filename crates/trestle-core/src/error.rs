//! Error types for Trestle.
//!
//! Every error here is surfaced at configuration-load time and is
//! non-recoverable: the master must not start with a partially-derived
//! configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Worker registry errors
    #[error("Malformed worker entry {entry:?}: expected exactly name:credential")]
    MalformedWorkerSpec { entry: String },

    // Settings errors
    #[error("Configuration source missing: environment variable {variable} is not set")]
    MissingConfigurationSource { variable: String },

    #[error("Cannot read settings file {path}: {source}")]
    SettingsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {message}")]
    SettingsParse { path: String, message: String },

    #[error("Malformed http_users entry {entry:?}: expected user:password")]
    MalformedHttpUser { entry: String },

    // Derivation errors
    #[error("No steps defined for stage {0}")]
    UnrecognizedStage(String),

    #[error("Dangling stage reference: scheduler {scheduler} depends on upstream {upstream}, which is not defined")]
    DanglingStageReference { scheduler: String, upstream: String },
}

pub type Result<T> = std::result::Result<T, Error>;
