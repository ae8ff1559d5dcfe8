//! Settings and reporting configuration for the Trestle master.
//!
//! Loads the typed settings file, derives the auth policy and status
//! descriptors from it, and assembles the complete engine-facing
//! configuration document.

pub mod auth;
pub mod master;
pub mod settings;
pub mod status;

pub use auth::{AuthPolicy, GatedAction, HttpUser};
pub use master::MasterConfig;
pub use settings::MasterSettings;
pub use status::{ChatEvent, ChatNotifierConfig, WebStatusConfig};
