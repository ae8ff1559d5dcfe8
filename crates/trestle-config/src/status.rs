//! Status reporting descriptors: web status and chat notifier.

use crate::auth::AuthPolicy;
use crate::settings::MasterSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trestle_core::Result;

/// Incoming event hooks the web status subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusEventHook {
    /// Change notifications pushed by the source host's webhook.
    Github,
}

/// Web status descriptor consumed by the engine's status collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WebStatusConfig {
    pub port: u16,
    pub auth: AuthPolicy,
    #[serde(default = "default_hooks")]
    pub hooks: Vec<StatusEventHook>,
}

fn default_hooks() -> Vec<StatusEventHook> {
    vec![StatusEventHook::Github]
}

impl WebStatusConfig {
    pub fn from_settings(settings: &MasterSettings) -> Result<Self> {
        Ok(Self {
            port: settings.web_port,
            auth: AuthPolicy::from_http_users(settings.http_users.as_deref())?,
            hooks: default_hooks(),
        })
    }
}

/// Build outcomes the chat notifier reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChatEvent {
    /// A build raised an internal exception.
    Exception,
    /// A previously green builder went red.
    SuccessToFailure,
    /// A previously red builder recovered.
    FailureToSuccess,
}

fn default_chat_events() -> Vec<ChatEvent> {
    vec![
        ChatEvent::Exception,
        ChatEvent::SuccessToFailure,
        ChatEvent::FailureToSuccess,
    ]
}

/// Chat notifier descriptor. Delivery is the engine's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChatNotifierConfig {
    pub server: String,
    #[serde(default = "default_chat_port")]
    pub port: u16,
    pub nick: String,
    pub channel: String,
    #[serde(default = "default_chat_events")]
    pub events: Vec<ChatEvent>,
}

fn default_chat_port() -> u16 {
    6667
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(http_users: Option<&str>) -> MasterSettings {
        MasterSettings {
            web_port: 8010,
            http_users: http_users.map(str::to_string),
            title: "Trestle".to_string(),
            title_url: "https://trestle-ci.dev".to_string(),
            buildbot_url: "http://ci.example.com/".to_string(),
            slaves: "linux1:p1".to_string(),
            repository: "https://example.com/repo.git".to_string(),
            branch: "master".to_string(),
            chat: None,
        }
    }

    #[test]
    fn test_web_status_without_users_is_open() {
        let status = WebStatusConfig::from_settings(&settings(None)).unwrap();
        assert_eq!(status.port, 8010);
        assert!(status.auth.is_open());
        assert_eq!(status.hooks, vec![StatusEventHook::Github]);
    }

    #[test]
    fn test_web_status_with_users_is_gated() {
        let status = WebStatusConfig::from_settings(&settings(Some("alice:pw"))).unwrap();
        assert!(!status.auth.is_open());
    }

    #[test]
    fn test_chat_defaults() {
        let chat: ChatNotifierConfig = serde_yaml::from_str(
            "server: irc.example.com\nnick: trestle\nchannel: '#builds'\n",
        )
        .unwrap();
        assert_eq!(chat.port, 6667);
        assert_eq!(chat.events.len(), 3);
    }
}
