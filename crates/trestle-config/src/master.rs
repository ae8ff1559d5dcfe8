//! The complete engine-facing configuration document.

use crate::settings::MasterSettings;
use crate::status::{ChatNotifierConfig, WebStatusConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trestle_core::Result;
use trestle_core::platform::PlatformTag;
use trestle_core::worker::WorkerRegistry;
use trestle_plan::{MasterPlan, PipelineTemplate};

/// Everything the external engine needs to run the master: identity,
/// workers, the derived plan, and the reporting descriptors.
///
/// Derived in one shot from loaded settings; reconfiguration builds a
/// fresh document and swaps it in wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MasterConfig {
    pub title: String,
    pub title_url: String,
    pub buildbot_url: String,
    pub workers: WorkerRegistry,
    pub plan: MasterPlan,
    pub web_status: WebStatusConfig,
    #[serde(default)]
    pub chat: Option<ChatNotifierConfig>,
}

impl MasterConfig {
    /// Derive the full document from settings and a pipeline template.
    pub fn derive(settings: &MasterSettings, template: &PipelineTemplate) -> Result<Self> {
        let workers = settings.workers()?;
        let plan = MasterPlan::derive(template, &workers, &settings.branch, &PlatformTag::ALL)?;
        let web_status = WebStatusConfig::from_settings(settings)?;

        Ok(Self {
            title: settings.title.clone(),
            title_url: settings.title_url.clone(),
            buildbot_url: settings.buildbot_url.clone(),
            workers,
            plan,
            web_status,
            chat: settings.chat.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings() -> MasterSettings {
        serde_yaml::from_str(
            "\
buildbot_url: http://ci.example.com/
slaves: linux1:p1,osx1:p2
repository: https://example.com/repo.git
http_users: alice:pw
chat:
  server: irc.example.com
  nick: trestle
  channel: '#builds'
",
        )
        .unwrap()
    }

    #[test]
    fn test_derive_full_document() {
        let settings = settings();
        let template = PipelineTemplate::standard(&settings.repository, &settings.branch);
        let config = MasterConfig::derive(&settings, &template).unwrap();

        assert_eq!(config.workers.len(), 2);
        // Two platforms with workers, four stages each.
        assert_eq!(config.plan.builders.len(), 8);
        assert_eq!(config.plan.schedulers.len(), 4);
        assert!(!config.web_status.auth.is_open());
        assert!(config.chat.is_some());
    }

    #[test]
    fn test_derive_fails_on_bad_worker_list() {
        let mut settings = settings();
        settings.slaves = "broken".to_string();
        let template = PipelineTemplate::standard(&settings.repository, &settings.branch);
        assert!(MasterConfig::derive(&settings, &template).is_err());
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let settings = settings();
        let template = PipelineTemplate::standard(&settings.repository, &settings.branch);
        let config = MasterConfig::derive(&settings, &template).unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let back: MasterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
