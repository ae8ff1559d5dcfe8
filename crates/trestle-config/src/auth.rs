//! HTTP auth policy for the web status.
//!
//! Whether destructive engine actions are gated is an explicit,
//! auditable toggle derived from the `http_users` setting; absence
//! leaves them open rather than silently hardening.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trestle_core::{Error, Result};

/// One (user, password) pair accepted by the web status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HttpUser {
    pub user: String,
    pub password: String,
}

/// Destructive engine actions subject to gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GatedAction {
    ForceBuild,
    StopBuild,
    CancelPendingBuild,
    CleanShutdown,
}

impl GatedAction {
    pub const ALL: [GatedAction; 4] = [
        GatedAction::ForceBuild,
        GatedAction::StopBuild,
        GatedAction::CancelPendingBuild,
        GatedAction::CleanShutdown,
    ];
}

/// Auth policy handed to the engine's status collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AuthPolicy {
    /// No users configured: destructive actions are open.
    Open,
    /// Users configured: destructive actions require one of them.
    Gated { users: Vec<HttpUser> },
}

impl AuthPolicy {
    /// Build the policy from the optional `user:pass,user:pass` list.
    pub fn from_http_users(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(AuthPolicy::Open);
        };
        let mut users = Vec::new();
        for entry in raw.split(',') {
            let fields: Vec<&str> = entry.split(':').collect();
            let [user, password] = fields.as_slice() else {
                return Err(Error::MalformedHttpUser {
                    entry: entry.to_string(),
                });
            };
            users.push(HttpUser {
                user: user.to_string(),
                password: password.to_string(),
            });
        }
        Ok(AuthPolicy::Gated { users })
    }

    pub fn is_open(&self) -> bool {
        matches!(self, AuthPolicy::Open)
    }

    /// The actions this policy gates. Empty when open.
    pub fn gated_actions(&self) -> &'static [GatedAction] {
        match self {
            AuthPolicy::Open => &[],
            AuthPolicy::Gated { .. } => &GatedAction::ALL,
        }
    }

    /// Whether the given credentials satisfy the policy.
    pub fn authenticate(&self, user: &str, password: &str) -> bool {
        match self {
            AuthPolicy::Open => true,
            AuthPolicy::Gated { users } => users
                .iter()
                .any(|u| u.user == user && u.password == password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_users_leave_actions_open() {
        let policy = AuthPolicy::from_http_users(None).unwrap();
        assert!(policy.is_open());
        assert!(policy.gated_actions().is_empty());
        assert!(policy.authenticate("anyone", "anything"));
    }

    #[test]
    fn test_present_users_gate_all_actions() {
        let policy = AuthPolicy::from_http_users(Some("alice:s3cret,bob:hunter2")).unwrap();
        assert!(!policy.is_open());
        assert_eq!(policy.gated_actions().len(), 4);
        assert!(policy.authenticate("alice", "s3cret"));
        assert!(!policy.authenticate("alice", "wrong"));
        assert!(!policy.authenticate("carol", "s3cret"));
    }

    #[test]
    fn test_malformed_entry_is_rejected() {
        let err = AuthPolicy::from_http_users(Some("alice:s3cret,bob")).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedHttpUser { entry } if entry == "bob"
        ));
    }
}
