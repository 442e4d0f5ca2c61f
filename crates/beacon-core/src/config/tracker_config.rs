//! Tracker configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Session settings applied when a tracker is built from config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrackerConfig {
    /// Tracking id, e.g. `UA-XXXXX-Y`.
    pub account: Option<String>,
    /// Fixed client id. A random one is generated when absent.
    pub client_id: Option<String>,
    /// Optional user id sent as `uid`.
    pub user_id: Option<String>,
    /// Replace the client id with its MD5-derived identifier on every hit.
    pub hash_client_id: Option<bool>,
    /// Fail `send` on unrecognized keyword parameters instead of dropping them.
    pub reject_unknown_keys: Option<bool>,
}

impl TrackerConfig {
    pub fn effective_hash_client_id(&self) -> bool {
        self.hash_client_id.unwrap_or(defaults::DEFAULT_HASH_CLIENT_ID)
    }

    pub fn effective_reject_unknown_keys(&self) -> bool {
        self.reject_unknown_keys
            .unwrap_or(defaults::DEFAULT_REJECT_UNKNOWN_KEYS)
    }
}
