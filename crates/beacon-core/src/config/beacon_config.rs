//! Top-level beacon configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, TrackerConfig, TransportConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BEACON_*`)
/// 2. Project config (`beacon.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BeaconConfig {
    pub tracker: TrackerConfig,
    pub transport: TransportConfig,
}

impl BeaconConfig {
    /// Load configuration from `root/beacon.toml` and the environment.
    /// A missing project file is not an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BeaconConfig) -> Result<(), ConfigError> {
        if config.transport.max_batch_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "transport.max_batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.transport.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "transport.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, endpoint) in [
            ("transport.collect_endpoint", &config.transport.collect_endpoint),
            ("transport.batch_endpoint", &config.transport.batch_endpoint),
        ] {
            if endpoint.as_deref().is_some_and(|e| e.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config
            .tracker
            .account
            .as_deref()
            .is_some_and(|a| a.trim().is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "tracker.account".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BeaconConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BeaconConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut BeaconConfig, other: &BeaconConfig) {
        // Tracker
        if other.tracker.account.is_some() {
            base.tracker.account = other.tracker.account.clone();
        }
        if other.tracker.client_id.is_some() {
            base.tracker.client_id = other.tracker.client_id.clone();
        }
        if other.tracker.user_id.is_some() {
            base.tracker.user_id = other.tracker.user_id.clone();
        }
        if other.tracker.hash_client_id.is_some() {
            base.tracker.hash_client_id = other.tracker.hash_client_id;
        }
        if other.tracker.reject_unknown_keys.is_some() {
            base.tracker.reject_unknown_keys = other.tracker.reject_unknown_keys;
        }

        // Transport
        if other.transport.user_agent.is_some() {
            base.transport.user_agent = other.transport.user_agent.clone();
        }
        if other.transport.collect_endpoint.is_some() {
            base.transport.collect_endpoint = other.transport.collect_endpoint.clone();
        }
        if other.transport.batch_endpoint.is_some() {
            base.transport.batch_endpoint = other.transport.batch_endpoint.clone();
        }
        if other.transport.max_batch_size.is_some() {
            base.transport.max_batch_size = other.transport.max_batch_size;
        }
        if other.transport.timeout_secs.is_some() {
            base.transport.timeout_secs = other.transport.timeout_secs;
        }
        if other.transport.batch.is_some() {
            base.transport.batch = other.transport.batch;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BEACON_TRACKER_ACCOUNT`, `BEACON_TRANSPORT_MAX_BATCH_SIZE`, etc.
    fn apply_env_overrides(config: &mut BeaconConfig) {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok());
    }

    /// Apply `BEACON_*` overrides read through `lookup`. Unparseable
    /// numeric or boolean values are ignored.
    pub fn apply_overrides_from<F>(config: &mut BeaconConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("BEACON_TRACKER_ACCOUNT") {
            config.tracker.account = Some(val);
        }
        if let Some(val) = lookup("BEACON_TRACKER_CLIENT_ID") {
            config.tracker.client_id = Some(val);
        }
        if let Some(val) = lookup("BEACON_TRACKER_USER_ID") {
            config.tracker.user_id = Some(val);
        }
        if let Some(val) = lookup("BEACON_TRACKER_HASH_CLIENT_ID") {
            if let Ok(v) = val.parse::<bool>() {
                config.tracker.hash_client_id = Some(v);
            }
        }
        if let Some(val) = lookup("BEACON_TRACKER_REJECT_UNKNOWN_KEYS") {
            if let Ok(v) = val.parse::<bool>() {
                config.tracker.reject_unknown_keys = Some(v);
            }
        }
        if let Some(val) = lookup("BEACON_TRANSPORT_USER_AGENT") {
            config.transport.user_agent = Some(val);
        }
        if let Some(val) = lookup("BEACON_TRANSPORT_COLLECT_ENDPOINT") {
            config.transport.collect_endpoint = Some(val);
        }
        if let Some(val) = lookup("BEACON_TRANSPORT_BATCH_ENDPOINT") {
            config.transport.batch_endpoint = Some(val);
        }
        if let Some(val) = lookup("BEACON_TRANSPORT_MAX_BATCH_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.transport.max_batch_size = Some(v);
            }
        }
        if let Some(val) = lookup("BEACON_TRANSPORT_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.transport.timeout_secs = Some(v);
            }
        }
        if let Some(val) = lookup("BEACON_TRANSPORT_BATCH") {
            if let Ok(v) = val.parse::<bool>() {
                config.transport.batch = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
