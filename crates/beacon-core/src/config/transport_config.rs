//! Transport configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Settings shared by the four transports.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransportConfig {
    /// User-Agent override. Default: `beacon/<version>`.
    pub user_agent: Option<String>,
    /// Endpoint for single hits.
    pub collect_endpoint: Option<String>,
    /// Endpoint for batched hits.
    pub batch_endpoint: Option<String>,
    /// Hits buffered before a batch transport flushes. Default: 20.
    pub max_batch_size: Option<usize>,
    /// Request timeout applied by the bundled reqwest clients.
    pub timeout_secs: Option<u64>,
    /// Prefer a batching transport when the host picks one from config.
    pub batch: Option<bool>,
}

impl TransportConfig {
    pub fn effective_user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(constants::DEFAULT_USER_AGENT)
    }

    pub fn effective_collect_endpoint(&self) -> &str {
        self.collect_endpoint
            .as_deref()
            .unwrap_or(constants::COLLECT_ENDPOINT)
    }

    pub fn effective_batch_endpoint(&self) -> &str {
        self.batch_endpoint
            .as_deref()
            .unwrap_or(constants::BATCH_ENDPOINT)
    }

    pub fn effective_max_batch_size(&self) -> usize {
        self.max_batch_size.unwrap_or(constants::MAX_BATCH_SIZE)
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(defaults::DEFAULT_TIMEOUT_SECS))
    }

    pub fn effective_batch(&self) -> bool {
        self.batch.unwrap_or(defaults::DEFAULT_BATCH)
    }
}
