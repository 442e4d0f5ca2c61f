//! The tracker: session parameters plus per-hit payload resolution.

use std::sync::Arc;

use beacon_alias::AliasRegistry;
use beacon_core::config::TrackerConfig;
use beacon_core::constants::{HIT_AGE_KEY, HIT_TIME_KEY, PROTOCOL_VERSION};
use beacon_core::errors::{AliasError, ConfigError, TimeError};
use beacon_core::{HitType, ParamValue, Payload, TrackerResult, Value};
use beacon_transport::Transport;

use crate::hit::{Arg, Hit};
use crate::id::{generate_id, generate_id_from};
use crate::options;
use crate::time;

/// What `send` does with keyword parameters the registry does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownKeyPolicy {
    /// Drop the parameter and keep going.
    #[default]
    Skip,
    /// Fail the hit with `AliasError::UnknownParameter`.
    Reject,
}

/// Optional session settings for [`Tracker::with_options`].
#[derive(Debug, Clone, Default)]
pub struct TrackerOptions {
    /// Fixed client id; a random one is generated when absent or empty.
    pub client_id: Option<String>,
    /// Replace `cid` with its digest-derived id on every hit.
    pub hash_client_id: bool,
    pub user_id: Option<String>,
    pub unknown_keys: UnknownKeyPolicy,
}

/// Sends hits for one tracking account through a transport.
///
/// Session parameters set on the tracker are merged into every hit but
/// never override values supplied with the hit itself.
#[derive(Debug)]
pub struct Tracker<T> {
    transport: T,
    registry: Arc<AliasRegistry>,
    params: Payload,
    hash_client_id: bool,
    unknown_keys: UnknownKeyPolicy,
}

impl<T> Tracker<T> {
    pub fn new(account: &str, transport: T) -> Self {
        Self::with_options(account, transport, TrackerOptions::default())
    }

    pub fn with_options(account: &str, transport: T, options: TrackerOptions) -> Self {
        Self::with_registry(account, transport, options, AliasRegistry::shared())
    }

    /// Build a tracker that resolves names through `registry` instead of
    /// the shared standard catalog.
    pub fn with_registry(
        account: &str,
        transport: T,
        options: TrackerOptions,
        registry: Arc<AliasRegistry>,
    ) -> Self {
        let client_id = options
            .client_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| generate_id(None));

        let mut params = Payload::new();
        params.insert("v", PROTOCOL_VERSION);
        params.insert("tid", account);
        params.insert("cid", client_id);
        if let Some(user_id) = options.user_id {
            params.insert("uid", user_id);
        }

        tracing::debug!(
            account,
            hash_client_id = options.hash_client_id,
            "tracker: created"
        );

        Self {
            transport,
            registry,
            params,
            hash_client_id: options.hash_client_id,
            unknown_keys: options.unknown_keys,
        }
    }

    /// Build a tracker from the `[tracker]` config section. `account` is
    /// required.
    pub fn from_config(config: &TrackerConfig, transport: T) -> Result<Self, ConfigError> {
        let account = config
            .account
            .as_deref()
            .filter(|account| !account.is_empty())
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "tracker.account".to_string(),
                message: "a tracking account is required".to_string(),
            })?;
        let unknown_keys = if config.effective_reject_unknown_keys() {
            UnknownKeyPolicy::Reject
        } else {
            UnknownKeyPolicy::Skip
        };
        let options = TrackerOptions {
            client_id: config.client_id.clone(),
            hash_client_id: config.effective_hash_client_id(),
            user_id: config.user_id.clone(),
            unknown_keys,
        };
        Ok(Self::with_options(account, transport, options))
    }

    /// The tracking id (`tid`).
    pub fn account(&self) -> Option<&str> {
        self.params.get("tid").and_then(ParamValue::as_str)
    }

    pub fn client_id(&self) -> Option<&str> {
        self.params.get("cid").and_then(ParamValue::as_str)
    }

    pub fn hash_client_id(&self) -> bool {
        self.hash_client_id
    }

    pub fn unknown_keys(&self) -> UnknownKeyPolicy {
        self.unknown_keys
    }

    /// Current session parameters, keyed by wire code.
    pub fn params(&self) -> &Payload {
        &self.params
    }

    pub fn registry(&self) -> &AliasRegistry {
        &self.registry
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Session value for `name`, or `None` when it has not been set.
    pub fn get(&self, name: &str) -> Result<Option<&ParamValue>, AliasError> {
        let code = self.registry.resolve_name(name)?;
        Ok(self.params.get(code))
    }

    /// Set a session parameter. Unknown names are an error.
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) -> Result<(), AliasError> {
        let (code, value) = self.registry.resolve(name, &value.into())?;
        self.params.insert(code, value);
        Ok(())
    }

    /// Remove a session parameter, returning its value if it was set.
    pub fn remove(&mut self, name: &str) -> Result<Option<ParamValue>, AliasError> {
        let code = self.registry.resolve_name(name)?;
        Ok(self.params.remove(code))
    }

    /// Set a session parameter, ignoring names the registry does not know.
    /// Coercion failures are still returned.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), AliasError> {
        match self.insert(name, value) {
            Err(e) if e.is_unknown_parameter() => {
                tracing::trace!(name, "tracker: ignoring unrecognized session parameter");
                Ok(())
            }
            other => other,
        }
    }

    /// `set` for each entry, stopping at the first coercion failure.
    pub fn set_many<I, K, V>(&mut self, entries: I) -> Result<(), AliasError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (name, value) in entries {
            self.set(name.as_ref(), value)?;
        }
        Ok(())
    }

    /// Resolve `hit` against the session into the payload `send` would
    /// transmit, without sending it.
    pub fn build_payload(&self, hit: Hit) -> TrackerResult<Payload> {
        let (hit_type, args, mut keywords) = hit.into_parts();
        let hit_type: HitType = hit_type.parse()?;
        let queue_time = take_queue_time(&mut keywords)?;

        let mut payload = Payload::new();

        for (name, value) in &keywords {
            self.resolve_keyword(&mut payload, name, value)?;
        }
        if let Some(queue_time) = queue_time {
            payload.insert("qt", queue_time);
        }

        payload.insert("t", hit_type.as_str());
        for (code, value) in options::positional_values(hit_type, &args) {
            let (code, value) = self.registry.resolve(code, value)?;
            payload.insert(code, value);
        }

        for arg in &args {
            if let Arg::Map(entries) = arg {
                for (name, value) in entries {
                    self.resolve_mapping_entry(&mut payload, name, value)?;
                }
            }
        }

        for (code, value) in &self.params {
            payload.insert_if_absent(code, value);
        }

        if self.hash_client_id {
            if let Some(cid) = payload.get("cid") {
                let hashed = generate_id_from(Some(&Value::from(cid.clone())))?;
                payload.insert("cid", hashed);
            }
        }

        Ok(payload)
    }

    fn resolve_keyword(&self, payload: &mut Payload, name: &str, value: &Value) -> TrackerResult<()> {
        match self.registry.resolve(name, value) {
            Ok((code, value)) => {
                payload.insert(code, value);
                Ok(())
            }
            Err(e) if e.is_unknown_parameter() && self.unknown_keys == UnknownKeyPolicy::Skip => {
                tracing::trace!(name, "send: dropping unrecognized parameter");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn resolve_mapping_entry(&self, payload: &mut Payload, name: &str, value: &Value) -> TrackerResult<()> {
        match self.registry.resolve(name, value) {
            Ok((code, value)) => {
                payload.insert(code, value);
                Ok(())
            }
            Err(e) if e.is_unknown_parameter() => {
                tracing::trace!(name, "send: dropping unrecognized mapping key");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<T: Transport> Tracker<T> {
    /// Resolve `hit` and hand it to the transport.
    ///
    /// The transport's result is returned as-is: a `Result` for blocking
    /// transports, a future for async ones.
    ///
    /// ```ignore
    /// tracker.send(Hit::pageview("/"))??;              // blocking
    /// tracker.send(Hit::pageview("/"))?.await?;        // async
    /// ```
    pub fn send(&mut self, hit: Hit) -> TrackerResult<T::Pending<'_>> {
        let payload = self.build_payload(hit)?;
        tracing::debug!(params = payload.len(), "tracker: sending hit");
        Ok(self.transport.send(payload))
    }

    /// Close the underlying transport.
    pub fn close(&mut self) -> T::Pending<'_> {
        self.transport.close()
    }
}

/// Pull `hittime` and `hitage` out of the keyword data and convert them to
/// a queue time. `hitage` wins when both are present.
fn take_queue_time(keywords: &mut Vec<(String, Value)>) -> Result<Option<i64>, TimeError> {
    let mut queue_time = None;
    if let Some(when) = take_keyword(keywords, HIT_TIME_KEY) {
        queue_time = Some(time::hit_time(&when, None)?);
    }
    if let Some(age) = take_keyword(keywords, HIT_AGE_KEY) {
        queue_time = Some(time::hit_age(&age)?);
    }
    Ok(queue_time)
}

/// Remove every entry named `key`, returning the last one.
fn take_keyword(keywords: &mut Vec<(String, Value)>, key: &str) -> Option<Value> {
    let mut taken = None;
    keywords.retain(|(name, value)| {
        if name == key {
            taken = Some(value.clone());
            false
        } else {
            true
        }
    });
    taken
}
