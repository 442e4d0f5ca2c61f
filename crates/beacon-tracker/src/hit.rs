//! Hit builder: hit type, positional arguments, and keyword parameters.

use beacon_core::constants::{HIT_AGE_KEY, HIT_TIME_KEY};
use beacon_core::Value;

/// One positional argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Matched against the hit type's positional schema.
    Value(Value),
    /// Merged key by key; unrecognized keys are skipped.
    Map(Vec<(String, Value)>),
}

/// A hit waiting to be resolved and sent.
///
/// The hit type is validated by `Tracker::send`, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    hit_type: String,
    args: Vec<Arg>,
    params: Vec<(String, Value)>,
}

impl Hit {
    pub fn new(hit_type: impl Into<String>) -> Self {
        Self {
            hit_type: hit_type.into(),
            args: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn pageview(path: impl Into<Value>) -> Self {
        Self::new("pageview").arg(path)
    }

    pub fn event(category: impl Into<Value>, action: impl Into<Value>) -> Self {
        Self::new("event").arg(category).arg(action)
    }

    pub fn social(network: impl Into<Value>, action: impl Into<Value>, target: impl Into<Value>) -> Self {
        Self::new("social").arg(network).arg(action).arg(target)
    }

    pub fn timing(category: impl Into<Value>, variable: impl Into<Value>, time: impl Into<Value>) -> Self {
        Self::new("timing").arg(category).arg(variable).arg(time)
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(Arg::Value(value.into()));
        self
    }

    /// Append a mapping-valued positional argument.
    pub fn map<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.args.push(Arg::Map(entries));
        self
    }

    /// Add a keyword parameter by human name, wire code, or `&raw` key.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// When the hit happened: Unix seconds or an absolute timestamp.
    pub fn hit_time(self, when: impl Into<Value>) -> Self {
        self.param(HIT_TIME_KEY, when)
    }

    /// How long ago the hit happened, in seconds.
    pub fn hit_age(self, seconds: impl Into<Value>) -> Self {
        self.param(HIT_AGE_KEY, seconds)
    }

    pub fn hit_type(&self) -> &str {
        &self.hit_type
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn params(&self) -> &[(String, Value)] {
        &self.params
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Arg>, Vec<(String, Value)>) {
        (self.hit_type, self.args, self.params)
    }
}
