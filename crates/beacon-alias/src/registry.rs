//! The alias registry: name → (wire code, coercer).

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use beacon_core::constants::RAW_OVERRIDE_MARKER;
use beacon_core::errors::AliasError;
use beacon_core::{ParamValue, Value};

use crate::coerce::Coercer;
use crate::{catalog, families};

/// Where a registered name points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterAlias {
    pub wire_code: String,
    pub coercer: Coercer,
}

/// Mapping from every accepted parameter name to its wire code and coercer.
///
/// Mutable only while it is being built. Trackers hold it behind an `Arc`,
/// so a finished registry is never modified.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    aliases: HashMap<String, ParameterAlias>,
}

impl AliasRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full measurement-protocol catalog plus every generated family.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        catalog::register_protocol(&mut registry);
        families::register_families(&mut registry);
        tracing::debug!(aliases = registry.len(), "alias registry built");
        registry
    }

    /// The standard registry, built on first use and shared afterwards.
    pub fn shared() -> Arc<AliasRegistry> {
        static SHARED: OnceLock<Arc<AliasRegistry>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Self::standard())).clone()
    }

    /// Map `wire_code` and each of `names` to `(wire_code, coercer)`.
    /// Earlier registrations of the same names are overwritten.
    pub fn register(&mut self, coercer: Coercer, wire_code: &str, names: &[&str]) {
        let alias = ParameterAlias {
            wire_code: wire_code.to_string(),
            coercer,
        };
        for name in names {
            self.aliases.insert((*name).to_string(), alias.clone());
        }
        self.aliases.insert(wire_code.to_string(), alias);
    }

    /// Resolve a parameter name and coerce its value.
    ///
    /// Names starting with `&` bypass the registry: the marker is stripped
    /// and the value is sent as text.
    pub fn resolve(&self, name: &str, value: &Value) -> Result<(String, ParamValue), AliasError> {
        if let Some(raw) = name.strip_prefix(RAW_OVERRIDE_MARKER) {
            return Ok((raw.to_string(), ParamValue::Text(value.to_string())));
        }
        let alias = self.lookup(name)?;
        let coerced = alias.coercer.apply(&alias.wire_code, value)?;
        Ok((alias.wire_code.clone(), coerced))
    }

    /// Resolve a parameter name to its wire code without touching a value.
    pub fn resolve_name<'a>(&'a self, name: &'a str) -> Result<&'a str, AliasError> {
        if let Some(raw) = name.strip_prefix(RAW_OVERRIDE_MARKER) {
            return Ok(raw);
        }
        self.lookup(name).map(|alias| alias.wire_code.as_str())
    }

    pub fn alias(&self, name: &str) -> Option<&ParameterAlias> {
        self.aliases.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Number of registered names, wire codes included.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// All names that resolve to `wire_code`, sorted.
    pub fn names_for(&self, wire_code: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, alias)| alias.wire_code == wire_code)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    fn lookup(&self, name: &str) -> Result<&ParameterAlias, AliasError> {
        self.aliases
            .get(name)
            .ok_or_else(|| AliasError::UnknownParameter {
                name: name.to_string(),
            })
    }
}
