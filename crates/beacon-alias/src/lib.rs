//! # beacon-alias
//!
//! Maps human-friendly parameter names (`page`, `eventCategory`,
//! `dimension3`) to terse wire codes (`dp`, `ec`, `cd3`) and coerces values
//! to the type each wire code expects. The standard registry is built once
//! and shared read-only between trackers.

pub mod catalog;
pub mod coerce;
pub mod families;
pub mod registry;

pub use coerce::Coercer;
pub use registry::{AliasRegistry, ParameterAlias};
