//! # beacon-core
//!
//! Foundation crate for the beacon hit client.
//! Defines the value model, hit types, errors, config, HTTP capability
//! traits, tracing setup, and protocol constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod hit_type;
pub mod tracing_setup;
pub mod traits;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use config::BeaconConfig;
pub use errors::{TrackerError, TrackerResult};
pub use hit_type::HitType;
pub use value::{ParamValue, Payload, Value};
