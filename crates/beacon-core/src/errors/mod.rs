//! Error handling for beacon.
//! One error enum per subsystem, `thiserror` only.

pub mod alias_error;
pub mod config_error;
pub mod id_error;
pub mod time_error;
pub mod tracker_error;
pub mod transport_error;

pub use alias_error::AliasError;
pub use config_error::ConfigError;
pub use id_error::IdError;
pub use time_error::TimeError;
pub use tracker_error::{TrackerError, TrackerResult};
pub use transport_error::TransportError;
