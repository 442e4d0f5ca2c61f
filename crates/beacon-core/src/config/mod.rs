//! Configuration system for beacon.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod beacon_config;
pub mod defaults;
pub mod tracker_config;
pub mod transport_config;

pub use beacon_config::BeaconConfig;
pub use tracker_config::TrackerConfig;
pub use transport_config::TransportConfig;
