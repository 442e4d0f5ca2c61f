//! # beacon-tracker
//!
//! The caller-facing half of beacon. A [`Tracker`] keeps persistent session
//! parameters, turns each [`Hit`] into a fully resolved payload through the
//! alias registry, and hands it to a transport.
//!
//! ```no_run
//! use beacon_core::config::TransportConfig;
//! use beacon_tracker::{Hit, Tracker};
//! use beacon_transport::HttpRequest;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpRequest::new(&TransportConfig::default())?;
//! let mut tracker = Tracker::new("UA-XXXXX-Y", transport);
//! tracker.set("campaignName", "spring-launch")?;
//! tracker.send(Hit::pageview("/home"))??;
//! tracker.send(Hit::event("video", "play").arg("intro").arg(3))??;
//! tracker.close()?;
//! # Ok(())
//! # }
//! ```

pub mod hit;
pub mod id;
pub mod options;
pub mod time;
pub mod tracker;

pub use hit::{Arg, Hit};
pub use id::{generate_id, generate_id_from};
pub use tracker::{Tracker, TrackerOptions, UnknownKeyPolicy};
