/// Beacon client version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Measurement protocol version sent as `v` on every hit.
pub const PROTOCOL_VERSION: i64 = 1;

/// Default User-Agent header identifying this client.
pub const DEFAULT_USER_AGENT: &str = concat!("beacon/", env!("CARGO_PKG_VERSION"));

/// Endpoint for single hits.
pub const COLLECT_ENDPOINT: &str = "https://www.google-analytics.com/collect";

/// Endpoint for newline-joined hit batches.
pub const BATCH_ENDPOINT: &str = "https://www.google-analytics.com/batch";

/// Hits accumulated by a batch transport before it flushes.
pub const MAX_BATCH_SIZE: usize = 20;

/// Prefix that bypasses alias resolution and sends the key verbatim.
pub const RAW_OVERRIDE_MARKER: char = '&';

/// Custom dimension/metric slots (`cd0`..`cd199`, `cm0`..`cm199`).
pub const MAX_CUSTOM_DEFINITIONS: usize = 200;

/// Enhanced-ecommerce product slots, 1-based inclusive.
pub const MAX_EC_PRODUCTS: usize = 10;

/// Enhanced-ecommerce impression list slots, 1-based inclusive.
pub const MAX_EC_LISTS: usize = 10;

/// Enhanced-ecommerce promotion slots, 1-based inclusive.
pub const MAX_EC_PROMOTIONS: usize = 10;

/// Keyword carrying an absolute hit time (Unix seconds or timestamp).
pub const HIT_TIME_KEY: &str = "hittime";

/// Keyword carrying a relative hit age in seconds.
pub const HIT_AGE_KEY: &str = "hitage";
