// Single source of truth for configurable default values.

// --- Tracker ---
pub const DEFAULT_HASH_CLIENT_ID: bool = false;
pub const DEFAULT_REJECT_UNKNOWN_KEYS: bool = false;

// --- Transport ---
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BATCH: bool = false;

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "beacon.toml";
