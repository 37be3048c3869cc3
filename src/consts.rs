/// Photo listing endpoint for the Curiosity rover
pub(crate) const BASE_URL: &str =
    "https://api.nasa.gov/mars-photos/api/v1/rovers/curiosity/photos";

/// Standard date format used throughout the codebase: "2015-05-31"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Upper bound on rendered photo cards per query
pub(crate) const MAX_CARDS: usize = 3;

/// Request timeout when the config file does not set one
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// NASA's public rate-limited key, used when no key is configured
pub(crate) const DEMO_KEY: &str = "DEMO_KEY";
