//! Shared constants for dinefind.

/// Maximum number of restaurants returned by a single query.
pub const MAX_RESULTS: usize = 20;

/// Message carried by the "no results" outcome.
pub const NO_RESULTS_MESSAGE: &str = "No recommendations found after applying filters.";

/// Default HTTP port when neither `--port` nor `DINEFIND_PORT` is given.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address when neither `--host` nor `DINEFIND_HOST` is given.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Environment variable overriding the HTTP port.
pub const PORT_ENV: &str = "DINEFIND_PORT";

/// Environment variable overriding the bind address.
pub const HOST_ENV: &str = "DINEFIND_HOST";

/// Environment variable overriding the dataset path.
pub const DATA_PATH_ENV: &str = "DINEFIND_DATA";
