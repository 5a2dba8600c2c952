//! Environment variable lookups with warn-level logging for invalid values.

/// Parse an environment variable, falling back to `default`.
///
/// Unset variables return `default` silently. A value that is set but fails to
/// parse is logged at warn level and also falls back, so a typo in
/// `DINEFIND_PORT` never aborts startup.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a textual environment variable; unset or blank values yield `default`.
pub fn env_string_with_default(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}
