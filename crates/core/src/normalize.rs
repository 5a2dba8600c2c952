use std::sync::LazyLock;

use regex::Regex;

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lowercases `text`, collapses every whitespace run to a single space and trims.
///
/// Stored `cuisines` and `locality` values, and the filter values compared
/// against them, all go through this function.
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_text;

    #[test]
    fn lowercases_and_collapses() {
        assert_eq!(normalize_text("  North   Indian,\tChinese "), "north indian, chinese");
    }

    #[test]
    fn newlines_count_as_whitespace() {
        assert_eq!(normalize_text("Bandra\n West"), "bandra west");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize_text("   "), "");
    }
}
