//! String format checks.

use regex::Regex;
use schemas_core::FieldFormat;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

// Syntax only: 9999-99-99 passes.
static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

/// Returns true if `value` looks like `local@domain.tld`.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Returns true if `value` is shaped like `YYYY-MM-DD`.
pub fn is_date(value: &str) -> bool {
    DATE.is_match(value)
}

/// Checks `value` against a string format.
pub fn matches_format(format: FieldFormat, value: &str) -> bool {
    match format {
        FieldFormat::Email => is_email(value),
        FieldFormat::Date => is_date(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_email("john@example.com"));
        assert!(is_email("john.doe+tag@mail.example.co"));
        assert!(is_email("a_b%c-d@sub-domain.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_email("john"));
        assert!(!is_email("john@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("john@example"));
        assert!(!is_email("john@example.c"));
        assert!(!is_email("john doe@example.com"));
        assert!(!is_email("jöhn@example.com"));
        assert!(!is_email("john@example.c0m"));
    }

    #[test]
    fn test_dates_syntax_only() {
        assert!(is_date("2024-01-31"));
        assert!(is_date("2024-13-45"));
        assert!(is_date("9999-99-99"));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!is_date("2024-1-31"));
        assert!(!is_date("24-01-31"));
        assert!(!is_date("2024/01/31"));
        assert!(!is_date("2024-01-31T00:00:00"));
        assert!(!is_date("２０２４-01-31"));
        assert!(!is_date(""));
    }

    #[test]
    fn test_matches_format_dispatch() {
        assert!(matches_format(FieldFormat::Email, "a@b.io"));
        assert!(!matches_format(FieldFormat::Date, "a@b.io"));
    }
}
