use std::sync::LazyLock;

use regex::Regex;

pub const NO_DEADLINE: &str = "No deadline";

// ASCII digits only; `\d` would also accept other Unicode digits.
static DEADLINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("deadline pattern is valid")
});

/// Text shown in a task's deadline slot.
///
/// Only the `YYYY-MM-DD` shape is checked, not calendar validity.
/// Anything else, including an absent deadline, becomes
/// [`NO_DEADLINE`].
pub fn display_deadline(raw: Option<&str>) -> String {
    match raw {
        Some(value) if DEADLINE_PATTERN.is_match(value) => value.to_string(),
        _ => NO_DEADLINE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_deadline_is_kept_verbatim() {
        assert_eq!(display_deadline(Some("2024-03-01")), "2024-03-01");
        assert_eq!(display_deadline(Some("2024-13-45")), "2024-13-45");
    }

    #[test]
    fn everything_else_becomes_placeholder() {
        for raw in [
            None,
            Some(""),
            Some("No deadline"),
            Some("2024-3-01"),
            Some("2024/03/01"),
            Some(" 2024-03-01"),
            Some("2024-03-01\n"),
            Some("2024-03-01T10:00:00Z"),
            Some("tomorrow"),
            Some("２０２４-03-01"),
        ] {
            assert_eq!(display_deadline(raw), NO_DEADLINE, "input {raw:?}");
        }
    }
}
