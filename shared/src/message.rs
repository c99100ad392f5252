//! Rules for task message text, shared by the new-task field and inline editing.

use thiserror::Error;

pub const MAX_MESSAGE_LEN: usize = 46;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("message is empty")]
    Empty,
    #[error("message is {0} characters, the limit is {max}", max = MAX_MESSAGE_LEN)]
    TooLong(usize),
}

/// Collapses every run of spaces to a single space.
pub fn collapse_spaces(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_space = false;
    for c in value.chars() {
        if c == ' ' && previous_space {
            continue;
        }
        previous_space = c == ' ';
        out.push(c);
    }
    out
}

/// Normalizes a keystroke's worth of input. `None` means the keystroke is
/// rejected and the caller keeps its previous value.
pub fn normalize_input(value: &str) -> Option<String> {
    let collapsed = collapse_spaces(value);
    (collapsed.chars().count() <= MAX_MESSAGE_LEN).then_some(collapsed)
}

/// Produces the text that is actually sent to the server.
pub fn validate(value: &str) -> Result<String, MessageError> {
    let message = collapse_spaces(value.trim());
    let len = message.chars().count();
    if len == 0 {
        Err(MessageError::Empty)
    } else if len > MAX_MESSAGE_LEN {
        Err(MessageError::TooLong(len))
    } else {
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Buy  milk", "Buy milk")]
    #[case("a    b  c", "a b c")]
    #[case("  lead", " lead")]
    #[case("no change", "no change")]
    fn collapses_repeated_spaces(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(collapse_spaces(input), expected);
    }

    #[test]
    fn accepts_exactly_the_limit() {
        let input = "x".repeat(MAX_MESSAGE_LEN);
        assert_eq!(normalize_input(&input), Some(input.clone()));
    }

    #[test]
    fn rejects_one_past_the_limit() {
        let input = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(normalize_input(&input), None);
    }

    #[test]
    fn collapsing_can_bring_input_under_the_limit() {
        let input = format!("{}  {}", "a".repeat(23), "b".repeat(22));
        assert_eq!(normalize_input(&input).map(|s| s.len()), Some(MAX_MESSAGE_LEN));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let input = "я".repeat(MAX_MESSAGE_LEN);
        assert!(normalize_input(&input).is_some());
    }

    #[rstest]
    #[case("   ", Err(MessageError::Empty))]
    #[case("  Buy milk ", Ok("Buy milk".to_string()))]
    fn validate_trims(#[case] input: &str, #[case] expected: Result<String, MessageError>) {
        assert_eq!(validate(input), expected);
    }

    #[test]
    fn validate_reports_length() {
        let input = "y".repeat(50);
        assert_eq!(validate(&input), Err(MessageError::TooLong(50)));
    }
}
