//! # Tutor Reply Formatting
//!
//! Pure text transform applied to tutor replies before they are displayed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a roleplay span delimited by a pair of asterisks.
static ROLEPLAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*[^*]*\*").expect("roleplay regex is valid"));

/// Strip roleplay markup and normalize paragraph breaks.
///
/// Spans delimited by a pair of asterisks are removed; an unmatched trailing
/// asterisk is left in place. Surrounding whitespace is trimmed and blank
/// lines collapse so paragraphs are separated by exactly one empty line.
pub fn format_tutor_response(response: &str) -> String {
    let stripped = ROLEPLAY.replace_all(response, "");
    let trimmed = stripped.trim();

    trimmed
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_roleplay_and_collapses_blank_lines() {
        assert_eq!(
            format_tutor_response("*waves* Hello\n\nWorld*smiles*"),
            "Hello\n\nWorld"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(format_tutor_response("The answer is 42."), "The answer is 42.");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(format_tutor_response("  \n 2 + 2 = 4 \n  "), "2 + 2 = 4");
    }

    #[test]
    fn test_paragraphs_separated_by_one_blank_line() {
        assert_eq!(
            format_tutor_response("First.\n\n\n\nSecond.\nThird."),
            "First.\n\nSecond.\n\nThird."
        );
    }

    #[test]
    fn test_unmatched_asterisk_survives() {
        // Only paired asterisks form a roleplay span; a dangling one stays.
        assert_eq!(format_tutor_response("*nods* 3 * 4 is?"), "3 * 4 is?");
        assert_eq!(format_tutor_response("half *done"), "half *done");
    }

    #[test]
    fn test_whitespace_only_result() {
        assert_eq!(format_tutor_response("*thinks deeply*"), "");
        assert_eq!(format_tutor_response("   "), "");
    }
}
