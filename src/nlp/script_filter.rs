//! Script-range character filtering.
//!
//! Keeps only code points from the Arabic-script blocks that cover Sindhi,
//! plus digits, whitespace separators, and sentence-terminal punctuation.
//! Everything else is deleted outright — no placeholder, no inserted space.
//! Deleting a character never re-spaces its neighbors, so a Latin run glued
//! between two Sindhi words merges them rather than splitting them; spurious
//! token boundaries are considered worse than the occasional merge.
//!
//! The allow-list is an explicit predicate over code-point ranges rather
//! than a regex, so results are bit-reproducible and trivially auditable.

/// Arabic full stop "۔" — the primary Sindhi sentence terminator.
pub const ARABIC_FULL_STOP: char = '\u{06D4}';

/// Arabic question mark "؟".
pub const ARABIC_QUESTION_MARK: char = '\u{061F}';

/// Returns `true` if `c` survives script filtering.
///
/// Allowed ranges (inclusive):
/// - U+0600–U+06FF (Arabic, covers the Sindhi-specific letters and the
///   terminal punctuation ۔ / ؟)
/// - U+0750–U+077F (Arabic Supplement)
/// - U+08A0–U+08FF (Arabic Extended-A)
/// - ASCII digits U+0030–U+0039
/// - Whitespace separators: space, newline, tab, carriage return
#[inline]
pub fn is_allowed(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'
        | '\u{0750}'..='\u{077F}'
        | '\u{08A0}'..='\u{08FF}'
        | '0'..='9'
        | ' ' | '\n' | '\t' | '\r')
}

/// Delete every character of `text` that is not allow-listed.
///
/// Total over any input; idempotent; preserves the relative order of
/// retained characters.
pub fn filter(text: &str) -> String {
    text.chars().filter(|&c| is_allowed(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sindhi_text_survives_unchanged() {
        let text = "سلام دنيا۔ تون ڪيئن آهين؟";
        assert_eq!(filter(text), text);
    }

    #[test]
    fn test_terminal_punctuation_allowed() {
        assert!(is_allowed(ARABIC_FULL_STOP));
        assert!(is_allowed(ARABIC_QUESTION_MARK));
    }

    #[test]
    fn test_digits_and_whitespace_allowed() {
        for c in ['0', '9', '5', ' ', '\n', '\t', '\r'] {
            assert!(is_allowed(c), "{c:?} should be allowed");
        }
    }

    #[test]
    fn test_latin_and_emoji_deleted() {
        assert_eq!(filter("hello سلام🙂 دنيا!"), " سلام دنيا");
    }

    #[test]
    fn test_deletion_does_not_insert_space() {
        // Deleting a glued Latin run merges the neighbors.
        assert_eq!(filter("سلامXدنيا"), "سلامدنيا");
    }

    #[test]
    fn test_totality_only_allowed_chars_in_output() {
        let noisy = "a1 سلام! ٻولي? 🙂\u{200F}«؟»\u{0640}";
        let filtered = filter(noisy);
        assert!(filtered.chars().all(is_allowed));
    }

    #[test]
    fn test_idempotent() {
        let noisy = "abc سلام 123 ۔؟ xyz 🙂";
        let once = filter(noisy);
        assert_eq!(filter(&once), once);
    }

    #[test]
    fn test_order_preserved() {
        let input = "a س b ل c ا d م";
        let filtered = filter(input);
        // Retained characters keep their relative order.
        let retained: String = input.chars().filter(|&c| is_allowed(c)).collect();
        assert_eq!(filtered, retained);
        assert_eq!(filtered.replace(' ', ""), "سلام");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(filter(""), "");
    }

    #[test]
    fn test_bom_is_deleted() {
        assert_eq!(filter("\u{FEFF}سلام"), "سلام");
    }
}
