//! Unicode NFC normalization.
//!
//! Arabic-script letters combine with diacritics and joiners; without
//! canonical composition, visually identical sequences can have different
//! underlying code points, which breaks exact-match operations (stopword
//! lookup, deduplication) and risks disconnecting cursive joins when later
//! stages delete combining marks individually.

use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Normalize `text` to Unicode Normalization Form C.
///
/// Pure and idempotent: `nfc(nfc(x)) == nfc(x)`. Already-composed input is
/// returned without re-walking the composition tables.
pub fn nfc(text: &str) -> String {
    if is_nfc(text) {
        text.to_owned()
    } else {
        text.nfc().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ا U+0627 followed by madda above U+0653 composes to آ U+0622.
    const DECOMPOSED_ALEF_MADDA: &str = "\u{0627}\u{0653}";
    const COMPOSED_ALEF_MADDA: &str = "\u{0622}";

    #[test]
    fn test_composes_combining_marks() {
        assert_eq!(nfc(DECOMPOSED_ALEF_MADDA), COMPOSED_ALEF_MADDA);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [DECOMPOSED_ALEF_MADDA, COMPOSED_ALEF_MADDA, "سلام دنيا۔", ""];
        for input in inputs {
            let once = nfc(input);
            assert_eq!(nfc(&once), once, "nfc not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_composed_input_unchanged() {
        assert_eq!(nfc("سلام"), "سلام");
    }

    #[test]
    fn test_mixed_scripts_pass_through() {
        // Normalization doesn't filter — Latin and digits survive.
        assert_eq!(nfc("abc 123 سلام"), "abc 123 سلام");
    }
}
