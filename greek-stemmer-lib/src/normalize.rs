// Canonical folding of raw input and the alphabet predicates the pipeline relies on.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// The 24 letters of the uppercase Greek alphabet. Words containing anything
/// else are passed through unstemmed.
pub const GREEK_UPPERCASE: &str = "ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩ";

const GREEK_VOWELS: &str = "ΑΕΗΙΟΥΩ";

/// Fold text to the form every rule is written against: decompose, drop
/// non-spacing marks (tonos, dialytika, breathings), recompose, uppercase.
/// Spacing and enclosing marks are kept.
///
/// Final sigma uppercases to {Σ}, so "αγάπης" and "ΑΓΑΠΗΣ" fold alike.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_nonspacing_mark(*c)).collect();
    stripped.nfc().collect::<String>().to_uppercase()
}

fn is_nonspacing_mark(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::NonspacingMark)
}

/// True if `word` is non-empty and made only of uppercase Greek letters.
pub fn is_greek(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| GREEK_UPPERCASE.contains(c))
}

/// True if the last letter of `word` is a Greek vowel.
pub fn ends_in_vowel(word: &str) -> bool {
    word.chars()
        .next_back()
        .map_or(false, |c| GREEK_VOWELS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_tonos() {
        assert_eq!(normalize("αγάπης"), "ΑΓΑΠΗΣ");
        assert_eq!(normalize("Καλημέρα"), "ΚΑΛΗΜΕΡΑ");
    }

    #[test]
    fn test_normalize_strips_dialytika() {
        // ϊ and ΐ carry a diaeresis (and tonos) over iota.
        assert_eq!(normalize("προϊόν"), "ΠΡΟΙΟΝ");
        assert_eq!(normalize("ΐ"), "Ι");
    }

    #[test]
    fn test_normalize_polytonic() {
        // Breathings, perispomeni and ypogegrammeni all go.
        assert_eq!(normalize("ἀρχῇ"), "ΑΡΧΗ");
        assert_eq!(normalize("Ὀδυσσεύς"), "ΟΔΥΣΣΕΥΣ");
    }

    #[test]
    fn test_normalize_decomposed_input() {
        // α + combining acute, already decomposed.
        assert_eq!(normalize("α\u{0301}λλα"), "ΑΛΛΑ");
    }

    #[test]
    fn test_normalize_final_sigma() {
        assert_eq!(normalize("λόγος"), "ΛΟΓΟΣ");
    }

    #[test]
    fn test_normalize_non_greek() {
        assert_eq!(normalize("hello123"), "HELLO123");
        assert_eq!(normalize("café"), "CAFE");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_spacing_and_enclosing_marks() {
        // U+093F DEVANAGARI VOWEL SIGN I is Mc.
        assert_eq!(normalize("कि"), "कि");
        // U+20DD COMBINING ENCLOSING CIRCLE is Me.
        assert_eq!(normalize("1\u{20DD}x"), "1\u{20DD}X");
        // Mn marks on the same inputs still go.
        assert_eq!(normalize("1\u{20DD}x\u{0301}"), "1\u{20DD}X");
    }

    #[test]
    fn test_is_greek() {
        assert!(is_greek("ΑΓΑΠΗ"));
        assert!(is_greek("ΨΩΜΙ"));
        assert!(!is_greek(""));
        assert!(!is_greek("αγαπη"), "lowercase is not in the alphabet");
        assert!(!is_greek("ΑΓΑΠΗ1"));
        assert!(!is_greek("ΑΓΑΠΗ-ΜΟΥ"));
        // Latin A and O look the same but are different code points.
        assert!(!is_greek("ABO"));
        assert!(!is_greek("ΤΑXI"));
    }

    #[test]
    fn test_ends_in_vowel() {
        assert!(ends_in_vowel("ΚΑΛΑ"));
        assert!(ends_in_vowel("ΠΟΛΥ"));
        assert!(ends_in_vowel("ΝΕΡΟ"));
        assert!(!ends_in_vowel("ΛΟΓ"));
        assert!(!ends_in_vowel(""));
    }
}
