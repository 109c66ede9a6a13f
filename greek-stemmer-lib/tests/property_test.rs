// Properties that hold for every input, checked over a word sample.

use std::sync::Arc;
use std::thread;

use greek_stemmer_lib::rules::max_fragment_len;
use greek_stemmer_lib::{normalize, Stemmer, StemmerConfig};

const SAMPLE: &[&str] = &[
    "λόγος", "λόγους", "αγάπης", "γράμματα", "παιδιά", "ρολόγια", "στρατείου", "τεχνικός",
    "αγαπήσαμε", "γράφηκανε", "φορέτε", "τρέχοντας", "θυμόμαστε", "φτιάχτηκε", "πηγαίνουσα",
    "κορόιδεψαγα", "φίλησε", "παίζουνε", "παίζουμε", "χρώματα", "γουρουνούα", "ψηλότερος",
    "καύτερος", "παλιά", "μαμάδες", "καφέδες", "αλεπούδες", "ανδρέας", "κρέατος", "θεά", "το",
    "ή", "HELLO123", "e-mail", "λόγος1", "ἄνθρωπος", "ΘΑΛΑΣΣΑ", "ευτυχισμένος",
];

#[test]
fn stemming_is_deterministic() {
    let s = Stemmer::new();
    for w in SAMPLE {
        assert_eq!(s.stem(w), s.stem(w), "{w}");
    }
}

#[test]
fn gated_words_come_back_normalized() {
    let s = Stemmer::new();
    for w in ["το", "ή", "HELLO123", "e-mail", "λόγος1", "λόγος,", "ab"] {
        assert_eq!(s.stem(w), normalize(w), "{w}");
    }
}

#[test]
fn protected_words_are_fixed_points() {
    let config = StemmerConfig::embedded();
    let s = Stemmer::new();
    for w in &config.protected_words {
        let n = normalize(w);
        assert_eq!(s.stem(&n), n, "{w}");
    }
}

#[test]
fn growth_is_bounded_by_one_fragment() {
    let s = Stemmer::new();
    let bound = max_fragment_len();
    for w in SAMPLE {
        let n = normalize(w).chars().count();
        let stem = s.stem(w).chars().count();
        assert!(stem <= n + bound, "{w}: {stem} > {n} + {bound}");
    }
}

#[test]
fn case_and_accents_do_not_matter() {
    let s = Stemmer::new();
    let pairs = [
        ("λόγος", "ΛΟΓΟΣ"),
        ("αγάπης", "αγαπης"),
        ("Γράμματα", "γραμματα"),
        ("ἄνθρωπος", "ΑΝΘΡΩΠΟΣ"),
        ("παϊδάκια", "παιδακια"),
        ("λο\u{301}γος", "λόγος"),
    ];
    for (a, b) in pairs {
        assert_eq!(s.stem(a), s.stem(b), "{a} vs {b}");
    }
}

#[test]
fn decomposed_input_stems_like_precomposed() {
    let s = Stemmer::new();
    assert_eq!(s.stem("λο\u{301}γος"), "ΛΟΓ");
    assert_eq!(s.stem("αγα\u{301}πης"), s.stem("αγάπης"));
}

#[test]
fn shared_across_threads() {
    let s = Arc::new(Stemmer::new());
    let expected: Vec<String> = SAMPLE.iter().map(|w| s.stem(w)).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = Arc::clone(&s);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for (w, e) in SAMPLE.iter().zip(expected.iter()) {
                    assert_eq!(&s.stem(w), e);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
