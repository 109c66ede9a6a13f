// Static Greek suffix-stripping rule table (Ntais' adaptation of Porter).
//
// Every step is data: a suffix group, an optional whole-word rewrite, and
// the shape conditions under which a short fragment is put back. The
// interpreter at the bottom of this file applies one step to one stem; the
// order the steps run in lives in `stemmer.rs`.
//
// The word lists are a fidelity contract. Changing a single entry changes
// stemming results on real words.

use crate::normalize::ends_in_vowel;

// ---------------------------------------------------------------------------
// Rule model
// ---------------------------------------------------------------------------

/// A predicate over the prefix left behind once a suffix is stripped.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Prefix is exactly one of the listed stems.
    Is(&'static [&'static str]),
    /// Prefix ends with one of the listed endings.
    EndsWith(&'static [&'static str]),
    /// Prefix ends with one of the first list but is not one of the second.
    EndsWithExcept(&'static [&'static str], &'static [&'static str]),
    /// Prefix ends in one of {Α Ε Η Ι Ο Υ Ω}.
    EndsInVowel,
    /// Prefix has fewer letters than this.
    ShorterThan(usize),
}

impl Shape {
    pub fn holds(&self, prefix: &str) -> bool {
        match *self {
            Shape::Is(stems) => stems.contains(&prefix),
            Shape::EndsWith(endings) => endings.iter().any(|e| prefix.ends_with(e)),
            Shape::EndsWithExcept(endings, excluded) => {
                endings.iter().any(|e| prefix.ends_with(e)) && !excluded.contains(&prefix)
            }
            Shape::EndsInVowel => ends_in_vowel(prefix),
            Shape::ShorterThan(n) => prefix.chars().count() < n,
        }
    }
}

/// When a fragment is re-appended.
#[derive(Debug, Clone, Copy)]
pub enum When {
    Always,
    /// At least one shape holds.
    AnyOf(&'static [Shape]),
    /// No shape holds.
    NoneOf(&'static [Shape]),
}

impl When {
    pub fn holds(&self, prefix: &str) -> bool {
        match *self {
            When::Always => true,
            When::AnyOf(shapes) => shapes.iter().any(|s| s.holds(prefix)),
            When::NoneOf(shapes) => !shapes.iter().any(|s| s.holds(prefix)),
        }
    }
}

/// A fragment put back on the stripped prefix.
#[derive(Debug, Clone, Copy)]
pub struct Append {
    pub when: When,
    pub fragment: &'static str,
}

/// One suffix-group sub-rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Sub-step label, e.g. "5h".
    pub name: &'static str,
    pub suffixes: &'static [&'static str],
    /// The match is discarded unless the prefix keeps at least this many letters.
    pub min_prefix: usize,
    /// Prefixes for which the suffix stays on (appends still run).
    pub keep_if: &'static [&'static str],
    /// Evaluated in order against the prefix; every one that holds fires.
    pub appends: &'static [Append],
}

/// One entry of the pipeline.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Replace one exact word with another.
    Rewrite {
        name: &'static str,
        word: &'static str,
        stem: &'static str,
    },
    Strip(Rule),
}

// ---------------------------------------------------------------------------
// Condition word lists
// ---------------------------------------------------------------------------

const STEP_2A_KEEP: &[&str] = &[
    "ΟΚ", "ΜΑΜ", "ΜΑΝ", "ΜΠΑΜΠ", "ΠΑΤΕΡ", "ΓΙΑΓΙ", "ΝΤΑΝΤ", "ΚΥΡ", "ΘΕΙ", "ΠΕΘΕΡ", "ΜΟΥΣΑΜ",
    "ΚΑΠΛΑΜ", "ΠΑΡ", "ΨΑΡ", "ΤΖΟΥΡ", "ΤΑΜΠΟΥΡ", "ΓΑΛΑΤ", "ΦΑΦΛΑΤ",
];

const STEP_2B_ENDINGS: &[&str] = &["ΟΠ", "ΙΠ", "ΕΜΠ", "ΥΠ", "ΓΗΠ", "ΔΑΠ", "ΚΡΑΣΠ", "ΜΙΛ"];

const STEP_2C_ENDINGS: &[&str] = &[
    "ΑΡΚ", "ΚΑΛΙΑΚ", "ΠΕΤΑΛ", "ΛΙΧ", "ΠΛΕΞ", "ΣΚ", "Σ", "ΦΛ", "ΦΡ", "ΒΕΛ", "ΛΟΥΛ", "ΧΝ", "ΣΠ",
    "ΤΡΑΓ", "ΦΕ",
];

const STEP_2D_STEMS: &[&str] = &[
    "Θ", "Δ", "ΕΛ", "ΓΑΛ", "Ν", "Π", "ΙΔ", "ΠΑΡ", "ΣΤΕΡ", "ΟΡΦ", "ΑΝΔΡ", "ΑΝΤΡ",
];

const STEP_3B_STEMS: &[&str] = &[
    "ΑΓ", "ΑΓΓΕΛ", "ΑΓΡ", "ΑΕΡ", "ΑΘΛ", "ΑΚΟΥΣ", "ΑΞ", "ΑΣ", "Β", "ΒΙΒΛ", "ΒΥΤ", "Γ", "ΓΙΑΓ",
    "ΓΩΝ", "Δ", "ΔΑΝ", "ΔΗΛ", "ΔΗΜ", "ΔΟΚΙΜ", "ΕΛ", "ΖΑΧΑΡ", "ΗΛ", "ΗΠ", "ΙΔ", "ΙΣΚ", "ΙΣΤ",
    "ΙΟΝ", "ΙΩΝ", "ΚΙΜΩΛ", "ΚΟΛΟΝ", "ΚΟΡ", "ΚΤΗΡ", "ΚΥΡ", "ΛΑΓ", "ΛΟΓ", "ΜΑΓ", "ΜΠΑΝ", "ΜΠΡ",
    "ΝΑΥΤ", "ΝΟΤ", "ΟΠΑΛ", "ΟΞ", "ΟΡ", "ΟΣ", "ΠΑΝΑΓ", "ΠΑΤΡ", "ΠΗΛ", "ΠΗΝ", "ΠΛΑΙΣ", "ΠΟΝΤ",
    "ΡΑΔ", "ΡΟΔ", "ΣΚ", "ΣΚΟΡΠ", "ΣΟΥΝ", "ΣΠΑΝ", "ΣΤΑΔ", "ΣΥΡ", "ΤΗΛ", "ΤΙΜ", "ΤΟΚ", "ΤΟΠ",
    "ΤΡΟΧ", "ΦΙΛ", "ΦΩΤ", "Χ", "ΧΙΛ", "ΧΡΩΜ", "ΧΩΡ",
];

const STEP_4_STEMS: &[&str] = &[
    "ΑΔ", "ΑΛ", "ΑΜΑΝ", "ΑΜΕΡ", "ΑΜΜΟΧΑΛ", "ΑΝΗΘ", "ΑΝΤΙΔ", "ΑΠΛ", "ΑΤΤ", "ΑΦΡ", "ΒΑΣ", "ΒΡΩΜ",
    "ΓΕΝ", "ΓΕΡ", "Δ", "ΔΙΚΑΝ", "ΔΥΤ", "ΕΙΔ", "ΕΝΔ", "ΕΞΩΔ", "ΗΘ", "ΘΕΤ", "ΚΑΛΛΙΝ", "ΚΑΛΠ",
    "ΚΑΤΑΔ", "ΚΟΥΖΙΝ", "ΚΡ", "ΚΩΔ", "ΛΟΓ", "Μ", "ΜΕΡ", "ΜΟΝΑΔ", "ΜΟΥΛ", "ΜΟΥΣ", "ΜΠΑΓΙΑΤ",
    "ΜΠΑΝ", "ΜΠΟΛ", "ΜΠΟΣ", "ΜΥΣΤ", "Ν", "ΝΙΤ", "ΞΙΚ", "ΟΠΤ", "ΠΑΝ", "ΠΕΤΣ", "ΠΙΚΑΝΤ", "ΠΙΤΣ",
    "ΠΛΑΣΤ", "ΠΛΙΑΤΣ", "ΠΟΝΤ", "ΠΟΣΤΕΛΝ", "ΠΡΩΤΟΔ", "ΣΕΡΤ", "ΣΗΜΑΝΤ", "ΣΤΑΤ", "ΣΥΝΑΔ",
    "ΣΥΝΟΜΗΛ", "ΤΕΛ", "ΤΕΧΝ", "ΤΡΟΠ", "ΤΣΑΜ", "ΥΠΟΔ", "Φ", "ΦΙΛΟΝ", "ΦΥΛΟΔ", "ΦΥΣ", "ΧΑΣ",
];

const STEP_5A_STEMS: &[&str] = &[
    "ΑΝΑΠ", "ΑΠΟΘ", "ΑΠΟΚ", "ΑΠΟΣΤ", "ΒΟΥΒ", "ΞΕΘ", "ΟΥΛ", "ΠΕΘ", "ΠΙΚΡ", "ΠΟΤ", "ΣΙΧ", "Χ",
];

const STEP_5B_ANE_STEMS: &[&str] = &[
    "ΒΕΤΕΡ", "ΒΟΥΛΚ", "ΒΡΑΧΜ", "Γ", "ΔΡΑΔΟΥΜ", "Θ", "ΚΑΛΠΟΥΖ", "ΚΑΣΤΕΛ", "ΚΟΡΜΟΡ", "ΛΑΟΠΛ",
    "ΜΩΑΜΕΘ", "Μ", "ΜΟΥΣΟΥΛΜΑΝ", "ΟΥΛ", "Π", "ΠΕΛΕΚ", "ΠΛ", "ΠΟΛΙΣ", "ΠΟΡΤΟΛ", "ΣΑΡΑΚΑΤΣ",
    "ΣΟΥΛΤ", "ΤΣΑΡΛΑΤ", "ΟΡΦ", "ΤΣΙΓΓ", "ΤΣΟΠ", "ΦΩΤΟΣΤΕΦ", "Χ", "ΨΥΧΟΠΛ", "ΑΓ", "ΟΡΦ", "ΓΑΛ",
    "ΓΕΡ", "ΔΕΚ", "ΔΙΠΛ", "ΑΜΕΡΙΚΑΝ", "ΟΥΡ", "ΠΙΘ", "ΠΟΥΡΙΤ", "Σ", "ΖΩΝΤ", "ΙΚ", "ΚΑΣΤ", "ΚΟΠ",
    "ΛΙΧ", "ΛΟΥΘΗΡ", "ΜΑΙΝΤ", "ΜΕΛ", "ΣΙΓ", "ΣΠ", "ΣΤΕΓ", "ΤΡΑΓ", "ΤΣΑΓ", "Φ", "ΕΡ", "ΑΔΑΠ",
    "ΑΘΙΓΓ", "ΑΜΗΧ", "ΑΝΙΚ", "ΑΝΟΡΓ", "ΑΠΗΓ", "ΑΠΙΘ", "ΑΤΣΙΓΓ", "ΒΑΣ", "ΒΑΣΚ", "ΒΑΘΥΓΑΛ",
    "ΒΙΟΜΗΧ", "ΒΡΑΧΥΚ", "ΔΙΑΤ", "ΔΙΑΦ", "ΕΝΟΡΓ", "ΘΥΣ", "ΚΑΠΝΟΒΙΟΜΗΧ", "ΚΑΤΑΓΑΛ", "ΚΛΙΒ",
    "ΚΟΙΛΑΡΦ", "ΛΙΒ", "ΜΕΓΛΟΒΙΟΜΗΧ", "ΜΙΚΡΟΒΙΟΜΗΧ", "ΝΤΑΒ", "ΞΗΡΟΚΛΙΒ", "ΟΛΙΓΟΔΑΜ", "ΟΛΟΓΑΛ",
    "ΠΕΝΤΑΡΦ", "ΠΕΡΗΦ", "ΠΕΡΙΤΡ", "ΠΛΑΤ", "ΠΟΛΥΔΑΠ", "ΠΟΛΥΜΗΧ", "ΣΤΕΦ", "ΤΑΒ", "ΤΕΤ",
    "ΥΠΕΡΗΦ", "ΥΠΟΚΟΠ", "ΧΑΜΗΛΟΔΑΠ", "ΨΗΛΟΤΑΒ",
];

const STEP_5C_ENDINGS: &[&str] = &[
    "ΟΔ", "ΑΙΡ", "ΦΟΡ", "ΤΑΘ", "ΔΙΑΘ", "ΣΧ", "ΕΝΔ", "ΕΥΡ", "ΤΙΘ", "ΥΠΕΡΘ", "ΡΑΘ", "ΕΝΘ", "ΡΟΘ",
    "ΣΘ", "ΠΥΡ", "ΑΙΝ", "ΣΥΝΔ", "ΣΥΝ", "ΣΥΝΘ", "ΧΩΡ", "ΠΟΝ", "ΒΡ", "ΚΑΘ", "ΕΥΘ", "ΕΚΘ", "ΝΕΤ",
    "ΡΟΝ", "ΑΡΚ", "ΒΑΡ", "ΒΟΛ", "ΩΦΕΛ",
];

const STEP_5C_STEMS: &[&str] = &[
    "ΑΒΑΡ", "ΒΕΝ", "ΕΝΑΡ", "ΑΒΡ", "ΑΔ", "ΑΘ", "ΑΝ", "ΑΠΛ", "ΒΑΡΟΝ", "ΝΤΡ", "ΣΚ", "ΚΟΠ", "ΜΠΟΡ",
    "ΝΙΦ", "ΠΑΓ", "ΠΑΡΑΚΑΛ", "ΣΕΡΠ", "ΣΚΕΛ", "ΣΥΡΦ", "ΤΟΚ", "Υ", "Δ", "ΕΜ", "ΘΑΡΡ", "Θ",
];

const STEP_5F_IESTE_STEMS: &[&str] = &["Π", "ΑΠ", "ΣΥΜΠ", "ΑΣΥΜΠ", "ΑΚΑΤΑΠ", "ΑΜΕΤΑΜΦ"];

const STEP_5F_ESTE_STEMS: &[&str] = &[
    "ΑΛ", "ΑΡ", "ΕΚΤΕΛ", "Ζ", "Μ", "Ξ", "ΠΑΡΑΚΑΛ", "ΑΡ", "ΠΡΟ", "ΝΙΣ",
];

const STEP_5G_ENDINGS: &[&str] = &["ΣΚΩΛ", "ΣΚΟΥΛ", "ΝΑΡΘ", "ΣΦ", "ΟΘ", "ΠΙΘ"];

const STEP_5G_STEMS: &[&str] = &["ΔΙΑΘ", "Θ", "ΠΑΡΑΚΑΤΑΘ", "ΠΡΟΣΘ", "ΣΥΝΘ"];

const STEP_5H_STEMS: &[&str] = &[
    "ΦΑΡΜΑΚ", "ΧΑΔ", "ΑΓΚ", "ΑΝΑΡΡ", "ΒΡΟΜ", "ΕΚΛΙΠ", "ΛΑΜΠΙΔ", "ΛΕΧ", "Μ", "ΠΑΤ", "Ρ", "Λ",
    "ΜΕΔ", "ΜΕΣΑΖ", "ΥΠΟΤΕΙΝ", "ΑΜ", "ΑΙΘ", "ΑΝΗΚ", "ΔΕΣΠΟΖ", "ΕΝΔΙΑΦΕΡ",
];

const STEP_5H_ENDINGS: &[&str] = &[
    "ΠΟΔΑΡ", "ΒΛΕΠ", "ΠΑΝΤΑΧ", "ΦΡΥΔ", "ΜΑΝΤΙΛ", "ΜΑΛΛ", "ΚΥΜΑΤ", "ΛΑΧ", "ΛΗΓ", "ΦΑΓ", "ΟΜ",
    "ΠΡΩΤ",
];

const STEP_5I_STEMS: &[&str] = &[
    "ΑΒΑΣΤ", "ΠΟΛΥΦ", "ΑΔΗΦ", "ΠΑΜΦ", "Ρ", "ΑΣΠ", "ΑΦ", "ΑΜΑΛ", "ΑΜΑΛΛΙ", "ΑΝΥΣΤ", "ΑΠΕΡ",
    "ΑΣΠΑΡ", "ΑΧΑΡ", "ΔΕΡΒΕΝ", "ΔΡΟΣΟΠ", "ΞΕΦ", "ΝΕΟΠ", "ΝΟΜΟΤ", "ΟΛΟΠ", "ΟΜΟΤ", "ΠΡΟΣΤ",
    "ΠΡΟΣΩΠΟΠ", "ΣΥΜΠ", "ΣΥΝΤ", "Τ", "ΥΠΟΤ", "ΧΑΡ", "ΑΕΙΠ", "ΑΙΜΟΣΤ", "ΑΝΥΠ", "ΑΠΟΤ", "ΑΡΤΙΠ",
    "ΔΙΑΤ", "ΕΝ", "ΕΠΙΤ", "ΚΡΟΚΑΛΟΠ", "ΣΙΔΗΡΟΠ", "Λ", "ΝΑΥ", "ΟΥΛΑΜ", "ΟΥΡ", "Π", "ΤΡ", "Μ",
];

const STEP_5I_ENDINGS: &[&str] = &[
    "ΟΦ", "ΠΕΛ", "ΧΟΡΤ", "ΛΛ", "ΣΦ", "ΡΠ", "ΦΡ", "ΠΡ", "ΛΟΧ", "ΣΜΗΝ",
];

const STEP_5I_EXCLUDED: &[&str] = &["ΨΟΦ", "ΝΑΥΛΟΧ"];

const STEP_5J_STEMS: &[&str] = &["Ν", "ΧΕΡΣΟΝ", "ΔΩΔΕΚΑΝ", "ΕΡΗΜΟΝ", "ΜΕΓΑΛΟΝ", "ΕΠΤΑΝ", "Ι"];

const STEP_5K_STEMS: &[&str] = &[
    "ΑΣΒ", "ΣΒ", "ΑΧΡ", "ΧΡ", "ΑΠΛ", "ΑΕΙΜΝ", "ΔΥΣΧΡ", "ΕΥΧΡ", "ΚΟΙΝΟΧΡ", "ΠΑΛΙΜΨ",
];

const STEP_5L_STEMS: &[&str] = &["Ν", "Ρ", "ΣΠΙ", "ΣΤΡΑΒΟΜΟΥΤΣ", "ΚΑΚΟΜΟΥΤΣ", "ΕΞΩΝ"];

const STEP_5M_STEMS: &[&str] = &["ΠΑΡΑΣΟΥΣ", "Φ", "Χ", "ΩΡΙΟΠΛ", "ΑΖ", "ΑΛΛΟΣΟΥΣ", "ΑΣΟΥΣ"];

const STEP_7_KEEP: &[&str] = &["ΕΞ", "ΕΣ", "ΑΝ", "ΚΑΤ", "Κ", "ΠΡ"];

const STEP_7_STEMS: &[&str] = &["ΚΑ", "Μ", "ΕΛΕ", "ΛΕ", "ΔΕ"];

// ---------------------------------------------------------------------------
// Pipeline tables
// ---------------------------------------------------------------------------

/// Shorthand for a rule that keeps every match and has no minimum prefix.
const fn rule(
    name: &'static str,
    suffixes: &'static [&'static str],
    appends: &'static [Append],
) -> Step {
    Step::Strip(Rule {
        name,
        suffixes,
        min_prefix: 1,
        keep_if: &[],
        appends,
    })
}

const fn append(when: When, fragment: &'static str) -> Append {
    Append { when, fragment }
}

/// Steps 2a through 6b, in the order they run.
pub const INFLECTIONAL: &[Step] = &[
    rule(
        "2a",
        &["ΑΔΕΣ", "ΑΔΩΝ"],
        &[append(When::NoneOf(&[Shape::EndsWith(STEP_2A_KEEP)]), "ΑΔ")],
    ),
    rule(
        "2b",
        &["ΕΔΕΣ", "ΕΔΩΝ"],
        &[append(When::AnyOf(&[Shape::EndsWith(STEP_2B_ENDINGS)]), "ΕΔ")],
    ),
    rule(
        "2c",
        &["ΟΥΔΕΣ", "ΟΥΔΩΝ"],
        &[append(When::AnyOf(&[Shape::EndsWith(STEP_2C_ENDINGS)]), "ΟΥΔ")],
    ),
    rule(
        "2d",
        &["ΕΩΣ", "ΕΩΝ", "ΕΑΣ", "ΕΑ"],
        &[append(When::AnyOf(&[Shape::Is(STEP_2D_STEMS)]), "Ε")],
    ),
    Step::Strip(Rule {
        name: "3a",
        suffixes: &[
            "ΕΙΟ", "ΕΙΟΣ", "ΕΙΟΙ", "ΕΙΑ", "ΕΙΑΣ", "ΕΙΕΣ", "ΕΙΟΥ", "ΕΙΟΥΣ", "ΕΙΩΝ",
        ],
        min_prefix: 5,
        keep_if: &[],
        appends: &[],
    }),
    rule(
        "3b",
        &["ΙΟΥΣ", "ΙΑΣ", "ΙΕΣ", "ΙΟΣ", "ΙΟΥ", "ΙΟΙ", "ΙΩΝ", "ΙΟΝ", "ΙΑ", "ΙΟ"],
        &[
            append(
                When::AnyOf(&[
                    Shape::EndsInVowel,
                    Shape::ShorterThan(2),
                    Shape::Is(STEP_3B_STEMS),
                ]),
                "Ι",
            ),
            append(When::AnyOf(&[Shape::Is(&["ΠΑΛ"])]), "ΑΙ"),
        ],
    ),
    rule(
        "4",
        &[
            "ΙΚΟΣ", "ΙΚΟΝ", "ΙΚΕΙΣ", "ΙΚΟΙ", "ΙΚΕΣ", "ΙΚΟΥΣ", "ΙΚΗ", "ΙΚΗΣ", "ΙΚΟ", "ΙΚΑ", "ΙΚΟΥ",
            "ΙΚΩΝ", "ΙΚΩΣ",
        ],
        &[append(
            When::AnyOf(&[
                Shape::EndsInVowel,
                Shape::Is(STEP_4_STEMS),
                Shape::EndsWith(&["ΦΟΙΝ"]),
            ]),
            "ΙΚ",
        )],
    ),
    Step::Rewrite {
        name: "5a",
        word: "ΑΓΑΜΕ",
        stem: "ΑΓΑΜ",
    },
    rule("5a", &["ΑΓΑΜΕ", "ΗΣΑΜΕ", "ΟΥΣΑΜΕ", "ΗΚΑΜΕ", "ΗΘΗΚΑΜΕ"], &[]),
    rule(
        "5a",
        &["ΑΜΕ"],
        &[append(When::AnyOf(&[Shape::Is(STEP_5A_STEMS)]), "ΑΜ")],
    ),
    rule(
        "5b",
        &[
            "ΑΓΑΝΕ", "ΗΣΑΝΕ", "ΟΥΣΑΝΕ", "ΙΟΝΤΑΝΕ", "ΙΟΤΑΝΕ", "ΙΟΥΝΤΑΝΕ", "ΟΝΤΑΝΕ", "ΟΤΑΝΕ",
            "ΟΥΝΤΑΝΕ", "ΗΚΑΝΕ", "ΗΘΗΚΑΝΕ",
        ],
        &[append(When::AnyOf(&[Shape::Is(&["ΤΡ", "ΤΣ"])]), "ΑΓΑΝ")],
    ),
    rule(
        "5b",
        &["ΑΝΕ"],
        &[append(
            When::AnyOf(&[Shape::EndsInVowel, Shape::Is(STEP_5B_ANE_STEMS)]),
            "ΑΝ",
        )],
    ),
    rule("5c", &["ΗΣΕΤΕ"], &[]),
    rule(
        "5c",
        &["ΕΤΕ"],
        &[append(
            When::AnyOf(&[
                Shape::EndsInVowel,
                Shape::EndsWith(STEP_5C_ENDINGS),
                Shape::Is(STEP_5C_STEMS),
            ]),
            "ΕΤ",
        )],
    ),
    rule(
        "5d",
        &["ΟΝΤΑΣ", "ΩΝΤΑΣ"],
        &[
            append(When::AnyOf(&[Shape::Is(&["ΑΡΧ"])]), "ΟΝΤ"),
            append(When::AnyOf(&[Shape::EndsWith(&["ΚΡΕ"])]), "ΩΝΤ"),
        ],
    ),
    rule(
        "5e",
        &["ΟΜΑΣΤΕ", "ΙΟΜΑΣΤΕ"],
        &[append(When::AnyOf(&[Shape::Is(&["ΟΝ"])]), "ΟΜΑΣΤ")],
    ),
    rule(
        "5f",
        &["ΙΕΣΤΕ"],
        &[append(When::AnyOf(&[Shape::Is(STEP_5F_IESTE_STEMS)]), "ΙΕΣΤ")],
    ),
    rule(
        "5f",
        &["ΕΣΤΕ"],
        &[append(When::AnyOf(&[Shape::Is(STEP_5F_ESTE_STEMS)]), "ΕΣΤ")],
    ),
    rule("5g", &["ΗΘΗΚΑ", "ΗΘΗΚΕΣ", "ΗΘΗΚΕ"], &[]),
    rule(
        "5g",
        &["ΗΚΑ", "ΗΚΕΣ", "ΗΚΕ"],
        &[append(
            When::AnyOf(&[Shape::EndsWith(STEP_5G_ENDINGS), Shape::Is(STEP_5G_STEMS)]),
            "ΗΚ",
        )],
    ),
    rule(
        "5h",
        &["ΟΥΣΑ", "ΟΥΣΕΣ", "ΟΥΣΕ"],
        &[append(
            When::AnyOf(&[
                Shape::EndsInVowel,
                Shape::Is(STEP_5H_STEMS),
                Shape::EndsWith(STEP_5H_ENDINGS),
            ]),
            "ΟΥΣ",
        )],
    ),
    rule(
        "5i",
        &["ΑΓΑ", "ΑΓΕΣ", "ΑΓΕ"],
        &[append(
            When::AnyOf(&[
                Shape::Is(STEP_5I_STEMS),
                Shape::EndsWithExcept(STEP_5I_ENDINGS, STEP_5I_EXCLUDED),
                Shape::EndsWith(&["ΚΟΛΛ"]),
            ]),
            "ΑΓ",
        )],
    ),
    rule(
        "5j",
        &["ΗΣΕ", "ΗΣΟΥ", "ΗΣΑ"],
        &[append(When::AnyOf(&[Shape::Is(STEP_5J_STEMS)]), "ΗΣ")],
    ),
    rule(
        "5k",
        &["ΗΣΤΕ"],
        &[append(When::AnyOf(&[Shape::Is(STEP_5K_STEMS)]), "ΗΣΤ")],
    ),
    rule(
        "5l",
        &["ΟΥΝΕ", "ΗΣΟΥΝΕ", "ΗΘΟΥΝΕ"],
        &[append(When::AnyOf(&[Shape::Is(STEP_5L_STEMS)]), "ΟΥΝ")],
    ),
    rule(
        "5m",
        &["ΟΥΜΕ", "ΗΣΟΥΜΕ", "ΗΘΟΥΜΕ"],
        &[append(When::AnyOf(&[Shape::Is(STEP_5M_STEMS)]), "ΟΥΜ")],
    ),
    rule(
        "6a",
        &[
            "ΜΑΤΟΙ", "ΜΑΤΟΥΣ", "ΜΑΤΟ", "ΜΑΤΑ", "ΜΑΤΩΣ", "ΜΑΤΩΝ", "ΜΑΤΟΣ", "ΜΑΤΕΣ", "ΜΑΤΗ", "ΜΑΤΗΣ",
            "ΜΑΤΟΥ",
        ],
        &[
            append(When::Always, "Μ"),
            append(When::AnyOf(&[Shape::Is(&["ΓΡΑΜ"])]), "Α"),
            append(When::AnyOf(&[Shape::Is(&["ΓΕ", "ΣΤΑ"])]), "ΑΤ"),
        ],
    ),
    rule("6b", &["ΟΥΑ"], &[append(When::Always, "ΟΥ")]),
];

/// Generic endings tried only when nothing earlier shortened the word.
pub const LONG_WORD: Step = rule(
    "long-word",
    &[
        "Α", "ΑΓΑΤΕ", "ΑΓΑΝ", "ΑΕΙ", "ΑΜΑΙ", "ΑΝ", "ΑΣ", "ΑΣΑΙ", "ΑΤΑΙ", "ΑΩ", "Ε", "ΕΙ", "ΕΙΣ",
        "ΕΙΤΕ", "ΕΣΑΙ", "ΕΣ", "ΕΤΑΙ", "Ι", "ΙΕΜΑΙ", "ΙΕΜΑΣΤΕ", "ΙΕΤΑΙ", "ΙΕΣΑΙ", "ΙΕΣΑΣΤΕ",
        "ΙΟΜΑΣΤΑΝ", "ΙΟΜΟΥΝ", "ΙΟΜΟΥΝΑ", "ΙΟΝΤΑΝ", "ΙΟΝΤΟΥΣΑΝ", "ΙΟΣΑΣΤΑΝ", "ΙΟΣΑΣΤΕ", "ΙΟΣΟΥΝ",
        "ΙΟΣΟΥΝΑ", "ΙΟΤΑΝ", "ΙΟΥΜΑ", "ΙΟΥΜΑΣΤΕ", "ΙΟΥΝΤΑΙ", "ΙΟΥΝΤΑΝ", "Η", "ΗΔΕΣ", "ΗΔΩΝ",
        "ΗΘΕΙ", "ΗΘΕΙΣ", "ΗΘΕΙΤΕ", "ΗΘΗΚΑΤΕ", "ΗΘΗΚΑΝ", "ΗΘΟΥΝ", "ΗΘΩ", "ΗΚΑΤΕ", "ΗΚΑΝ", "ΗΣ",
        "ΗΣΑΝ", "ΗΣΑΤΕ", "ΗΣΕΙ", "ΗΣΕΣ", "ΗΣΟΥΝ", "ΗΣΩ", "Ο", "ΟΙ", "ΟΜΑΙ", "ΟΜΑΣΤΑΝ", "ΟΜΟΥΝ",
        "ΟΜΟΥΝΑ", "ΟΝΤΑΙ", "ΟΝΤΑΝ", "ΟΝΤΟΥΣΑΝ", "ΟΣ", "ΟΣΑΣΤΑΝ", "ΟΣΑΣΤΕ", "ΟΣΟΥΝ", "ΟΣΟΥΝΑ",
        "ΟΤΑΝ", "ΟΥ", "ΟΥΜΑΙ", "ΟΥΜΑΣΤΕ", "ΟΥΝ", "ΟΥΝΤΑΙ", "ΟΥΝΤΑΝ", "ΟΥΣ", "ΟΥΣΑΝ", "ΟΥΣΑΤΕ",
        "Υ", "ΥΑ", "ΥΣ", "Ω", "ΩΝ", "ΟΙΣ",
    ],
    &[],
);

/// Step 7: comparative and superlative endings.
pub const DEGREE: Step = Step::Strip(Rule {
    name: "7",
    suffixes: &["ΕΣΤΕΡ", "ΕΣΤΑΤ", "ΟΤΕΡ", "ΟΤΑΤ", "ΥΤΕΡ", "ΥΤΑΤ", "ΩΤΕΡ", "ΩΤΑΤ"],
    min_prefix: 1,
    keep_if: STEP_7_KEEP,
    appends: &[append(When::AnyOf(&[Shape::Is(STEP_7_STEMS)]), "ΥΤ")],
});

// ---------------------------------------------------------------------------
// Interpreter
// ---------------------------------------------------------------------------

/// Split `word` at the longest listed suffix that leaves a non-empty prefix.
pub fn split_suffix<'a>(word: &'a str, suffixes: &[&str]) -> Option<(&'a str, &'a str)> {
    word.char_indices()
        .skip(1)
        .map(|(i, _)| word.split_at(i))
        .find(|(_, tail)| suffixes.contains(tail))
}

impl Rule {
    /// Apply this rule to `word`. Returns `None` when the rule does not fire.
    pub fn apply(&self, word: &str) -> Option<String> {
        let (prefix, _) = split_suffix(word, self.suffixes)?;
        if prefix.chars().count() < self.min_prefix {
            return None;
        }

        let mut stem = if self.keep_if.contains(&prefix) {
            word.to_string()
        } else {
            prefix.to_string()
        };
        for append in self.appends {
            if append.when.holds(prefix) {
                stem.push_str(append.fragment);
            }
        }
        Some(stem)
    }
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Rewrite { name, .. } => *name,
            Step::Strip(rule) => rule.name,
        }
    }

    /// Apply this step to `word`. Returns `None` when the step does not fire.
    pub fn apply(&self, word: &str) -> Option<String> {
        match self {
            Step::Rewrite { word: from, stem, .. } => (word == *from).then(|| stem.to_string()),
            Step::Strip(rule) => rule.apply(word),
        }
    }
}

/// Length in letters of the longest fragment any step can put back.
pub fn max_fragment_len() -> usize {
    INFLECTIONAL
        .iter()
        .chain([&LONG_WORD, &DEGREE])
        .filter_map(|step| match step {
            Step::Strip(rule) => Some(rule.appends),
            Step::Rewrite { .. } => None,
        })
        .flat_map(|appends| appends.iter())
        .map(|a| a.fragment.chars().count())
        .max()
        .unwrap_or(0)
}
