//! Rule-based English noun lemmatizer.
//!
//! Reduces regular plural inflections (`-s`, `-es`, `-ies`) to the singular
//! form and consults a small table of irregular plurals. There is no lexicon
//! lookup, so the rules only fire when the remaining stem keeps at least
//! three characters and the word does not look like a singular ending in `s`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("analyses", "analysis"),
        ("axes", "axis"),
        ("bases", "basis"),
        ("crises", "crisis"),
        ("hypotheses", "hypothesis"),
        ("theses", "thesis"),
        ("phenomena", "phenomenon"),
        ("criteria", "criterion"),
        ("formulae", "formula"),
        ("vertices", "vertex"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("radii", "radius"),
        ("nuclei", "nucleus"),
        ("stimuli", "stimulus"),
        ("series", "series"),
        ("species", "species"),
    ])
});

// longest suffix first
const RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("ies", "y"),
    ("xes", "x"),
    ("s", ""),
];

const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

const MIN_STEM: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Lemmatizer
    }

    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR.get(word) {
            return lemma.to_string();
        }
        if SINGULAR_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
            return word.to_string();
        }
        for (suffix, replacement) in RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.chars().count() < MIN_STEM {
                    break;
                }
                return format!("{}{}", stem, replacement);
            }
        }
        word.to_string()
    }
}
