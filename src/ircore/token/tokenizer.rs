use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

// urls, e-mail addresses, [references] and (parentheticals)
static NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://\S+|www\.\S+|\S+@\S+|\[.*?\]|\(.*?\)").expect("valid noise regex")
});
static NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").expect("valid numeral regex"));

#[derive(Debug, Clone)]
pub struct Segmentator {
    remove_numbers: bool,
}

impl Segmentator {
    pub fn new(remove_numbers: bool) -> Self {
        Segmentator { remove_numbers }
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let cleaned = NOISE.replace_all(&lowered, " ");
        if self.remove_numbers {
            NUMERAL.replace_all(&cleaned, " ").into_owned()
        } else {
            cleaned.into_owned()
        }
    }

    pub fn parse_tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }
}
