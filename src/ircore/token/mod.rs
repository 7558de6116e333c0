pub mod analyzer;
pub mod tokenizer;
pub mod lemmatizer;
pub mod stopwords;

pub use analyzer::{Analyzer, NormalizerConfig};

/// Maps raw text to an ordered sequence of normalized terms.
///
/// Implemented by the configured [`Analyzer`] and by any closure
/// `Fn(&str) -> Vec<String>`, so callers can plug in their own policy.
pub trait Normalize {
    fn normalize(&self, text: &str) -> Vec<String>;
}

impl<F> Normalize for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn normalize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}
