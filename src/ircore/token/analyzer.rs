use super::lemmatizer::Lemmatizer;
use super::stopwords;
use super::tokenizer::Segmentator;
use super::Normalize;
use crate::ircore::error::{Error, Result};
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Text normalization policy, validated once by [`Analyzer::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub stemming: bool,
    pub lemmatization: bool,
    pub min_token_length: usize,
    pub remove_numbers: bool,
    // None selects the built-in English list
    pub stopwords: Option<Vec<String>>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            stemming: false,
            lemmatization: true,
            min_token_length: 2,
            remove_numbers: true,
            stopwords: None,
        }
    }
}

impl NormalizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.stemming && self.lemmatization {
            return Err(Error::InvalidNormalizer(
                "stemming and lemmatization are mutually exclusive".to_string(),
            ));
        }
        if self.min_token_length == 0 {
            return Err(Error::InvalidNormalizer(
                "min_token_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

enum Morphology {
    Verbatim,
    Stem(Stemmer),
    Lemma(Lemmatizer),
}

pub struct Analyzer {
    config: NormalizerConfig,
    seg: Segmentator,
    stopwords: HashSet<String>,
    morphology: Morphology,
}

impl Analyzer {
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = match &config.stopwords {
            Some(words) => words.iter().map(|w| w.to_lowercase()).collect(),
            None => stopwords::ENGLISH.iter().map(|w| w.to_string()).collect(),
        };
        let morphology = if config.stemming {
            Morphology::Stem(Stemmer::create(Algorithm::English))
        } else if config.lemmatization {
            Morphology::Lemma(Lemmatizer::new())
        } else {
            Morphology::Verbatim
        };
        Ok(Analyzer {
            seg: Segmentator::new(config.remove_numbers),
            config,
            stopwords,
            morphology,
        })
    }

    pub fn get_config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn analyze(&self, text: &str) -> Vec<String> {
        let text_normalized = self.seg.normalize(text);
        self.seg
            .parse_tokens(&text_normalized)
            .into_iter()
            .filter(|token| self.keep(token))
            .map(|token| match &self.morphology {
                Morphology::Verbatim => token.to_string(),
                Morphology::Stem(stemmer) => stemmer.stem(token).into_owned(),
                Morphology::Lemma(lemmatizer) => lemmatizer.lemmatize(token),
            })
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        token.chars().count() >= self.config.min_token_length
            && token.chars().all(char::is_alphanumeric)
            && !self.stopwords.contains(token)
    }
}

impl Normalize for Analyzer {
    fn normalize(&self, text: &str) -> Vec<String> {
        self.analyze(text)
    }
}
