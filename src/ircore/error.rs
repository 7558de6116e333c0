//! Error types for rireval

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("empty collection: cannot index zero documents")]
    EmptyCollection,

    #[error("duplicate document id: {0}")]
    DuplicateDocument(String),

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("invalid normalizer configuration: {0}")]
    InvalidNormalizer(String),

    #[error("malformed corpus: {0}")]
    Corpus(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("index serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter { name, reason: reason.into() }
    }
}
