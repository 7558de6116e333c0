pub mod pl;
pub mod stats;

pub use pl::{InvertedIndex, Postings};
pub use stats::{CollectionStats, IndexStats};

use crate::ircore::doc::Document;
use crate::ircore::error::{Error, Result};
use crate::ircore::token::Normalize;
use std::collections::HashSet;

/// An inverted index together with the statistics derived from it.
///
/// Both are built once and never mutated afterwards, so a `Collection` can be
/// shared by concurrent ranking calls.
#[derive(Debug)]
pub struct Collection {
    index: InvertedIndex,
    stats: CollectionStats,
}

impl Collection {
    pub fn build<N>(documents: &[Document], normalizer: &N) -> Result<Self>
    where
        N: Normalize + ?Sized,
    {
        if documents.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let mut index = InvertedIndex::new();
        let mut seen: HashSet<&str> = HashSet::with_capacity(documents.len());
        for doc in documents {
            if !seen.insert(doc.get_id()) {
                return Err(Error::DuplicateDocument(doc.get_id().to_string()));
            }
            let terms = normalizer.normalize(doc.get_content());
            index.add_document(doc.get_id(), &terms);
            if index.get_document_count() % 1000 == 0 {
                log::debug!("{} documents indexed", index.get_document_count());
            }
        }
        log::info!("indexed {} documents, {} unique terms",
            index.get_document_count(), index.get_term_count());
        Self::from_index(index)
    }

    pub fn from_index(index: InvertedIndex) -> Result<Self> {
        if index.get_document_count() == 0 {
            return Err(Error::EmptyCollection);
        }
        let stats = CollectionStats::from_index(&index);
        Ok(Collection { index, stats })
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn stats(&self) -> &CollectionStats {
        &self.stats
    }
}
