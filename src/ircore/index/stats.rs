use super::pl::InvertedIndex;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Aggregates derived once from an [`InvertedIndex`].
#[derive(Debug, Clone)]
pub struct CollectionStats {
    // total number of documents
    document_count: usize,
    // total document length in tokens
    total_tokens: u64,
    // average document length
    average_document_length: f64,
    // the number of documents in the collection containing the term
    document_frequency: HashMap<String, u32>,
    // the number of times the term occurs in the whole collection
    term_occurrences: HashMap<String, u64>,
}

pub struct IndexStats {
    pub document_count: usize,
    pub total_tokens: u64,
    pub average_document_length: f64,
    pub term_count: usize,
    // most frequent terms first
    pub term_freq: Vec<(String, u64)>,
}

impl CollectionStats {
    pub fn from_index(index: &InvertedIndex) -> Self {
        let mut document_frequency = HashMap::with_capacity(index.get_term_count());
        let mut term_occurrences = HashMap::with_capacity(index.get_term_count());
        let mut total_tokens = 0u64;
        for (term, postings) in index.terms() {
            let occurrences: u64 = postings.values().map(|&tf| tf as u64).sum();
            document_frequency.insert(term.clone(), postings.len() as u32);
            term_occurrences.insert(term.clone(), occurrences);
            total_tokens += occurrences;
        }
        let document_count = index.get_document_count();
        let average_document_length = if document_count > 0 {
            total_tokens as f64 / document_count as f64
        } else {
            0.0
        };
        CollectionStats {
            document_count,
            total_tokens,
            average_document_length,
            document_frequency,
            term_occurrences,
        }
    }

    pub fn get_document_count(&self) -> usize {
        self.document_count
    }

    pub fn get_total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn get_average_document_length(&self) -> f64 {
        self.average_document_length
    }

    // 0 for a term that never occurs
    pub fn get_document_frequency(&self, term: &str) -> u32 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    // 0 for a term that never occurs
    pub fn get_term_occurences_num(&self, term: &str) -> u64 {
        self.term_occurrences.get(term).copied().unwrap_or(0)
    }

    pub fn summary(&self, top_terms: usize) -> IndexStats {
        let mut term_freq: Vec<(String, u64)> = self.term_occurrences
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();
        term_freq.sort_by_key(|(term, count)| (Reverse(*count), term.clone()));
        term_freq.truncate(top_terms);
        IndexStats {
            document_count: self.document_count,
            total_tokens: self.total_tokens,
            average_document_length: self.average_document_length,
            term_count: self.document_frequency.len(),
            term_freq,
        }
    }
}
