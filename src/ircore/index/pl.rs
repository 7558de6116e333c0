use crate::ircore::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// doc id -> number of times the term appears in that document
pub type Postings = HashMap<DocId, u32>;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InvertedIndex {
    // term -> postings, a doc is listed only if the term occurs in it
    postings_lists: HashMap<String, Postings>,
    // number of tokens of a document, doc id is used as vector index
    document_length: Vec<u32>,
    // external document ids, doc id is used as vector index
    document_names: Vec<String>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    fn next_doc_id(&self) -> DocId {
        self.document_length.len() as DocId
    }

    pub fn add_document(&mut self, name: &str, terms: &[String]) -> DocId {
        let doc_id = self.next_doc_id();
        self.document_length.push(terms.len() as u32);
        self.document_names.push(name.to_owned());
        for term in terms {
            match self.postings_lists.get_mut(term.as_str()) {
                Some(postings) => {
                    postings.entry(doc_id)
                        .and_modify(|count| *count += 1)
                        .or_insert(1);
                }
                None => {
                    self.postings_lists.insert(term.clone(), Postings::from([(doc_id, 1)]));
                }
            }
        }
        doc_id
    }

    // get: total number of documents
    pub fn get_document_count(&self) -> usize {
        self.document_length.len()
    }

    // get: document length, 0 for an unknown doc
    pub fn get_document_length(&self, doc: DocId) -> u32 {
        self.document_length.get(doc as usize).copied().unwrap_or(0)
    }

    pub fn get_document_lengths(&self) -> &[u32] {
        &self.document_length
    }

    pub fn get_document_name(&self, doc: DocId) -> Option<&str> {
        self.document_names.get(doc as usize).map(String::as_str)
    }

    pub fn get_postings(&self, term: &str) -> Option<&Postings> {
        self.postings_lists.get(term)
    }

    // get: term frequency in specified document, 0 when absent
    pub fn get_term_frequency(&self, term: &str, doc: DocId) -> u32 {
        self.postings_lists
            .get(term)
            .and_then(|postings| postings.get(&doc))
            .copied()
            .unwrap_or(0)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings_lists.contains_key(term)
    }

    // number of distinct terms
    pub fn get_term_count(&self) -> usize {
        self.postings_lists.len()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&String, &Postings)> {
        self.postings_lists.iter()
    }

    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> {
        0..self.next_doc_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_index_from_terms() {
        let mut idx = InvertedIndex::new();
        let doc_id = idx.add_document("d1", &terms(&["hello", "world", "hello"]));
        assert_eq!(doc_id, 0);
        let doc_id = idx.add_document("d2", &terms(&["hello", "rust"]));
        assert_eq!(doc_id, 1);
        assert_eq!(idx.get_document_count(), 2);
        assert_eq!(idx.get_term_count(), 3);
        assert_eq!(idx.get_document_length(0), 3);
        assert_eq!(idx.get_document_length(1), 2);
        assert_eq!(idx.get_term_frequency("hello", 0), 2);
        assert_eq!(idx.get_term_frequency("hello", 1), 1);
        assert_eq!(idx.get_term_frequency("world", 1), 0);
        assert_eq!(idx.get_document_name(1), Some("d2"));
        assert_eq!(idx.get_document_name(7), None);
        assert_eq!(idx.get_postings("rust"), Some(&Postings::from([(1, 1)])));
    }

    #[test]
    fn test_empty_document() {
        let mut idx = InvertedIndex::new();
        idx.add_document("empty", &[]);
        idx.add_document("d2", &terms(&["wing"]));
        assert_eq!(idx.get_document_count(), 2);
        assert_eq!(idx.get_document_length(0), 0);
        assert_eq!(idx.get_term_count(), 1);
        assert!(idx.terms().all(|(_, postings)| !postings.contains_key(&0)));
        assert_eq!(idx.doc_ids().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_lookup_does_not_create_terms() {
        let mut idx = InvertedIndex::new();
        idx.add_document("d1", &terms(&["wing"]));
        assert_eq!(idx.get_postings("missing"), None);
        assert_eq!(idx.get_term_frequency("missing", 0), 0);
        assert!(!idx.contains_term("missing"));
        assert_eq!(idx.get_term_count(), 1);
    }
}
