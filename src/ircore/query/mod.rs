use crate::ircore::doc::Document;
use crate::ircore::token::Normalize;

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    id: String,
    text: String,
}

impl Query {
    pub fn new(id: String, text: String) -> Self {
        Query { id, text }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    // normalized terms, repeats kept
    pub fn terms<N: Normalize + ?Sized>(&self, normalizer: &N) -> Vec<String> {
        normalizer.normalize(&self.text)
    }
}

impl From<Document> for Query {
    fn from(doc: Document) -> Self {
        Query::new(doc.get_id().to_string(), doc.get_content().to_string())
    }
}
