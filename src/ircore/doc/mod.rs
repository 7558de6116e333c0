pub mod cfg;
pub mod cranfield;
pub mod dir;
pub mod doc_parser;
pub mod jsonlines;
pub mod text;

pub use cfg::{CorpusCfg, CorpusFormat};
pub use doc_parser::DocParser;

#[derive(PartialEq, Debug, Clone)]
pub struct Document {
    id: String,
    content: String,
}

impl Document {
    pub fn new(id: String, content: String) -> Self {
        Document { id, content }
    }
    pub fn get_id(&self) -> &str {
        &self.id
    }
    pub fn get_content(&self) -> &str {
        &self.content
    }
}
