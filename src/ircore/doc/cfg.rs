use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    // <doc>/<top> XML records
    Cranfield,
    // one JSON object per line
    JsonLines,
    // a directory of plain text files, file name is the id
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusCfg {
    pub format: CorpusFormat,
    // json lines only
    pub id_field: String,
    pub fields: Vec<String>,
    // replace query ids with their 1-based position in the query file, for
    // Cranfield query sets whose <num> values skip numbers the qrels do not
    pub renumber_queries: bool,
}

impl Default for CorpusCfg {
    fn default() -> Self {
        CorpusCfg {
            format: CorpusFormat::Cranfield,
            id_field: String::from("id"),
            fields: vec![String::from("title"), String::from("text")],
            renumber_queries: false,
        }
    }
}
