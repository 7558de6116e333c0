use super::cfg::{CorpusCfg, CorpusFormat};
use super::dir::DirIter;
use super::{cranfield, jsonlines, text, Document};
use crate::ircore::error::Result;
use crate::ircore::query::Query;
use std::path::{Path, PathBuf};

pub struct DocParser {
    path: PathBuf,
    cfg: CorpusCfg,
}

impl DocParser {
    pub fn new(path: &Path, cfg: &CorpusCfg) -> Self {
        DocParser {
            path: path.to_path_buf(),
            cfg: cfg.clone(),
        }
    }

    pub fn get_config(&self) -> &CorpusCfg {
        &self.cfg
    }

    pub fn docs(&self) -> Result<Vec<Document>> {
        let docs = match self.cfg.format {
            CorpusFormat::Cranfield => cranfield::parse_documents(&self.read()?)?,
            CorpusFormat::JsonLines => {
                jsonlines::parse_jsonlines(&self.path, &self.read()?, &self.cfg)
            }
            CorpusFormat::Text => DirIter::new(&self.path).collect(),
        };
        log::info!("{} documents loaded from {}", docs.len(), self.path.display());
        Ok(docs)
    }

    pub fn queries(&self) -> Result<Vec<Query>> {
        let records = match self.cfg.format {
            CorpusFormat::Cranfield => {
                let records = cranfield::parse_queries(&self.read()?)?;
                log::info!("{} queries loaded from {}", records.len(), self.path.display());
                records
            }
            _ => self.docs()?,
        };
        let queries = records.into_iter().map(Query::from);
        if self.cfg.renumber_queries {
            log::info!("query ids renumbered from 1");
            return Ok(queries
                .enumerate()
                .map(|(n, q)| Query::new((n + 1).to_string(), q.get_text().to_string()))
                .collect());
        }
        Ok(queries.collect())
    }

    fn read(&self) -> Result<String> {
        Ok(text::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cranfield_files() {
        let cfg = CorpusCfg::default();
        let docs = DocParser::new(Path::new("./sample_corpus/cranfield/cran.all.xml"), &cfg)
            .docs()
            .unwrap();
        assert_eq!(docs.len(), 6);
        assert_eq!(docs[0].get_id(), "1");
        let queries = DocParser::new(Path::new("./sample_corpus/cranfield/cran.qry.xml"), &cfg)
            .queries()
            .unwrap();
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[0].get_id(), "1");
    }

    #[test]
    fn test_jsonlines_file() {
        let cfg = CorpusCfg {
            format: CorpusFormat::JsonLines,
            ..CorpusCfg::default()
        };
        let dp = DocParser::new(Path::new("./sample_corpus/jsonlines/docs.jsonl"), &cfg);
        assert_eq!(dp.get_config().format, CorpusFormat::JsonLines);
        let docs = dp.docs().unwrap();
        assert_eq!(docs.len(), 3);
        let queries = DocParser::new(Path::new("./sample_corpus/jsonlines/queries.jsonl"), &cfg)
            .queries()
            .unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].get_id(), "q2");
    }

    #[test]
    fn test_renumber_queries() {
        let path = Path::new("./sample_corpus/cranfield/cran.qry.xml");
        let cfg = CorpusCfg {
            renumber_queries: true,
            ..CorpusCfg::default()
        };
        let queries = DocParser::new(path, &cfg).queries().unwrap();
        let ids: Vec<&str> = queries.iter().map(|q| q.get_id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(queries[2].get_text().starts_with("boundary layer flow"));
        // source ids are kept by default
        let queries = DocParser::new(path, &CorpusCfg::default()).queries().unwrap();
        assert_eq!(queries[2].get_id(), "4");
    }

    #[test]
    fn test_missing_file() {
        let cfg = CorpusCfg::default();
        let res = DocParser::new(Path::new("./sample_corpus/non-exist.xml"), &cfg).docs();
        assert!(res.is_err());
    }
}
