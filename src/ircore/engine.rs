use crate::ircore::common::RankingAlgorithm;
use crate::ircore::doc::{CorpusCfg, DocParser, Document};
use crate::ircore::error::{Error, Result};
use crate::ircore::index::{Collection, IndexStats, InvertedIndex};
use crate::ircore::query::Query;
use crate::ircore::ranking::Scorer;
use crate::ircore::run::RunWriter;
use crate::ircore::token::{Analyzer, NormalizerConfig};
use crate::ircore::utils::serialize;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct IndexFileRef<'a> {
    index: &'a InvertedIndex,
    normalizer: &'a NormalizerConfig,
}

#[derive(Deserialize)]
struct IndexFile {
    index: InvertedIndex,
    normalizer: NormalizerConfig,
}

/// An indexed collection plus the analyzer that produced its terms.
///
/// Queries always go through the same analyzer as the documents, including
/// after a reload from disk.
pub struct Engine {
    collection: Collection,
    analyzer: Analyzer,
}

impl Engine {
    pub fn build(docs: &[Document], normalizer: NormalizerConfig) -> Result<Self> {
        let analyzer = Analyzer::new(normalizer)?;
        let collection = Collection::build(docs, &analyzer)?;
        Ok(Engine { collection, analyzer })
    }

    pub fn build_index_from(
        path: &Path,
        corpus: &CorpusCfg,
        normalizer: NormalizerConfig,
    ) -> Result<Self> {
        let docs = DocParser::new(path, corpus).docs()?;
        Self::build(&docs, normalizer)
    }

    pub fn doc_count(&self) -> usize {
        self.collection.index().get_document_count()
    }

    pub fn get_normalizer(&self) -> &NormalizerConfig {
        self.analyzer.get_config()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let file: IndexFile = serialize::read_file(path)?;
        let analyzer = Analyzer::new(file.normalizer)?;
        let collection = Collection::from_index(file.index)?;
        log::info!(
            "index of {} documents loaded from {}",
            collection.index().get_document_count(),
            path.display()
        );
        Ok(Engine { collection, analyzer })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let file = IndexFileRef {
            index: self.collection.index(),
            normalizer: self.analyzer.get_config(),
        };
        serialize::write_file(path, &file)?;
        log::info!("index saved to {}", path.display());
        Ok(())
    }

    pub fn stats(&self, top_terms: usize) -> IndexStats {
        self.collection.stats().summary(top_terms)
    }

    /// Ranks the collection for `text`, best first, as (document id, score).
    pub fn exec_query(&self, text: &str, ranking: &RankingAlgorithm) -> Result<Vec<(&str, f64)>> {
        self.rank(&self.analyzer.analyze(text), ranking)
    }

    fn rank(&self, terms: &[String], ranking: &RankingAlgorithm) -> Result<Vec<(&str, f64)>> {
        let index = self.collection.index();
        let unknown = terms.iter().filter(|t| !index.contains_term(t)).count();
        if unknown > 0 {
            log::debug!("{} of {} query terms not in collection", unknown, terms.len());
        }
        self.collection
            .score(terms, ranking)?
            .into_iter()
            .map(|doc| {
                index
                    .get_document_name(doc.docid)
                    .map(|name| (name, doc.score))
                    .ok_or_else(|| Error::Corpus(format!("unknown document number {}", doc.docid)))
            })
            .collect()
    }

    /// Ranks every query and writes one TREC run to `writer`.
    pub fn write_run<W: Write>(
        &self,
        queries: &[Query],
        ranking: &RankingAlgorithm,
        top_k: usize,
        writer: W,
    ) -> Result<W> {
        ranking.validate()?;
        if top_k == 0 {
            return Err(Error::invalid_parameter("top_k", "must be at least 1"));
        }
        let mut run = RunWriter::new(writer, &ranking.run_label(), top_k);
        let mut lines = 0;
        for query in queries {
            let ranked = self.rank(&query.terms(&self.analyzer), ranking)?;
            let written = run.write_ranking(query.get_id(), &ranked)?;
            log::debug!(
                "query {}: {} ranked, {} written",
                query.get_id(),
                ranked.len(),
                written
            );
            lines += written;
        }
        log::info!("{}: {} queries, {} lines", run.get_label(), queries.len(), lines);
        Ok(run.finish()?)
    }
}
