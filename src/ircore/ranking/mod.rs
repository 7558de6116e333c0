pub mod vsm;
pub mod bm25;
pub mod lmd;
use vsm::VectorSpaceModel;
use bm25::OkapiBm25;
use lmd::LanguageModelDirichlet;

use crate::ircore::common::{DocId, RankingAlgorithm};
use crate::ircore::error::Result;
use crate::ircore::index::Collection;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DocScore {
    pub docid: DocId,
    pub score: f64,
}

pub trait Scorer {
    fn score(&self, terms: &[String], ranking: &RankingAlgorithm) -> Result<Vec<DocScore>>;
}

impl Scorer for Collection {
    fn score(&self, terms: &[String], ranking: &RankingAlgorithm) -> Result<Vec<DocScore>> {
        match ranking {
            RankingAlgorithm::VectorSpaceModel(params) => self.rank_vsm(terms, params),
            RankingAlgorithm::OkapiBM25(params) => self.rank_bm25(terms, params),
            RankingAlgorithm::LMD(params) => self.rank_lmd(terms, params),
        }
    }
}

// query term frequency, terms in sorted order so float sums are reproducible
pub(crate) fn query_term_freq(terms: &[String]) -> BTreeMap<&str, u32> {
    let mut query_term_freq: BTreeMap<&str, u32> = BTreeMap::new();
    for term in terms {
        query_term_freq.entry(term.as_str())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }
    query_term_freq
}

/// Per-document score totals.
///
/// Every document gets an explicit 0.0 entry before its first increment.
/// Ranking orders by descending score, then by ascending doc id, which is the
/// order documents were fed to the index.
#[derive(Debug, Default)]
pub struct ScoreAccumulator {
    scores: BTreeMap<DocId, f64>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        ScoreAccumulator::default()
    }

    pub fn init(&mut self, doc: DocId) -> &mut f64 {
        self.scores.entry(doc).or_insert(0.0)
    }

    pub fn add(&mut self, doc: DocId, value: f64) {
        *self.init(doc) += value;
    }

    pub fn scale(&mut self, factor: f64) {
        for score in self.scores.values_mut() {
            *score *= factor;
        }
    }

    pub fn into_ranked(self) -> Vec<DocScore> {
        let mut scores: Vec<DocScore> = self.scores
            .into_iter()
            .map(|(docid, score)| DocScore { docid, score })
            .collect();
        scores.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.docid.cmp(&b.docid)));
        scores
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ircore::doc::Document;

    pub fn split(text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|w| !["the", "on"].contains(w))
            .map(String::from)
            .collect()
    }

    pub fn collection(docs: &[(&str, &str)]) -> Collection {
        let docs: Vec<Document> = docs.iter()
            .map(|(id, text)| Document::new(id.to_string(), text.to_string()))
            .collect();
        Collection::build(&docs, &split).unwrap()
    }

    // "the cat sat" / "the dog sat on the mat"
    pub fn cat_collection() -> Collection {
        collection(&[("D1", "the cat sat"), ("D2", "the dog sat on the mat")])
    }

    #[test]
    fn test_query_term_freq() {
        let terms = split("sat cat sat");
        let qtf = query_term_freq(&terms);
        assert_eq!(qtf.into_iter().collect::<Vec<_>>(), vec![("cat", 1), ("sat", 2)]);
    }

    #[test]
    fn test_accumulator_order() {
        let mut acc = ScoreAccumulator::new();
        acc.add(3, 1.0);
        acc.add(1, 2.0);
        acc.init(2);
        acc.add(0, 1.0);
        acc.add(3, 1.0);
        let ranked = acc.into_ranked();
        let ids: Vec<DocId> = ranked.iter().map(|d| d.docid).collect();
        // 1 and 3 tie at 2.0, lower doc id first
        assert_eq!(ids, vec![1, 3, 0, 2]);
        assert_eq!(ranked[3].score, 0.0);
    }

    #[test]
    fn test_scorer_dispatch() {
        let collection = cat_collection();
        let terms = split("cat sat");
        for ranking in [
            RankingAlgorithm::VectorSpaceModel(vsm::VsmParams {
                weighting: vsm::TfWeighting::LengthNormalized,
                normalize_query: false,
            }),
            RankingAlgorithm::OkapiBM25(bm25::Bm25Params { k1: 1.2, b: 0.75 }),
            RankingAlgorithm::LMD(lmd::LmParams { mu: 2000.0 }),
        ] {
            let docs = collection.score(&terms, &ranking).unwrap();
            assert_eq!(docs.len(), 2);
            assert_eq!(docs[0].docid, 0);
            assert!(docs[0].score > docs[1].score);
            // no hidden state
            assert_eq!(docs, collection.score(&terms, &ranking).unwrap());
        }
    }

    #[test]
    fn test_empty_query() {
        let collection = cat_collection();
        let vsm = RankingAlgorithm::VectorSpaceModel(vsm::VsmParams {
            weighting: vsm::TfWeighting::Raw,
            normalize_query: false,
        });
        assert!(collection.score(&[], &vsm).unwrap().is_empty());
        let bm25 = RankingAlgorithm::OkapiBM25(bm25::Bm25Params { k1: 1.2, b: 0.75 });
        assert!(collection.score(&[], &bm25).unwrap().is_empty());
        // LM still lists every document, all at 0 in input order
        let lm = RankingAlgorithm::LMD(lmd::LmParams { mu: 2000.0 });
        let docs = collection.score(&[], &lm).unwrap();
        assert_eq!(
            docs,
            vec![DocScore { docid: 0, score: 0.0 }, DocScore { docid: 1, score: 0.0 }]
        );
    }

    #[test]
    fn test_collection_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Collection>();
    }
}
