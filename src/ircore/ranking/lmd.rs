use crate::ircore::error::{Error, Result};
use crate::ircore::index::Collection;
use crate::ircore::ranking::{query_term_freq, DocScore, ScoreAccumulator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmParams {
    // dirichlet prior strength
    pub mu: f64,
}

impl LmParams {
    pub fn validate(&self) -> Result<()> {
        if !self.mu.is_finite() || self.mu <= 0.0 {
            let reason = format!("must be positive, got {}", self.mu);
            return Err(Error::invalid_parameter("mu", reason));
        }
        Ok(())
    }
}

pub trait LanguageModelDirichlet {
    fn rank_lmd(&self, terms: &[String], params: &LmParams) -> Result<Vec<DocScore>>;
}

impl LanguageModelDirichlet for Collection {
    // LMD - query likelihood with Dirichlet smoothing
    // for all document d: sum over distinct query terms t of qt * ln(p(t|d))
    //   p(t|d) = (ftd + mu * lt / lc) / (ld + mu)
    //   qt: query term frequency
    //   ftd: frequency of term t in document d, 0 if absent
    //   lt: number of times term t occurs in the collection
    //   lc: total number of tokens in the collection
    //   ld: length of document d in tokens
    // A term with lt = 0 has p = 0 in every document. Such terms are dropped
    // before scoring, so they add 0 to every document alike. For every other
    // term p > 0 because mu > 0.
    //
    // A query with no terms left after normalization scores 0 everywhere, the
    // same as a query made only of unseen terms.
    //
    // Every document in the collection is scored, cost is N * distinct terms,
    // unlike VSM and BM25 which only walk the postings of query terms.
    fn rank_lmd(&self, terms: &[String], params: &LmParams) -> Result<Vec<DocScore>> {
        params.validate()?;
        let mu = params.mu;
        let index = self.index();
        let stats = self.stats();
        let lc = stats.get_total_tokens() as f64;
        let mut query_terms = vec![];
        for (term, qt) in query_term_freq(terms) {
            let lt = stats.get_term_occurences_num(term);
            if lt == 0 {
                log::debug!("lm: term {} never occurs in the collection, skipped", term);
                continue;
            }
            query_terms.push((term, qt as f64, mu * lt as f64 / lc));
        }
        let mut scores = ScoreAccumulator::new();
        for docid in index.doc_ids() {
            let ld = index.get_document_length(docid) as f64;
            let score = scores.init(docid);
            for &(term, qt, smoothing) in &query_terms {
                let ftd = index.get_term_frequency(term, docid) as f64;
                *score += qt * ((ftd + smoothing) / (ld + mu)).ln();
            }
        }
        Ok(scores.into_ranked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ircore::ranking::tests::{cat_collection, collection, split};

    const DEFAULT: LmParams = LmParams { mu: 2000.0 };

    #[test]
    fn test_rank_lmd() {
        let collection = cat_collection();
        let docs = collection.rank_lmd(&split("cat sat"), &DEFAULT).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].docid, 0);
        assert!(docs[0].score > docs[1].score);
        // 5 tokens in the collection, cat occurs once, sat twice
        let d1 = (401.0f64 / 2002.0).ln() + (801.0f64 / 2002.0).ln();
        let d2 = (400.0f64 / 2003.0).ln() + (801.0f64 / 2003.0).ln();
        let epsilon = 1e-9;
        assert!((docs[0].score - d1).abs() <= epsilon);
        assert!((docs[1].score - d2).abs() <= epsilon);
    }

    #[test]
    fn test_lmd_scores_every_document() {
        let collection = collection(&[
            ("D1", "cat sat"),
            ("D2", "bird flew"),
            ("D3", "fish swam away"),
            ("D4", "the on"),
        ]);
        let docs = collection.rank_lmd(&split("cat"), &DEFAULT).unwrap();
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[0].docid, 0);
        assert!(docs.iter().all(|d| d.score.is_finite() && d.score < 0.0));
    }

    #[test]
    fn test_lmd_unseen_terms_only() {
        let collection = collection(&[("D1", "cat sat"), ("D2", "bird"), ("D3", "fish swam away")]);
        let docs = collection.rank_lmd(&split("zebra zebra"), &DEFAULT).unwrap();
        // every document still listed, unseen terms add nothing, input order
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| d.score == 0.0));
        assert_eq!(docs.iter().map(|d| d.docid).collect::<Vec<_>>(), vec![0, 1, 2]);
        // mixing in an unseen term does not change the scores
        let with_unseen = collection.rank_lmd(&split("zebra cat"), &DEFAULT).unwrap();
        assert_eq!(with_unseen, collection.rank_lmd(&split("cat"), &DEFAULT).unwrap());
    }

    #[test]
    fn test_lmd_empty_query_scores_every_document() {
        let collection = collection(&[("D1", "cat sat"), ("D2", "the on"), ("D3", "bird")]);
        let docs = collection.rank_lmd(&[], &DEFAULT).unwrap();
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| d.score == 0.0));
        assert_eq!(docs.iter().map(|d| d.docid).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_lmd_length_bias_for_non_matching_docs() {
        let collection = collection(&[
            ("D1", "dog dog dog"),
            ("D2", "cat"),
            ("D3", "fish"),
        ]);
        let docs = collection.rank_lmd(&split("fish"), &DEFAULT).unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.docid).collect();
        // the match first, then shorter non-matching documents before longer ones
        assert_eq!(ids, vec![2, 1, 0]);
    }

    #[test]
    fn test_lmd_query_term_frequency() {
        let collection = cat_collection();
        let once = collection.rank_lmd(&split("cat"), &DEFAULT).unwrap();
        let twice = collection.rank_lmd(&split("cat cat"), &DEFAULT).unwrap();
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.docid, b.docid);
            assert!((b.score - 2.0 * a.score).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_lmd_invalid_mu() {
        let collection = cat_collection();
        for mu in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let res = collection.rank_lmd(&split("cat"), &LmParams { mu });
            assert!(matches!(res, Err(Error::InvalidParameter { name: "mu", .. })));
        }
    }
}
