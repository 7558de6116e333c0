use crate::ircore::error::{Error, Result};
use crate::ircore::index::Collection;
use crate::ircore::ranking::{query_term_freq, DocScore, ScoreAccumulator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    // weight saturation factor
    pub k1: f64,
    // level of normalization of document length, 0 none, 1 full
    pub b: f64,
}

impl Bm25Params {
    pub fn validate(&self) -> Result<()> {
        if !self.k1.is_finite() || self.k1 <= 0.0 {
            let reason = format!("must be positive, got {}", self.k1);
            return Err(Error::invalid_parameter("k1", reason));
        }
        if !(0.0..=1.0).contains(&self.b) {
            let reason = format!("must be within [0, 1], got {}", self.b);
            return Err(Error::invalid_parameter("b", reason));
        }
        Ok(())
    }
}

pub trait OkapiBm25 {
    fn rank_bm25(&self, terms: &[String], params: &Bm25Params) -> Result<Vec<DocScore>>;
}

impl OkapiBm25 for Collection {
    // The BM25 algorithm
    // for all term t sum idf * qt * ftd*(k1+1)/(ftd + k1*(1-b+b*(ld/lavg)))
    //   idf: log2((N - Nt + 0.5)/(Nt + 0.5) + 1), not clamped
    //   qt: query term frequency
    //   ftd: frequency of term t in document d
    //   ld: length of document d in tokens
    //   lavg: average document length
    //   N: total count of documents
    //   Nt: count of documents that contain term t
    fn rank_bm25(&self, terms: &[String], params: &Bm25Params) -> Result<Vec<DocScore>> {
        params.validate()?;
        if terms.is_empty() {
            return Ok(vec![]);
        }
        let Bm25Params { k1, b } = *params;
        let k1plus1 = k1 + 1.0;
        let index = self.index();
        let stats = self.stats();
        let document_count = stats.get_document_count() as f64;
        let lavg = stats.get_average_document_length();
        let mut scores = ScoreAccumulator::new();
        for (term, qt) in query_term_freq(terms) {
            let postings = match index.get_postings(term) {
                Some(postings) => postings,
                None => {
                    log::debug!("bm25: skip unseen term {}", term);
                    continue;
                }
            };
            let nt = stats.get_document_frequency(term) as f64;
            let idf = ((document_count - nt + 0.5) / (nt + 0.5) + 1.0).log2();
            let qt = qt as f64;
            for (&docid, &ftd) in postings {
                // lavg > 0 here, a posting implies a non-empty document
                let ld = index.get_document_length(docid) as f64;
                let ftd = ftd as f64;
                let k1_b_ld_lavg = k1 * (1.0 - b + b * (ld / lavg));
                scores.add(docid, idf * ftd * k1plus1 * qt / (ftd + k1_b_ld_lavg));
            }
        }
        Ok(scores.into_ranked())
    }
}
