use crate::ircore::error::Result;
use crate::ircore::index::Collection;
use crate::ircore::ranking::{query_term_freq, DocScore, ScoreAccumulator};
use crate::ircore::utils::sparse_vector::{SparseVector, SparseVectorOp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TfWeighting {
    // tf * idf
    Raw,
    // tf / doclen * idf
    LengthNormalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VsmParams {
    pub weighting: TfWeighting,
    // divide scores by the euclidean norm of the query weight vector
    pub normalize_query: bool,
}

pub trait VectorSpaceModel {
    fn rank_vsm(&self, terms: &[String], params: &VsmParams) -> Result<Vec<DocScore>>;
}

impl VectorSpaceModel for Collection {
    // for all query term t present in the index: sum w_td * w_tq
    //   idf: log2(N / (Nt + 1)), may be zero or negative for common terms
    //   w_td: ftd * idf, or ftd / ld * idf when length normalized
    //   w_tq: qt * idf
    //   qt: query term frequency
    //   ftd: frequency of term t in document d
    //   ld: length of document d in tokens
    //   N: total count of documents
    //   Nt: count of documents that contain term t
    // Terms absent from the index are skipped, they add no weight on either side.
    fn rank_vsm(&self, terms: &[String], params: &VsmParams) -> Result<Vec<DocScore>> {
        if terms.is_empty() {
            return Ok(vec![]);
        }
        let index = self.index();
        let stats = self.stats();
        let document_count = stats.get_document_count() as f64;
        let mut query_weights = SparseVector::new();
        let mut scores = ScoreAccumulator::new();
        for (term, qt) in query_term_freq(terms) {
            let postings = match index.get_postings(term) {
                Some(postings) => postings,
                None => {
                    log::debug!("vsm: skip unseen term {}", term);
                    continue;
                }
            };
            let nt = stats.get_document_frequency(term) as f64;
            let idf = (document_count / (nt + 1.0)).log2();
            let w_tq = qt as f64 * idf;
            query_weights.vec_set(term, w_tq);
            for (&docid, &ftd) in postings {
                let tf = match params.weighting {
                    TfWeighting::Raw => ftd as f64,
                    TfWeighting::LengthNormalized => {
                        ftd as f64 / index.get_document_length(docid) as f64
                    }
                };
                scores.add(docid, tf * idf * w_tq);
            }
        }
        if params.normalize_query {
            let norm = query_weights.vec_len();
            if norm > 0.0 {
                scores.scale(1.0 / norm);
            }
        }
        Ok(scores.into_ranked())
    }
}
