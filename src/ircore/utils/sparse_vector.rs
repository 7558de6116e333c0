use std::collections::BTreeMap;

// term -> weight, ordered so norms are computed in a fixed order
pub type SparseVector = BTreeMap<String, f64>;

pub trait SparseVectorOp {
    fn vec_len(&self) -> f64;
    fn vec_set(&mut self, term: &str, value: f64);
}

impl SparseVectorOp for SparseVector {
    fn vec_len(&self) -> f64 {
        self.values().map(|v| v * v).sum::<f64>().sqrt()
    }
    fn vec_set(&mut self, term: &str, value: f64) {
        self.insert(term.to_owned(), value);
    }
}
