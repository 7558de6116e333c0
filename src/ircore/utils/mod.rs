pub mod serialize;
pub mod sparse_vector;
