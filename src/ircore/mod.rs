pub mod common;
pub mod error;
pub mod config;
pub mod token;
pub mod index;
pub mod ranking;
pub mod doc;
pub mod query;
pub mod run;
pub mod engine;
pub mod utils;

pub use common::{DocId, RankingAlgorithm};
pub use error::{Error, Result};
