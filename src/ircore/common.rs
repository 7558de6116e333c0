use crate::ircore::error::Result;
use crate::ircore::ranking::bm25::Bm25Params;
use crate::ircore::ranking::lmd::LmParams;
use crate::ircore::ranking::vsm::VsmParams;

// dense internal document number, assigned in collection input order
pub type DocId = u32;

pub const INDEX_PATH: &str = ".rir/rir.idx";

#[derive(Debug, Clone, PartialEq)]
pub enum RankingAlgorithm {
    VectorSpaceModel(VsmParams),
    OkapiBM25(Bm25Params),
    LMD(LmParams),
}

impl RankingAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            RankingAlgorithm::VectorSpaceModel(_) => "VSM",
            RankingAlgorithm::OkapiBM25(_) => "BM25",
            RankingAlgorithm::LMD(_) => "LM",
        }
    }

    pub fn run_label(&self) -> String {
        format!("{}_Run", self.name())
    }

    pub fn run_file_name(&self) -> String {
        format!("{}_run.txt", self.name().to_lowercase())
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            RankingAlgorithm::VectorSpaceModel(_) => Ok(()),
            RankingAlgorithm::OkapiBM25(params) => params.validate(),
            RankingAlgorithm::LMD(params) => params.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ircore::error::Error;
    use crate::ircore::ranking::vsm::TfWeighting;

    #[test]
    fn test_run_names() {
        let vsm = RankingAlgorithm::VectorSpaceModel(VsmParams {
            weighting: TfWeighting::Raw,
            normalize_query: false,
        });
        assert_eq!(vsm.run_label(), "VSM_Run");
        assert_eq!(vsm.run_file_name(), "vsm_run.txt");
        let bm25 = RankingAlgorithm::OkapiBM25(Bm25Params { k1: 1.2, b: 0.75 });
        assert_eq!(bm25.run_label(), "BM25_Run");
        assert_eq!(bm25.run_file_name(), "bm25_run.txt");
        assert_eq!(RankingAlgorithm::LMD(LmParams { mu: 2000.0 }).name(), "LM");
    }

    #[test]
    fn test_validate() {
        assert!(RankingAlgorithm::OkapiBM25(Bm25Params { k1: 1.2, b: 0.75 }).validate().is_ok());
        let lm = RankingAlgorithm::LMD(LmParams { mu: 0.0 });
        assert!(matches!(lm.validate(), Err(Error::InvalidParameter { name: "mu", .. })));
    }
}
