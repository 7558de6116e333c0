//! YAML configuration for indexing and run generation.
//!
//! Every section is optional. Ranking defaults (k1 = 1.2, b = 0.75,
//! mu = 2000) live here and nowhere else: the scorers take their parameters
//! explicitly.

use crate::ircore::common::RankingAlgorithm;
use crate::ircore::doc::CorpusCfg;
use crate::ircore::error::{Error, Result};
use crate::ircore::ranking::bm25::Bm25Params;
use crate::ircore::ranking::lmd::LmParams;
use crate::ircore::ranking::vsm::{TfWeighting, VsmParams};
use crate::ircore::token::NormalizerConfig;
use crate::ircore::doc::text;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingCfg {
    pub vsm: VsmParams,
    pub bm25: Bm25Params,
    pub lm: LmParams,
}

impl Default for RankingCfg {
    fn default() -> Self {
        RankingCfg {
            vsm: VsmParams {
                weighting: TfWeighting::LengthNormalized,
                normalize_query: false,
            },
            bm25: Bm25Params { k1: 1.2, b: 0.75 },
            lm: LmParams { mu: 2000.0 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunCfg {
    pub top_k: usize,
    pub output_dir: PathBuf,
}

impl Default for RunCfg {
    fn default() -> Self {
        RunCfg {
            top_k: 100,
            output_dir: PathBuf::from("Outputs"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusCfg,
    pub normalizer: NormalizerConfig,
    pub ranking: RankingCfg,
    pub run: RunCfg,
}

impl Config {
    pub fn from_str(cfg_str: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(cfg_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::info!("loading configuration from {}", path.display());
        Self::from_str(&text::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.normalizer.validate()?;
        for algorithm in self.algorithms() {
            algorithm.validate()?;
        }
        if self.run.top_k == 0 {
            return Err(Error::invalid_parameter("top_k", "must be at least 1"));
        }
        Ok(())
    }

    pub fn vsm(&self) -> RankingAlgorithm {
        RankingAlgorithm::VectorSpaceModel(self.ranking.vsm)
    }

    pub fn bm25(&self) -> RankingAlgorithm {
        RankingAlgorithm::OkapiBM25(self.ranking.bm25)
    }

    pub fn lm(&self) -> RankingAlgorithm {
        RankingAlgorithm::LMD(self.ranking.lm)
    }

    pub fn algorithms(&self) -> Vec<RankingAlgorithm> {
        vec![self.vsm(), self.bm25(), self.lm()]
    }
}
