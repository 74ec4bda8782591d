pub mod p2;

pub use p2::{calc_p2_coding, CodonSite, P2Calculator, P2Params};

use serde::Serialize;

/// Kind of correlation statistic carried by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StatisticType {
    /// Diversity at lag 0, derived by the report.
    Ks,
    P2,
}

/// Statistic for one lag of one sequence pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrResult {
    /// Distance in base pairs.
    pub lag: usize,
    /// `NaN` when `n == 0`.
    pub mean: f64,
    pub n: usize,
    pub kind: StatisticType,
}

impl CorrResult {
    pub fn has_observations(&self) -> bool {
        self.n > 0 && !self.mean.is_nan()
    }
}

/// Every lag computed for one pair of genomes in one alignment block,
/// in ascending lag order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrResults {
    pub pair_id: String,
    pub results: Vec<CorrResult>,
}

impl CorrResults {
    pub fn new(pair_id: impl Into<String>) -> Self {
        Self {
            pair_id: pair_id.into(),
            results: Vec::new(),
        }
    }
}
