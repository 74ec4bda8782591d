use crate::corr::{CorrResults, StatisticType};
use std::collections::BTreeMap;

/// Running mean and sample variance (Welford).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MeanVar {
    n: usize,
    mean: f64,
    m2: f64,
}

impl MeanVar {
    pub fn add(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn mean(&self) -> f64 {
        if self.n == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Unbiased sample variance; `NaN` below two values.
    pub fn variance(&self) -> f64 {
        if self.n < 2 {
            f64::NAN
        } else {
            self.m2 / (self.n - 1) as f64
        }
    }
}

/// One aggregated row of a replicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub lag: usize,
    pub mean: f64,
    pub variance: f64,
    pub n: usize,
    pub kind: StatisticType,
}

/// Aggregates per-block results of one pair, lag by lag.
#[derive(Debug, Default, Clone)]
pub struct Collector {
    stats: BTreeMap<(StatisticType, usize), MeanVar>,
}

impl Collector {
    pub fn add(&mut self, results: &CorrResults) {
        for record in results.results.iter().filter(|r| r.has_observations()) {
            self.stats
                .entry((record.kind, record.lag))
                .or_default()
                .add(record.mean);
            if record.kind == StatisticType::P2 && record.lag == 0 {
                self.stats
                    .entry((StatisticType::Ks, 0))
                    .or_default()
                    .add(record.mean);
            }
        }
    }

    /// `Ks` first, then `P2` by ascending lag.
    pub fn summaries(&self) -> Vec<Summary> {
        self.stats
            .iter()
            .map(|(&(kind, lag), mv)| Summary {
                lag,
                mean: mv.mean(),
                variance: mv.variance(),
                n: mv.n(),
                kind,
            })
            .collect()
    }
}
