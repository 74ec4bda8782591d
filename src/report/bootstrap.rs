use super::collector::{Collector, Summary};
use crate::corr::CorrResults;
use rand::rngs::StdRng;
use rand::Rng;
use std::cmp::Ordering;

pub const ALL_LABEL: &str = "all";

/// Aggregated summaries of one replicate of one pair.
#[derive(Debug, Clone)]
pub struct Replicate {
    pub label: String,
    pub summaries: Vec<Summary>,
}

/// The full-data replicate followed by `num_boot` resampled ones.
///
/// Each bootstrap replicate draws `contributions.len()` alignment-block
/// contributions with replacement.
pub fn bootstrap_pair(
    contributions: &[CorrResults],
    num_boot: usize,
    rng: &mut StdRng,
) -> Vec<Replicate> {
    let mut replicates = Vec::with_capacity(num_boot + 1);

    let mut all = Collector::default();
    for res in contributions {
        all.add(res);
    }
    replicates.push(Replicate {
        label: ALL_LABEL.to_string(),
        summaries: all.summaries(),
    });

    if contributions.is_empty() {
        return replicates;
    }

    for i in 0..num_boot {
        let mut collector = Collector::default();
        for _ in 0..contributions.len() {
            let idx = rng.gen_range(0..contributions.len());
            collector.add(&contributions[idx]);
        }
        replicates.push(Replicate {
            label: format!("boot_{}", i),
            summaries: collector.summaries(),
        });
    }

    replicates
}

/// Total order over a pair's contributions, so resampling does not depend
/// on the order the workers delivered them in.
pub(crate) fn canonical_cmp(a: &CorrResults, b: &CorrResults) -> Ordering {
    for (x, y) in a.results.iter().zip(&b.results) {
        let ord = x
            .lag
            .cmp(&y.lag)
            .then(x.n.cmp(&y.n))
            .then(x.mean.total_cmp(&y.mean));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.results.len().cmp(&b.results.len())
}
