pub mod bootstrap;
pub mod collector;

pub use bootstrap::{bootstrap_pair, Replicate};
pub use collector::{Collector, MeanVar, Summary};

use crate::corr::{CorrResults, StatisticType};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::create_dir_all;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub num_boot: usize,
    pub seed: u64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            num_boot: 1000,
            seed: 1,
        }
    }
}

/// Per-block results grouped by pair ID.
#[derive(Debug, Default)]
pub struct PairCollection {
    pairs: BTreeMap<String, Vec<CorrResults>>,
    received: u64,
}

impl PairCollection {
    pub fn add(&mut self, results: CorrResults) {
        self.received += 1;
        self.pairs
            .entry(results.pair_id.clone())
            .or_default()
            .push(results);
    }

    pub fn num_pairs(&self) -> usize {
        self.pairs.len()
    }

    pub fn received(&self) -> u64 {
        self.received
    }

    /// Bootstraps every pair in pair-ID order with a single seeded RNG.
    pub fn replicates(mut self, options: &ReportOptions) -> Vec<(String, Vec<Replicate>)> {
        let mut rng = StdRng::seed_from_u64(options.seed);
        let mut out = Vec::with_capacity(self.pairs.len());
        for (pair_id, contributions) in self.pairs.iter_mut() {
            contributions.sort_by(bootstrap::canonical_cmp);
            let reps = bootstrap_pair(contributions, options.num_boot, &mut rng);
            out.push((pair_id.clone(), reps));
        }
        out
    }
}

/// Drains `results` until every sender has gone away.
pub fn collect(results: &Receiver<CorrResults>) -> Result<PairCollection> {
    let progress = ProgressBarBuilder::new("Collecting correlation results")
        .with_template("{spinner:.green} [{elapsed_precise}] {msg} ({pos} received)")
        .with_tick()
        .build()?;

    let mut collection = PairCollection::default();
    for res in results.iter() {
        collection.add(res);
        progress.inc(1);
    }

    progress.finish_with_message(format!(
        "Collected {} results for {} genome pairs",
        collection.received(),
        collection.num_pairs()
    ));
    Ok(collection)
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    pair: &'a str,
    l: usize,
    m: f64,
    v: f64,
    n: usize,
    t: StatisticType,
    b: &'a str,
}

/// Writes `pair,l,m,v,n,t,b` rows for every pair and replicate.
pub fn write_report(
    collection: PairCollection,
    output: &Path,
    options: &ReportOptions,
) -> Result<usize> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directory '{}'", parent.display())
            })?;
        }
    }

    let progress = ProgressBarBuilder::new("Bootstrapping pairs")
        .with_template("{spinner:.green} [{elapsed_precise}] [{wide_bar}] {pos}/{len} {msg}")
        .with_progress_bar()
        .build()?;
    progress.set_length(collection.num_pairs() as u64);

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("Failed to create output file '{}'", output.display()))?;

    let mut rows = 0;
    for (pair_id, replicates) in collection.replicates(options) {
        for rep in &replicates {
            for s in &rep.summaries {
                writer.serialize(Row {
                    pair: &pair_id,
                    l: s.lag,
                    m: s.mean,
                    v: s.variance,
                    n: s.n,
                    t: s.kind,
                    b: &rep.label,
                })?;
                rows += 1;
            }
        }
        progress.inc(1);
    }

    // An empty run still gets a header line.
    if rows == 0 {
        writer.write_record(["pair", "l", "m", "v", "n", "t", "b"])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    progress.finish_with_message(format!("Wrote {} rows to {}", rows, output.display()));
    Ok(rows)
}

/// Sink for a pipeline: drains the result stream, then bootstraps and
/// writes the report.
pub fn collect_write(
    results: &Receiver<CorrResults>,
    output: &Path,
    options: &ReportOptions,
) -> Result<usize> {
    let collection = collect(results)?;
    write_report(collection, output, options)
}
