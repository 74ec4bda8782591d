use super::{PipelineConfig, PipelineStats, WorkerStats};
use crate::alignment::{Alignment, MateMap};
use crate::corr::{CorrResults, P2Calculator};
use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Sends the worker's id when dropped, so the coordinator hears about a
/// worker even if it unwinds.
struct DoneSignal {
    tx: Sender<usize>,
    worker: usize,
}

impl Drop for DoneSignal {
    fn drop(&mut self) {
        let _ = self.tx.send(self.worker);
    }
}

/// A running P2 computation: one reader thread feeding alignment blocks to
/// `num_workers` calculator threads, plus a coordinator that closes the
/// result queue once every worker has reported done.
///
/// Drain [`Pipeline::results`] until it disconnects, then call
/// [`Pipeline::finish`] to surface reader errors and worker panics.
pub struct Pipeline {
    results: Receiver<CorrResults>,
    reader: thread::JoinHandle<Result<usize>>,
    workers: Vec<thread::JoinHandle<WorkerStats>>,
    coordinator: thread::JoinHandle<()>,
}

impl Pipeline {
    pub fn start<I>(
        source: I,
        calculator: Arc<P2Calculator>,
        mates: Option<Arc<MateMap>>,
        config: &PipelineConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Alignment>>,
        I::IntoIter: Send + 'static,
    {
        let num_workers = config.num_workers.max(1);
        let (aln_tx, aln_rx) = bounded::<Alignment>(config.queue_bound());
        let (res_tx, res_rx) = bounded::<CorrResults>(config.queue_bound());
        let (done_tx, done_rx) = bounded::<usize>(num_workers);

        let source = source.into_iter();
        let reader = thread::Builder::new()
            .name("alignment-reader".to_string())
            .spawn(move || read_alignments(source, aln_tx))
            .context("Failed to spawn alignment reader thread")?;

        let mut workers = Vec::with_capacity(num_workers);
        for id in 0..num_workers {
            let aln_rx = aln_rx.clone();
            let res_tx = res_tx.clone();
            let done = DoneSignal {
                tx: done_tx.clone(),
                worker: id,
            };
            let calculator = Arc::clone(&calculator);
            let mates = mates.clone();

            let handle = thread::Builder::new()
                .name(format!("p2-worker-{}", id))
                .spawn(move || {
                    let _done = done;
                    run_worker(&aln_rx, &res_tx, &calculator, mates.as_deref())
                })
                .with_context(|| format!("Failed to spawn worker {}", id))?;
            workers.push(handle);
        }
        drop(aln_rx);
        drop(done_tx);

        let coordinator = thread::Builder::new()
            .name("p2-coordinator".to_string())
            .spawn(move || {
                for _ in 0..num_workers {
                    match done_rx.recv() {
                        Ok(worker) => log::debug!("Worker {} finished", worker),
                        Err(_) => break,
                    }
                }
                // Workers have dropped their senders; this closes the queue.
                drop(res_tx);
            })
            .context("Failed to spawn coordinator thread")?;

        log::debug!("Started P2 pipeline with {} workers", num_workers);

        Ok(Self {
            results: res_rx,
            reader,
            workers,
            coordinator,
        })
    }

    /// The merged result stream. It disconnects once all workers are done.
    pub fn results(&self) -> &Receiver<CorrResults> {
        &self.results
    }

    pub fn finish(self) -> Result<PipelineStats> {
        // Unblocks any worker still pushing if the caller stopped draining.
        drop(self.results);

        let mut stats = PipelineStats::default();
        let mut panicked = 0;
        for (idx, handle) in self.workers.into_iter().enumerate() {
            match handle.join() {
                Ok(worker_stats) => stats.absorb(&worker_stats),
                Err(_) => {
                    log::error!("Worker {} panicked", idx);
                    panicked += 1;
                }
            }
        }

        self.coordinator
            .join()
            .map_err(|_| anyhow!("Pipeline coordinator panicked"))?;

        stats.alignments_read = self
            .reader
            .join()
            .map_err(|_| anyhow!("Alignment reader thread panicked"))??;

        if panicked > 0 {
            anyhow::bail!("{} of {} workers panicked", panicked, stats.workers + panicked);
        }

        Ok(stats)
    }
}

fn read_alignments<S>(source: S, tx: Sender<Alignment>) -> Result<usize>
where
    S: Iterator<Item = Result<Alignment>>,
{
    let mut count = 0;
    for alignment in source {
        let alignment = alignment?;
        if tx.send(alignment).is_err() {
            // Every worker is gone; finish() reports why.
            break;
        }
        count += 1;
    }
    Ok(count)
}

fn run_worker(
    alignments: &Receiver<Alignment>,
    results: &Sender<CorrResults>,
    calculator: &P2Calculator,
    mates: Option<&MateMap>,
) -> WorkerStats {
    let mut stats = WorkerStats::default();

    while let Ok(aln) = alignments.recv() {
        let mate = mates.and_then(|m| m.get(aln.gene_id()));
        if mate.is_some() {
            stats.mates_found += 1;
        }

        for res in calculator.calculate(&aln, mate) {
            if results.send(res).is_err() {
                return stats;
            }
            stats.results += 1;
        }
        stats.blocks += 1;
    }

    stats
}
