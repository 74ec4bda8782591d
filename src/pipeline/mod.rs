pub mod threading;

pub use threading::Pipeline;

use crate::error::ConfigError;

/// Worker-pool settings, passed explicitly to [`Pipeline::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub num_workers: usize,
    /// Capacity of the alignment and result queues, per worker.
    pub channel_capacity: usize,
}

impl PipelineConfig {
    pub fn new(num_workers: usize) -> Result<Self, ConfigError> {
        if num_workers == 0 {
            return Err(ConfigError::InvalidWorkerCount);
        }
        Ok(Self {
            num_workers,
            channel_capacity: 2,
        })
    }

    /// One worker per available core; 0 or `None` means auto-detect.
    pub fn from_requested(requested: Option<usize>) -> Self {
        let num_workers = match requested {
            Some(n) if n > 0 => n,
            _ => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        };
        Self {
            num_workers,
            channel_capacity: 2,
        }
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    pub(crate) fn queue_bound(&self) -> usize {
        self.num_workers * self.channel_capacity
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    pub blocks: u64,
    pub results: u64,
    pub mates_found: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineStats {
    pub alignments_read: usize,
    pub blocks_processed: u64,
    pub results_emitted: u64,
    pub mates_found: u64,
    pub workers: usize,
}

impl PipelineStats {
    fn absorb(&mut self, worker: &WorkerStats) {
        self.blocks_processed += worker.blocks;
        self.results_emitted += worker.results;
        self.mates_found += worker.mates_found;
        self.workers += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_workers() {
        assert_eq!(PipelineConfig::new(0), Err(ConfigError::InvalidWorkerCount));
        assert_eq!(PipelineConfig::new(3).unwrap().queue_bound(), 6);
    }

    #[test]
    fn auto_detects_cores() {
        assert!(PipelineConfig::from_requested(None).num_workers >= 1);
        assert!(PipelineConfig::from_requested(Some(0)).num_workers >= 1);
        assert_eq!(PipelineConfig::from_requested(Some(5)).num_workers, 5);
    }
}
