//! Pairwise mutational correlation (P2) across aligned coding sequences.
//!
//! Alignment blocks stream out of an XMFA file into a pool of worker
//! threads; each worker compares every pair of genomes in its block, lag by
//! lag, and pushes one [`corr::CorrResults`] per pair onto a shared queue.
//! The [`report`] module drains that queue, bootstraps over genes and writes
//! a CSV report.

pub mod alignment;
pub mod cli;
pub mod codon;
pub mod commands;
pub mod config;
pub mod corr;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod utils;

pub use alignment::{Alignment, Sequence};
pub use corr::{CorrResult, CorrResults, StatisticType};
pub use error::ConfigError;
