use thiserror::Error;

/// Problems with user-supplied settings, reported before any input is read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--codon-position should be in the range of 1 to 4, got {0}")]
    InvalidCodonPosition(u8),

    #[error("Unsupported genetic code table '{0}' (supported: 1, 4, 11)")]
    UnknownGeneticCode(String),

    #[error("--max-corr-length should be at most {max}, got {0}", max = crate::types::MAX_CORR_LENGTH)]
    MaxCorrLengthTooLarge(usize),

    #[error("Number of workers must be at least 1")]
    InvalidWorkerCount,
}
