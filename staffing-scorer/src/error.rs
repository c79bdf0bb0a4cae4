//! Error types raised while scoring candidates.
#![forbid(unsafe_code)]

use staffing_core::PortError;
use thiserror::Error;

/// Errors raised while computing a compatibility score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Loading the candidate's history from the data port failed.
    #[error("failed to load candidate history: {0}")]
    Port(#[from] PortError),
}

impl ScoringError {
    /// Whether the failure only concerns the candidate being scored.
    ///
    /// Recoverable failures exclude the candidate from a ranking; the rest
    /// abort it.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Port(source) => source.is_recoverable(),
        }
    }
}
