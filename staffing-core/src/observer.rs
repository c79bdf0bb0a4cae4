//! Observation hooks for per-dimension scoring events.
//!
//! Agents report every evaluated dimension to a [`ScoreObserver`]. The
//! default [`LogObserver`] forwards events to the `log` facade, one line per
//! dimension, so a verbose log level reproduces the full scoring trace.

use log::{debug, info};

use crate::{Dimension, RoleId, UserId};

/// One evaluated dimension for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionEvent {
    /// Candidate being scored.
    pub user_id: UserId,
    /// Role the candidate is scored against.
    pub role_id: RoleId,
    /// Dimension that was evaluated.
    pub dimension: Dimension,
    /// Normalized signal in `0.0..=1.0`.
    pub signal: f64,
    /// Coefficient applied to the signal.
    pub weight: f64,
    /// Contribution added to the total score.
    pub contribution: f64,
}

/// Receive scoring events from a selection agent.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so agents can be
/// shared across tasks.
pub trait ScoreObserver: Send + Sync {
    /// Called once for every dimension that contributes to a breakdown.
    fn dimension_scored(&self, event: &DimensionEvent);

    /// Called once per candidate after all dimensions are summed.
    fn candidate_scored(&self, user_id: UserId, role_id: RoleId, score: f64) {
        let _ = (user_id, role_id, score);
    }
}

/// Observer writing scoring events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ScoreObserver for LogObserver {
    fn dimension_scored(&self, event: &DimensionEvent) {
        debug!(
            "user {} role {}: {} signal={:.4} weight={:.4} contribution={:.4}",
            event.user_id,
            event.role_id,
            event.dimension,
            event.signal,
            event.weight,
            event.contribution
        );
    }

    fn candidate_scored(&self, user_id: UserId, role_id: RoleId, score: f64) {
        info!("user {user_id} role {role_id}: total score {score:.4}");
    }
}
