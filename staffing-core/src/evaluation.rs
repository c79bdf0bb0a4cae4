//! Scores produced by selection agents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Dimension, EmployeeData};

/// Per-dimension contributions to a compatibility score.
///
/// Only dimensions that were evaluated appear; a dimension skipped for lack of
/// data is absent rather than recorded as zero.
///
/// # Examples
/// ```
/// use staffing_core::{Dimension, ScoreBreakdown};
///
/// let mut breakdown = ScoreBreakdown::new();
/// breakdown.insert(Dimension::SkillMatch, 0.3);
/// breakdown.insert(Dimension::Tenure, 0.05);
/// assert_eq!(breakdown.get(Dimension::SkillMatch), Some(0.3));
/// assert!(breakdown.get(Dimension::PreviousClient).is_none());
/// assert!((breakdown.total() - 0.35).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBreakdown {
    entries: BTreeMap<Dimension, f64>,
}

impl ScoreBreakdown {
    /// Construct an empty breakdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the contribution of `dimension`, replacing any previous value.
    pub fn insert(&mut self, dimension: Dimension, contribution: f64) {
        self.entries.insert(dimension, contribution);
    }

    /// Contribution of `dimension`, if it was evaluated.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.entries.get(&dimension).copied()
    }

    /// Whether `dimension` was evaluated.
    #[must_use]
    pub fn contains(&self, dimension: Dimension) -> bool {
        self.entries.contains_key(&dimension)
    }

    /// Iterate over evaluated dimensions in scoring order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.entries
            .iter()
            .map(|(&dimension, &contribution)| (dimension, contribution))
    }

    /// Number of evaluated dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no dimension was evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all contributions.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}

/// Score and breakdown for one candidate against one role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// Total compatibility score.
    pub score: f64,
    /// Contribution of each evaluated dimension.
    pub breakdown: ScoreBreakdown,
}

/// A candidate paired with its evaluation, as produced for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentEvaluationResult {
    /// The evaluated employee.
    #[serde(rename = "empleado")]
    pub employee: EmployeeData,
    /// Total compatibility score.
    #[serde(rename = "puntuacion")]
    pub score: f64,
    /// Contribution of each evaluated dimension.
    #[serde(rename = "desglose")]
    pub breakdown: ScoreBreakdown,
}

impl AgentEvaluationResult {
    /// Pair an employee with its evaluation.
    #[must_use]
    pub fn new(employee: EmployeeData, evaluation: Evaluation) -> Self {
        Self {
            employee,
            score: evaluation.score,
            breakdown: evaluation.breakdown,
        }
    }
}
