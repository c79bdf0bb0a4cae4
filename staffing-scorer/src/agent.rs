//! Selection agent: compatibility scoring and candidate ranking.
//!
//! The agent pulls each candidate's roles, projects and skills from a
//! [`DatabaseFunctions`] port, turns them into ten normalized signals, weights
//! them with its [`AgentWeights`] and sums the contributions. Ranking scores a
//! pool candidate by candidate and keeps the best match.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use log::warn;
use staffing_core::{
    AgentEvaluationResult, AgentWeights, DatabaseFunctions, Dimension, DimensionEvent,
    EmployeeData, Evaluation, LogObserver, ProjectContext, ProjectRole, ScoreBreakdown,
    ScoreObserver, WeightsError,
};

use crate::ScoringError;
use crate::signals::{CandidateHistory, SignalInputs};

/// Scores candidates for project roles and selects the best match.
///
/// The agent is generic over its data port so callers can plug in a
/// production database, a snapshot, or an in-memory fake.
///
/// # Examples
///
/// ```rust
/// use staffing_core::{
///     AgentWeights, Dimension, EmployeeData, EmployeeSkill, MemoryDatabase, ProjectContext,
///     ProjectRole, RequiredSkill, UserHistory,
/// };
/// use staffing_scorer::SelectionAgent;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let database = MemoryDatabase::new()
///     .with_user(1, UserHistory::new().with_skill(EmployeeSkill::new(10, 3)))
///     .with_user(2, UserHistory::new());
/// let weights = AgentWeights::zero().with_weight(Dimension::SkillMatch, 1.0);
/// let agent = SelectionAgent::new("skills-only", weights, database)?;
///
/// let role = ProjectRole::new(5).with_required_skill(RequiredSkill::new(10, 3));
/// let candidates = [EmployeeData::new(1, "Ana"), EmployeeData::new(2, "Luis")];
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let winner = runtime
///     .block_on(agent.vote(&candidates, &role, &ProjectContext::default()))?
///     .expect("one candidate should win");
/// assert_eq!(winner.employee.id, 1);
/// assert_eq!(winner.score, 1.0);
/// # Ok(())
/// # }
/// ```
pub struct SelectionAgent<D> {
    id: String,
    weights: AgentWeights,
    database: D,
    observer: Arc<dyn ScoreObserver>,
    reference_date: Option<NaiveDate>,
}

impl<D> fmt::Debug for SelectionAgent<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionAgent")
            .field("id", &self.id)
            .field("weights", &self.weights)
            .field("reference_date", &self.reference_date)
            .finish_non_exhaustive()
    }
}

impl<D> SelectionAgent<D>
where
    D: DatabaseFunctions,
{
    /// Construct an agent that logs scoring events and measures tenure
    /// against the current date.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a coefficient is negative or not finite.
    pub fn new(
        id: impl Into<String>,
        weights: AgentWeights,
        database: D,
    ) -> Result<Self, WeightsError> {
        let validated = weights.validate()?;
        Ok(Self {
            id: id.into(),
            weights: validated,
            database,
            observer: Arc::new(LogObserver),
            reference_date: None,
        })
    }

    /// Replace the observer receiving per-dimension events.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ScoreObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Measure tenure against a fixed date instead of today.
    #[must_use]
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = Some(reference_date);
        self
    }

    /// Identifier of this agent.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Weight profile applied by this agent.
    #[must_use]
    pub const fn weights(&self) -> &AgentWeights {
        &self.weights
    }

    /// Compute the compatibility of `employee` with `role`.
    ///
    /// The candidate's roles, projects and skills are fetched together; the
    /// score is the sum of each applicable dimension's weight times its
    /// normalized signal, so it never exceeds [`AgentWeights::max_score`].
    ///
    /// # Errors
    /// Returns [`ScoringError::Port`] when any lookup fails.
    pub async fn calculate_compatibility(
        &self,
        employee: &EmployeeData,
        role: &ProjectRole,
        context: &ProjectContext,
    ) -> Result<Evaluation, ScoringError> {
        let history = self.load_history(employee).await?;
        let inputs = SignalInputs {
            employee,
            role,
            context,
            history: &history,
            reference_date: self.reference_date(),
        };
        let evaluation = self.weigh(employee, role, inputs.evaluate());
        self.observer.candidate_scored(employee.id, role.id, evaluation.score);
        Ok(evaluation)
    }

    /// Select the highest-scoring candidate for `role`.
    ///
    /// Returns `Ok(None)` when the pool is empty or no candidate could be
    /// scored. Ties keep the order of `candidates`.
    ///
    /// # Errors
    /// Candidates whose lookups fail individually are logged and skipped; an
    /// unreachable data port aborts the vote with [`ScoringError::Port`].
    pub async fn vote(
        &self,
        candidates: &[EmployeeData],
        role: &ProjectRole,
        context: &ProjectContext,
    ) -> Result<Option<AgentEvaluationResult>, ScoringError> {
        let ranking = self.rank(candidates, role, context).await?;
        Ok(ranking.into_iter().next())
    }

    /// Score every candidate and order them by descending score.
    ///
    /// Candidates are evaluated one at a time. The sort is stable, so equal
    /// scores keep the order of `candidates`.
    ///
    /// # Errors
    /// Same as [`SelectionAgent::vote`].
    pub async fn rank(
        &self,
        candidates: &[EmployeeData],
        role: &ProjectRole,
        context: &ProjectContext,
    ) -> Result<Vec<AgentEvaluationResult>, ScoringError> {
        let mut results = Vec::with_capacity(candidates.len());
        for employee in candidates {
            match self.calculate_compatibility(employee, role, context).await {
                Ok(evaluation) => {
                    results.push(AgentEvaluationResult::new(employee.clone(), evaluation));
                }
                Err(error) if error.is_recoverable() => {
                    warn!(
                        "agent {}: skipping user {} for role {}: {error}",
                        self.id, employee.id, role.id
                    );
                }
                Err(error) => return Err(error),
            }
        }
        results.sort_by(|left, right| right.score.total_cmp(&left.score));
        Ok(results)
    }

    async fn load_history(
        &self,
        employee: &EmployeeData,
    ) -> Result<CandidateHistory, ScoringError> {
        let (roles, projects, skills) = futures_util::try_join!(
            self.database.user_roles(employee.id),
            self.database.user_projects(employee.id),
            self.database.user_skills(employee.id),
        )?;
        Ok(CandidateHistory {
            roles,
            projects,
            skills,
        })
    }

    fn reference_date(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    #[expect(clippy::float_arithmetic, reason = "contributions are weighted signals")]
    fn weigh(
        &self,
        employee: &EmployeeData,
        role: &ProjectRole,
        signals: Vec<(Dimension, f64)>,
    ) -> Evaluation {
        let mut breakdown = ScoreBreakdown::new();
        let mut score = 0.0_f64;
        for (dimension, signal) in signals {
            let weight = self.weights.weight(dimension);
            let contribution = weight * signal;
            self.observer.dimension_scored(&DimensionEvent {
                user_id: employee.id,
                role_id: role.id,
                dimension,
                signal,
                weight,
                contribution,
            });
            breakdown.insert(dimension, contribution);
            score += contribution;
        }
        Evaluation { score, breakdown }
    }
}
