//! Test-only port and observer implementations used by unit and behaviour
//! tests across the workspace.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{
    DatabaseFunctions, DimensionEvent, EmployeeSkill, MemoryDatabase, PortError, RoleId,
    ScoreObserver, UserId, UserProject, UserRole,
};

/// Drive a future to completion on a fresh current-thread Tokio runtime.
///
/// # Panics
/// Panics when the runtime cannot be constructed.
#[expect(clippy::expect_used, reason = "tests should fail fast when the runtime cannot start")]
pub fn block_on_for_tests<F>(future: F) -> F::Output
where
    F: Future,
{
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build Tokio runtime")
        .block_on(future)
}

/// Port that fails lookups for selected users and delegates the rest.
#[derive(Debug, Default)]
pub struct FailingDatabase {
    inner: MemoryDatabase,
    failing: HashSet<UserId>,
    unavailable: bool,
}

impl FailingDatabase {
    /// Wrap `inner`, failing no users yet.
    #[must_use]
    pub fn new(inner: MemoryDatabase) -> Self {
        Self {
            inner,
            failing: HashSet::new(),
            unavailable: false,
        }
    }

    /// Fail every lookup for `user_id` with a recoverable error.
    #[must_use]
    pub fn failing_user(mut self, user_id: UserId) -> Self {
        self.failing.insert(user_id);
        self
    }

    /// Fail every lookup with [`PortError::Unavailable`].
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn check(&self, operation: &'static str, user_id: UserId) -> Result<(), PortError> {
        if self.unavailable {
            return Err(PortError::Unavailable {
                message: "connection refused".to_owned(),
            });
        }
        if self.failing.contains(&user_id) {
            return Err(PortError::Lookup {
                operation,
                user_id,
                message: "simulated failure".to_owned(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DatabaseFunctions for FailingDatabase {
    async fn user_roles(&self, user_id: UserId) -> Result<Vec<UserRole>, PortError> {
        self.check("roles", user_id)?;
        self.inner.user_roles(user_id).await
    }

    async fn user_projects(&self, user_id: UserId) -> Result<Vec<UserProject>, PortError> {
        self.check("projects", user_id)?;
        self.inner.user_projects(user_id).await
    }

    async fn user_skills(&self, user_id: UserId) -> Result<Vec<EmployeeSkill>, PortError> {
        self.check("skills", user_id)?;
        self.inner.user_skills(user_id).await
    }
}

/// Port wrapper counting every lookup it forwards.
#[derive(Debug, Default)]
pub struct CountingDatabase<D> {
    inner: D,
    calls: AtomicUsize,
}

impl<D> CountingDatabase<D> {
    /// Wrap `inner` with a zeroed counter.
    #[must_use]
    pub const fn new(inner: D) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups forwarded so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<D: DatabaseFunctions> DatabaseFunctions for CountingDatabase<D> {
    async fn user_roles(&self, user_id: UserId) -> Result<Vec<UserRole>, PortError> {
        self.record();
        self.inner.user_roles(user_id).await
    }

    async fn user_projects(&self, user_id: UserId) -> Result<Vec<UserProject>, PortError> {
        self.record();
        self.inner.user_projects(user_id).await
    }

    async fn user_skills(&self, user_id: UserId) -> Result<Vec<EmployeeSkill>, PortError> {
        self.record();
        self.inner.user_skills(user_id).await
    }
}

/// Observer keeping every event in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<DimensionEvent>>,
    totals: Mutex<Vec<(UserId, RoleId, f64)>>,
}

impl RecordingObserver {
    /// Construct an observer with no recorded events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dimension events recorded so far.
    ///
    /// # Panics
    /// Panics when the event lock is poisoned.
    #[must_use]
    #[expect(clippy::expect_used, reason = "poisoned locks indicate a failed test")]
    pub fn events(&self) -> Vec<DimensionEvent> {
        self.events.lock().expect("events lock").clone()
    }

    /// Dimension events recorded for `user_id`.
    #[must_use]
    pub fn events_for(&self, user_id: UserId) -> Vec<DimensionEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.user_id == user_id)
            .collect()
    }

    /// Candidate totals recorded so far.
    ///
    /// # Panics
    /// Panics when the totals lock is poisoned.
    #[must_use]
    #[expect(clippy::expect_used, reason = "poisoned locks indicate a failed test")]
    pub fn totals(&self) -> Vec<(UserId, RoleId, f64)> {
        self.totals.lock().expect("totals lock").clone()
    }
}

impl ScoreObserver for RecordingObserver {
    fn dimension_scored(&self, event: &DimensionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(*event);
        }
    }

    fn candidate_scored(&self, user_id: UserId, role_id: RoleId, score: f64) {
        if let Ok(mut totals) = self.totals.lock() {
            totals.push((user_id, role_id, score));
        }
    }
}
