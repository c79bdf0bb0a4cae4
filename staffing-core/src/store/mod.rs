//! Data access port for employee history.
//!
//! The [`DatabaseFunctions`] trait is the only side-effecting dependency of a
//! selection agent. Implementations wrap whatever persistence the surrounding
//! application uses; the agent issues plain awaited calls and performs no
//! caching or retries of its own.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::{EmployeeSkill, UserId, UserProject, UserRole};

mod memory;

pub use memory::{MemoryDatabase, UserHistory};

/// Errors returned by a [`DatabaseFunctions`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PortError {
    /// A lookup for one employee failed; other employees may still succeed.
    #[error("{operation} lookup for user {user_id} failed: {message}")]
    Lookup {
        /// Name of the failed lookup.
        operation: &'static str,
        /// Employee being looked up.
        user_id: UserId,
        /// Description supplied by the backend.
        message: String,
    },
    /// The backend cannot be reached at all.
    #[error("data source unavailable: {message}")]
    Unavailable {
        /// Description supplied by the backend.
        message: String,
    },
}

impl PortError {
    /// Whether the failure only concerns a single employee.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }
}

/// Read-only access to an employee's roles, projects and skills.
///
/// Implementations must be `Send + Sync` so agents can be shared across
/// tasks. A user without history should yield empty lists rather than an
/// error.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use staffing_core::{
///     DatabaseFunctions, EmployeeSkill, PortError, UserId, UserProject, UserRole,
/// };
///
/// struct NoHistory;
///
/// #[async_trait]
/// impl DatabaseFunctions for NoHistory {
///     async fn user_roles(&self, _user_id: UserId) -> Result<Vec<UserRole>, PortError> {
///         Ok(Vec::new())
///     }
///
///     async fn user_projects(&self, _user_id: UserId) -> Result<Vec<UserProject>, PortError> {
///         Ok(Vec::new())
///     }
///
///     async fn user_skills(&self, _user_id: UserId) -> Result<Vec<EmployeeSkill>, PortError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait DatabaseFunctions: Send + Sync {
    /// Roles the employee has held.
    async fn user_roles(&self, user_id: UserId) -> Result<Vec<UserRole>, PortError>;

    /// Projects the employee has been associated with.
    async fn user_projects(&self, user_id: UserId) -> Result<Vec<UserProject>, PortError>;

    /// The employee's skill inventory.
    async fn user_skills(&self, user_id: UserId) -> Result<Vec<EmployeeSkill>, PortError>;
}

#[async_trait]
impl<T> DatabaseFunctions for Arc<T>
where
    T: DatabaseFunctions + ?Sized,
{
    async fn user_roles(&self, user_id: UserId) -> Result<Vec<UserRole>, PortError> {
        self.as_ref().user_roles(user_id).await
    }

    async fn user_projects(&self, user_id: UserId) -> Result<Vec<UserProject>, PortError> {
        self.as_ref().user_projects(user_id).await
    }

    async fn user_skills(&self, user_id: UserId) -> Result<Vec<EmployeeSkill>, PortError> {
        self.as_ref().user_skills(user_id).await
    }
}
