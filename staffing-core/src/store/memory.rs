//! In-memory [`DatabaseFunctions`] implementation backed by a hash map.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{DatabaseFunctions, PortError};
use crate::{EmployeeSkill, UserId, UserProject, UserRole};

/// Everything the data port knows about one employee.
///
/// Serialized as `roles`, `proyectos` and `habilidades`; the English
/// `projects` and `skills` are accepted on input. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserHistory {
    /// Roles the employee has held.
    #[serde(default)]
    pub roles: Vec<UserRole>,
    /// Projects the employee has been associated with.
    #[serde(rename = "proyectos", alias = "projects", default)]
    pub projects: Vec<UserProject>,
    /// Skill inventory.
    #[serde(rename = "habilidades", alias = "skills", default)]
    pub skills: Vec<EmployeeSkill>,
}

impl UserHistory {
    /// Construct an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a held role.
    #[must_use]
    pub fn with_role(mut self, role_id: crate::RoleId) -> Self {
        self.roles.push(UserRole { role_id });
        self
    }

    /// Add a project association.
    #[must_use]
    pub fn with_project(mut self, project: UserProject) -> Self {
        self.projects.push(project);
        self
    }

    /// Add several anonymous project associations.
    #[must_use]
    pub fn with_projects(mut self, count: usize) -> Self {
        self.projects
            .extend(std::iter::repeat_n(UserProject::default(), count));
        self
    }

    /// Add a skill record.
    #[must_use]
    pub fn with_skill(mut self, skill: EmployeeSkill) -> Self {
        self.skills.push(skill);
        self
    }
}

/// Port implementation holding every history in memory.
///
/// Unknown users yield empty lists. The store is intended for snapshots and
/// tests rather than production-sized datasets.
///
/// # Examples
/// ```
/// use staffing_core::{DatabaseFunctions, EmployeeSkill, MemoryDatabase, UserHistory};
///
/// let database = MemoryDatabase::new()
///     .with_user(1, UserHistory::new().with_skill(EmployeeSkill::new(3, 2)));
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let skills = runtime.block_on(database.user_skills(1))?;
/// assert_eq!(skills.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    users: HashMap<UserId, UserHistory>,
}

impl MemoryDatabase {
    /// Construct an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the history of `user_id`.
    pub fn insert(&mut self, user_id: UserId, history: UserHistory) {
        self.users.insert(user_id, history);
    }

    /// Insert a history while returning `self` for chaining.
    #[must_use]
    pub fn with_user(mut self, user_id: UserId, history: UserHistory) -> Self {
        self.insert(user_id, history);
        self
    }

    /// History recorded for `user_id`, if any.
    #[must_use]
    pub fn history(&self, user_id: UserId) -> Option<&UserHistory> {
        self.users.get(&user_id)
    }

    fn lookup<T: Clone>(&self, user_id: UserId, select: fn(&UserHistory) -> &Vec<T>) -> Vec<T> {
        self.users
            .get(&user_id)
            .map(|history| select(history).clone())
            .unwrap_or_default()
    }
}

impl FromIterator<(UserId, UserHistory)> for MemoryDatabase {
    fn from_iter<I: IntoIterator<Item = (UserId, UserHistory)>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl DatabaseFunctions for MemoryDatabase {
    async fn user_roles(&self, user_id: UserId) -> Result<Vec<UserRole>, PortError> {
        Ok(self.lookup(user_id, |history| &history.roles))
    }

    async fn user_projects(&self, user_id: UserId) -> Result<Vec<UserProject>, PortError> {
        Ok(self.lookup(user_id, |history| &history.projects))
    }

    async fn user_skills(&self, user_id: UserId) -> Result<Vec<EmployeeSkill>, PortError> {
        Ok(self.lookup(user_id, |history| &history.skills))
    }
}
