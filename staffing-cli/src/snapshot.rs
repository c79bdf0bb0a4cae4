//! Staffing snapshots: a role, its project and the candidate pool.

use std::io::BufReader;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use staffing_core::{
    AgentWeights, EmployeeData, EmployeeSkill, MemoryDatabase, ProjectContext, ProjectRole,
    UserHistory, UserId, UserProject, UserRole,
};

use crate::CliError;
use crate::fs::open_utf8_file;

/// Weight applied to every dimension when no profile is supplied.
pub(crate) const DEFAULT_WEIGHT: f64 = 0.1;

/// Everything needed to rank candidates for one role.
///
/// ```json
/// {
///   "role": {
///     "id_rol": 4,
///     "habilidades_requeridas": [{ "id_habilidad": 9, "nivel_requerido": 3 }]
///   },
///   "project": { "id_cliente": 12 },
///   "candidates": [{
///     "id_usuario": 1,
///     "nombre": "Ana",
///     "roles": [{ "id_rol": 4 }],
///     "proyectos": [{ "id_cliente": 12 }],
///     "habilidades": [{ "id_habilidad": 9, "nivel_experiencia": 3 }]
///   }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Snapshot {
    pub(crate) role: ProjectRole,
    #[serde(default)]
    pub(crate) project: ProjectContext,
    #[serde(default)]
    pub(crate) candidates: Vec<SnapshotCandidate>,
}

/// A candidate alongside the history the data port would return.
///
/// History keys follow [`UserHistory`], including its English aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SnapshotCandidate {
    #[serde(rename = "id_usuario")]
    pub(crate) id: UserId,
    #[serde(rename = "nombre", default)]
    pub(crate) name: String,
    #[serde(rename = "fecha_ingreso", default)]
    pub(crate) hire_date: Option<String>,
    #[serde(default)]
    pub(crate) roles: Vec<UserRole>,
    #[serde(rename = "proyectos", alias = "projects", default)]
    pub(crate) projects: Vec<UserProject>,
    #[serde(rename = "habilidades", alias = "skills", default)]
    pub(crate) skills: Vec<EmployeeSkill>,
}

impl SnapshotCandidate {
    fn into_parts(self) -> (EmployeeData, UserHistory) {
        let employee = EmployeeData {
            id: self.id,
            name: self.name,
            hire_date: self.hire_date,
        };
        let history = UserHistory {
            roles: self.roles,
            projects: self.projects,
            skills: self.skills,
        };
        (employee, history)
    }
}

impl Snapshot {
    /// Split the snapshot into the candidate pool and an in-memory port
    /// serving their histories.
    pub(crate) fn into_pool(self) -> (Vec<EmployeeData>, MemoryDatabase) {
        let mut database = MemoryDatabase::new();
        let employees = self
            .candidates
            .into_iter()
            .map(|candidate| {
                let (employee, history) = candidate.into_parts();
                database.insert(employee.id, history);
                employee
            })
            .collect();
        (employees, database)
    }
}

/// Load a JSON-encoded [`Snapshot`] from disk.
pub(crate) fn load_snapshot(path: &Utf8Path) -> Result<Snapshot, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a weight profile, falling back to a uniform profile when no path is
/// configured.
pub(crate) fn load_weights(path: Option<&Utf8Path>) -> Result<AgentWeights, CliError> {
    let Some(weights_path) = path else {
        return Ok(AgentWeights::uniform(DEFAULT_WEIGHT));
    };
    let file = open_utf8_file(weights_path).map_err(|source| CliError::OpenInput {
        path: weights_path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseWeights {
        path: weights_path.to_path_buf(),
        source,
    })
}
