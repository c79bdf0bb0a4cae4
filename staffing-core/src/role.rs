//! Project roles, their required skills and the project being staffed.

use serde::{Deserialize, Serialize};

use crate::{ClientId, ProjectId, RoleId, SkillId};

/// A skill a role expects, with the proficiency and importance it carries.
///
/// # Examples
/// ```
/// use staffing_core::RequiredSkill;
///
/// let skill = RequiredSkill::new(5, 3);
/// assert_eq!(skill.importance(), 1.0);
/// assert_eq!(skill.with_weight(2.5).importance(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    /// Skill identifier.
    #[serde(rename = "id_habilidad")]
    pub skill_id: SkillId,
    /// Expected proficiency.
    #[serde(rename = "nivel_requerido", default = "default_required_level")]
    pub required_level: u32,
    /// Importance within the role; `1.0` when absent.
    #[serde(rename = "peso", default)]
    pub weight: Option<f64>,
}

const fn default_required_level() -> u32 {
    1
}

impl RequiredSkill {
    /// Construct a requirement with the default importance.
    #[must_use]
    pub const fn new(skill_id: SkillId, required_level: u32) -> Self {
        Self {
            skill_id,
            required_level,
            weight: None,
        }
    }

    /// Set the importance of the requirement.
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Importance of the requirement, defaulting to `1.0`.
    #[must_use]
    pub fn importance(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// The role a candidate is evaluated for.
///
/// Required skills are expected to be populated by the caller; agents never
/// fetch them separately.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectRole {
    /// Role identifier.
    #[serde(rename = "id_rol")]
    pub id: RoleId,
    /// Client the role is staffed for, when the role records it.
    #[serde(rename = "id_cliente", default)]
    pub client_id: Option<ClientId>,
    /// Skills the role requires; order is irrelevant.
    #[serde(rename = "habilidades_requeridas", default)]
    pub required_skills: Vec<RequiredSkill>,
}

impl ProjectRole {
    /// Construct a role without requirements.
    #[must_use]
    pub const fn new(id: RoleId) -> Self {
        Self {
            id,
            client_id: None,
            required_skills: Vec::new(),
        }
    }

    /// Set the client the role is staffed for.
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Add a required skill.
    #[must_use]
    pub fn with_required_skill(mut self, skill: RequiredSkill) -> Self {
        self.required_skills.push(skill);
        self
    }

    /// Whether the role lists `skill_id` among its requirements.
    #[must_use]
    pub fn requires(&self, skill_id: SkillId) -> bool {
        self.required_skills
            .iter()
            .any(|skill| skill.skill_id == skill_id)
    }
}

/// The project a role belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectContext {
    /// Project identifier, when known.
    #[serde(rename = "id_proyecto", default)]
    pub project_id: Option<ProjectId>,
    /// Client that owns the project, when known.
    #[serde(rename = "id_cliente", default)]
    pub client_id: Option<ClientId>,
}

impl ProjectContext {
    /// A project context for the given client.
    #[must_use]
    pub const fn for_client(client_id: ClientId) -> Self {
        Self {
            project_id: None,
            client_id: Some(client_id),
        }
    }

    /// Client to match against an employee's history.
    ///
    /// A client recorded on the role takes precedence over the project's.
    #[must_use]
    pub const fn target_client(&self, role: &ProjectRole) -> Option<ClientId> {
        match role.client_id {
            Some(client_id) => Some(client_id),
            None => self.client_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn role_reports_required_skills() {
        let role = ProjectRole::new(1)
            .with_required_skill(RequiredSkill::new(10, 2))
            .with_required_skill(RequiredSkill::new(11, 3));
        assert!(role.requires(10));
        assert!(!role.requires(12));
    }

    #[rstest]
    #[case(Some(4), Some(9), Some(4))]
    #[case(None, Some(9), Some(9))]
    #[case(None, None, None)]
    fn role_client_takes_precedence(
        #[case] role_client: Option<ClientId>,
        #[case] project_client: Option<ClientId>,
        #[case] expected: Option<ClientId>,
    ) {
        let mut role = ProjectRole::new(1);
        role.client_id = role_client;
        let context = ProjectContext {
            project_id: None,
            client_id: project_client,
        };
        assert_eq!(context.target_client(&role), expected);
    }

    #[rstest]
    fn required_skill_weight_defaults_to_one() {
        let skill: RequiredSkill =
            serde_json::from_str(r#"{"id_habilidad": 2, "nivel_requerido": 3}"#)
                .expect("valid requirement");
        assert_eq!(skill.importance(), 1.0);
        assert_eq!(skill.required_level, 3);
    }
}
