//! Employees and the history records the data port returns for them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{ClientId, ProjectId, RoleId, SkillId, UserId};

/// Provenance tag marking a skill obtained through a certification.
pub const CERTIFICATION_ORIGIN: &str = "certificacion";

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// An employee who may be evaluated as a candidate for a role.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use staffing_core::EmployeeData;
///
/// let employee = EmployeeData::new(7, "Ana").with_hire_date("2021-03-01");
/// assert_eq!(employee.hired_on(), NaiveDate::from_ymd_opt(2021, 3, 1));
///
/// let unknown = EmployeeData::new(8, "Luis").with_hire_date("last spring");
/// assert!(unknown.hired_on().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeData {
    /// Employee identifier.
    #[serde(rename = "id_usuario")]
    pub id: UserId,
    /// Display name.
    #[serde(rename = "nombre", default)]
    pub name: String,
    /// Raw hire date as stored upstream; may be absent or malformed.
    #[serde(rename = "fecha_ingreso", default)]
    pub hire_date: Option<String>,
}

impl EmployeeData {
    /// Construct an employee without a hire date.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hire_date: None,
        }
    }

    /// Attach a raw hire date.
    #[must_use]
    pub fn with_hire_date(mut self, hire_date: impl Into<String>) -> Self {
        self.hire_date = Some(hire_date.into());
        self
    }

    /// Parse the hire date.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive
    /// `YYYY-MM-DDTHH:MM:SS` timestamps. Returns `None` when the date is
    /// missing or cannot be parsed.
    #[must_use]
    pub fn hired_on(&self) -> Option<NaiveDate> {
        self.hire_date.as_deref().and_then(parse_hire_date)
    }
}

fn parse_hire_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
        .or_else(|| {
            NAIVE_TIMESTAMP_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(trimmed, format)
                    .ok()
                    .map(|timestamp| timestamp.date())
            })
        })
}

/// A skill record in an employee's inventory.
///
/// `validado` and `fuentes` are optional upstream; an absent validation flag
/// counts as validated and an absent source count as a single source.
///
/// # Examples
/// ```
/// use staffing_core::EmployeeSkill;
///
/// let skill = EmployeeSkill::new(3, 4);
/// assert!(skill.is_validated());
/// assert_eq!(skill.source_count(), 1);
///
/// let rejected = EmployeeSkill::new(3, 4).with_validation(false);
/// assert!(!rejected.is_validated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSkill {
    /// Skill identifier.
    #[serde(rename = "id_habilidad")]
    pub skill_id: SkillId,
    /// Employee proficiency on the skill.
    #[serde(rename = "nivel_experiencia", default)]
    pub level: u32,
    /// Provenance tag, e.g. `certificacion`.
    #[serde(rename = "origen", default)]
    pub origin: Option<String>,
    /// Validation flag; only an explicit `false` marks the record invalid.
    #[serde(rename = "validado", default)]
    pub validated: Option<bool>,
    /// Number of independent records corroborating the skill.
    #[serde(rename = "fuentes", default)]
    pub sources: Option<u32>,
}

impl EmployeeSkill {
    /// Construct a skill record with default provenance and validation.
    #[must_use]
    pub const fn new(skill_id: SkillId, level: u32) -> Self {
        Self {
            skill_id,
            level,
            origin: None,
            validated: None,
            sources: None,
        }
    }

    /// Set the provenance tag.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Mark the record as obtained through a certification.
    #[must_use]
    pub fn certified(self) -> Self {
        self.with_origin(CERTIFICATION_ORIGIN)
    }

    /// Set the validation flag explicitly.
    #[must_use]
    pub const fn with_validation(mut self, validated: bool) -> Self {
        self.validated = Some(validated);
        self
    }

    /// Set the number of corroborating sources.
    #[must_use]
    pub const fn with_sources(mut self, sources: u32) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Whether the record is not explicitly marked invalid.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.validated != Some(false)
    }

    /// Number of corroborating sources, defaulting to one.
    #[must_use]
    pub fn source_count(&self) -> u32 {
        self.sources.unwrap_or(1)
    }

    /// Whether the record comes from a certification.
    #[must_use]
    pub fn is_certification(&self) -> bool {
        self.origin.as_deref() == Some(CERTIFICATION_ORIGIN)
    }
}

/// A role the employee has held in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    /// Role identifier.
    #[serde(rename = "id_rol")]
    pub role_id: RoleId,
}

/// A project the employee has been associated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProject {
    /// Project identifier, when known.
    #[serde(rename = "id_proyecto", default)]
    pub project_id: Option<ProjectId>,
    /// Client that owned the project, when known.
    #[serde(rename = "id_cliente", default)]
    pub client_id: Option<ClientId>,
}

impl UserProject {
    /// A project association for the given client.
    #[must_use]
    pub const fn for_client(client_id: ClientId) -> Self {
        Self {
            project_id: None,
            client_id: Some(client_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2020-02-29", Some((2020, 2, 29)))]
    #[case("  2020-02-29 ", Some((2020, 2, 29)))]
    #[case("2021-06-15T09:30:00Z", Some((2021, 6, 15)))]
    #[case("2021-06-15T23:30:00-05:00", Some((2021, 6, 15)))]
    #[case("2021-06-15T09:30:00.250", Some((2021, 6, 15)))]
    #[case("2021-06-15 09:30:00", Some((2021, 6, 15)))]
    #[case("15/06/2021", None)]
    #[case("2021-02-30", None)]
    #[case("", None)]
    fn parses_supported_hire_dates(#[case] raw: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let employee = EmployeeData::new(1, "Ana").with_hire_date(raw);
        let expected_date =
            expected.and_then(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day));
        assert_eq!(employee.hired_on(), expected_date);
    }

    #[rstest]
    fn missing_hire_date_is_none() {
        assert!(EmployeeData::new(1, "Ana").hired_on().is_none());
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(true), true)]
    #[case(Some(false), false)]
    fn only_explicit_false_invalidates(#[case] flag: Option<bool>, #[case] expected: bool) {
        let mut skill = EmployeeSkill::new(1, 3);
        skill.validated = flag;
        assert_eq!(skill.is_validated(), expected);
    }

    #[rstest]
    fn certification_origin_is_detected() {
        assert!(EmployeeSkill::new(1, 3).certified().is_certification());
        assert!(!EmployeeSkill::new(1, 3).with_origin("cv").is_certification());
        assert!(!EmployeeSkill::new(1, 3).is_certification());
    }

    #[rstest]
    fn skill_defaults_apply_when_fields_missing() {
        let skill: EmployeeSkill =
            serde_json::from_str(r#"{"id_habilidad": 4, "nivel_experiencia": 2, "validado": null}"#)
                .expect("valid skill record");
        assert!(skill.is_validated());
        assert_eq!(skill.source_count(), 1);
        assert!(skill.origin.is_none());
    }
}
