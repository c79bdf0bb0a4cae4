//! Normalized signals behind each compatibility dimension.
//!
//! Every function returns a value in `0.0..=1.0`, or `None` when the
//! dimension does not apply to the candidate and must stay out of the
//! breakdown.

use chrono::NaiveDate;
use staffing_core::{
    Dimension, EmployeeData, EmployeeSkill, ProjectContext, ProjectRole, RequiredSkill,
    UserProject, UserRole,
};

/// Days after which tenure saturates (three years).
pub(crate) const TENURE_HORIZON_DAYS: i64 = 1095;
/// Project count at which project history saturates.
pub(crate) const PROJECT_SATURATION: usize = 10;
/// Certification count at which certifications saturate.
pub(crate) const CERTIFICATION_SATURATION: usize = 3;
/// Validated skill count at which versatility saturates.
pub(crate) const VERSATILITY_SATURATION: usize = 15;
/// Cap on the level ratio of a single matched skill.
pub(crate) const MAX_LEVEL_RATIO: f64 = 1.5;

/// History returned by the data port for one candidate.
#[derive(Debug, Clone, Default)]
pub(crate) struct CandidateHistory {
    pub(crate) roles: Vec<UserRole>,
    pub(crate) projects: Vec<UserProject>,
    pub(crate) skills: Vec<EmployeeSkill>,
}

/// Inputs shared by every signal for one (candidate, role) pair.
pub(crate) struct SignalInputs<'a> {
    pub(crate) employee: &'a EmployeeData,
    pub(crate) role: &'a ProjectRole,
    pub(crate) context: &'a ProjectContext,
    pub(crate) history: &'a CandidateHistory,
    pub(crate) reference_date: NaiveDate,
}

impl SignalInputs<'_> {
    /// Evaluate every applicable dimension in scoring order.
    pub(crate) fn evaluate(&self) -> Vec<(Dimension, f64)> {
        let matched = self.matched_skills();
        Dimension::ALL
            .into_iter()
            .filter_map(|dimension| {
                let signal = match dimension {
                    Dimension::Tenure => self.tenure(),
                    Dimension::CompletedProjects => Some(self.completed_projects()),
                    Dimension::PreviousClient => self.previous_client(),
                    Dimension::SkillMatch => self.skill_match(&matched),
                    Dimension::ExperienceLevel => experience_level(&matched),
                    Dimension::ComplementarySkills => self.complementary_skills(),
                    Dimension::SimilarRole => self.similar_role(),
                    Dimension::Certifications => Some(self.certifications()),
                    Dimension::Versatility => Some(self.versatility()),
                    Dimension::MultiSourceSkills => self.multi_source_skills(),
                };
                signal.map(|value| (dimension, value))
            })
            .collect()
    }

    /// Pair each required skill with the first employee record for it.
    fn matched_skills(&self) -> Vec<(&RequiredSkill, &EmployeeSkill)> {
        self.role
            .required_skills
            .iter()
            .filter_map(|required| {
                self.history
                    .skills
                    .iter()
                    .find(|skill| skill.skill_id == required.skill_id)
                    .map(|skill| (required, skill))
            })
            .collect()
    }

    fn validated_skills(&self) -> impl Iterator<Item = &EmployeeSkill> {
        self.history
            .skills
            .iter()
            .filter(|skill| skill.is_validated())
    }

    fn tenure(&self) -> Option<f64> {
        let hired_on = self.employee.hired_on()?;
        Some(tenure_ratio(hired_on, self.reference_date))
    }

    fn completed_projects(&self) -> f64 {
        saturating_ratio(self.history.projects.len(), PROJECT_SATURATION)
    }

    fn previous_client(&self) -> Option<f64> {
        let client_id = self.context.target_client(self.role)?;
        self.history
            .projects
            .iter()
            .any(|project| project.client_id == Some(client_id))
            .then_some(1.0)
    }

    #[expect(clippy::float_arithmetic, reason = "skill coverage is a ratio of importance sums")]
    fn skill_match(&self, matched: &[(&RequiredSkill, &EmployeeSkill)]) -> Option<f64> {
        if self.role.required_skills.is_empty() {
            return None;
        }
        let total: f64 = self
            .role
            .required_skills
            .iter()
            .map(RequiredSkill::importance)
            .sum();
        if total <= 0.0 {
            return Some(0.0);
        }
        let covered: f64 = matched
            .iter()
            .map(|(required, _)| required.importance())
            .sum();
        Some(unit_clamp(covered / total))
    }

    fn complementary_skills(&self) -> Option<f64> {
        let required = self.role.required_skills.len();
        if required == 0 {
            return None;
        }
        let extra = self
            .validated_skills()
            .filter(|skill| !self.role.requires(skill.skill_id))
            .count();
        Some(saturating_ratio(extra, required))
    }

    fn similar_role(&self) -> Option<f64> {
        self.history
            .roles
            .iter()
            .any(|held| held.role_id == self.role.id)
            .then_some(1.0)
    }

    fn certifications(&self) -> f64 {
        let certified = self
            .validated_skills()
            .filter(|skill| skill.is_certification())
            .count();
        saturating_ratio(certified, CERTIFICATION_SATURATION)
    }

    fn versatility(&self) -> f64 {
        saturating_ratio(self.validated_skills().count(), VERSATILITY_SATURATION)
    }

    fn multi_source_skills(&self) -> Option<f64> {
        let validated = self.validated_skills().count();
        if validated == 0 {
            return None;
        }
        let corroborated = self
            .validated_skills()
            .filter(|skill| skill.source_count() > 1)
            .count();
        Some(saturating_ratio(corroborated, validated))
    }
}

/// Depth of proficiency on matched skills, weighted by importance.
///
/// Each skill contributes `min(level / required, 1.5) × peso`; the sum is
/// divided by `1.5 × Σ peso` over the matched skills only.
#[expect(clippy::float_arithmetic, reason = "level depth is a weighted ratio of proficiencies")]
fn experience_level(matched: &[(&RequiredSkill, &EmployeeSkill)]) -> Option<f64> {
    if matched.is_empty() {
        return None;
    }
    let (achieved, attainable) = matched.iter().fold(
        (0.0_f64, 0.0_f64),
        |(earned, ceiling), (required, skill)| {
            let importance = required.importance();
            let ratio = level_ratio(skill.level, required.required_level);
            (
                earned + ratio * importance,
                ceiling + MAX_LEVEL_RATIO * importance,
            )
        },
    );
    if attainable <= 0.0 {
        return Some(0.0);
    }
    Some(unit_clamp(achieved / attainable))
}

/// Ratio of held to required level, capped at [`MAX_LEVEL_RATIO`].
///
/// A non-positive requirement is met by any level.
#[expect(clippy::float_arithmetic, reason = "level ratio divides proficiencies")]
pub(crate) fn level_ratio(level: u32, required_level: u32) -> f64 {
    if required_level == 0 {
        return MAX_LEVEL_RATIO;
    }
    (f64::from(level) / f64::from(required_level)).min(MAX_LEVEL_RATIO)
}

/// Whole days of tenure over the saturation horizon.
#[expect(clippy::float_arithmetic, reason = "tenure is a ratio of days")]
pub(crate) fn tenure_ratio(hired_on: NaiveDate, reference_date: NaiveDate) -> f64 {
    let days = reference_date
        .signed_duration_since(hired_on)
        .num_days()
        .clamp(0, TENURE_HORIZON_DAYS);
    let days_f64 = i32::try_from(days).map_or(0.0, f64::from);
    let horizon = i32::try_from(TENURE_HORIZON_DAYS).map_or(1.0, f64::from);
    days_f64 / horizon
}

/// `count / saturation`, clamped to `0.0..=1.0`.
#[expect(clippy::float_arithmetic, reason = "saturating counts are ratios")]
pub(crate) fn saturating_ratio(count: usize, saturation: usize) -> f64 {
    if saturation == 0 {
        return 0.0;
    }
    unit_clamp(count_to_f64(count) / count_to_f64(saturation))
}

fn count_to_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}

fn unit_clamp(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
