//! Weight profiles: one non-negative coefficient per compatibility dimension.
//!
//! A profile is a value object. Agents copy it at construction time and the
//! sum of its coefficients is the highest score any candidate can reach.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A compatibility dimension scored by a selection agent.
///
/// Variants are declared in scoring order, which is also their sort order in
/// a [`ScoreBreakdown`](crate::ScoreBreakdown).
///
/// # Examples
/// ```
/// use staffing_core::Dimension;
///
/// assert_eq!(Dimension::Tenure.as_str(), "antiguedad");
/// assert_eq!(Dimension::ALL.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// Time since the employee joined the company.
    #[serde(rename = "antiguedad")]
    Tenure,
    /// Number of projects the employee has worked on.
    #[serde(rename = "proyectos_completados")]
    CompletedProjects,
    /// Prior work for the client that owns the role.
    #[serde(rename = "cliente_prev")]
    PreviousClient,
    /// Share of required skills the employee holds.
    #[serde(rename = "match_habilidades")]
    SkillMatch,
    /// Proficiency depth on the matched skills.
    #[serde(rename = "nivel_experiencia")]
    ExperienceLevel,
    /// Validated skills beyond what the role requires.
    #[serde(rename = "habilidades_complementarias")]
    ComplementarySkills,
    /// Prior assignment to the same role.
    #[serde(rename = "rol_similar")]
    SimilarRole,
    /// Validated certifications.
    #[serde(rename = "certificaciones")]
    Certifications,
    /// Breadth of the validated skill inventory.
    #[serde(rename = "versatilidad")]
    Versatility,
    /// Skills corroborated by more than one source.
    #[serde(rename = "repeticion_habilidades")]
    MultiSourceSkills,
}

impl Dimension {
    /// Every dimension, in scoring order.
    pub const ALL: [Self; 10] = [
        Self::Tenure,
        Self::CompletedProjects,
        Self::PreviousClient,
        Self::SkillMatch,
        Self::ExperienceLevel,
        Self::ComplementarySkills,
        Self::SimilarRole,
        Self::Certifications,
        Self::Versatility,
        Self::MultiSourceSkills,
    ];

    /// Return the serialized key for this dimension.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tenure => "antiguedad",
            Self::CompletedProjects => "proyectos_completados",
            Self::PreviousClient => "cliente_prev",
            Self::SkillMatch => "match_habilidades",
            Self::ExperienceLevel => "nivel_experiencia",
            Self::ComplementarySkills => "habilidades_complementarias",
            Self::SimilarRole => "rol_similar",
            Self::Certifications => "certificaciones",
            Self::Versatility => "versatilidad",
            Self::MultiSourceSkills => "repeticion_habilidades",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`AgentWeights::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A coefficient was below zero.
    #[error("weight for {dimension} must not be negative")]
    Negative {
        /// Offending dimension.
        dimension: Dimension,
    },
    /// A coefficient was NaN or infinite.
    #[error("weight for {dimension} must be finite")]
    NonFinite {
        /// Offending dimension.
        dimension: Dimension,
    },
}

/// Coefficients applied to each compatibility dimension.
///
/// Keys missing from a serialized profile default to `0.0`.
///
/// # Examples
/// ```
/// use staffing_core::{AgentWeights, Dimension};
///
/// let weights = AgentWeights::zero()
///     .with_weight(Dimension::SkillMatch, 0.3)
///     .with_weight(Dimension::Tenure, 0.1)
///     .validate()?;
/// assert_eq!(weights.weight(Dimension::SkillMatch), 0.3);
/// assert!((weights.max_score() - 0.4).abs() < 1e-9);
/// # Ok::<(), staffing_core::WeightsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentWeights {
    #[serde(rename = "antiguedad")]
    tenure: f64,
    #[serde(rename = "proyectos_completados")]
    completed_projects: f64,
    #[serde(rename = "cliente_prev")]
    previous_client: f64,
    #[serde(rename = "match_habilidades")]
    skill_match: f64,
    #[serde(rename = "nivel_experiencia")]
    experience_level: f64,
    #[serde(rename = "habilidades_complementarias")]
    complementary_skills: f64,
    #[serde(rename = "rol_similar")]
    similar_role: f64,
    #[serde(rename = "certificaciones")]
    certifications: f64,
    #[serde(rename = "versatilidad")]
    versatility: f64,
    #[serde(rename = "repeticion_habilidades")]
    multi_source_skills: f64,
}

impl AgentWeights {
    /// A profile with every coefficient set to zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// A profile assigning the same coefficient to every dimension.
    #[must_use]
    pub fn uniform(weight: f64) -> Self {
        Dimension::ALL
            .into_iter()
            .fold(Self::zero(), |profile, dimension| {
                profile.with_weight(dimension, weight)
            })
    }

    /// Return the coefficient for `dimension`.
    #[must_use]
    pub const fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Tenure => self.tenure,
            Dimension::CompletedProjects => self.completed_projects,
            Dimension::PreviousClient => self.previous_client,
            Dimension::SkillMatch => self.skill_match,
            Dimension::ExperienceLevel => self.experience_level,
            Dimension::ComplementarySkills => self.complementary_skills,
            Dimension::SimilarRole => self.similar_role,
            Dimension::Certifications => self.certifications,
            Dimension::Versatility => self.versatility,
            Dimension::MultiSourceSkills => self.multi_source_skills,
        }
    }

    /// Set the coefficient for `dimension`, returning `self` for chaining.
    ///
    /// Values are stored as given; call [`AgentWeights::validate`] before use.
    #[must_use]
    pub const fn with_weight(mut self, dimension: Dimension, weight: f64) -> Self {
        let slot = match dimension {
            Dimension::Tenure => &mut self.tenure,
            Dimension::CompletedProjects => &mut self.completed_projects,
            Dimension::PreviousClient => &mut self.previous_client,
            Dimension::SkillMatch => &mut self.skill_match,
            Dimension::ExperienceLevel => &mut self.experience_level,
            Dimension::ComplementarySkills => &mut self.complementary_skills,
            Dimension::SimilarRole => &mut self.similar_role,
            Dimension::Certifications => &mut self.certifications,
            Dimension::Versatility => &mut self.versatility,
            Dimension::MultiSourceSkills => &mut self.multi_source_skills,
        };
        *slot = weight;
        self
    }

    /// Check every coefficient and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::NonFinite`] for NaN or infinite coefficients and
    /// [`WeightsError::Negative`] for coefficients below zero. The first
    /// offending dimension in scoring order is reported.
    pub fn validate(self) -> Result<Self, WeightsError> {
        for dimension in Dimension::ALL {
            let weight = self.weight(dimension);
            if !weight.is_finite() {
                return Err(WeightsError::NonFinite { dimension });
            }
            if weight < 0.0 {
                return Err(WeightsError::Negative { dimension });
            }
        }
        Ok(self)
    }

    /// Sum of all coefficients: the theoretical maximum score.
    #[must_use]
    pub fn max_score(&self) -> f64 {
        Dimension::ALL
            .into_iter()
            .map(|dimension| self.weight(dimension))
            .sum()
    }
}
