//! Proptest strategies for selection agent property-based tests.
//!
//! Generated candidates, roles and weight profiles stay within small id
//! ranges so that skills, roles and clients overlap often enough to exercise
//! every dimension.

use chrono::NaiveDate;
use proptest::prelude::*;
use staffing_core::{
    AgentWeights, Dimension, EmployeeSkill, ProjectRole, RequiredSkill, UserHistory, UserProject,
};

/// Skill identifiers shared by employees and roles.
const SKILL_IDS: std::ops::Range<u64> = 1..8;
/// Client identifiers shared by projects and roles.
const CLIENT_IDS: std::ops::Range<u64> = 1..4;

/// Date every property measures tenure against.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Strategy for a weight profile with coefficients in `0.0..=max`.
pub fn weights_strategy(max: f64) -> impl Strategy<Value = AgentWeights> {
    proptest::collection::vec(0.0..=max, Dimension::ALL.len()).prop_map(|coefficients| {
        Dimension::ALL
            .into_iter()
            .zip(coefficients)
            .fold(AgentWeights::zero(), |weights, (dimension, weight)| {
                weights.with_weight(dimension, weight)
            })
    })
}

/// Strategy for a single employee skill record.
pub fn skill_strategy() -> impl Strategy<Value = EmployeeSkill> {
    (
        SKILL_IDS,
        0_u32..=10,
        any::<bool>(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(0_u32..=4),
    )
        .prop_map(|(skill_id, level, certified, validated, sources)| {
            let mut skill = EmployeeSkill::new(skill_id, level);
            if certified {
                skill = skill.certified();
            }
            skill.validated = validated;
            skill.sources = sources;
            skill
        })
}

/// Strategy for a candidate's roles, projects and skills.
pub fn history_strategy() -> impl Strategy<Value = UserHistory> {
    (
        proptest::collection::vec(1_u64..6, 0..4),
        proptest::collection::vec(proptest::option::of(CLIENT_IDS), 0..14),
        proptest::collection::vec(skill_strategy(), 0..20),
    )
        .prop_map(|(roles, clients, skills)| {
            let with_roles = roles
                .into_iter()
                .fold(UserHistory::new(), UserHistory::with_role);
            let with_projects = clients.into_iter().fold(with_roles, |acc, client_id| {
                acc.with_project(UserProject {
                    project_id: None,
                    client_id,
                })
            });
            skills.into_iter().fold(with_projects, UserHistory::with_skill)
        })
}

/// Strategy for a role with up to five required skills.
pub fn role_strategy() -> impl Strategy<Value = ProjectRole> {
    (
        1_u64..6,
        proptest::option::of(CLIENT_IDS),
        proptest::collection::vec((SKILL_IDS, 0_u32..=6, proptest::option::of(0.0..=3.0)), 0..5),
    )
        .prop_map(|(id, client, required)| {
            let mut base = ProjectRole::new(id);
            base.client_id = client;
            required
                .into_iter()
                .fold(base, |acc, (skill_id, level, weight)| {
                    let mut skill = RequiredSkill::new(skill_id, level);
                    skill.weight = weight;
                    acc.with_required_skill(skill)
                })
        })
}

/// Strategy for an optional hire date, well-formed or not.
pub fn hire_date_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        (0_i64..4000).prop_map(|days| {
            let hired_on = reference_date() - chrono::Duration::days(days);
            Some(hired_on.format("%Y-%m-%d").to_string())
        }),
        Just(Some("not a date".to_owned())),
    ]
}
