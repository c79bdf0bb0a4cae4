//! Unit coverage for dimension applicability and weighting.
#![forbid(unsafe_code)]

use chrono::NaiveDate;
use rstest::{fixture, rstest};
use staffing_core::test_support::block_on_for_tests;
use staffing_core::{
    AgentWeights, Dimension, EmployeeData, EmployeeSkill, Evaluation, MemoryDatabase,
    ProjectContext, ProjectRole, RequiredSkill, UserHistory, UserProject,
};

use crate::SelectionAgent;

const CANDIDATE: u64 = 7;
const ROLE: u64 = 40;
const CLIENT: u64 = 900;

#[fixture]
fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
}

#[expect(clippy::expect_used, reason = "unit weights are always valid")]
fn evaluate(
    history: UserHistory,
    employee: &EmployeeData,
    role: &ProjectRole,
    reference_date: NaiveDate,
) -> Evaluation {
    let database = MemoryDatabase::new().with_user(CANDIDATE, history);
    let agent = SelectionAgent::new("unit", AgentWeights::uniform(1.0), database)
        .expect("uniform weights are valid")
        .with_reference_date(reference_date);
    block_on_for_tests(agent.calculate_compatibility(employee, role, &ProjectContext::default()))
        .expect("memory database lookups succeed")
}

#[rstest]
fn bare_candidate_only_scores_unconditional_dimensions(reference_date: NaiveDate) {
    let employee = EmployeeData::new(CANDIDATE, "Ana");
    let evaluation = evaluate(
        UserHistory::new(),
        &employee,
        &ProjectRole::new(ROLE),
        reference_date,
    );

    let present: Vec<Dimension> = evaluation.breakdown.iter().map(|(dim, _)| dim).collect();
    assert_eq!(
        present,
        vec![
            Dimension::CompletedProjects,
            Dimension::Certifications,
            Dimension::Versatility,
        ]
    );
    assert_eq!(evaluation.score, 0.0);
}

#[rstest]
#[case::iso_date("2024-05-31", true)]
#[case::timestamp("2021-06-01T08:30:00Z", true)]
#[case::garbage("desde siempre", false)]
fn tenure_requires_a_parseable_hire_date(
    reference_date: NaiveDate,
    #[case] hire_date: &str,
    #[case] present: bool,
) {
    let employee = EmployeeData::new(CANDIDATE, "Ana").with_hire_date(hire_date);
    let evaluation = evaluate(
        UserHistory::new(),
        &employee,
        &ProjectRole::new(ROLE),
        reference_date,
    );
    assert_eq!(evaluation.breakdown.contains(Dimension::Tenure), present);
}

#[rstest]
fn client_and_role_dimensions_appear_only_when_matched(reference_date: NaiveDate) {
    let employee = EmployeeData::new(CANDIDATE, "Ana");
    let role = ProjectRole::new(ROLE).with_client(CLIENT);

    let unmatched = evaluate(
        UserHistory::new().with_project(UserProject::for_client(CLIENT + 1)),
        &employee,
        &role,
        reference_date,
    );
    assert!(!unmatched.breakdown.contains(Dimension::PreviousClient));
    assert!(!unmatched.breakdown.contains(Dimension::SimilarRole));

    let matched = evaluate(
        UserHistory::new()
            .with_project(UserProject::for_client(CLIENT))
            .with_role(ROLE),
        &employee,
        &role,
        reference_date,
    );
    assert_eq!(matched.breakdown.get(Dimension::PreviousClient), Some(1.0));
    assert_eq!(matched.breakdown.get(Dimension::SimilarRole), Some(1.0));
}

#[rstest]
fn experience_level_requires_a_matched_skill(reference_date: NaiveDate) {
    let employee = EmployeeData::new(CANDIDATE, "Ana");
    let role = ProjectRole::new(ROLE).with_required_skill(RequiredSkill::new(1, 3));

    let missing = evaluate(
        UserHistory::new().with_skill(EmployeeSkill::new(2, 5)),
        &employee,
        &role,
        reference_date,
    );
    assert_eq!(missing.breakdown.get(Dimension::SkillMatch), Some(0.0));
    assert!(!missing.breakdown.contains(Dimension::ExperienceLevel));
    assert_eq!(missing.breakdown.get(Dimension::ComplementarySkills), Some(1.0));

    let present = evaluate(
        UserHistory::new().with_skill(EmployeeSkill::new(1, 3)),
        &employee,
        &role,
        reference_date,
    );
    assert_eq!(present.breakdown.get(Dimension::SkillMatch), Some(1.0));
    assert!(present.breakdown.contains(Dimension::ExperienceLevel));
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "assertions compare floating point values")]
fn invalidated_skills_are_ignored_by_breadth_dimensions(reference_date: NaiveDate) {
    let employee = EmployeeData::new(CANDIDATE, "Ana");
    let history = UserHistory::new()
        .with_skill(EmployeeSkill::new(1, 2).certified().with_sources(2))
        .with_skill(EmployeeSkill::new(2, 2).certified().with_validation(false))
        .with_skill(EmployeeSkill::new(3, 2));
    let evaluation = evaluate(history, &employee, &ProjectRole::new(ROLE), reference_date);

    let certifications = evaluation
        .breakdown
        .get(Dimension::Certifications)
        .unwrap_or_default();
    assert!((certifications - 1.0 / 3.0).abs() < 1e-12);
    let versatility = evaluation
        .breakdown
        .get(Dimension::Versatility)
        .unwrap_or_default();
    assert!((versatility - 2.0 / 15.0).abs() < 1e-12);
    assert_eq!(
        evaluation.breakdown.get(Dimension::MultiSourceSkills),
        Some(0.5)
    );
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "assertions compare floating point values")]
fn score_equals_breakdown_total(reference_date: NaiveDate) {
    let employee = EmployeeData::new(CANDIDATE, "Ana").with_hire_date("2022-01-15");
    let role = ProjectRole::new(ROLE)
        .with_client(CLIENT)
        .with_required_skill(RequiredSkill::new(1, 2).with_weight(2.0))
        .with_required_skill(RequiredSkill::new(2, 4));
    let history = UserHistory::new()
        .with_projects(4)
        .with_project(UserProject::for_client(CLIENT))
        .with_role(ROLE)
        .with_skill(EmployeeSkill::new(1, 3).with_sources(3))
        .with_skill(EmployeeSkill::new(5, 1).certified());
    let evaluation = evaluate(history, &employee, &role, reference_date);

    assert_eq!(evaluation.breakdown.len(), Dimension::ALL.len());
    assert!((evaluation.score - evaluation.breakdown.total()).abs() < 1e-12);
}

#[rstest]
#[expect(clippy::expect_used, reason = "non-negative profiles are always valid")]
fn agent_reports_its_weight_profile() {
    let weights = AgentWeights::zero().with_weight(Dimension::SkillMatch, 0.7);
    let agent = SelectionAgent::new("profile", weights, MemoryDatabase::new())
        .expect("non-negative profile is accepted");
    assert_eq!(agent.weights(), &weights);
    assert_eq!(agent.id(), "profile");
}
