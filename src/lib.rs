//! Facade crate for the staffing engine.
//!
//! This crate re-exports the core domain types and the selection agent so
//! callers can depend on a single crate.

#![forbid(unsafe_code)]

pub use staffing_core::{
    AgentEvaluationResult, AgentWeights, DatabaseFunctions, Dimension, DimensionEvent,
    EmployeeData, EmployeeSkill, Evaluation, LogObserver, MemoryDatabase, PortError,
    ProjectContext, ProjectRole, RequiredSkill, ScoreBreakdown, ScoreObserver, UserHistory,
    UserProject, UserRole, WeightsError,
};
pub use staffing_scorer::{ScoringError, SelectionAgent};

#[cfg(feature = "test-support")]
pub use staffing_core::test_support;
