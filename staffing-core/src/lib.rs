//! Core domain types for the staffing engine.
//!
//! The crate defines the data contracts consumed by selection agents: weight
//! profiles, employees and their skill records, project roles with their
//! required skills, the evaluation results agents produce, and the
//! [`DatabaseFunctions`] port through which agents read an employee's history.
//!
//! Serialized forms keep the field names used by the staffing database
//! (`id_usuario`, `habilidades_requeridas`, `antiguedad`, ...), so weight
//! profiles and snapshots can be exchanged as JSON without translation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod employee;
pub mod evaluation;
pub mod observer;
pub mod role;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod weights;

pub use employee::{EmployeeData, EmployeeSkill, UserProject, UserRole};
pub use evaluation::{AgentEvaluationResult, Evaluation, ScoreBreakdown};
pub use observer::{DimensionEvent, LogObserver, ScoreObserver};
pub use role::{ProjectContext, ProjectRole, RequiredSkill};
pub use store::{DatabaseFunctions, MemoryDatabase, PortError, UserHistory};
pub use weights::{AgentWeights, Dimension, WeightsError};

/// Identifier of an employee (`id_usuario`).
pub type UserId = u64;
/// Identifier of a role (`id_rol`).
pub type RoleId = u64;
/// Identifier of a skill (`id_habilidad`).
pub type SkillId = u64;
/// Identifier of a client (`id_cliente`).
pub type ClientId = u64;
/// Identifier of a project (`id_proyecto`).
pub type ProjectId = u64;
