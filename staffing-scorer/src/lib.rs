//! Compatibility scoring for staffing decisions.
//!
//! A [`SelectionAgent`] scores how well each candidate fits a project role
//! across ten weighted dimensions: tenure, completed projects, previous
//! client, skill match, experience level, complementary skills, similar role,
//! certifications, versatility, and multi-source skills. Each dimension yields
//! a normalized signal in `0.0..=1.0`; the agent multiplies it by its weight
//! and sums the contributions into a score with a per-dimension breakdown.
//!
//! Candidate history comes from a
//! [`DatabaseFunctions`](staffing_core::DatabaseFunctions) port, so the agent
//! runs unchanged against a production store, a JSON snapshot, or an
//! in-memory fake.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod agent;
mod error;
pub(crate) mod signals;

pub use agent::SelectionAgent;
pub use error::ScoringError;

#[cfg(test)]
mod tests;
