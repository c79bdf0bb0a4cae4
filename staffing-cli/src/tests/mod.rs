//! Shared test harness modules for the staffing CLI.
#![expect(clippy::panic, reason = "Tests assert panic branches to surface unexpected CLI outcomes")]

use super::*;

mod helpers;
