// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Probation confirmation workflow engine
//!
//! Owns a record store and a clock, runs submissions through the stage
//! gate, the feedback schema and the transition function, and interprets
//! the resulting effects.

mod batch;
mod executor;
pub mod protocol;
mod workflow;

#[cfg(test)]
mod testing;

pub use batch::{run_batch, BatchError, BatchSummary};
pub use executor::{ExecuteError, Executor};
pub use probation_core::WorkflowError;
pub use workflow::{Dashboard, Workflow};
