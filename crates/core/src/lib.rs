// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! probation-core: Core library for probation confirmation reviews
//!
//! This crate provides:
//! - The employee record and its status / feedback slots
//! - The per-stage feedback schema and the stage gate
//! - A pure review transition state machine and the outcome rule
//! - The dashboard projection (filter, sort, partition by role)
//! - The `RecordStore` trait, clock abstraction and host configuration

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod clock;
pub mod config;
pub mod label;

// Domain (order matters for dependencies)
pub mod role;
pub mod status;
pub mod feedback;
pub mod schema;
pub mod outcome;
pub mod record;
pub mod effect;
pub mod error;
pub mod gate;
pub mod transition;
pub mod view;
pub mod store;

#[cfg(test)]
mod testing;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{Config, ConfigError};
pub use effect::{Effect, Event};
pub use error::WorkflowError;
pub use feedback::{
    Decision, DeptHeadFeedback, Feedback, HrHeadFeedback, Recommendation,
    ReportingManagerFeedback,
};
pub use gate::{form_for, is_actionable};
pub use label::ParseError;
pub use record::{ConsistencyError, EmployeeRecord, RecordId};
pub use role::{Role, Stage};
pub use schema::{FieldError, FieldKind, FieldProblem, FieldSpec, Review, ReviewForm, ValidationError};
pub use status::Status;
pub use store::RecordStore;
pub use view::{departments, partition, DepartmentFilter, Partition, SortKey, ViewOptions};
