// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced by workflow operations

use crate::record::RecordId;
use crate::role::Role;
use crate::schema::ValidationError;
use crate::status::Status;
use thiserror::Error;

/// Errors that can occur when acting on a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("record not found: {0}")]
    NotFound(RecordId),
    #[error("record {id} is {status}; {role} cannot review it")]
    NotActionable {
        id: RecordId,
        role: Role,
        status: Status,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl WorkflowError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            WorkflowError::NotFound(_) => "not_found",
            WorkflowError::NotActionable { .. } => "not_actionable",
            WorkflowError::Validation(_) => "validation",
        }
    }
}
