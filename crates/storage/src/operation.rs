// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operations that change the record store

use probation_core::{EmployeeRecord, RecordId};

/// A whole-record change to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Add a record; ignored if the id is already present
    RecordCreate { record: EmployeeRecord },
    /// Swap in a new version of an existing record; ignored if absent
    RecordReplace { record: EmployeeRecord },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::RecordCreate { .. } => "record:create",
            Operation::RecordReplace { .. } => "record:replace",
        }
    }

    pub fn record_id(&self) -> RecordId {
        match self {
            Operation::RecordCreate { record } | Operation::RecordReplace { record } => record.id,
        }
    }
}
