// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage gate: who may act on a record right now

use crate::record::EmployeeRecord;
use crate::role::{Role, Stage};

/// Check if `role` may submit a review for `record`
///
/// True only when the record is waiting on exactly this role's stage.
/// Terminal records are never actionable.
pub fn is_actionable(record: &EmployeeRecord, role: Role) -> bool {
    record.status() == role.pending_status()
}

/// The stage form `role` may fill for `record`, if any
pub fn form_for(record: &EmployeeRecord, role: Role) -> Option<Stage> {
    is_actionable(record, role).then(|| role.stage())
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
