// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process workflow API

use crate::executor::Executor;
use probation_core::{
    departments, form_for, is_actionable, partition, Clock, EmployeeRecord, Partition, RecordId,
    RecordStore, ReviewForm, Role, Stage, ViewOptions, WorkflowError,
};
use serde::{Deserialize, Serialize};

/// Everything a host needs to render one role's dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub role: Role,
    pub departments: Vec<String>,
    pub pending_count: usize,
    pub pending: Vec<EmployeeRecord>,
    pub completed: Vec<EmployeeRecord>,
}

/// Confirmation workflow over a record store
///
/// Submissions take `&mut self`, so the owner serialises every change.
/// Reads hand out owned copies of the stored records.
pub struct Workflow<S, C> {
    executor: Executor<S>,
    clock: C,
}

impl<S, C> Workflow<S, C>
where
    S: RecordStore,
    C: Clock,
{
    pub fn new(store: S, clock: C) -> Self {
        Self {
            executor: Executor::new(store),
            clock,
        }
    }

    pub fn store(&self) -> &S {
        self.executor.store()
    }

    pub fn into_store(self) -> S {
        self.executor.into_store()
    }

    pub fn list_records(&self) -> Vec<EmployeeRecord> {
        self.store().list()
    }

    pub fn get_record(&self, id: RecordId) -> Result<EmployeeRecord, WorkflowError> {
        self.store().get(id).ok_or(WorkflowError::NotFound(id))
    }

    /// Submit `role`'s review of record `id`
    ///
    /// On success the stored record is replaced and the new version is
    /// returned. On any error the store is left untouched.
    pub fn submit_review(
        &mut self,
        id: RecordId,
        role: Role,
        form: &ReviewForm,
    ) -> Result<EmployeeRecord, WorkflowError> {
        let result = self.try_submit(id, role, form);
        if let Err(e) = &result {
            tracing::warn!(
                record_id = %id,
                role = %role,
                kind = e.kind(),
                error = %e,
                "review rejected"
            );
        }
        result
    }

    fn try_submit(
        &mut self,
        id: RecordId,
        role: Role,
        form: &ReviewForm,
    ) -> Result<EmployeeRecord, WorkflowError> {
        let record = self.get_record(id)?;
        let (updated, effects) = record.transition(role, form, &self.clock)?;
        for effect in effects {
            self.executor.execute(effect, &updated)?;
        }
        Ok(updated)
    }

    pub fn is_actionable(&self, record: &EmployeeRecord, role: Role) -> bool {
        is_actionable(record, role)
    }

    /// Which stage form, if any, `role` may fill for record `id`
    pub fn form_for(&self, id: RecordId, role: Role) -> Result<Option<Stage>, WorkflowError> {
        self.get_record(id).map(|record| form_for(&record, role))
    }

    pub fn partition(&self, role: Role, options: &ViewOptions) -> Partition {
        partition(&self.list_records(), role, options)
    }

    /// Department filter options across all stored records
    pub fn departments(&self) -> Vec<String> {
        departments(&self.list_records())
    }

    pub fn dashboard(&self, role: Role, options: &ViewOptions) -> Dashboard {
        let records = self.list_records();
        let Partition { pending, completed } = partition(&records, role, options);
        Dashboard {
            title: role.dashboard_title().to_string(),
            role,
            departments: departments(&records),
            pending_count: pending.len(),
            pending,
            completed,
        }
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
