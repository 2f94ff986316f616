// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized record state built from operations

use crate::operation::Operation;
use crate::roster::RosterError;
use probation_core::{EmployeeRecord, RecordId, RecordStore};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;

/// In-memory record store
///
/// Nothing is written back anywhere; the state lives as long as the value.
#[derive(Debug, Default)]
pub struct MaterializedState {
    records: BTreeMap<RecordId, EmployeeRecord>,
}

impl MaterializedState {
    /// Build a store from seed records
    ///
    /// Every record must be internally consistent and ids must be unique.
    pub fn from_records(
        records: impl IntoIterator<Item = EmployeeRecord>,
    ) -> Result<Self, RosterError> {
        let mut state = Self::default();
        for record in records {
            record.check_consistency()?;
            if state.records.contains_key(&record.id) {
                return Err(RosterError::DuplicateId(record.id));
            }
            state.apply(&Operation::RecordCreate { record });
        }
        Ok(state)
    }

    /// Load seed records from a roster file
    pub fn from_roster(path: &Path) -> Result<Self, RosterError> {
        let records = crate::roster::load_roster(path)?;
        let state = Self::from_records(records)?;
        tracing::debug!(
            path = %path.display(),
            records = state.records.len(),
            "roster loaded"
        );
        Ok(state)
    }

    /// Apply an operation to update the state
    pub fn apply(&mut self, op: &Operation) {
        tracing::trace!(op = op.name(), record_id = %op.record_id(), "apply");
        match op {
            Operation::RecordCreate { record } => {
                if let Entry::Vacant(slot) = self.records.entry(record.id) {
                    slot.insert(record.clone());
                }
            }

            Operation::RecordReplace { record } => {
                if let Some(slot) = self.records.get_mut(&record.id) {
                    *slot = record.clone();
                }
            }
        }
    }
}

impl RecordStore for MaterializedState {
    fn get(&self, id: RecordId) -> Option<EmployeeRecord> {
        self.records.get(&id).cloned()
    }

    fn list(&self) -> Vec<EmployeeRecord> {
        self.records.values().cloned().collect()
    }

    fn replace(&mut self, record: EmployeeRecord) -> Option<EmployeeRecord> {
        let previous = self.records.get(&record.id).cloned()?;
        self.apply(&Operation::RecordReplace { record });
        Some(previous)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
