// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record store abstraction
//!
//! The workflow only needs lookup, listing and whole-record replacement.
//! Implementations hand out owned copies, never references into storage,
//! so a reader can not observe a half-applied review.

use crate::record::{EmployeeRecord, RecordId};

/// Storage backend for confirmation records
pub trait RecordStore {
    /// Get a copy of a record, returning None if not found
    fn get(&self, id: RecordId) -> Option<EmployeeRecord>;

    /// Copies of all records, ordered by id
    fn list(&self) -> Vec<EmployeeRecord>;

    /// Replace an existing record as a single step
    ///
    /// Returns the previous version, or None (and stores nothing) if no
    /// record with that id exists.
    fn replace(&mut self, record: EmployeeRecord) -> Option<EmployeeRecord>;
}
