// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard projection
//!
//! A pure function of (records, role, options): filter, then sort, then
//! split into the records pending for the role and everything else.

use crate::label::{self, ParseError};
use crate::record::EmployeeRecord;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Department option meaning "no department filter"
pub const ALL_DEPARTMENTS: &str = "All";

/// Ordering applied before partitioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum SortKey {
    NameAsc,
    #[default]
    DueDateAsc,
    DueDateDesc,
    StatusAsc,
}

const SORT_NAMES: &[(SortKey, &[&str])] = &[
    (SortKey::NameAsc, &["nameAsc", "name"]),
    (SortKey::DueDateAsc, &["dueDateAsc", "dueDate", "due"]),
    (SortKey::DueDateDesc, &["dueDateDesc"]),
    (SortKey::StatusAsc, &["statusAsc", "status"]),
];

impl SortKey {
    const NAMES: &'static [&'static str] = &["nameAsc", "dueDateAsc", "dueDateDesc", "statusAsc"];

    pub fn name(self) -> &'static str {
        match self {
            SortKey::NameAsc => "nameAsc",
            SortKey::DueDateAsc => "dueDateAsc",
            SortKey::DueDateDesc => "dueDateDesc",
            SortKey::StatusAsc => "statusAsc",
        }
    }

    fn compare(self, a: &EmployeeRecord, b: &EmployeeRecord) -> Ordering {
        match self {
            SortKey::NameAsc => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::DueDateAsc => a.confirmation_due_date.cmp(&b.confirmation_due_date),
            SortKey::DueDateDesc => b.confirmation_due_date.cmp(&a.confirmation_due_date),
            SortKey::StatusAsc => a.status().label().cmp(b.status().label()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        label::lookup("sort key", s, SortKey::NAMES, SORT_NAMES)
    }
}

impl TryFrom<String> for SortKey {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Department equality filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(String),
}

impl DepartmentFilter {
    pub fn matches(&self, department: &str) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(wanted) => wanted == department,
        }
    }
}

impl From<&str> for DepartmentFilter {
    fn from(value: &str) -> Self {
        if value == ALL_DEPARTMENTS {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Only(value.to_string())
        }
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentFilter::All => f.write_str(ALL_DEPARTMENTS),
            DepartmentFilter::Only(department) => f.write_str(department),
        }
    }
}

/// Filters and sort order for a dashboard view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewOptions {
    pub department: DepartmentFilter,
    /// Case-insensitive substring of the designation; empty means no filter
    pub designation: String,
    pub sort: SortKey,
}

impl ViewOptions {
    pub fn with_department(self, department: impl Into<String>) -> Self {
        let department: String = department.into();
        Self {
            department: DepartmentFilter::from(department.as_str()),
            ..self
        }
    }

    pub fn with_designation(self, designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            ..self
        }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, ..self }
    }

    /// Reset every filter and the sort order to their defaults
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if a record passes both filters
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        self.department.matches(&record.department)
            && (self.designation.is_empty()
                || record
                    .designation
                    .to_lowercase()
                    .contains(&self.designation.to_lowercase()))
    }
}

/// Records split by whether the role must act on them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub pending: Vec<EmployeeRecord>,
    pub completed: Vec<EmployeeRecord>,
}

impl Partition {
    /// Badge count for the role's pending tab
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Filter, sort and partition records for a role
///
/// A record is pending iff its status is exactly the role's pending status.
/// Everything else, including terminal records and records waiting on
/// another role, is completed from this role's point of view.
pub fn partition(records: &[EmployeeRecord], role: Role, options: &ViewOptions) -> Partition {
    let mut visible: Vec<&EmployeeRecord> = records.iter().filter(|r| options.matches(r)).collect();
    visible.sort_by(|a, b| options.sort.compare(a, b));

    let pending_status = role.pending_status();
    let (pending, completed): (Vec<_>, Vec<_>) = visible
        .into_iter()
        .cloned()
        .partition(|r| r.status() == pending_status);
    Partition { pending, completed }
}

/// Department filter options: "All" followed by the sorted distinct departments
pub fn departments(records: &[EmployeeRecord]) -> Vec<String> {
    let distinct: BTreeSet<&str> = records.iter().map(|r| r.department.as_str()).collect();
    std::iter::once(ALL_DEPARTMENTS)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
