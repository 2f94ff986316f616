// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Employee confirmation record
//!
//! Identity and descriptive attributes are public and opaque to the
//! workflow. Status and feedback slots are crate-private: they only change
//! through `EmployeeRecord::transition`, which returns a new record rather
//! than mutating in place.

use crate::feedback::{
    DeptHeadFeedback, Feedback, HrHeadFeedback, ReportingManagerFeedback,
};
use crate::outcome;
use crate::role::Stage;
use crate::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique numeric identifier for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RecordId)
    }
}

/// A record whose status disagrees with its filled feedback slots
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("record {id} is {status} but has no {stage} feedback")]
    MissingFeedback { id: RecordId, status: Status, stage: Stage },
    #[error("record {id} is {status} but already has {stage} feedback")]
    UnexpectedFeedback { id: RecordId, status: Status, stage: Stage },
    #[error("record {id} is {status} but its reviews decide {expected}")]
    WrongOutcome {
        id: RecordId,
        status: Status,
        expected: Status,
    },
}

/// An employee's probation confirmation record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: RecordId,
    pub employee_id: String,
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub department: String,
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub reporting_manager_name: String,
    pub confirmation_due_date: NaiveDate,
    #[serde(default)]
    pub(crate) status: Status,
    #[serde(default)]
    pub(crate) reporting_manager_feedback: Option<ReportingManagerFeedback>,
    #[serde(default)]
    pub(crate) dept_head_feedback: Option<DeptHeadFeedback>,
    #[serde(default)]
    pub(crate) hr_head_feedback: Option<HrHeadFeedback>,
}

impl EmployeeRecord {
    /// Create a record awaiting its reporting manager's review
    pub fn new(
        id: impl Into<RecordId>,
        employee_id: impl Into<String>,
        name: impl Into<String>,
        joining_date: NaiveDate,
        confirmation_due_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            name: name.into(),
            designation: String::new(),
            department: String::new(),
            joining_date,
            reporting_manager_name: String::new(),
            confirmation_due_date,
            status: Status::PendingReportingManager,
            reporting_manager_feedback: None,
            dept_head_feedback: None,
            hr_head_feedback: None,
        }
    }

    pub fn with_designation(self, designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            ..self
        }
    }

    pub fn with_department(self, department: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            ..self
        }
    }

    pub fn with_reporting_manager(self, name: impl Into<String>) -> Self {
        Self {
            reporting_manager_name: name.into(),
            ..self
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn reporting_manager_feedback(&self) -> Option<&ReportingManagerFeedback> {
        self.reporting_manager_feedback.as_ref()
    }

    pub fn dept_head_feedback(&self) -> Option<&DeptHeadFeedback> {
        self.dept_head_feedback.as_ref()
    }

    pub fn hr_head_feedback(&self) -> Option<&HrHeadFeedback> {
        self.hr_head_feedback.as_ref()
    }

    /// Feedback written by `stage`, if that stage has completed
    pub fn feedback(&self, stage: Stage) -> Option<Feedback> {
        match stage {
            Stage::ReportingManager => self
                .reporting_manager_feedback
                .clone()
                .map(Feedback::ReportingManager),
            Stage::DeptHead => self.dept_head_feedback.clone().map(Feedback::DeptHead),
            Stage::HrHead => self.hr_head_feedback.clone().map(Feedback::HrHead),
        }
    }

    /// All filled feedback slots in stage order
    pub fn history(&self) -> Vec<Feedback> {
        Stage::ORDER
            .iter()
            .filter_map(|stage| self.feedback(*stage))
            .collect()
    }

    fn has_feedback(&self, stage: Stage) -> bool {
        match stage {
            Stage::ReportingManager => self.reporting_manager_feedback.is_some(),
            Stage::DeptHead => self.dept_head_feedback.is_some(),
            Stage::HrHead => self.hr_head_feedback.is_some(),
        }
    }

    /// Check that the status agrees with the filled feedback slots
    ///
    /// Each status fills exactly the slots of the stages before it, and a
    /// terminal status must be the outcome its three reviews decide.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let completed = self.status.completed_stages();
        for stage in Stage::ORDER {
            let expected = completed.contains(&stage);
            match (expected, self.has_feedback(stage)) {
                (true, false) => {
                    return Err(ConsistencyError::MissingFeedback {
                        id: self.id,
                        status: self.status,
                        stage,
                    })
                }
                (false, true) => {
                    return Err(ConsistencyError::UnexpectedFeedback {
                        id: self.id,
                        status: self.status,
                        stage,
                    })
                }
                _ => {}
            }
        }

        if let Some(hr) = &self.hr_head_feedback {
            let expected = outcome::decide(
                self.reporting_manager_feedback
                    .as_ref()
                    .map(|f| f.recommendation),
                self.dept_head_feedback.as_ref().map(|f| f.decision),
                hr.decision,
            );
            if expected != self.status {
                return Err(ConsistencyError::WrongOutcome {
                    id: self.id,
                    status: self.status,
                    expected,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
