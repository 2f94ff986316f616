// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Confirmation status of a record

use crate::label::{self, ParseError};
use crate::role::Stage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a record sits in the confirmation workflow
///
/// The first three variants are in flight and name the stage whose review
/// is outstanding. The last three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Status {
    #[default]
    PendingReportingManager,
    PendingDeptHead,
    #[serde(rename = "PendingHRHead")]
    PendingHrHead,
    Confirmed,
    ProbationExtended,
    Terminated,
}

const STATUS_NAMES: &[(Status, &[&str])] = &[
    (Status::PendingReportingManager, &["Pending Reporting Manager"]),
    (Status::PendingDeptHead, &["Pending Dept. Head", "Pending Department Head"]),
    (Status::PendingHrHead, &["Pending HR Head"]),
    (Status::Confirmed, &["Confirmed"]),
    (Status::ProbationExtended, &["Probation Extended", "Extended"]),
    (Status::Terminated, &["Terminated"]),
];

impl Status {
    const LABELS: &'static [&'static str] = &[
        "Pending Reporting Manager",
        "Pending Dept. Head",
        "Pending HR Head",
        "Confirmed",
        "Probation Extended",
        "Terminated",
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::PendingReportingManager => "Pending Reporting Manager",
            Status::PendingDeptHead => "Pending Dept. Head",
            Status::PendingHrHead => "Pending HR Head",
            Status::Confirmed => "Confirmed",
            Status::ProbationExtended => "Probation Extended",
            Status::Terminated => "Terminated",
        }
    }

    /// The stage whose review is outstanding, if any
    pub fn awaiting_stage(self) -> Option<Stage> {
        match self {
            Status::PendingReportingManager => Some(Stage::ReportingManager),
            Status::PendingDeptHead => Some(Stage::DeptHead),
            Status::PendingHrHead => Some(Stage::HrHead),
            Status::Confirmed | Status::ProbationExtended | Status::Terminated => None,
        }
    }

    /// Check if this status is terminal
    pub fn is_terminal(self) -> bool {
        self.awaiting_stage().is_none()
    }

    /// Stages whose feedback slot must be filled in this status
    pub fn completed_stages(self) -> &'static [Stage] {
        match self {
            Status::PendingReportingManager => &[],
            Status::PendingDeptHead => &[Stage::ReportingManager],
            Status::PendingHrHead => &[Stage::ReportingManager, Stage::DeptHead],
            Status::Confirmed | Status::ProbationExtended | Status::Terminated => &Stage::ORDER,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        label::lookup("status", s, Status::LABELS, STATUS_NAMES)
    }
}

impl TryFrom<String> for Status {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
