// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Approver roles and the review stages they own
//!
//! The workflow has exactly three stages, walked in order. Each stage is
//! owned by one role and fills one feedback slot on the record.

use crate::label::{self, ParseError};
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A role that may act on confirmation records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Role {
    #[default]
    ReportingManager,
    DeptHead,
    #[serde(rename = "HRHead")]
    HrHead,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::ReportingManager, Role::DeptHead, Role::HrHead];

    const LABELS: &'static [&'static str] = &["Reporting Manager", "Department Head", "HR Head"];

    pub fn label(self) -> &'static str {
        match self {
            Role::ReportingManager => "Reporting Manager",
            Role::DeptHead => "Department Head",
            Role::HrHead => "HR Head",
        }
    }

    /// The stage this role reviews
    pub fn stage(self) -> Stage {
        match self {
            Role::ReportingManager => Stage::ReportingManager,
            Role::DeptHead => Stage::DeptHead,
            Role::HrHead => Stage::HrHead,
        }
    }

    /// The only status on which this role may act
    pub fn pending_status(self) -> Status {
        self.stage().awaiting()
    }

    pub fn dashboard_title(self) -> &'static str {
        match self {
            Role::ReportingManager => "Reporting Manager Dashboard",
            Role::DeptHead => "Department Head Dashboard",
            Role::HrHead => "HR Head Dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const ROLE_NAMES: &[(Role, &[&str])] = &[
    (Role::ReportingManager, &["Reporting Manager", "rm", "manager"]),
    (Role::DeptHead, &["Department Head", "Dept Head", "DeptHead", "dh"]),
    (Role::HrHead, &["HR Head", "HRHead", "hr"]),
];

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        label::lookup("role", s, Role::LABELS, ROLE_NAMES)
    }
}

impl TryFrom<String> for Role {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A review stage, in workflow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    ReportingManager,
    DeptHead,
    #[serde(rename = "HRHead")]
    HrHead,
}

impl Stage {
    pub const ORDER: [Stage; 3] = [Stage::ReportingManager, Stage::DeptHead, Stage::HrHead];

    pub fn role(self) -> Role {
        match self {
            Stage::ReportingManager => Role::ReportingManager,
            Stage::DeptHead => Role::DeptHead,
            Stage::HrHead => Role::HrHead,
        }
    }

    /// Status a record holds while waiting for this stage
    pub fn awaiting(self) -> Status {
        match self {
            Stage::ReportingManager => Status::PendingReportingManager,
            Stage::DeptHead => Status::PendingDeptHead,
            Stage::HrHead => Status::PendingHrHead,
        }
    }

    /// Heading used for this stage's review section
    pub fn title(self) -> &'static str {
        match self {
            Stage::ReportingManager => "Reporting Manager's Review",
            Stage::DeptHead => "Department Head's Review",
            Stage::HrHead => "HR Head's Review",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role().label())
    }
}

#[cfg(test)]
#[path = "role_tests.rs"]
mod tests;
