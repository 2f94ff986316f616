// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Feedback written by each review stage
//!
//! A feedback value is immutable once stamped onto a record.

use crate::label::{self, ParseError};
use crate::role::Stage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting manager's recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Recommendation {
    Confirm,
    ExtendProbation,
    Terminate,
}

impl Recommendation {
    pub const LABELS: &'static [&'static str] = &["Confirm", "Extend Probation", "Terminate"];

    pub fn label(self) -> &'static str {
        match self {
            Recommendation::Confirm => "Confirm",
            Recommendation::ExtendProbation => "Extend Probation",
            Recommendation::Terminate => "Terminate",
        }
    }
}

const RECOMMENDATION_NAMES: &[(Recommendation, &[&str])] = &[
    (Recommendation::Confirm, &["Confirm"]),
    (Recommendation::ExtendProbation, &["Extend Probation", "Extend"]),
    (Recommendation::Terminate, &["Terminate"]),
];

impl FromStr for Recommendation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        label::lookup(
            "recommendation",
            s,
            Recommendation::LABELS,
            RECOMMENDATION_NAMES,
        )
    }
}

impl TryFrom<String> for Recommendation {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Department head or HR head decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub const LABELS: &'static [&'static str] = &["Approve", "Reject"];

    pub fn label(self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        }
    }
}

const DECISION_NAMES: &[(Decision, &[&str])] = &[
    (Decision::Approve, &["Approve", "Approved"]),
    (Decision::Reject, &["Reject", "Rejected"]),
];

impl FromStr for Decision {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        label::lookup("decision", s, Decision::LABELS, DECISION_NAMES)
    }
}

impl TryFrom<String> for Decision {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reporting manager's review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingManagerFeedback {
    pub strengths: String,
    pub weaknesses: String,
    pub recommendation: Recommendation,
    pub remarks: String,
    pub date: NaiveDate,
}

/// Department head's review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeptHeadFeedback {
    pub decision: Decision,
    pub remarks: String,
    pub date: NaiveDate,
}

/// HR head's review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrHeadFeedback {
    pub decision: Decision,
    pub remarks: String,
    pub date: NaiveDate,
}

/// Feedback from any stage, tagged by the stage that wrote it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage")]
pub enum Feedback {
    ReportingManager(ReportingManagerFeedback),
    DeptHead(DeptHeadFeedback),
    #[serde(rename = "HRHead")]
    HrHead(HrHeadFeedback),
}

impl Feedback {
    pub fn stage(&self) -> Stage {
        match self {
            Feedback::ReportingManager(_) => Stage::ReportingManager,
            Feedback::DeptHead(_) => Stage::DeptHead,
            Feedback::HrHead(_) => Stage::HrHead,
        }
    }

    pub fn remarks(&self) -> &str {
        match self {
            Feedback::ReportingManager(f) => &f.remarks,
            Feedback::DeptHead(f) => &f.remarks,
            Feedback::HrHead(f) => &f.remarks,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Feedback::ReportingManager(f) => f.date,
            Feedback::DeptHead(f) => f.date,
            Feedback::HrHead(f) => f.date,
        }
    }

    /// The approve/reject decision, absent for the reporting manager stage
    pub fn decision(&self) -> Option<Decision> {
        match self {
            Feedback::ReportingManager(_) => None,
            Feedback::DeptHead(f) => Some(f.decision),
            Feedback::HrHead(f) => Some(f.decision),
        }
    }

    /// Label/value pairs in display order, for read-only review history
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let mut details = Vec::new();
        match self {
            Feedback::ReportingManager(f) => {
                details.push(("Strengths", f.strengths.clone()));
                details.push(("Areas of Improvement", f.weaknesses.clone()));
                details.push(("Recommendation", f.recommendation.to_string()));
            }
            Feedback::DeptHead(f) => details.push(("Decision", f.decision.to_string())),
            Feedback::HrHead(f) => details.push(("Decision", f.decision.to_string())),
        }
        details.push(("Remarks", self.remarks().to_string()));
        details.push(("Date", self.date().to_string()));
        details
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
