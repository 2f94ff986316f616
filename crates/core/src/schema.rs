// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-stage feedback schema
//!
//! Hosts collect a [`ReviewForm`] of raw strings. Validating it against a
//! stage yields a typed [`Review`] carrying only that stage's fields, or a
//! [`ValidationError`] naming every field at fault.

use crate::feedback::{
    Decision, DeptHeadFeedback, Feedback, HrHeadFeedback, Recommendation,
    ReportingManagerFeedback,
};
use crate::label::ParseError;
use crate::role::Stage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raw review input as collected by a form
///
/// Fields that do not belong to the stage being reviewed are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewForm {
    pub strengths: String,
    pub weaknesses: String,
    pub recommendation: String,
    pub decision: String,
    pub remarks: String,
}

/// The kind of value a schema field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, must not be blank
    Text,
    /// One of a fixed set of labels
    Choice(&'static [&'static str]),
}

/// A required field of a stage schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const REPORTING_MANAGER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "strengths",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "weaknesses",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "recommendation",
        kind: FieldKind::Choice(Recommendation::LABELS),
    },
    FieldSpec {
        name: "remarks",
        kind: FieldKind::Text,
    },
];

const HEAD_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "decision",
        kind: FieldKind::Choice(Decision::LABELS),
    },
    FieldSpec {
        name: "remarks",
        kind: FieldKind::Text,
    },
];

impl Stage {
    /// Fields a reviewer at this stage must fill
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Stage::ReportingManager => REPORTING_MANAGER_FIELDS,
            Stage::DeptHead | Stage::HrHead => HEAD_FIELDS,
        }
    }
}

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Empty,
    NotAllowed {
        value: String,
        allowed: &'static [&'static str],
    },
}

/// A field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Empty => write!(f, "{} is required", self.field),
            FieldProblem::NotAllowed { value, allowed } => write!(
                f,
                "{} '{}' is not one of {}",
                self.field,
                value,
                allowed.join(", ")
            ),
        }
    }
}

/// Review input rejected by a stage schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {} review: {}", .stage, join(.fields))]
pub struct ValidationError {
    pub stage: Stage,
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// Names of the fields at fault, in schema order
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|e| e.field).collect()
    }
}

fn join(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A validated review, carrying only its stage's fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Review {
    ReportingManager {
        strengths: String,
        weaknesses: String,
        recommendation: Recommendation,
        remarks: String,
    },
    DeptHead {
        decision: Decision,
        remarks: String,
    },
    HrHead {
        decision: Decision,
        remarks: String,
    },
}

impl Review {
    pub fn stage(&self) -> Stage {
        match self {
            Review::ReportingManager { .. } => Stage::ReportingManager,
            Review::DeptHead { .. } => Stage::DeptHead,
            Review::HrHead { .. } => Stage::HrHead,
        }
    }

    /// Stamp the review with its submission date
    pub fn stamp(self, date: NaiveDate) -> Feedback {
        match self {
            Review::ReportingManager {
                strengths,
                weaknesses,
                recommendation,
                remarks,
            } => Feedback::ReportingManager(ReportingManagerFeedback {
                strengths,
                weaknesses,
                recommendation,
                remarks,
                date,
            }),
            Review::DeptHead { decision, remarks } => Feedback::DeptHead(DeptHeadFeedback {
                decision,
                remarks,
                date,
            }),
            Review::HrHead { decision, remarks } => Feedback::HrHead(HrHeadFeedback {
                decision,
                remarks,
                date,
            }),
        }
    }
}

/// Validate a form against the schema of `stage`
pub fn validate(stage: Stage, form: &ReviewForm) -> Result<Review, ValidationError> {
    let mut check = Checker::default();
    let review = match stage {
        Stage::ReportingManager => {
            let strengths = check.text("strengths", &form.strengths);
            let weaknesses = check.text("weaknesses", &form.weaknesses);
            let recommendation = check.choice("recommendation", &form.recommendation);
            let remarks = check.text("remarks", &form.remarks);
            match (strengths, weaknesses, recommendation, remarks) {
                (Some(strengths), Some(weaknesses), Some(recommendation), Some(remarks)) => {
                    Some(Review::ReportingManager {
                        strengths,
                        weaknesses,
                        recommendation,
                        remarks,
                    })
                }
                _ => None,
            }
        }
        Stage::DeptHead | Stage::HrHead => {
            let decision = check.choice("decision", &form.decision);
            let remarks = check.text("remarks", &form.remarks);
            match (decision, remarks) {
                (Some(decision), Some(remarks)) if stage == Stage::DeptHead => {
                    Some(Review::DeptHead { decision, remarks })
                }
                (Some(decision), Some(remarks)) => Some(Review::HrHead { decision, remarks }),
                _ => None,
            }
        }
    };

    match review {
        Some(review) if check.errors.is_empty() => Ok(review),
        _ => Err(ValidationError {
            stage,
            fields: check.errors,
        }),
    }
}

/// Collects field errors while extracting values
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn text(&mut self, field: &'static str, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            self.errors.push(FieldError {
                field,
                problem: FieldProblem::Empty,
            });
            return None;
        }
        Some(value.to_string())
    }

    fn choice<T>(&mut self, field: &'static str, value: &str) -> Option<T>
    where
        T: FromStr<Err = ParseError>,
    {
        if value.trim().is_empty() {
            self.errors.push(FieldError {
                field,
                problem: FieldProblem::Empty,
            });
            return None;
        }
        match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                self.errors.push(FieldError {
                    field,
                    problem: FieldProblem::NotAllowed {
                        value: e.value,
                        allowed: e.expected,
                    },
                });
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
