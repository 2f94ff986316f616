// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Review transition state machine
//!
//! ```text
//! PendingReportingManager ──RM review──▶ PendingDeptHead
//! PendingDeptHead ──DH review──▶ PendingHRHead
//! PendingHRHead ──HR review──▶ Confirmed | ProbationExtended | Terminated
//! ```
//!
//! A Terminate recommendation or a department head Reject never ends the
//! workflow early. The record always reaches the HR head, and only the
//! outcome decided there sets the terminal status.

use crate::clock::Clock;
use crate::effect::{Effect, Event};
use crate::error::WorkflowError;
use crate::feedback::Feedback;
use crate::gate;
use crate::outcome;
use crate::record::EmployeeRecord;
use crate::role::Role;
use crate::schema::{self, ReviewForm};
use crate::status::Status;

impl EmployeeRecord {
    /// Pure transition function - returns the reviewed record and effects
    ///
    /// All checks run before anything is built, so on error `self` is the
    /// only version of the record that exists.
    pub fn transition(
        &self,
        role: Role,
        form: &ReviewForm,
        clock: &impl Clock,
    ) -> Result<(EmployeeRecord, Vec<Effect>), WorkflowError> {
        if !gate::is_actionable(self, role) {
            return Err(WorkflowError::NotActionable {
                id: self.id,
                role,
                status: self.status,
            });
        }
        let review = schema::validate(role.stage(), form)?;
        let date = clock.today();
        let stage = review.stage();

        let record = match review.stamp(date) {
            Feedback::ReportingManager(feedback) => EmployeeRecord {
                reporting_manager_feedback: Some(feedback),
                status: Status::PendingDeptHead,
                ..self.clone()
            },
            Feedback::DeptHead(feedback) => EmployeeRecord {
                dept_head_feedback: Some(feedback),
                status: Status::PendingHrHead,
                ..self.clone()
            },
            Feedback::HrHead(feedback) => {
                let status = outcome::decide(
                    self.reporting_manager_feedback
                        .as_ref()
                        .map(|f| f.recommendation),
                    self.dept_head_feedback.as_ref().map(|f| f.decision),
                    feedback.decision,
                );
                EmployeeRecord {
                    hr_head_feedback: Some(feedback),
                    status,
                    ..self.clone()
                }
            }
        };

        let mut effects = vec![
            Effect::SaveRecord { id: record.id },
            Effect::Emit(Event::ReviewSubmitted {
                id: record.id,
                stage,
                date,
                status: record.status,
            }),
        ];
        if record.status.is_terminal() {
            effects.push(Effect::Emit(Event::OutcomeDecided {
                id: record.id,
                status: record.status,
            }));
        }
        Ok((record, effects))
    }
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
