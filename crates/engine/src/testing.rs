// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for engine tests

use crate::Workflow;
use chrono::NaiveDate;
use probation_core::{EmployeeRecord, FakeClock, ReviewForm};
use probation_storage::MaterializedState;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn record(id: u64, name: &str, department: &str, due: NaiveDate) -> EmployeeRecord {
    EmployeeRecord::new(id, format!("EMP{:03}", id), name, date(2024, 1, 1), due)
        .with_department(department)
        .with_designation("Software Engineer")
        .with_reporting_manager("Alice Smith")
}

/// Three pending records across two departments
pub(crate) fn roster() -> Vec<EmployeeRecord> {
    vec![
        record(1, "Priya", "Engineering", date(2024, 7, 1)),
        record(2, "Marco", "Finance", date(2024, 6, 1)),
        record(3, "Aiko", "Engineering", date(2024, 8, 1))
            .with_designation("QA Analyst"),
    ]
}

pub(crate) fn clock() -> FakeClock {
    FakeClock::at(date(2024, 7, 2))
}

pub(crate) fn workflow() -> Workflow<MaterializedState, FakeClock> {
    Workflow::new(MaterializedState::from_records(roster()).unwrap(), clock())
}

pub(crate) fn rm_form(recommendation: &str) -> ReviewForm {
    ReviewForm {
        strengths: "Ships reliably".to_string(),
        weaknesses: "Documentation".to_string(),
        recommendation: recommendation.to_string(),
        remarks: "Ready".to_string(),
        ..ReviewForm::default()
    }
}

pub(crate) fn head_form(decision: &str) -> ReviewForm {
    ReviewForm {
        decision: decision.to_string(),
        remarks: "Agreed".to_string(),
        ..ReviewForm::default()
    }
}
