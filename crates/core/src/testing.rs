// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests

use crate::clock::FakeClock;
use crate::record::EmployeeRecord;
use crate::role::Role;
use crate::schema::ReviewForm;
use crate::status::Status;
use chrono::NaiveDate;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn record(id: u64) -> EmployeeRecord {
    EmployeeRecord::new(
        id,
        format!("EMP{:03}", id),
        format!("Employee {}", id),
        date(2024, 1, 1),
        date(2024, 7, 1),
    )
    .with_designation("Software Engineer")
    .with_department("Engineering")
    .with_reporting_manager("Alice Smith")
}

/// Force a status without filling slots; only valid for gate checks
pub(crate) fn with_status(record: EmployeeRecord, status: Status) -> EmployeeRecord {
    EmployeeRecord { status, ..record }
}

pub(crate) fn rm_form(recommendation: &str) -> ReviewForm {
    ReviewForm {
        strengths: "Delivers on time".to_string(),
        weaknesses: "Code review depth".to_string(),
        recommendation: recommendation.to_string(),
        remarks: "Solid probation".to_string(),
        ..ReviewForm::default()
    }
}

pub(crate) fn head_form(decision: &str) -> ReviewForm {
    ReviewForm {
        decision: decision.to_string(),
        remarks: "Reviewed".to_string(),
        ..ReviewForm::default()
    }
}

/// Walk a record through the given reviews, stopping after the last supplied
pub(crate) fn reviewed(
    record: EmployeeRecord,
    recommendation: &str,
    dept_head: Option<&str>,
    hr_head: Option<&str>,
) -> EmployeeRecord {
    let clock = FakeClock::new();
    let (mut record, _) = record
        .transition(Role::ReportingManager, &rm_form(recommendation), &clock)
        .unwrap();
    if let Some(decision) = dept_head {
        record = record
            .transition(Role::DeptHead, &head_form(decision), &clock)
            .unwrap()
            .0;
    }
    if let Some(decision) = hr_head {
        record = record
            .transition(Role::HrHead, &head_form(decision), &clock)
            .unwrap()
            .0;
    }
    record
}
