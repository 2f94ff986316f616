// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use probation_core::{FakeClock, RecordId, ReviewForm, Role};

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record() -> EmployeeRecord {
    EmployeeRecord::new(RecordId(4), "EMP004", "Noor", date(2024, 1, 8), date(2024, 7, 8))
        .with_department("Design")
        .with_designation("Product Designer")
        .with_reporting_manager("Sam Lee")
}

#[test]
fn empty_table_says_so() {
    assert_eq!(RecordTable(&[]).to_string(), "No records\n");
}

#[test]
fn table_has_header_and_row() {
    let table = RecordTable(&[record()]).to_string();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].contains("Noor"));
    assert!(lines[1].contains("2024-07-08"));
    assert!(lines[1].ends_with("Pending Reporting Manager"));
}

#[test]
fn detail_lists_history_in_stage_order() {
    let form = ReviewForm {
        strengths: "Visual craft".to_string(),
        weaknesses: "Scoping".to_string(),
        recommendation: "Extend Probation".to_string(),
        remarks: "Needs one more cycle".to_string(),
        ..ReviewForm::default()
    };
    let (reviewed, _) = record()
        .transition(
            Role::ReportingManager,
            &form,
            &FakeClock::at(date(2024, 7, 1)),
        )
        .unwrap();

    let detail = RecordDetail(&reviewed).to_string();

    assert!(detail.starts_with("Record 4: Noor (EMP004)\n"));
    assert!(detail.contains("  Status: Pending Dept. Head\n"));
    assert!(detail.contains("  Awaiting: Department Head\n"));
    assert!(detail.contains("Reporting Manager's Review\n"));
    assert!(detail.contains("  Areas of Improvement: Scoping\n"));
    assert!(detail.contains("  Recommendation: Extend Probation\n"));
    assert!(detail.contains("  Date: 2024-07-01\n"));
    assert!(!detail.contains("Department Head's Review"));
}

#[test]
fn detail_serializes_as_record() {
    let record = record();
    let json = serde_json::to_value(RecordDetail(&record)).unwrap();
    assert_eq!(json, serde_json::to_value(&record).unwrap());
}

#[test]
fn truncate_marks_cut_text() {
    assert_eq!(truncate("Engineering", 14), "Engineering");
    assert_eq!(truncate("Customer Success Operations", 10), "Customer ~");
}
