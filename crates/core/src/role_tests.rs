// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    label = { "Reporting Manager", Role::ReportingManager },
    variant = { "DeptHead", Role::DeptHead },
    kebab = { "dept-head", Role::DeptHead },
    short = { "hr", Role::HrHead },
    upper = { "HR HEAD", Role::HrHead },
)]
fn role_parses_from(input: &str, expected: Role) {
    assert_eq!(input.parse::<Role>().unwrap(), expected);
}

#[test]
fn role_parse_rejects_unknown() {
    let err = "ceo".parse::<Role>().unwrap_err();
    assert_eq!(err.value, "ceo");
    assert!(err.to_string().contains("Department Head"));
}

#[test]
fn each_role_owns_its_pending_status() {
    assert_eq!(
        Role::ReportingManager.pending_status(),
        Status::PendingReportingManager
    );
    assert_eq!(Role::DeptHead.pending_status(), Status::PendingDeptHead);
    assert_eq!(Role::HrHead.pending_status(), Status::PendingHrHead);
}

#[test]
fn stages_round_trip_through_roles() {
    for stage in Stage::ORDER {
        assert_eq!(stage.role().stage(), stage);
    }
}

#[test]
fn role_serializes_with_source_names() {
    assert_eq!(serde_json::to_string(&Role::HrHead).unwrap(), "\"HRHead\"");
    let role: Role = serde_json::from_str("\"DeptHead\"").unwrap();
    assert_eq!(role, Role::DeptHead);
}

#[test]
fn dashboard_titles() {
    assert_eq!(Role::HrHead.dashboard_title(), "HR Head Dashboard");
    assert_eq!(
        Role::DeptHead.dashboard_title(),
        "Department Head Dashboard"
    );
}
