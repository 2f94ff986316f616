// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for role dashboards

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{probation, setup_project, write_config};
use predicates::prelude::*;

fn dashboard_json(args: &[&str]) -> serde_json::Value {
    let temp = setup_project();
    let output = probation(&temp)
        .arg("dashboard")
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn names(records: &serde_json::Value) -> Vec<String> {
    records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn default_role_is_reporting_manager() {
    let temp = setup_project();
    probation(&temp)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Reporting Manager Dashboard\n"))
        .stdout(predicate::str::contains("Departments: All, Engineering, Finance"))
        .stdout(predicate::str::contains("Pending (1)"))
        .stdout(predicate::str::contains("Priya"))
        .stdout(predicate::str::contains("Marco").not());
}

#[test]
fn completed_tab_holds_everything_else() {
    let temp = setup_project();
    probation(&temp)
        .args(["dashboard", "--role", "dh", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Department Head Dashboard"))
        .stdout(predicate::str::contains("Completed (2)"))
        .stdout(predicate::str::contains("Priya"))
        .stdout(predicate::str::contains("Aiko"));
}

#[test]
fn hr_head_sees_records_awaiting_hr() {
    let dashboard = dashboard_json(&["--role", "HR Head"]);

    assert_eq!(dashboard["title"], "HR Head Dashboard");
    assert_eq!(dashboard["pendingCount"], 1);
    assert_eq!(names(&dashboard["pending"]), vec!["Aiko"]);
    assert_eq!(names(&dashboard["completed"]), vec!["Marco", "Priya"]);
}

#[test]
fn filters_and_sort_apply_before_partition() {
    let dashboard = dashboard_json(&[
        "--role",
        "hr",
        "--department",
        "Engineering",
        "--sort",
        "dueDateDesc",
    ]);
    assert_eq!(names(&dashboard["completed"]), vec!["Priya"]);
    assert_eq!(names(&dashboard["pending"]), vec!["Aiko"]);

    let analysts = dashboard_json(&["--designation", "ANALYST", "--sort", "nameAsc"]);
    assert!(names(&analysts["pending"]).is_empty());
    assert_eq!(names(&analysts["completed"]), vec!["Aiko", "Marco"]);
}

#[test]
fn config_supplies_role_and_filters() {
    let temp = setup_project();
    write_config(&temp, "role = \"Department Head\"\ndepartment = \"Engineering\"");

    probation(&temp)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Department Head Dashboard"))
        .stdout(predicate::str::contains("Pending (0)"))
        .stdout(predicate::str::contains("No records"));

    probation(&temp)
        .args(["dashboard", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending (1)"))
        .stdout(predicate::str::contains("Marco"));
}

#[test]
fn unknown_role_is_rejected() {
    let temp = setup_project();
    probation(&temp)
        .args(["dashboard", "--role", "CEO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role: 'CEO'"));
}
