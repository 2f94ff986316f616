// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Pending manager review
pub const PRIYA: &str = r#"{"id":1,"employeeId":"EMP001","name":"Priya","designation":"Software Engineer","department":"Engineering","joiningDate":"2024-01-01","reportingManagerName":"Alice Smith","confirmationDueDate":"2024-07-01"}"#;

/// Pending department head review
pub const MARCO: &str = r#"{"id":2,"employeeId":"EMP002","name":"Marco","designation":"Financial Analyst","department":"Finance","joiningDate":"2023-12-01","reportingManagerName":"Carol White","confirmationDueDate":"2024-06-01","status":"PendingDeptHead","reportingManagerFeedback":{"strengths":"Thorough","weaknesses":"Pace","recommendation":"Confirm","remarks":"Good fit","date":"2024-05-20"}}"#;

/// Pending HR head review
pub const AIKO: &str = r#"{"id":3,"employeeId":"EMP003","name":"Aiko","designation":"QA Analyst","department":"Engineering","joiningDate":"2024-02-01","reportingManagerName":"Alice Smith","confirmationDueDate":"2024-08-01","status":"PendingHRHead","reportingManagerFeedback":{"strengths":"Detail","weaknesses":"Automation","recommendation":"ExtendProbation","remarks":"More time","date":"2024-07-10"},"deptHeadFeedback":{"decision":"Approve","remarks":"Agreed","date":"2024-07-12"}}"#;

pub fn roster() -> String {
    format!("{PRIYA}\n{MARCO}\n{AIKO}\n")
}

/// Temp dir holding `roster.jsonl` and a `probation.toml` that points at it
pub fn setup_project() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp.path().join("roster.jsonl"), roster()).expect("Failed to write roster");
    write_config(&temp, "");
    temp
}

/// Rewrite `probation.toml` with extra `[view]` lines
pub fn write_config(temp: &TempDir, view: &str) {
    let config = format!("[roster]\npath = \"roster.jsonl\"\n\n[view]\n{view}\n");
    fs::write(temp.path().join("probation.toml"), config).expect("Failed to write config");
}

/// The CLI binary, run inside `temp` with logging at its default level
pub fn probation(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("probation").expect("binary should build");
    cmd.current_dir(temp.path()).env_remove("PROBATION_LOG");
    cmd
}
