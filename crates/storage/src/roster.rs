// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Roster (seed record) files
//!
//! A roster is either a JSON array of records or JSON lines with one record
//! per line. Blank lines are skipped.

use probation_core::{ConsistencyError, EmployeeRecord, RecordId};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("{path}:{line}: {source}")]
    Json {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Inconsistent(#[from] ConsistencyError),
    #[error("duplicate record id {0}")]
    DuplicateId(RecordId),
}

/// Read all records from a roster file
pub fn load_roster(path: &Path) -> Result<Vec<EmployeeRecord>, RosterError> {
    let text = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster(&text, path)
}

/// Parse roster text; `path` is only used in error messages
pub fn parse_roster(text: &str, path: &Path) -> Result<Vec<EmployeeRecord>, RosterError> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(|source| RosterError::Json {
            path: path.to_path_buf(),
            line: source.line(),
            source,
        });
    }

    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| RosterError::Json {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
