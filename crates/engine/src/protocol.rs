// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-lines request/response protocol for batch hosts
//!
//! Each request and response is a single JSON object on its own line.

use crate::workflow::Dashboard;
use probation_core::{EmployeeRecord, RecordId, ReviewForm, Role, SortKey, Stage};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request from a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// All records, ordered by id
    List,

    /// One record with its review history
    Get { id: RecordId },

    /// Submit a review
    Submit {
        id: RecordId,
        role: Role,
        #[serde(default)]
        form: ReviewForm,
    },

    /// Dashboard for a role
    Dashboard {
        role: Role,
        #[serde(default)]
        sort: SortKey,
        #[serde(default)]
        department: Option<String>,
        #[serde(default)]
        designation: String,
    },

    /// Whether a role may act on a record, and with which form
    Actionable { id: RecordId, role: Role },
}

/// Response to a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Records {
        records: Vec<EmployeeRecord>,
    },

    Record {
        record: Box<EmployeeRecord>,
    },

    Dashboard {
        dashboard: Dashboard,
    },

    Actionable {
        id: RecordId,
        role: Role,
        actionable: bool,
        form: Option<Stage>,
    },

    Error {
        kind: String,
        message: String,
        /// Fields at fault, for validation errors
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        fields: Vec<String>,
    },
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

/// Protocol errors
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a message as a single JSON line (without the newline)
pub fn encode<T: Serialize>(msg: &T) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(msg)?)
}

/// Decode a message from one JSON line
pub fn decode<T: DeserializeOwned>(line: &str) -> Result<T, ProtocolError> {
    Ok(serde_json::from_str(line)?)
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
