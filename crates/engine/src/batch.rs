// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch runner: one response line per request line

use crate::protocol::{self, ProtocolError, Request, Response};
use crate::workflow::Workflow;
use probation_core::{Clock, RecordStore, ViewOptions, WorkflowError};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors that stop a batch run
///
/// Failed requests do not stop the run; they produce error responses.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Counts from a finished batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub requests: usize,
    pub failed: usize,
}

/// Read requests from `input` and write a response line for each to `output`
///
/// Blank lines are skipped. Requests run in order against the same
/// workflow, so later requests observe earlier submissions.
pub fn run_batch<S, C>(
    workflow: &mut Workflow<S, C>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<BatchSummary, BatchError>
where
    S: RecordStore,
    C: Clock,
{
    let mut summary = BatchSummary::default();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        summary.requests += 1;

        let response = match protocol::decode::<Request>(&line) {
            Ok(request) => {
                tracing::debug!(?request, "batch request");
                handle_request(workflow, request)
            }
            Err(e) => Response::Error {
                kind: "invalid_request".to_string(),
                message: e.to_string(),
                fields: Vec::new(),
            },
        };
        if response.is_error() {
            summary.failed += 1;
        }

        writeln!(output, "{}", protocol::encode(&response)?)?;
    }
    output.flush()?;
    Ok(summary)
}

/// Handle a single request and return a response
fn handle_request<S, C>(workflow: &mut Workflow<S, C>, request: Request) -> Response
where
    S: RecordStore,
    C: Clock,
{
    match request {
        Request::List => Response::Records {
            records: workflow.list_records(),
        },

        Request::Get { id } => match workflow.get_record(id) {
            Ok(record) => Response::Record {
                record: Box::new(record),
            },
            Err(e) => error_response(&e),
        },

        Request::Submit { id, role, form } => match workflow.submit_review(id, role, &form) {
            Ok(record) => Response::Record {
                record: Box::new(record),
            },
            Err(e) => error_response(&e),
        },

        Request::Dashboard {
            role,
            sort,
            department,
            designation,
        } => {
            let mut options = ViewOptions::default()
                .with_sort(sort)
                .with_designation(designation);
            if let Some(department) = department {
                options = options.with_department(department);
            }
            Response::Dashboard {
                dashboard: workflow.dashboard(role, &options),
            }
        }

        Request::Actionable { id, role } => match workflow.get_record(id) {
            Ok(record) => Response::Actionable {
                id,
                role,
                actionable: workflow.is_actionable(&record, role),
                form: probation_core::form_for(&record, role),
            },
            Err(e) => error_response(&e),
        },
    }
}

fn error_response(e: &WorkflowError) -> Response {
    let fields = match e {
        WorkflowError::Validation(v) => v.field_names().into_iter().map(String::from).collect(),
        _ => Vec::new(),
    };
    Response::Error {
        kind: e.kind().to_string(),
        message: e.to_string(),
        fields,
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
