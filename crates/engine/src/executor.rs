// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use probation_core::{Effect, EmployeeRecord, Event, RecordId, RecordStore, WorkflowError};
use thiserror::Error;

/// Errors that can occur during effect execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),
}

impl From<ExecuteError> for WorkflowError {
    fn from(e: ExecuteError) -> Self {
        match e {
            ExecuteError::RecordNotFound(id) => WorkflowError::NotFound(id),
        }
    }
}

/// Executes effects against a record store
pub struct Executor<S> {
    store: S,
}

impl<S: RecordStore> Executor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Execute a single effect with tracing
    ///
    /// `record` is the transitioned record the effects were produced for.
    pub fn execute(&mut self, effect: Effect, record: &EmployeeRecord) -> Result<(), ExecuteError> {
        let span = tracing::info_span!("effect", effect = effect.name());
        let _guard = span.enter();

        let result = self.execute_inner(effect, record);
        if let Err(e) = &result {
            tracing::error!(error = %e, "failed");
        }
        result
    }

    fn execute_inner(&mut self, effect: Effect, record: &EmployeeRecord) -> Result<(), ExecuteError> {
        match effect {
            Effect::SaveRecord { id } => {
                if record.id != id {
                    return Err(ExecuteError::RecordNotFound(id));
                }
                self.store
                    .replace(record.clone())
                    .map(|_| ())
                    .ok_or(ExecuteError::RecordNotFound(id))
            }

            Effect::Emit(event) => {
                log_event(&event);
                Ok(())
            }
        }
    }
}

fn log_event(event: &Event) {
    match event {
        Event::ReviewSubmitted {
            id,
            stage,
            date,
            status,
        } => tracing::info!(
            record_id = %id,
            stage = %stage,
            date = %date,
            status = %status,
            "review submitted"
        ),
        Event::OutcomeDecided { id, status } => {
            tracing::info!(record_id = %id, status = %status, "outcome decided")
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
