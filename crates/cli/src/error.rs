// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors as shown to the person at the terminal
//!
//! Each error has a one-line message, optional context lines and numbered
//! suggestions naming the command or flag that fixes it.

use probation_core::{FieldKind, RecordId, Role, Status, ValidationError, WorkflowError};
use std::fmt;
use std::path::Path;

/// An error with context lines and suggestions
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl CliError {
    /// Error for a record id the roster does not contain.
    pub fn record_not_found(id: RecordId) -> Self {
        CliError::new(format!("Record {} not found", id))
            .with_context("The loaded roster has no record with this id")
            .with_suggestion("List records: probation list")
    }

    /// Error for a review the role may not submit right now.
    pub fn not_actionable(id: RecordId, role: Role, status: Status) -> Self {
        let err = CliError::new(format!("{} cannot review record {}", role, id))
            .with_context(format!("Record is {}", status));
        let err = match status.awaiting_stage() {
            Some(stage) => err
                .with_context(format!("Only the {} can review it now", stage.role()))
                .with_suggestion(format!(
                    "Submit as the {}: probation review {} --role \"{}\" ...",
                    stage.role(),
                    id,
                    stage.role()
                )),
            None => err.with_context("All three reviews are complete"),
        };
        err.with_suggestion(format!("Show the record: probation show {}", id))
    }

    /// Error for a form that fails the stage schema.
    pub fn invalid_review(e: &ValidationError) -> Self {
        let mut err = CliError::new(format!("Invalid {} review", e.stage));
        for field in &e.fields {
            err = err.with_context(field.to_string());
        }
        for field in e.stage.fields() {
            err = err.with_suggestion(match field.kind {
                FieldKind::Text => format!("--{} <TEXT>", field.name),
                FieldKind::Choice(allowed) => {
                    format!("--{} one of: {}", field.name, allowed.join(", "))
                }
            });
        }
        err
    }

    /// Error for a workflow operation that was refused.
    pub fn workflow(e: WorkflowError) -> Self {
        let err = match &e {
            WorkflowError::NotFound(id) => Self::record_not_found(*id),
            WorkflowError::NotActionable { id, role, status } => {
                Self::not_actionable(*id, *role, *status)
            }
            WorkflowError::Validation(v) => Self::invalid_review(v),
        };
        err.with_source(e)
    }

    /// Error for when no roster file is configured.
    pub fn no_roster() -> Self {
        CliError::new("No roster file")
            .with_context("Records are loaded from a JSON or JSON-lines roster file")
            .with_suggestion("Pass one with: probation --roster <FILE> ...")
            .with_suggestion("Or set it in probation.toml: [roster] path = \"roster.json\"")
    }

    /// Error for a roster that could not be loaded.
    pub fn roster<E: std::error::Error + Send + Sync + 'static>(path: &Path, source: E) -> Self {
        CliError::new(format!("Failed to load roster {}", path.display()))
            .with_context(source.to_string())
            .with_suggestion("Check that every record's status matches its filled reviews")
            .with_source(source)
    }
}
