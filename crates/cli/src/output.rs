// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use probation_core::EmployeeRecord;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", value),
        OutputFormat::Json => print_json(value)?,
    }
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print records as a table (text) or an array (json)
pub fn print_records(records: &[EmployeeRecord], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", RecordTable(records)),
        OutputFormat::Json => print_json(records)?,
    }
    Ok(())
}

/// Text table of records, one row each
pub struct RecordTable<'a>(pub &'a [EmployeeRecord]);

impl fmt::Display for RecordTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No records");
        }
        writeln!(
            f,
            "{:<5} {:<8} {:<20} {:<14} {:<20} {:<10} STATUS",
            "ID", "EMP", "NAME", "DEPARTMENT", "DESIGNATION", "DUE"
        )?;
        for r in self.0 {
            writeln!(
                f,
                "{:<5} {:<8} {:<20} {:<14} {:<20} {:<10} {}",
                r.id,
                truncate(&r.employee_id, 8),
                truncate(&r.name, 20),
                truncate(&r.department, 14),
                truncate(&r.designation, 20),
                r.confirmation_due_date,
                r.status()
            )?;
        }
        Ok(())
    }
}

/// Record detail with its read-only review history
pub struct RecordDetail<'a>(pub &'a EmployeeRecord);

impl fmt::Display for RecordDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "Record {}: {} ({})", r.id, r.name, r.employee_id)?;
        writeln!(f, "  Designation: {}", r.designation)?;
        writeln!(f, "  Department: {}", r.department)?;
        writeln!(f, "  Reporting Manager: {}", r.reporting_manager_name)?;
        writeln!(f, "  Joined: {}", r.joining_date)?;
        writeln!(f, "  Confirmation Due: {}", r.confirmation_due_date)?;
        writeln!(f, "  Status: {}", r.status())?;
        if let Some(stage) = r.status().awaiting_stage() {
            writeln!(f, "  Awaiting: {}", stage)?;
        }

        for feedback in r.history() {
            writeln!(f)?;
            writeln!(f, "{}", feedback.stage().title())?;
            for (label, value) in feedback.details() {
                writeln!(f, "  {}: {}", label, value)?;
            }
        }
        Ok(())
    }
}

impl Serialize for RecordDetail<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('~');
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
