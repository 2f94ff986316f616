// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `probation dashboard`: a role's pending and completed tabs

use super::App;
use crate::output::{self, OutputFormat, RecordTable};
use clap::Args;
use probation_core::{Role, SortKey};
use probation_engine::Dashboard;
use std::fmt;

#[derive(Args)]
pub struct DashboardArgs {
    /// Acting role (default: [view] role from probation.toml)
    #[arg(long)]
    pub role: Option<Role>,

    /// nameAsc, dueDateAsc, dueDateDesc or statusAsc
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Department, or "All"
    #[arg(long)]
    pub department: Option<String>,

    /// Case-insensitive designation substring
    #[arg(long)]
    pub designation: Option<String>,

    /// Ignore the configured filters and sort
    #[arg(long)]
    pub clear: bool,

    /// Show the completed tab instead of the pending one
    #[arg(long)]
    pub completed: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle(args: DashboardArgs, app: &App) -> anyhow::Result<()> {
    let mut options = app.config.view_options()?;
    if args.clear {
        options.clear();
    }
    if let Some(sort) = args.sort {
        options = options.with_sort(sort);
    }
    if let Some(department) = args.department {
        options = options.with_department(department);
    }
    if let Some(designation) = args.designation {
        options = options.with_designation(designation);
    }
    let role = match args.role {
        Some(role) => role,
        None => app.config.role()?,
    };

    let dashboard = app.workflow.dashboard(role, &options);
    match args.format {
        OutputFormat::Text => print!(
            "{}",
            DashboardText {
                dashboard: &dashboard,
                completed: args.completed,
            }
        ),
        OutputFormat::Json => output::print_json(&dashboard)?,
    }
    Ok(())
}

struct DashboardText<'a> {
    dashboard: &'a Dashboard,
    completed: bool,
}

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.dashboard;
        writeln!(f, "{}", d.title)?;
        writeln!(f, "Departments: {}", d.departments.join(", "))?;
        writeln!(f)?;
        if self.completed {
            writeln!(f, "Completed ({})", d.completed.len())?;
            write!(f, "{}", RecordTable(&d.completed))
        } else {
            writeln!(f, "Pending ({})", d.pending_count)?;
            write!(f, "{}", RecordTable(&d.pending))
        }
    }
}
