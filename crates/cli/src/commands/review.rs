// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `probation review`: submit one stage's review
//!
//! The review applies to the in-memory roster only; the roster file is
//! never rewritten.

use super::App;
use crate::error::CliError;
use crate::output::{self, OutputFormat, RecordDetail};
use clap::Args;
use probation_core::{RecordId, ReviewForm, Role};

#[derive(Args)]
pub struct ReviewArgs {
    /// Record id
    pub id: RecordId,

    /// Acting role (default: [view] role from probation.toml)
    #[arg(long)]
    pub role: Option<Role>,

    /// Reporting manager only
    #[arg(long, default_value = "")]
    pub strengths: String,

    /// Areas of improvement; reporting manager only
    #[arg(long, default_value = "")]
    pub weaknesses: String,

    /// Confirm, Extend Probation or Terminate; reporting manager only
    #[arg(long, default_value = "")]
    pub recommendation: String,

    /// Approve or Reject; department head and HR head only
    #[arg(long, default_value = "")]
    pub decision: String,

    #[arg(long, default_value = "")]
    pub remarks: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle(args: ReviewArgs, app: &mut App) -> anyhow::Result<()> {
    let role = match args.role {
        Some(role) => role,
        None => app.config.role()?,
    };
    let form = ReviewForm {
        strengths: args.strengths,
        weaknesses: args.weaknesses,
        recommendation: args.recommendation,
        decision: args.decision,
        remarks: args.remarks,
    };

    let record = app
        .workflow
        .submit_review(args.id, role, &form)
        .map_err(CliError::workflow)?;

    if let OutputFormat::Text = args.format {
        println!(
            "{} submitted for record {}; status is now {}",
            role.stage().title(),
            record.id,
            record.status()
        );
        println!();
    }
    output::print(&RecordDetail(&record), args.format)
}
