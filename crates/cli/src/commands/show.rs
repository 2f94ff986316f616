// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `probation show`: one record with its review history

use super::App;
use crate::error::CliError;
use crate::output::{self, OutputFormat, RecordDetail};
use clap::Args;
use probation_core::RecordId;

#[derive(Args)]
pub struct ShowArgs {
    /// Record id
    pub id: RecordId,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle(args: ShowArgs, app: &App) -> anyhow::Result<()> {
    let record = app
        .workflow
        .get_record(args.id)
        .map_err(CliError::workflow)?;
    output::print(&RecordDetail(&record), args.format)
}
