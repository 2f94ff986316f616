// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `probation list`

use super::App;
use crate::output::{self, OutputFormat};
use clap::Args;

#[derive(Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle(args: ListArgs, app: &App) -> anyhow::Result<()> {
    output::print_records(&app.workflow.list_records(), args.format)
}
