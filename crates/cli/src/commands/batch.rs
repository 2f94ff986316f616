// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `probation batch`: JSON-lines requests in, JSON-lines responses out

use super::App;
use crate::error::CliError;
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Args)]
pub struct BatchArgs {
    /// Request file (default: stdin)
    pub file: Option<PathBuf>,
}

pub fn handle(args: BatchArgs, app: &mut App) -> anyhow::Result<()> {
    let stdout = io::stdout().lock();
    let summary = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                CliError::new(format!("Failed to open {}", path.display()))
                    .with_context(e.to_string())
                    .with_source(e)
            })?;
            probation_engine::run_batch(&mut app.workflow, BufReader::new(file), stdout)?
        }
        None => probation_engine::run_batch(&mut app.workflow, io::stdin().lock(), stdout)?,
    };

    tracing::debug!(
        requests = summary.requests,
        failed = summary.failed,
        "batch finished"
    );
    if summary.failed > 0 {
        return Err(CliError::new(format!(
            "{} of {} requests failed",
            summary.failed, summary.requests
        ))
        .with_context("Each failure is reported as an error response on stdout")
        .into());
    }
    Ok(())
}
