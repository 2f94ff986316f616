// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod batch;
pub mod dashboard;
pub mod list;
pub mod review;
pub mod show;

use crate::error::CliError;
use probation_core::{Config, SystemClock};
use probation_engine::Workflow;
use probation_storage::MaterializedState;
use std::path::{Path, PathBuf};

/// Loaded configuration and the workflow over the in-memory roster
pub struct App {
    pub config: Config,
    pub workflow: Workflow<MaterializedState, SystemClock>,
}

impl App {
    /// Load config, then the roster named by `--roster` or the config file
    pub fn load(config: Option<&Path>, roster: Option<PathBuf>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::discover(config, &cwd)?;
        let path = roster
            .or_else(|| config.roster.path.clone())
            .ok_or_else(CliError::no_roster)?;
        let store =
            MaterializedState::from_roster(&path).map_err(|e| CliError::roster(&path, e))?;

        Ok(Self {
            config,
            workflow: Workflow::new(store, SystemClock),
        })
    }
}
