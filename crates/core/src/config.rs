// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host configuration
//!
//! Loaded from `probation.toml`. Every section and key is optional; missing
//! values fall back to the dashboard defaults (sort by due date, all
//! departments, no designation filter, acting as reporting manager).

use crate::label::ParseError;
use crate::role::Role;
use crate::view::{SortKey, ViewOptions, ALL_DEPARTMENTS};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "probation.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid [view] {key}: {source}")]
    Invalid {
        key: &'static str,
        source: ParseError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub roster: RosterConfig,
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Seed file with the records to load; relative to the config file
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub sort: String,
    pub department: String,
    pub designation: String,
    pub role: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sort: SortKey::default().name().to_string(),
            department: ALL_DEPARTMENTS.to_string(),
            designation: String::new(),
            role: Role::default().label().to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(roster), Some(dir)) = (&config.roster.path, path.parent()) {
            if roster.is_relative() {
                config.roster.path = Some(dir.join(roster));
            }
        }
        config.view_options()?;
        config.role()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Load the explicit file if given, else `probation.toml` in `dir` if it
    /// exists, else defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Default view options for dashboards
    pub fn view_options(&self) -> Result<ViewOptions, ConfigError> {
        let sort = self
            .view
            .sort
            .parse::<SortKey>()
            .map_err(|source| ConfigError::Invalid { key: "sort", source })?;
        Ok(ViewOptions::default()
            .with_department(self.view.department.as_str())
            .with_designation(self.view.designation.as_str())
            .with_sort(sort))
    }

    /// Default acting role
    pub fn role(&self) -> Result<Role, ConfigError> {
        self.view
            .role
            .parse::<Role>()
            .map_err(|source| ConfigError::Invalid { key: "role", source })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
