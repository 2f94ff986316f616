// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! probation-storage: in-memory record store and roster loading

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod operation;
mod roster;
mod state;

pub use operation::Operation;
pub use roster::{load_roster, parse_roster, RosterError};
pub use state::MaterializedState;
