// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for state machine orchestration

use crate::record::RecordId;
use crate::role::Stage;
use crate::status::Status;
use chrono::NaiveDate;
use serde::Serialize;

/// Effects are side effects that the transition function requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the stored record with the transitioned one
    SaveRecord { id: RecordId },
    /// Emit an event for other components to observe
    Emit(Event),
}

impl Effect {
    /// Effect name for log spans
    pub fn name(&self) -> &'static str {
        match self {
            Effect::SaveRecord { .. } => "record:save",
            Effect::Emit(event) => event.name(),
        }
    }
}

/// Events describing what a transition did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    ReviewSubmitted {
        id: RecordId,
        stage: Stage,
        date: NaiveDate,
        status: Status,
    },
    OutcomeDecided {
        id: RecordId,
        status: Status,
    },
}

impl Event {
    /// Event name in `noun:verb` form
    pub fn name(&self) -> &'static str {
        match self {
            Event::ReviewSubmitted { .. } => "review:submitted",
            Event::OutcomeDecided { .. } => "review:decided",
        }
    }

    pub fn record_id(&self) -> RecordId {
        match self {
            Event::ReviewSubmitted { id, .. } | Event::OutcomeDecided { id, .. } => *id,
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
