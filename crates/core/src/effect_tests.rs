// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn event_names() {
    let submitted = Event::ReviewSubmitted {
        id: RecordId(1),
        stage: Stage::DeptHead,
        date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        status: Status::PendingHrHead,
    };
    let decided = Event::OutcomeDecided {
        id: RecordId(2),
        status: Status::Terminated,
    };
    assert_eq!(submitted.name(), "review:submitted");
    assert_eq!(decided.name(), "review:decided");
    assert_eq!(decided.record_id(), RecordId(2));
}

#[test]
fn events_serialize_with_type_tag() {
    let event = Event::OutcomeDecided {
        id: RecordId(3),
        status: Status::ProbationExtended,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "outcome_decided");
    assert_eq!(json["id"], 3);
    assert_eq!(json["status"], "ProbationExtended");
}

#[test]
fn effect_names_follow_their_event() {
    let emit = Effect::Emit(Event::OutcomeDecided {
        id: RecordId(1),
        status: Status::Confirmed,
    });
    assert_eq!(Effect::SaveRecord { id: RecordId(1) }.name(), "record:save");
    assert_eq!(emit.name(), "review:decided");
}
