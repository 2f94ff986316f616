// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Final outcome of a completed review

use crate::feedback::{Decision, Recommendation};
use crate::status::Status;

/// Decide the terminal status once the HR head has reviewed
///
/// First match wins:
/// 1. a Terminate recommendation or any Reject → Terminated
/// 2. an Extend Probation recommendation → ProbationExtended
/// 3. otherwise → Confirmed
///
/// Earlier stages never short-circuit: a department head Reject is only
/// acted on here, after the HR head has also reviewed.
pub fn decide(
    recommendation: Option<Recommendation>,
    dept_head: Option<Decision>,
    hr_head: Decision,
) -> Status {
    if recommendation == Some(Recommendation::Terminate)
        || dept_head == Some(Decision::Reject)
        || hr_head == Decision::Reject
    {
        Status::Terminated
    } else if recommendation == Some(Recommendation::ExtendProbation) {
        Status::ProbationExtended
    } else {
        Status::Confirmed
    }
}
