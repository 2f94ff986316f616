// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn rm_form() -> ReviewForm {
    ReviewForm {
        strengths: "Ships reliably".to_string(),
        weaknesses: "Documentation".to_string(),
        recommendation: "Confirm".to_string(),
        remarks: "Good first months".to_string(),
        ..ReviewForm::default()
    }
}

fn head_form(decision: &str) -> ReviewForm {
    ReviewForm {
        decision: decision.to_string(),
        remarks: "Agreed".to_string(),
        ..ReviewForm::default()
    }
}

#[test]
fn valid_rm_form_produces_rm_review() {
    let review = validate(Stage::ReportingManager, &rm_form()).unwrap();
    assert_eq!(
        review,
        Review::ReportingManager {
            strengths: "Ships reliably".to_string(),
            weaknesses: "Documentation".to_string(),
            recommendation: Recommendation::Confirm,
            remarks: "Good first months".to_string(),
        }
    );
}

#[test]
fn empty_strengths_is_reported() {
    let form = ReviewForm {
        strengths: String::new(),
        ..rm_form()
    };
    let err = validate(Stage::ReportingManager, &form).unwrap_err();
    assert_eq!(err.stage, Stage::ReportingManager);
    assert_eq!(err.field_names(), vec!["strengths"]);
    assert_eq!(err.fields[0].problem, FieldProblem::Empty);
}

#[test]
fn blank_text_counts_as_empty() {
    let form = ReviewForm {
        remarks: "   ".to_string(),
        ..rm_form()
    };
    let err = validate(Stage::ReportingManager, &form).unwrap_err();
    assert_eq!(err.field_names(), vec!["remarks"]);
}

#[test]
fn every_faulty_field_is_reported_in_schema_order() {
    let err = validate(Stage::ReportingManager, &ReviewForm::default()).unwrap_err();
    assert_eq!(
        err.field_names(),
        vec!["strengths", "weaknesses", "recommendation", "remarks"]
    );
}

#[test]
fn unknown_recommendation_is_not_allowed() {
    let form = ReviewForm {
        recommendation: "Promote".to_string(),
        ..rm_form()
    };
    let err = validate(Stage::ReportingManager, &form).unwrap_err();
    assert_eq!(
        err.fields[0].problem,
        FieldProblem::NotAllowed {
            value: "Promote".to_string(),
            allowed: Recommendation::LABELS,
        }
    );
    assert!(err.to_string().contains("recommendation 'Promote' is not one of"));
}

#[test]
fn text_is_trimmed() {
    let form = ReviewForm {
        remarks: "  fine  ".to_string(),
        ..head_form("Approve")
    };
    let review = validate(Stage::DeptHead, &form).unwrap();
    assert_eq!(
        review,
        Review::DeptHead {
            decision: Decision::Approve,
            remarks: "fine".to_string(),
        }
    );
}

#[parameterized(
    dept_head = { Stage::DeptHead },
    hr_head = { Stage::HrHead },
)]
fn head_stages_require_decision_and_remarks(stage: Stage) {
    let err = validate(stage, &ReviewForm::default()).unwrap_err();
    assert_eq!(err.field_names(), vec!["decision", "remarks"]);

    let review = validate(stage, &head_form("Reject")).unwrap();
    assert_eq!(review.stage(), stage);
}

#[test]
fn head_stage_ignores_rm_fields() {
    let form = ReviewForm {
        strengths: "ignored".to_string(),
        ..head_form("approve")
    };
    assert!(validate(Stage::HrHead, &form).is_ok());
}

#[test]
fn rm_stage_ignores_decision_field() {
    let form = ReviewForm {
        decision: "nonsense".to_string(),
        ..rm_form()
    };
    assert!(validate(Stage::ReportingManager, &form).is_ok());
}

#[test]
fn schema_fields_match_validation() {
    let names: Vec<_> = Stage::ReportingManager
        .fields()
        .iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(
        names,
        vec!["strengths", "weaknesses", "recommendation", "remarks"]
    );
    assert_eq!(
        Stage::HrHead.fields()[0].kind,
        FieldKind::Choice(Decision::LABELS)
    );
}

#[test]
fn stamp_sets_date() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let feedback = validate(Stage::DeptHead, &head_form("Approve"))
        .unwrap()
        .stamp(date);
    assert_eq!(feedback.stage(), Stage::DeptHead);
    assert_eq!(feedback.date(), date);
}

#[test]
fn form_deserializes_with_missing_fields() {
    let form: ReviewForm = serde_json::from_str(r#"{"decision":"Approve"}"#).unwrap();
    assert_eq!(form.decision, "Approve");
    assert!(form.remarks.is_empty());
}
