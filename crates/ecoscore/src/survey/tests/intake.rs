use super::common::*;
use crate::survey::domain::{Category, Rating, ResponseSet};
use crate::survey::intake::{validate, SurveyValidationError};

#[test]
fn validate_accepts_complete_submission() {
    let responses = validate(&submission()).expect("complete submission validates");

    assert_eq!(responses.rating(Category::Transportation), Rating::Medium);
    assert_eq!(responses.rating(Category::Appliances), Rating::High);
    assert_eq!(responses.rating(Category::Diet), Rating::Low);
    assert_eq!(responses.rating(Category::Shopping), Rating::Medium);
    assert_eq!(responses.rating(Category::EnergyUsage), Rating::Low);
    assert_eq!(responses.rating(Category::WasteManagement), Rating::High);
    assert_eq!(responses.rating(Category::WaterUsage), Rating::Medium);
}

#[test]
fn validate_reports_missing_category() {
    let submission = submission_without(Category::Diet);

    match validate(&submission) {
        Err(SurveyValidationError::MissingCategory(Category::Diet)) => {}
        other => panic!("expected missing diet category, got {other:?}"),
    }
}

#[test]
fn validate_reports_out_of_range_rating() {
    let submission = submission_with(Category::Shopping, 5);

    match validate(&submission) {
        Err(SurveyValidationError::InvalidRating {
            category: Category::Shopping,
            value: 5,
        }) => {}
        other => panic!("expected invalid shopping rating, got {other:?}"),
    }
}

#[test]
fn validate_rejects_zero_and_negative_points() {
    match validate(&submission_with(Category::WaterUsage, 0)) {
        Err(SurveyValidationError::InvalidRating { value: 0, .. }) => {}
        other => panic!("expected invalid rating for zero, got {other:?}"),
    }

    match validate(&submission_with(Category::EnergyUsage, -2)) {
        Err(SurveyValidationError::InvalidRating { value: -2, .. }) => {}
        other => panic!("expected invalid rating for negative, got {other:?}"),
    }
}

#[test]
fn validate_reports_first_problem_in_canonical_order() {
    // Transportation precedes diet in the canonical order, so its problem
    // wins even though both responses are unusable.
    let mut submission = submission_with(Category::Diet, 9);
    submission.responses.remove(Category::Transportation.key());

    match validate(&submission) {
        Err(SurveyValidationError::MissingCategory(Category::Transportation)) => {}
        other => panic!("expected transportation reported first, got {other:?}"),
    }
}

#[test]
fn validate_ignores_unknown_keys() {
    let mut submission = submission();
    submission.responses.insert("petOwnership".to_string(), 2);

    let responses = validate(&submission).expect("unknown keys are ignored");
    assert_eq!(responses.rating(Category::Transportation), Rating::Medium);
}

#[test]
fn error_messages_name_the_category() {
    let missing = SurveyValidationError::MissingCategory(Category::EnergyUsage);
    assert!(missing.to_string().contains("energyUsage"));

    let invalid = SurveyValidationError::InvalidRating {
        category: Category::Diet,
        value: 7,
    };
    let rendered = invalid.to_string();
    assert!(rendered.contains("diet"));
    assert!(rendered.contains('7'));
}

#[test]
fn try_from_matches_validate() {
    let submission = submission();
    let via_try_from = ResponseSet::try_from(&submission).expect("try_from validates");
    let via_validate = validate(&submission).expect("validate succeeds");
    assert_eq!(via_try_from, via_validate);
}
