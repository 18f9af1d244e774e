use super::common::*;
use crate::survey::domain::{CarbonScore, Category, Rating, ResponseSet};
use crate::survey::intake::validate;

#[test]
fn score_sums_rating_points() {
    let responses = validate(&submission()).expect("submission validates");
    let score = engine().score(&responses);
    assert_eq!(score, CarbonScore(14));
}

#[test]
fn score_minimum_when_all_low() {
    let score = engine().score(&ResponseSet::uniform(Rating::Low));
    assert_eq!(score, CarbonScore(7));
}

#[test]
fn score_maximum_when_all_high() {
    let score = engine().score(&ResponseSet::uniform(Rating::High));
    assert_eq!(score, CarbonScore(21));
}

#[test]
fn score_ignores_submission_key_order() {
    let mut reversed = crate::survey::domain::SurveySubmission::default();
    for category in Category::ordered().into_iter().rev() {
        let points = submission()
            .rating_points(category)
            .expect("default submission is complete");
        reversed.record(category, points);
    }

    let baseline = validate(&submission()).expect("submission validates");
    let shuffled = validate(&reversed).expect("reversed submission validates");
    assert_eq!(engine().score(&baseline), engine().score(&shuffled));
}

#[test]
fn score_is_idempotent() {
    let responses = validate(&submission()).expect("submission validates");
    let engine = engine();
    assert_eq!(engine.score(&responses), engine.score(&responses));

    let first = engine.assess(&responses);
    let second = engine.assess(&responses);
    assert_eq!(first, second);
}

#[test]
fn single_category_change_moves_score_by_its_delta() {
    let baseline = validate(&submission()).expect("submission validates");
    let bumped = validate(&submission_with(Category::Shopping, 3)).expect("bumped validates");

    let engine = engine();
    let baseline_score = engine.score(&baseline).points();
    let bumped_score = engine.score(&bumped).points();

    // Shopping moves from medium (2) to high (3).
    assert_eq!(bumped_score, baseline_score + 1);
}
