use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::survey::domain::{Category, SurveySubmission};
use crate::survey::engine::ScoringEngine;
use crate::survey::router::survey_router;
use crate::survey::service::CarbonSurveyService;

/// A complete submission mirroring the survey's default picker state.
pub(super) fn submission() -> SurveySubmission {
    let mut submission = SurveySubmission::default();
    submission.record(Category::Transportation, 2);
    submission.record(Category::Appliances, 3);
    submission.record(Category::Diet, 1);
    submission.record(Category::Shopping, 2);
    submission.record(Category::EnergyUsage, 1);
    submission.record(Category::WasteManagement, 3);
    submission.record(Category::WaterUsage, 2);
    submission
}

pub(super) fn submission_with(category: Category, points: i32) -> SurveySubmission {
    let mut submission = submission();
    submission.record(category, points);
    submission
}

pub(super) fn submission_without(category: Category) -> SurveySubmission {
    let mut submission = submission();
    submission.responses.remove(category.key());
    submission
}

pub(super) fn uniform_submission(points: i32) -> SurveySubmission {
    let mut submission = SurveySubmission::default();
    for category in Category::ordered() {
        submission.record(category, points);
    }
    submission
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new()
}

pub(super) fn service() -> CarbonSurveyService {
    CarbonSurveyService::new()
}

pub(super) fn survey_router_with_service() -> axum::Router {
    survey_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
