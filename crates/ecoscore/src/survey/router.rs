use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::SurveySubmission;
use super::questionnaire::survey_questions;
use super::service::CarbonSurveyService;

/// Router builder exposing HTTP endpoints for the survey.
pub fn survey_router(service: Arc<CarbonSurveyService>) -> Router {
    Router::new()
        .route("/api/v1/survey/questionnaire", get(questionnaire_handler))
        .route("/api/v1/survey/calculations", post(calculate_handler))
        .with_state(service)
}

pub(crate) async fn questionnaire_handler() -> Response {
    (StatusCode::OK, axum::Json(survey_questions())).into_response()
}

pub(crate) async fn calculate_handler(
    State(service): State<Arc<CarbonSurveyService>>,
    axum::Json(submission): axum::Json<SurveySubmission>,
) -> Response {
    match service.calculate(&submission) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
