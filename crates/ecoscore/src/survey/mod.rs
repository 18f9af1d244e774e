//! Lifestyle carbon survey intake, scoring, and recommendation pipeline.
//!
//! A raw [`SurveySubmission`] is promoted to a validated [`ResponseSet`]
//! before the scoring engine runs, so scoring and recommendation code never
//! sees missing categories or out-of-range ratings.

pub mod domain;
pub(crate) mod engine;
pub mod intake;
pub mod questionnaire;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{CarbonScore, Category, Rating, ResponseSet, SurveySubmission};
pub use engine::{CalculationOutcome, ScoringEngine};
pub use intake::SurveyValidationError;
pub use questionnaire::{survey_questions, RatingChoice, SurveyQuestion};
pub use router::survey_router;
pub use service::CarbonSurveyService;
