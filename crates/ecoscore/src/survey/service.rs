use super::domain::SurveySubmission;
use super::engine::{CalculationOutcome, ScoringEngine};
use super::intake::{self, SurveyValidationError};

/// Service composing intake validation with the scoring engine.
#[derive(Debug, Default, Clone)]
pub struct CarbonSurveyService {
    engine: ScoringEngine,
}

impl CarbonSurveyService {
    pub fn new() -> Self {
        Self {
            engine: ScoringEngine::new(),
        }
    }

    /// Validate a submission and, when it is complete, produce the score and
    /// recommendation list.
    ///
    /// Validation failures short-circuit: the engine never runs on an
    /// incomplete or out-of-range submission.
    pub fn calculate(
        &self,
        submission: &SurveySubmission,
    ) -> Result<CalculationOutcome, SurveyValidationError> {
        let responses = intake::validate(submission)?;
        Ok(self.engine.assess(&responses))
    }
}
