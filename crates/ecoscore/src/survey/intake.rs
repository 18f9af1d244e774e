use super::domain::{Category, Rating, ResponseSet, SurveySubmission};

/// Validation errors raised while promoting a raw submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyValidationError {
    #[error("missing response for category '{}'", .0.key())]
    MissingCategory(Category),
    #[error("invalid rating {value} for category '{}': expected 1, 2 or 3", .category.key())]
    InvalidRating { category: Category, value: i32 },
}

/// Convert an inbound submission into a validated response set.
///
/// Categories are checked in canonical order and the first problem found is
/// reported. Keys outside the closed category set are ignored.
pub fn validate(submission: &SurveySubmission) -> Result<ResponseSet, SurveyValidationError> {
    ResponseSet::try_from_fn(|category| {
        let points = submission
            .rating_points(category)
            .ok_or(SurveyValidationError::MissingCategory(category))?;
        Rating::from_points(points)
            .ok_or(SurveyValidationError::InvalidRating {
                category,
                value: points,
            })
    })
}

impl TryFrom<&SurveySubmission> for ResponseSet {
    type Error = SurveyValidationError;

    fn try_from(submission: &SurveySubmission) -> Result<Self, Self::Error> {
        validate(submission)
    }
}
