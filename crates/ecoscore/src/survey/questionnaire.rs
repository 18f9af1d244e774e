use super::domain::{Category, Rating};
use serde::Serialize;

/// One survey question as a front end should render it.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyQuestion {
    pub category: Category,
    pub prompt: &'static str,
    pub choices: Vec<RatingChoice>,
}

/// A selectable rating together with its display label.
#[derive(Debug, Clone, Serialize)]
pub struct RatingChoice {
    pub rating: Rating,
    pub label: &'static str,
}

/// Question wording shown for a category.
pub const fn prompt(category: Category) -> &'static str {
    match category {
        Category::Transportation => "How do you usually commute?",
        Category::Appliances => "How energy-efficient are your home appliances?",
        Category::Diet => "How often do you include meat in your diet?",
        Category::Shopping => "How often do you shop for new items?",
        Category::EnergyUsage => "How conscious are you about energy usage at home?",
        Category::WasteManagement => "How well do you manage waste?",
        Category::WaterUsage => "How mindful are you about water usage?",
    }
}

/// The full questionnaire in canonical category order, each question offering
/// the three point scale.
pub fn survey_questions() -> Vec<SurveyQuestion> {
    Category::ordered()
        .into_iter()
        .map(|category| SurveyQuestion {
            category,
            prompt: prompt(category),
            choices: Rating::ordered()
                .into_iter()
                .map(|rating| RatingChoice {
                    rating,
                    label: rating.label(),
                })
                .collect(),
        })
        .collect()
}
