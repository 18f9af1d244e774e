use super::super::domain::{Category, Rating, ResponseSet};
use super::catalog;

/// A category rule fires when the response for its category matches the
/// trigger rating exactly.
pub(crate) struct CategoryRule {
    pub(crate) category: Category,
    pub(crate) trigger: Rating,
    pub(crate) message: &'static str,
}

/// Rules are evaluated top to bottom and every match contributes, so the
/// table order is the order messages appear in the output.
pub(crate) const CATEGORY_RULES: [CategoryRule; 3] = [
    CategoryRule {
        category: Category::Appliances,
        trigger: Rating::Low,
        message: catalog::APPLIANCE_UPGRADE,
    },
    CategoryRule {
        category: Category::Diet,
        trigger: Rating::High,
        message: catalog::DIET_PRAISE,
    },
    CategoryRule {
        category: Category::Transportation,
        trigger: Rating::Low,
        message: catalog::TRANSIT_PRAISE,
    },
];

pub(crate) fn category_messages(responses: &ResponseSet) -> Vec<&'static str> {
    CATEGORY_RULES
        .iter()
        .filter(|rule| responses.rating(rule.category) == rule.trigger)
        .map(|rule| rule.message)
        .collect()
}
