//! Recommendation wording, collected in one place so copy edits never touch
//! rule logic.

// Category-specific messages.
pub(crate) const APPLIANCE_UPGRADE: &str = "Consider upgrading to energy-efficient appliances.";
pub(crate) const DIET_PRAISE: &str = "Great job keeping meat consumption low. Keep it up!";
pub(crate) const TRANSIT_PRAISE: &str = "Well done using public transport or carpooling.";

// Score tier messages.
pub(crate) const TIER_TRANSIT: &str = "Consider carpooling or using public transportation.";
pub(crate) const TIER_APPLIANCES: &str = "Try using energy-efficient appliances at home.";
pub(crate) const TIER_REDUCE_MEAT: &str =
    "Consider reducing meat consumption for a lower carbon footprint.";
pub(crate) const TIER_ECO_SHOPPING: &str = "Switch to eco-friendly shopping habits.";
pub(crate) const TIER_FALLBACK: &str = "Unable to provide specific recommendations.";
