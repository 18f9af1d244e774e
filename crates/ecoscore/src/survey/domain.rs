use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of lifestyle areas the survey asks about.
///
/// Variants are declared in canonical order: the order questions are asked,
/// validation reports problems, and recommendations are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Transportation,
    Appliances,
    Diet,
    Shopping,
    EnergyUsage,
    WasteManagement,
    WaterUsage,
}

impl Category {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Transportation,
            Self::Appliances,
            Self::Diet,
            Self::Shopping,
            Self::EnergyUsage,
            Self::WasteManagement,
            Self::WaterUsage,
        ]
    }

    /// Wire key used in submission payloads.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Transportation => "transportation",
            Self::Appliances => "appliances",
            Self::Diet => "diet",
            Self::Shopping => "shopping",
            Self::EnergyUsage => "energyUsage",
            Self::WasteManagement => "wasteManagement",
            Self::WaterUsage => "waterUsage",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::Appliances => "Appliances",
            Self::Diet => "Diet",
            Self::Shopping => "Shopping",
            Self::EnergyUsage => "Energy Usage",
            Self::WasteManagement => "Waste Management",
            Self::WaterUsage => "Water Usage",
        }
    }

    pub(crate) const fn position(self) -> usize {
        self as usize
    }
}

/// Impact rating on the survey's three point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Rating {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    /// Points contributed to the carbon score.
    pub const fn points(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Maps raw submitted points back onto the scale.
    pub fn from_points(points: i32) -> Option<Self> {
        match points {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.points())
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.points()
    }
}

/// Raw survey input exactly as a presentation surface collected it.
///
/// Keys are free-form strings and values unbounded integers; nothing is
/// trusted until intake promotes the submission to a [`ResponseSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveySubmission {
    pub responses: BTreeMap<String, i32>,
}

impl SurveySubmission {
    pub fn record(&mut self, category: Category, points: i32) {
        self.responses.insert(category.key().to_string(), points);
    }

    pub fn rating_points(&self, category: Category) -> Option<i32> {
        self.responses.get(category.key()).copied()
    }
}

/// A validated rating for every category, in canonical order.
///
/// Construction goes through intake validation, so lookups are total: every
/// category always has a rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSet {
    ratings: [Rating; 7],
}

impl ResponseSet {
    pub fn from_fn(mut rating_for: impl FnMut(Category) -> Rating) -> Self {
        Self {
            ratings: Category::ordered().map(&mut rating_for),
        }
    }

    pub fn uniform(rating: Rating) -> Self {
        Self::from_fn(|_| rating)
    }

    pub(crate) fn try_from_fn<E>(
        mut rating_for: impl FnMut(Category) -> Result<Rating, E>,
    ) -> Result<Self, E> {
        // Every slot is overwritten by the loop over the canonical order.
        let mut ratings = [Rating::Low; 7];
        for category in Category::ordered() {
            ratings[category.position()] = rating_for(category)?;
        }
        Ok(Self { ratings })
    }

    pub fn rating(&self, category: Category) -> Rating {
        self.ratings[category.position()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Rating)> + '_ {
        Category::ordered()
            .into_iter()
            .map(|category| (category, self.rating(category)))
    }
}

/// Aggregate carbon score: the sum of rating points across all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarbonScore(pub u16);

impl CarbonScore {
    pub const fn points(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CarbonScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
