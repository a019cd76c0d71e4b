use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Business listing eligible for ranking within one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "isFeatured", default)]
    pub is_featured: bool,
}

impl Provider {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            tags: BTreeSet::new(),
            rating: None,
            is_featured: false,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Rating used for ordering, missing ratings count as zero
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.filter(|r| r.is_finite()).unwrap_or(0.0)
    }
}

/// Accept any JSON shape for `tags`, keeping only string members.
///
/// `null`, numbers, objects and mixed arrays never fail deserialization.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let tags = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        serde_json::Value::String(tag) if !tag.trim().is_empty() => BTreeSet::from([tag]),
        _ => BTreeSet::new(),
    };
    Ok(tags)
}

/// Provider catalog keyed by category key, as supplied by the data layer
pub type ProvidersByCategory = HashMap<String, Vec<Provider>>;

/// Values that mean the user skipped a question
const NO_PREFERENCE: &[&str] = &["any", "no-preference", "no_preference"];

/// Funnel answers: question id to selected option id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, String>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: impl Into<String>, option: impl Into<String>) {
        self.0.insert(question.into(), option.into());
    }

    /// Selected option for `question`, or `None` when unanswered or skipped
    pub fn get(&self, question: &str) -> Option<&str> {
        self.0
            .get(question)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty() && !NO_PREFERENCE.iter().any(|np| v.eq_ignore_ascii_case(np)))
    }

    /// First answered question among `questions`
    pub fn first_of(&self, questions: &[&str]) -> Option<&str> {
        questions.iter().find_map(|q| self.get(q))
    }

    /// All answered (question, option) pairs in key order
    pub fn selected(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .keys()
            .filter_map(|k| self.get(k).map(|v| (k.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.selected().next().is_none()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Business category, selects both the provider subset and the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    RealEstate,
    HomeServices,
    HealthWellness,
    RestaurantsCafes,
    ProfessionalServices,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::RealEstate,
        Category::HomeServices,
        Category::HealthWellness,
        Category::RestaurantsCafes,
        Category::ProfessionalServices,
    ];

    /// Stable key used by the funnel and the catalog
    pub fn key(self) -> &'static str {
        match self {
            Category::RealEstate => "real-estate",
            Category::HomeServices => "home-services",
            Category::HealthWellness => "health-wellness",
            Category::RestaurantsCafes => "restaurants-cafes",
            Category::ProfessionalServices => "professional-services",
        }
    }

    /// Parse a category key, accepting underscore spellings and short aliases
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "real-estate" | "realestate" => Some(Category::RealEstate),
            "home-services" | "home" => Some(Category::HomeServices),
            "health-wellness" | "health" | "health-and-wellness" => Some(Category::HealthWellness),
            "restaurants-cafes" | "restaurants" | "restaurants-and-cafes" => {
                Some(Category::RestaurantsCafes)
            }
            "professional-services" | "professional" => Some(Category::ProfessionalServices),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Provider paired with its score for one engine invocation
#[derive(Debug, Clone, Copy)]
pub struct ScoredProvider<'a> {
    pub provider: &'a Provider,
    pub score: u32,
    /// Satisfies at least one selected criterion
    pub relevant: bool,
}

/// Per-category criterion weights
///
/// Defaults are the ranking contract; deployments may override them via
/// the `scoring.weights` configuration section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub health: HealthWeights,
    pub home_services: HomeServicesWeights,
    pub real_estate: RealEstateWeights,
    pub restaurants: RestaurantWeights,
    pub professional: ProfessionalWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthWeights {
    pub primary_type: u32,
    pub goal: u32,
    pub timing: u32,
    pub payment: u32,
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            primary_type: 5,
            goal: 3,
            timing: 1,
            payment: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeServicesWeights {
    pub primary_type: u32,
    pub goal: u32,
    pub urgency: u32,
    pub budget: u32,
}

impl Default for HomeServicesWeights {
    fn default() -> Self {
        Self {
            primary_type: 5,
            goal: 3,
            urgency: 1,
            budget: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealEstateWeights {
    pub need: u32,
    pub property_type: u32,
    pub timeline: u32,
    pub move_when: u32,
    pub budget: u32,
    pub beds: u32,
    pub staging: u32,
}

impl Default for RealEstateWeights {
    fn default() -> Self {
        Self {
            need: 2,
            property_type: 2,
            timeline: 1,
            move_when: 1,
            budget: 1,
            beds: 1,
            staging: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantWeights {
    pub cuisine_exact: u32,
    pub cuisine_synonym: u32,
    pub occasion: u32,
    pub price_exact: u32,
    pub price_synonym: u32,
    pub service_style: u32,
    pub dietary_exact: u32,
    pub dietary_synonym: u32,
}

impl Default for RestaurantWeights {
    fn default() -> Self {
        Self {
            cuisine_exact: 8,
            cuisine_synonym: 6,
            occasion: 4,
            price_exact: 4,
            price_synonym: 3,
            service_style: 3,
            dietary_exact: 3,
            dietary_synonym: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalWeights {
    pub per_match: u32,
}

impl Default for ProfessionalWeights {
    fn default() -> Self {
        Self { per_match: 1 }
    }
}
