use crate::core::criteria::{Criterion, TagCheck};
use crate::core::scorers::CategoryScorer;
use crate::models::{AnswerMap, Category, Provider, RealEstateWeights};

/// Tags that mark a provider as a staging specialist
pub const STAGING_TAGS: &[&str] = &[
    "staging",
    "stager",
    "home staging",
    "home-staging",
    "staging specialist",
];

/// Real estate: every criterion is an exact tag comparison. Staging
/// specialists only appear when the user asked for staging.
#[derive(Debug, Clone)]
pub struct RealEstateScorer {
    weights: RealEstateWeights,
}

impl RealEstateScorer {
    pub fn new(weights: RealEstateWeights) -> Self {
        Self { weights }
    }
}

/// Whether the user explicitly asked for staging
pub fn wants_staging(answers: &AnswerMap) -> bool {
    answers
        .get("staging")
        .is_some_and(|v| v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("true"))
}

pub fn is_staging_specialist(provider: &Provider) -> bool {
    TagCheck::AnyExact(STAGING_TAGS).matches(provider)
}

impl CategoryScorer for RealEstateScorer {
    fn category(&self) -> Category {
        Category::RealEstate
    }

    fn criteria(&self, answers: &AnswerMap) -> Vec<Criterion> {
        let w = &self.weights;
        let exact = [
            ("need", w.need),
            ("propertyType", w.property_type),
            ("timeline", w.timeline),
            ("moveWhen", w.move_when),
            ("budget", w.budget),
            ("beds", w.beds),
        ];

        let mut criteria: Vec<Criterion> = exact
            .into_iter()
            .filter_map(|(key, weight)| {
                answers
                    .get(key)
                    .map(|value| Criterion::new(key, weight, TagCheck::exact(value)))
            })
            .collect();

        if wants_staging(answers) {
            criteria.push(Criterion::new("staging", w.staging, TagCheck::AnyExact(STAGING_TAGS)));
        }

        criteria
    }

    fn admits(&self, provider: &Provider, answers: &AnswerMap) -> bool {
        if wants_staging(answers) || !is_staging_specialist(provider) {
            return true;
        }
        tracing::trace!("Excluding staging specialist {} (staging not requested)", provider.id);
        false
    }
}
