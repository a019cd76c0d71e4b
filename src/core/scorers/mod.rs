//! Category scoring strategies.
//!
//! Every category turns the funnel answers it understands into a list of
//! weighted [`Criterion`]s. Providers are scored as the base score plus the
//! weights of the criteria they satisfy; ordering is left to
//! [`crate::core::ranking`].

pub mod health;
pub mod home_services;
pub mod professional;
pub mod real_estate;
pub mod restaurants;

use std::collections::HashMap;
use std::fmt;

use crate::core::criteria::{evaluate, Criterion};
use crate::core::ranking::FeaturedRule;
use crate::models::{AnswerMap, Category, Provider, ScoredProvider, ScoringWeights};

pub use health::HealthWellnessScorer;
pub use home_services::HomeServicesScorer;
pub use professional::ProfessionalServicesScorer;
pub use real_estate::RealEstateScorer;
pub use restaurants::RestaurantsScorer;

/// Output of a scorer before sorting
#[derive(Debug)]
pub struct ScoredBatch<'a> {
    pub scored: Vec<ScoredProvider<'a>>,
    /// The user selected at least one criterion this category understands
    pub criteria_selected: bool,
}

/// Scoring strategy for one category
pub trait CategoryScorer: Send + Sync + fmt::Debug {
    fn category(&self) -> Category;

    /// Criteria selected by `answers`; unknown answer keys are ignored
    fn criteria(&self, answers: &AnswerMap) -> Vec<Criterion>;

    fn featured_rule(&self) -> FeaturedRule {
        FeaturedRule::WhenRelevant
    }

    /// Whether `provider` stays in the candidate set at all
    fn admits(&self, _provider: &Provider, _answers: &AnswerMap) -> bool {
        true
    }

    fn score<'a>(&self, providers: &'a [Provider], answers: &AnswerMap) -> ScoredBatch<'a> {
        let criteria = self.criteria(answers);

        let scored = providers
            .iter()
            .filter(|provider| self.admits(provider, answers))
            .map(|provider| {
                let (score, relevant) = evaluate(provider, &criteria);
                ScoredProvider {
                    provider,
                    score,
                    relevant,
                }
            })
            .collect();

        ScoredBatch {
            scored,
            criteria_selected: !criteria.is_empty(),
        }
    }
}

/// Explicit category → scorer mapping.
///
/// Categories without a registered scorer use the professional services
/// scorer.
#[derive(Debug)]
pub struct ScorerRegistry {
    scorers: HashMap<Category, Box<dyn CategoryScorer>>,
    fallback: Box<dyn CategoryScorer>,
}

impl ScorerRegistry {
    pub fn new(weights: &ScoringWeights) -> Self {
        let mut registry = Self {
            scorers: HashMap::new(),
            fallback: Box::new(ProfessionalServicesScorer::new(weights.professional)),
        };

        registry.register(RealEstateScorer::new(weights.real_estate));
        registry.register(HomeServicesScorer::new(weights.home_services));
        registry.register(HealthWellnessScorer::new(weights.health));
        registry.register(RestaurantsScorer::new(weights.restaurants));
        registry.register(ProfessionalServicesScorer::new(weights.professional));

        registry
    }

    /// Register `scorer` for its category, replacing any previous one
    pub fn register<S: CategoryScorer + 'static>(&mut self, scorer: S) {
        self.scorers.insert(scorer.category(), Box::new(scorer));
    }

    pub fn get(&self, category: Category) -> &dyn CategoryScorer {
        self.scorers
            .get(&category)
            .map(|scorer| scorer.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    /// Scorer used for category keys outside the known set
    pub fn fallback(&self) -> &dyn CategoryScorer {
        self.fallback.as_ref()
    }
}

impl Default for ScorerRegistry {
    fn default() -> Self {
        Self::new(&ScoringWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_category() {
        let registry = ScorerRegistry::default();
        for category in Category::ALL {
            assert_eq!(registry.get(category).category(), category);
        }
        assert_eq!(registry.fallback().category(), Category::ProfessionalServices);
    }

    #[test]
    fn test_only_restaurants_use_score_tie_rule() {
        let registry = ScorerRegistry::default();
        for category in Category::ALL {
            let expected = if category == Category::RestaurantsCafes {
                FeaturedRule::OnScoreTie
            } else {
                FeaturedRule::WhenRelevant
            };
            assert_eq!(registry.get(category).featured_rule(), expected, "{}", category);
        }
    }

    #[test]
    fn test_score_keeps_every_provider_without_answers() {
        let registry = ScorerRegistry::default();
        let providers = vec![
            Provider::new("1", "A", "home-services"),
            Provider::new("2", "B", "home-services").with_tags(["plumbing"]),
        ];

        let batch = registry
            .get(Category::HomeServices)
            .score(&providers, &AnswerMap::new());

        assert_eq!(batch.scored.len(), 2);
        assert!(!batch.criteria_selected);
        assert!(batch.scored.iter().all(|s| s.score == batch.scored[0].score));
    }
}
