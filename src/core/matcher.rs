use std::sync::Arc;

use crate::core::ranking;
use crate::core::scorers::{CategoryScorer, ScorerRegistry};
use crate::models::{AnswerMap, Category, Provider, ProvidersByCategory, ScoringWeights};

/// Entry point of the ranking engine
///
/// # Pipeline Stages
/// 1. Resolve the category key to a scorer (unknown keys use the generic one)
/// 2. Build the selected criteria from the funnel answers
/// 3. Score every admitted provider
/// 4. Sort with the category's featured rule
///
/// The matcher is pure: inputs are never mutated and every call allocates
/// its own output.
#[derive(Debug, Clone)]
pub struct Matcher {
    registry: Arc<ScorerRegistry>,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            registry: Arc::new(ScorerRegistry::new(&weights)),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_registry(registry: ScorerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Rank the providers of `category_key` for the given answers.
    ///
    /// A category missing from `providers_by_category` yields an empty list.
    /// Keys outside the known categories are scored by the professional
    /// services scorer.
    pub fn score_providers(
        &self,
        category_key: &str,
        answers: &AnswerMap,
        providers_by_category: &ProvidersByCategory,
    ) -> Vec<Provider> {
        let category = Category::from_key(category_key);

        let providers = providers_by_category
            .get(category_key)
            .or_else(|| category.and_then(|c| providers_by_category.get(c.key())))
            .map(Vec::as_slice)
            .unwrap_or_default();

        let scorer = match category {
            Some(category) => self.registry.get(category),
            None => {
                tracing::debug!(
                    "Unknown category '{}', using {} scorer",
                    category_key,
                    self.registry.fallback().category()
                );
                self.registry.fallback()
            }
        };

        self.rank_with(scorer, answers, providers)
    }

    /// Rank `providers` with the scorer registered for `category`
    pub fn rank(&self, category: Category, answers: &AnswerMap, providers: &[Provider]) -> Vec<Provider> {
        self.rank_with(self.registry.get(category), answers, providers)
    }

    fn rank_with(
        &self,
        scorer: &dyn CategoryScorer,
        answers: &AnswerMap,
        providers: &[Provider],
    ) -> Vec<Provider> {
        let batch = scorer.score(providers, answers);

        tracing::debug!(
            "Ranking {} of {} providers for {} (criteria selected: {})",
            batch.scored.len(),
            providers.len(),
            scorer.category(),
            batch.criteria_selected
        );

        ranking::rank(batch.scored, scorer.featured_rule(), batch.criteria_selected)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
