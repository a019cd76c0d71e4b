use crate::core::criteria::{Criterion, TagCheck};
use crate::core::scorers::CategoryScorer;
use crate::core::synonyms::SynonymDomain;
use crate::models::{AnswerMap, Category, HealthWeights};

const TYPE_KEYS: &[&str] = &["type", "providerType"];
const GOAL_KEYS: &[&str] = &["goal", "salonType"];
const TIMING_KEYS: &[&str] = &["timing"];
const PAYMENT_KEYS: &[&str] = &["payment"];

/// Health & wellness: provider type and goal expand through the health
/// vocabulary, timing and payment are plain substring checks.
#[derive(Debug, Clone)]
pub struct HealthWellnessScorer {
    weights: HealthWeights,
}

impl HealthWellnessScorer {
    pub fn new(weights: HealthWeights) -> Self {
        Self { weights }
    }
}

impl CategoryScorer for HealthWellnessScorer {
    fn category(&self) -> Category {
        Category::HealthWellness
    }

    fn criteria(&self, answers: &AnswerMap) -> Vec<Criterion> {
        let mut criteria = Vec::with_capacity(4);

        if let Some(kind) = answers.first_of(TYPE_KEYS) {
            criteria.push(Criterion::new(
                "type",
                self.weights.primary_type,
                TagCheck::synonym(kind, SynonymDomain::Health),
            ));
        }
        if let Some(goal) = answers.first_of(GOAL_KEYS) {
            criteria.push(Criterion::new(
                "goal",
                self.weights.goal,
                TagCheck::synonym(goal, SynonymDomain::Health),
            ));
        }
        if let Some(timing) = answers.first_of(TIMING_KEYS) {
            criteria.push(Criterion::new("timing", self.weights.timing, TagCheck::contains(timing)));
        }
        if let Some(payment) = answers.first_of(PAYMENT_KEYS) {
            criteria.push(Criterion::new("payment", self.weights.payment, TagCheck::contains(payment)));
        }

        criteria
    }
}
