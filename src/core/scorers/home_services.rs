use crate::core::criteria::{Criterion, TagCheck};
use crate::core::scorers::CategoryScorer;
use crate::core::synonyms::SynonymDomain;
use crate::models::{AnswerMap, Category, HomeServicesWeights};

const TYPE_KEYS: &[&str] = &["type", "serviceType"];
const GOAL_KEYS: &[&str] = &["goal"];
const URGENCY_KEYS: &[&str] = &["urgency"];
const BUDGET_KEYS: &[&str] = &["budget"];

/// Home services: trade and goal through the home vocabulary, urgency and
/// budget as substring checks.
#[derive(Debug, Clone)]
pub struct HomeServicesScorer {
    weights: HomeServicesWeights,
}

impl HomeServicesScorer {
    pub fn new(weights: HomeServicesWeights) -> Self {
        Self { weights }
    }
}

impl CategoryScorer for HomeServicesScorer {
    fn category(&self) -> Category {
        Category::HomeServices
    }

    fn criteria(&self, answers: &AnswerMap) -> Vec<Criterion> {
        let mut criteria = Vec::with_capacity(4);

        if let Some(kind) = answers.first_of(TYPE_KEYS) {
            criteria.push(Criterion::new(
                "type",
                self.weights.primary_type,
                TagCheck::synonym(kind, SynonymDomain::HomeServices),
            ));
        }
        if let Some(goal) = answers.first_of(GOAL_KEYS) {
            criteria.push(Criterion::new(
                "goal",
                self.weights.goal,
                TagCheck::synonym(goal, SynonymDomain::HomeServices),
            ));
        }
        if let Some(urgency) = answers.first_of(URGENCY_KEYS) {
            criteria.push(Criterion::new("urgency", self.weights.urgency, TagCheck::contains(urgency)));
        }
        if let Some(budget) = answers.first_of(BUDGET_KEYS) {
            criteria.push(Criterion::new("budget", self.weights.budget, TagCheck::contains(budget)));
        }

        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::BASE_SCORE;
    use crate::models::Provider;

    #[test]
    fn test_trade_synonyms_and_urgency() {
        let scorer = HomeServicesScorer::new(HomeServicesWeights::default());
        let providers = vec![
            Provider::new("1", "Drain Pros", "home-services").with_tags(["Drain cleaning", "Emergency service"]),
            Provider::new("2", "Sunny Roofs", "home-services").with_tags(["Roofing"]),
        ];
        let answers: AnswerMap = [("type", "plumbing"), ("urgency", "emergency")].into_iter().collect();

        let batch = scorer.score(&providers, &answers);

        assert!(batch.criteria_selected);
        assert_eq!(batch.scored[0].score, BASE_SCORE + 5 + 1);
        assert!(batch.scored[0].relevant);
        assert_eq!(batch.scored[1].score, BASE_SCORE);
        assert!(!batch.scored[1].relevant);
    }

    #[test]
    fn test_goal_uses_home_vocabulary() {
        let scorer = HomeServicesScorer::new(HomeServicesWeights::default());
        let providers = vec![Provider::new("1", "Bright", "home-services").with_tags(["Solar Panels"])];
        let answers: AnswerMap = [("goal", "solar")].into_iter().collect();

        assert_eq!(scorer.score(&providers, &answers).scored[0].score, BASE_SCORE + 3);
    }
}
