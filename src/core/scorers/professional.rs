use crate::core::criteria::{Criterion, TagCheck};
use crate::core::scorers::CategoryScorer;
use crate::models::{AnswerMap, Category, ProfessionalWeights};

/// Generic scorer: one point for every answer value found verbatim among a
/// provider's tags. Also serves category keys with no dedicated scorer.
#[derive(Debug, Clone)]
pub struct ProfessionalServicesScorer {
    weights: ProfessionalWeights,
}

impl ProfessionalServicesScorer {
    pub fn new(weights: ProfessionalWeights) -> Self {
        Self { weights }
    }
}

impl CategoryScorer for ProfessionalServicesScorer {
    fn category(&self) -> Category {
        Category::ProfessionalServices
    }

    fn criteria(&self, answers: &AnswerMap) -> Vec<Criterion> {
        answers
            .selected()
            .map(|(_, value)| Criterion::new("answer", self.weights.per_match, TagCheck::exact(value)))
            .collect()
    }
}
