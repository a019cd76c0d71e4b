use crate::core::criteria::{Criterion, TagCheck};
use crate::core::ranking::FeaturedRule;
use crate::core::scorers::CategoryScorer;
use crate::core::synonyms::SynonymDomain;
use crate::models::{AnswerMap, Category, RestaurantWeights};

const CUISINE_KEYS: &[&str] = &["cuisine"];
const OCCASION_KEYS: &[&str] = &["occasion"];
// Older funnels sent the price tier as `priceRange` or `priceLevel`
const PRICE_KEYS: &[&str] = &["price", "priceRange", "priceLevel"];
const SERVICE_STYLE_KEYS: &[&str] = &["serviceStyle", "service"];
const DIETARY_KEYS: &[&str] = &["dietary"];

/// Restaurants & cafés: exact tags outrank synonym hits, and featured
/// listings win exact score ties unconditionally.
#[derive(Debug, Clone)]
pub struct RestaurantsScorer {
    weights: RestaurantWeights,
}

impl RestaurantsScorer {
    pub fn new(weights: RestaurantWeights) -> Self {
        Self { weights }
    }
}

impl CategoryScorer for RestaurantsScorer {
    fn category(&self) -> Category {
        Category::RestaurantsCafes
    }

    fn criteria(&self, answers: &AnswerMap) -> Vec<Criterion> {
        let w = &self.weights;
        let mut criteria = Vec::with_capacity(5);

        if let Some(cuisine) = answers.first_of(CUISINE_KEYS) {
            criteria.push(
                Criterion::new("cuisine", w.cuisine_exact, TagCheck::exact(cuisine))
                    .or_else(w.cuisine_synonym, TagCheck::synonym(cuisine, SynonymDomain::Cuisine)),
            );
        }
        if let Some(occasion) = answers.first_of(OCCASION_KEYS) {
            criteria.push(Criterion::new("occasion", w.occasion, TagCheck::contains(occasion)));
        }
        if let Some(price) = answers.first_of(PRICE_KEYS) {
            criteria.push(
                Criterion::new("price", w.price_exact, TagCheck::exact(price))
                    .or_else(w.price_synonym, TagCheck::synonym(price, SynonymDomain::PriceTier)),
            );
        }
        if let Some(style) = answers.first_of(SERVICE_STYLE_KEYS) {
            criteria.push(Criterion::new("serviceStyle", w.service_style, TagCheck::contains(style)));
        }
        if let Some(dietary) = answers.first_of(DIETARY_KEYS) {
            criteria.push(
                Criterion::new("dietary", w.dietary_exact, TagCheck::exact(dietary))
                    .or_else(w.dietary_synonym, TagCheck::synonym(dietary, SynonymDomain::Dietary)),
            );
        }

        criteria
    }

    fn featured_rule(&self) -> FeaturedRule {
        FeaturedRule::OnScoreTie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::BASE_SCORE;
    use crate::models::Provider;

    fn scores(providers: &[Provider], answers: &[(&str, &str)]) -> Vec<u32> {
        let scorer = RestaurantsScorer::new(RestaurantWeights::default());
        let answers: AnswerMap = answers.iter().copied().collect();
        scorer
            .score(providers, &answers)
            .scored
            .iter()
            .map(|s| s.score)
            .collect()
    }

    #[test]
    fn test_cuisine_exact_beats_synonym() {
        let providers = vec![
            Provider::new("1", "Casa", "restaurants-cafes").with_tags(["Mexican"]),
            Provider::new("2", "Taco Town", "restaurants-cafes").with_tags(["Tacos"]),
            Provider::new("3", "Sushi Go", "restaurants-cafes").with_tags(["Sushi"]),
        ];

        assert_eq!(
            scores(&providers, &[("cuisine", "mexican")]),
            vec![BASE_SCORE + 8, BASE_SCORE + 6, BASE_SCORE]
        );
    }

    #[test]
    fn test_price_tiers() {
        let providers = vec![
            Provider::new("1", "A", "restaurants-cafes").with_tags(["$$"]),
            Provider::new("2", "B", "restaurants-cafes").with_tags(["Moderate prices"]),
            Provider::new("3", "C", "restaurants-cafes").with_tags(["$$$$"]),
        ];

        assert_eq!(
            scores(&providers, &[("price", "$$")]),
            vec![BASE_SCORE + 4, BASE_SCORE + 3, BASE_SCORE]
        );
        // legacy field name
        assert_eq!(
            scores(&providers, &[("priceRange", "moderate")]),
            vec![BASE_SCORE + 3, BASE_SCORE + 3, BASE_SCORE]
        );
    }

    #[test]
    fn test_occasion_service_and_dietary() {
        let providers = vec![
            Provider::new("1", "Green Table", "restaurants-cafes").with_tags(["date night", "dine-in", "vegan"]),
            Provider::new("2", "Leaf", "restaurants-cafes").with_tags(["Plant-Based", "takeout"]),
        ];
        let answers = [("occasion", "date night"), ("serviceStyle", "dine-in"), ("dietary", "vegan")];

        assert_eq!(scores(&providers, &answers), vec![BASE_SCORE + 4 + 3 + 3, BASE_SCORE + 2]);
    }

    #[test]
    fn test_uses_score_tie_rule() {
        let scorer = RestaurantsScorer::new(RestaurantWeights::default());
        assert_eq!(scorer.featured_rule(), FeaturedRule::OnScoreTie);
    }
}
