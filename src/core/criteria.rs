use crate::core::{
    synonyms::SynonymDomain,
    tags::{contains_keyword, has_tag, matches_synonyms},
};
use crate::models::Provider;

/// Score every provider starts with, keeps unmatched providers rankable
pub const BASE_SCORE: u32 = 1;

/// How a criterion is checked against a provider's tags
#[derive(Debug, Clone, PartialEq)]
pub enum TagCheck {
    /// Keyword or any of its synonyms, bidirectional substring
    Synonym { keyword: String, domain: SynonymDomain },
    /// Keyword is a substring of some tag
    Contains(String),
    /// Some tag equals the value
    Exact(String),
    /// Some tag equals one of the values
    AnyExact(&'static [&'static str]),
}

impl TagCheck {
    pub fn synonym(keyword: &str, domain: SynonymDomain) -> Self {
        TagCheck::Synonym {
            keyword: keyword.to_string(),
            domain,
        }
    }

    pub fn contains(keyword: &str) -> Self {
        TagCheck::Contains(keyword.to_string())
    }

    pub fn exact(value: &str) -> Self {
        TagCheck::Exact(value.to_string())
    }

    pub fn matches(&self, provider: &Provider) -> bool {
        let tags = &provider.tags;
        match self {
            TagCheck::Synonym { keyword, domain } => matches_synonyms(tags, keyword, domain.table()),
            TagCheck::Contains(keyword) => contains_keyword(tags, keyword),
            TagCheck::Exact(value) => has_tag(tags, value),
            TagCheck::AnyExact(values) => values.iter().any(|v| has_tag(tags, v)),
        }
    }
}

/// One user-selected criterion with tiered weights.
///
/// Tiers are tried in order and the first matching tier contributes its
/// weight, e.g. an exact cuisine tag (8) before a cuisine synonym (6).
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub name: &'static str,
    tiers: Vec<(u32, TagCheck)>,
}

impl Criterion {
    pub fn new(name: &'static str, weight: u32, check: TagCheck) -> Self {
        Self {
            name,
            tiers: vec![(weight, check)],
        }
    }

    /// Add a weaker tier consulted when the previous ones miss
    pub fn or_else(mut self, weight: u32, check: TagCheck) -> Self {
        self.tiers.push((weight, check));
        self
    }

    /// Weight earned by `provider`, or `None` when no tier matches
    pub fn points(&self, provider: &Provider) -> Option<u32> {
        self.tiers
            .iter()
            .find(|(_, check)| check.matches(provider))
            .map(|(weight, _)| *weight)
    }
}

/// Score a provider against the selected criteria.
///
/// Returns the total score (never below [`BASE_SCORE`]) and whether at
/// least one criterion was satisfied.
pub fn evaluate(provider: &Provider, criteria: &[Criterion]) -> (u32, bool) {
    let mut score = BASE_SCORE;
    let mut relevant = false;

    for criterion in criteria {
        if let Some(points) = criterion.points(provider) {
            score = score.saturating_add(points);
            relevant = true;
        }
    }

    (score, relevant)
}
