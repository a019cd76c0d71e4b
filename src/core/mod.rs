// Core algorithm exports
pub mod criteria;
pub mod matcher;
pub mod ranking;
pub mod scorers;
pub mod synonyms;
pub mod tags;

pub use criteria::{evaluate, Criterion, TagCheck, BASE_SCORE};
pub use matcher::Matcher;
pub use ranking::FeaturedRule;
pub use scorers::{CategoryScorer, ScoredBatch, ScorerRegistry};
pub use synonyms::{SynonymDomain, SynonymTable};
pub use tags::{contains_keyword, has_tag, matches_synonyms};
