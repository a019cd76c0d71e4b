//! Provider Match - ranking engine for the local business directory
//!
//! Users answer a short funnel for a category; this library scores the
//! category's providers against those answers and returns them ranked.
//! The engine is pure and synchronous; the HTTP service in `main.rs` is a
//! thin layer around [`Matcher`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, matches_synonyms, contains_keyword};
pub use models::{AnswerMap, Category, Provider, ProvidersByCategory, ScoredProvider, ScoringWeights};

/// Rank the providers of `category` using the default weights
pub fn score_providers(
    category: &str,
    answers: &AnswerMap,
    providers_by_category: &ProvidersByCategory,
) -> Vec<Provider> {
    Matcher::with_default_weights().score_providers(category, answers, providers_by_category)
}
