use std::borrow::Cow;
use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::models::{Provider, ScoredProvider};

/// How the featured flag participates in ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedRule {
    /// Featured providers move ahead only when they satisfy a selected
    /// criterion, or when nothing was selected at all
    WhenRelevant,
    /// Featured providers win exact score ties, relevant or not
    OnScoreTie,
}

/// Whether a provider earns the featured boost under [`FeaturedRule::WhenRelevant`]
#[inline]
pub fn is_boosted(scored: &ScoredProvider<'_>, criteria_selected: bool) -> bool {
    scored.provider.is_featured && (!criteria_selected || scored.relevant)
}

/// Primary collation key: diacritics stripped, lowercased
fn collation_key(name: &str) -> Cow<'_, str> {
    if name.is_ascii() && !name.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }
    let stripped: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();
    Cow::Owned(stripped.to_lowercase())
}

/// Collation order: base letters first, then lowercase before uppercase,
/// then the raw code points.
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| {
            let case = |c: char| (c.is_uppercase(), c.to_lowercase().next().unwrap_or(c));
            a.nfd().map(case).cmp(b.nfd().map(case))
        })
        .then_with(|| a.cmp(b))
}

/// Full deterministic comparator.
///
/// General rule: boost, score, rating, name.
/// Restaurant rule: score, featured, rating, name.
/// Provider id settles anything left so equal inputs always sort the same.
pub fn compare(
    a: &ScoredProvider<'_>,
    b: &ScoredProvider<'_>,
    rule: FeaturedRule,
    criteria_selected: bool,
) -> Ordering {
    let primary = match rule {
        FeaturedRule::WhenRelevant => is_boosted(b, criteria_selected)
            .cmp(&is_boosted(a, criteria_selected))
            .then_with(|| b.score.cmp(&a.score)),
        FeaturedRule::OnScoreTie => b
            .score
            .cmp(&a.score)
            .then_with(|| b.provider.is_featured.cmp(&a.provider.is_featured)),
    };

    primary
        .then_with(|| b.provider.rating_or_zero().total_cmp(&a.provider.rating_or_zero()))
        .then_with(|| compare_names(&a.provider.name, &b.provider.name))
        .then_with(|| a.provider.id.cmp(&b.provider.id))
}

/// Sort scored providers and return the providers alone, best first
pub fn rank(
    mut scored: Vec<ScoredProvider<'_>>,
    rule: FeaturedRule,
    criteria_selected: bool,
) -> Vec<Provider> {
    scored.sort_by(|a, b| compare(a, b, rule, criteria_selected));
    scored.into_iter().map(|s| s.provider.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(provider: &Provider, score: u32, relevant: bool) -> ScoredProvider<'_> {
        ScoredProvider {
            provider,
            score,
            relevant,
        }
    }

    fn names(ranked: &[Provider]) -> Vec<&str> {
        ranked.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_irrelevant_featured_gets_no_boost() {
        let featured = Provider::new("1", "Featured", "home-services").featured().with_rating(5.0);
        let better = Provider::new("2", "Better", "home-services");

        let ranked = rank(
            vec![scored(&featured, 1, false), scored(&better, 6, true)],
            FeaturedRule::WhenRelevant,
            true,
        );

        assert_eq!(names(&ranked), vec!["Better", "Featured"]);
    }

    #[test]
    fn test_relevant_featured_is_boosted() {
        let featured = Provider::new("1", "Featured", "home-services").featured();
        let other = Provider::new("2", "Other", "home-services").with_rating(5.0);

        let ranked = rank(
            vec![scored(&other, 9, true), scored(&featured, 6, true)],
            FeaturedRule::WhenRelevant,
            true,
        );

        assert_eq!(names(&ranked), vec!["Featured", "Other"]);
    }

    #[test]
    fn test_featured_first_without_criteria() {
        let plain = Provider::new("1", "Alpha", "real-estate").with_rating(5.0);
        let featured = Provider::new("2", "Zulu", "real-estate").featured();

        let ranked = rank(
            vec![scored(&plain, 1, false), scored(&featured, 1, false)],
            FeaturedRule::WhenRelevant,
            false,
        );

        assert_eq!(names(&ranked), vec!["Zulu", "Alpha"]);
    }

    #[test]
    fn test_restaurant_rule_breaks_score_ties_only() {
        let featured = Provider::new("1", "B", "restaurants-cafes").featured();
        let plain = Provider::new("2", "A", "restaurants-cafes").with_rating(4.0);
        let strong = Provider::new("3", "C", "restaurants-cafes");

        let ranked = rank(
            vec![scored(&plain, 1, false), scored(&featured, 1, false), scored(&strong, 9, true)],
            FeaturedRule::OnScoreTie,
            true,
        );

        assert_eq!(names(&ranked), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_rating_then_name_then_id() {
        let unrated = Provider::new("1", "Aardvark", "professional-services");
        let rated = Provider::new("2", "Zebra", "professional-services").with_rating(3.5);
        let lower = Provider::new("3", "beta", "professional-services").with_rating(3.5);
        let upper = Provider::new("4", "Beta", "professional-services").with_rating(3.5);
        let twin = Provider::new("0", "Beta", "professional-services").with_rating(3.5);

        let ranked = rank(
            vec![
                scored(&unrated, 1, false),
                scored(&rated, 1, false),
                scored(&lower, 1, false),
                scored(&upper, 1, false),
                scored(&twin, 1, false),
            ],
            FeaturedRule::WhenRelevant,
            false,
        );

        let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "0", "4", "2", "1"]);
    }

    #[test]
    fn test_accented_names_collate_with_base_letters() {
        let zaza = Provider::new("1", "Zaza Pizza", "restaurants-cafes").with_rating(4.0);
        let eclair = Provider::new("2", "Éclair Café", "restaurants-cafes").with_rating(4.0);
        let upper = Provider::new("3", "Beta", "restaurants-cafes").with_rating(3.0);
        let lower = Provider::new("4", "beta", "restaurants-cafes").with_rating(3.0);

        let ranked = rank(
            vec![
                scored(&zaza, 1, false),
                scored(&eclair, 1, false),
                scored(&upper, 1, false),
                scored(&lower, 1, false),
            ],
            FeaturedRule::OnScoreTie,
            false,
        );

        assert_eq!(names(&ranked), vec!["Éclair Café", "Zaza Pizza", "beta", "Beta"]);
    }

    #[test]
    fn test_accent_breaks_tie_after_base_letters() {
        assert_eq!(compare_names("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_names("Éclair", "Ecole"), Ordering::Less);
        assert_eq!(compare_names("café", "Cafe"), Ordering::Less);
    }
}
