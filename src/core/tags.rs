use crate::core::synonyms::SynonymTable;

/// Normalize a provider tag or answer value for comparison
#[inline]
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Terms made only of symbols (price markers like `$$`) have no meaningful
/// substrings, so they only match by equality.
#[inline]
fn is_symbolic(term: &str) -> bool {
    !term.chars().any(char::is_alphanumeric)
}

/// Bidirectional containment between an already normalized tag and term
#[inline]
fn overlaps(tag: &str, term: &str) -> bool {
    if tag.is_empty() || term.is_empty() {
        return false;
    }
    if is_symbolic(tag) || is_symbolic(term) {
        return tag == term;
    }
    tag.contains(term) || term.contains(tag)
}

/// Check whether any tag matches `keyword` or one of its synonyms in `table`.
///
/// A tag matches a term when either contains the other, case-insensitively,
/// so "24 Hour Fitness" matches the `gym` expansion "24 hour".
/// Symbol-only terms such as `$` match only an identical tag, never `$$$$`.
pub fn matches_synonyms<I, S>(tags: I, keyword: &str, table: &SynonymTable) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if keyword.trim().is_empty() {
        return false;
    }

    let terms = table.expand(keyword);
    tags.into_iter().any(|tag| {
        let tag = normalize(tag.as_ref());
        terms.iter().any(|term| overlaps(&tag, term))
    })
}

/// Check whether any tag contains `keyword`, case-insensitively
pub fn contains_keyword<I, S>(tags: I, keyword: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keyword = normalize(keyword);
    if keyword.is_empty() {
        return false;
    }

    tags.into_iter()
        .any(|tag| normalize(tag.as_ref()).contains(&keyword))
}

/// Check whether any tag equals `value`, ignoring case and surrounding whitespace
pub fn has_tag<I, S>(tags: I, value: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let value = normalize(value);
    if value.is_empty() {
        return false;
    }

    tags.into_iter().any(|tag| normalize(tag.as_ref()) == value)
}
