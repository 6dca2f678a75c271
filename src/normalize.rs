//! Canonicalizing ingredient names so that "egg", "eggs" and "boiled egg" merge.
use crate::model::NormalizedName;
use crate::rules::{Rules, SynonymGroup};

/// Descriptive words dropped from names that match no synonym group.
const MODIFIERS: &[&str] = &[
    "fresh", "organic", "raw", "cooked", "steamed", "boiled", "fried", "chopped", "diced",
    "minced", "sliced", "shredded", "grated", "large", "small", "medium", "whole",
];

/// Normalize a name fragment with the built-in synonym table.
///
/// ```
/// use grocery_engine::normalize;
///
/// assert_eq!(normalize("egg").as_str(), "eggs");
/// assert_eq!(normalize("boiled eggs").as_str(), "eggs");
/// assert_eq!(normalize("Sliced Mushrooms").as_str(), "mushroom");
/// ```
#[must_use]
pub fn normalize(fragment: &str) -> NormalizedName {
    normalize_with(fragment, &Rules::builtin().synonyms)
}

/// Normalize a name fragment against `synonyms`.
///
/// The fragment is lowercased and trimmed. The first group with a variant that contains the
/// fragment, or is contained in it, gives the canonical name. Without a matching group,
/// modifiers are stripped as whole words and a trailing "s" is dropped from names longer than
/// three characters that do not end in "ss". The result is never empty.
#[must_use]
pub fn normalize_with(fragment: &str, synonyms: &[SynonymGroup]) -> NormalizedName {
    let cleaned = fragment.trim().to_lowercase();
    // Every variant contains the empty string
    if cleaned.is_empty() {
        return NormalizedName::new(&cleaned);
    }

    if let Some(group) = find_group(&cleaned, synonyms) {
        return NormalizedName::new(&group.canonical);
    }

    let stripped = strip_modifiers(&cleaned);
    let singular = singularize(&stripped);
    if singular.is_empty() {
        NormalizedName::new(&cleaned)
    } else {
        NormalizedName::new(singular)
    }
}

fn find_group<'a>(cleaned: &str, synonyms: &'a [SynonymGroup]) -> Option<&'a SynonymGroup> {
    synonyms.iter().find(|group| {
        group.variants.iter().any(|variant| {
            let variant = variant.trim().to_lowercase();
            !variant.is_empty() && (cleaned.contains(&variant) || variant.contains(cleaned))
        })
    })
}

/// Remove modifier words and collapse the whitespace left behind.
fn strip_modifiers(name: &str) -> String {
    let mut kept = String::with_capacity(name.len());
    let mut word = String::new();

    for c in name.chars() {
        if c.is_alphanumeric() {
            word.push(c);
        } else {
            keep_unless_modifier(&mut kept, &mut word);
            kept.push(c);
        }
    }
    keep_unless_modifier(&mut kept, &mut word);

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn keep_unless_modifier(kept: &mut String, word: &mut String) {
    if !MODIFIERS.contains(&word.as_str()) {
        kept.push_str(word);
    }
    word.clear();
}

fn singularize(name: &str) -> &str {
    if name.chars().count() > 3 && !name.ends_with("ss") {
        name.strip_suffix('s').unwrap_or(name)
    } else {
        name
    }
}
