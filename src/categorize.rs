//! Assigning grocery categories by keyword.
use crate::model::Category;
use crate::rules::{CategoryRule, Rules};

/// Categorize a name with the built-in keyword table.
///
/// ```
/// use grocery_engine::{categorize, model::Category};
///
/// assert_eq!(categorize("Chicken Breast"), Category::Meat);
/// assert_eq!(categorize("Mystery Snack"), Category::Processed);
/// ```
#[must_use]
pub fn categorize(name: &str) -> Category {
    categorize_with(name, &Rules::builtin().categories)
}

/// Return the first category in `rules` with a keyword contained in `name`, ignoring case,
/// or [`Category::Processed`] when none matches.
#[must_use]
pub fn categorize_with(name: &str, rules: &[CategoryRule]) -> Category {
    let lower = name.to_lowercase();

    rules
        .iter()
        .find(|rule| {
            rule.keywords.iter().any(|keyword| {
                let keyword = keyword.trim().to_lowercase();
                !keyword.is_empty() && lower.contains(&keyword)
            })
        })
        .map_or(Category::Processed, |rule| rule.category)
}
