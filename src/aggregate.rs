//! Merging the ingredient lines of every recipe in the basket into one grocery list.
use crate::categorize::categorize_with;
use crate::model::{AggregationKey, GroceryList, MergedEntry, ParsedIngredient};
use crate::normalize::normalize_with;
use crate::parser::parse;
use crate::rules::Rules;
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregate `lines` with the built-in rules.
///
/// ```
/// use grocery_engine::aggregate;
///
/// let list = aggregate(&["2 eggs", "1 egg", "3 boiled eggs"]);
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.entries()[0].to_string(), "Eggs: 6");
/// ```
#[must_use]
pub fn aggregate<S: AsRef<str>>(lines: &[S]) -> GroceryList {
    aggregate_with(lines, Rules::builtin())
}

/// Parse, normalize and sum `lines` into merged entries.
///
/// Lines merge only when their normalized name and their unit are both equal. The same
/// ingredient in two different units stays on two entries: quantities are never converted
/// across units here. Blank lines are skipped. The result is ordered by key, so it does not
/// depend on the order of `lines`.
///
/// This always recomputes from the full set of lines; there is no incremental mode.
#[must_use]
pub fn aggregate_with<S: AsRef<str>>(lines: &[S], rules: &Rules) -> GroceryList {
    let parsed = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty())
        .map(parse);
    merge(parsed, rules)
}

/// Sum already parsed ingredients into merged entries.
pub(crate) fn merge<I>(ingredients: I, rules: &Rules) -> GroceryList
where
    I: IntoIterator<Item = ParsedIngredient>,
{
    let mut totals: BTreeMap<AggregationKey, f64> = BTreeMap::new();
    let mut count = 0_usize;

    for ingredient in ingredients {
        let key = AggregationKey {
            name: normalize_with(&ingredient.name, &rules.synonyms),
            unit: ingredient.unit,
        };
        *totals.entry(key).or_insert(0.0) += ingredient.quantity;
        count += 1;
    }

    let entries: Vec<MergedEntry> = totals
        .into_iter()
        .map(|(key, total_quantity)| {
            let display_name = key.name.display_name();
            let category = categorize_with(&display_name, &rules.categories);
            MergedEntry {
                key,
                total_quantity,
                display_name,
                category,
            }
        })
        .collect();

    debug!(
        ingredients = count,
        entries = entries.len(),
        "aggregated grocery list"
    );
    GroceryList::new(entries)
}
