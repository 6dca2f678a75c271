//! Merge keys and merged grocery entries.
use super::{Category, Unit, UnitSystem};
use crate::filters::upcase_first_filter;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Canonical lowercase ingredient name, the equality key for "same ingredient".
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Stand-in for a blank name fragment.
    pub const PLACEHOLDER: &'static str = "item";

    /// Lowercases and trims `name`, substituting [`Self::PLACEHOLDER`] when nothing is left.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            Self(Self::PLACEHOLDER.to_string())
        } else {
            Self(name)
        }
    }

    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first character uppercased, as shown on the grocery list.
    #[must_use]
    pub fn display_name(&self) -> String {
        upcase_first_filter(&self.0)
    }
}

impl Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a merge bucket. Lines only merge when both parts are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AggregationKey {
    /// Canonical ingredient name.
    pub name: NormalizedName,
    /// Canonical unit, so `cup` and `cups` share a bucket.
    pub unit: Option<Unit>,
}

/// One consolidated line of the grocery list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedEntry {
    /// The bucket this entry sums.
    pub key: AggregationKey,
    /// Sum of the quantities of every line in the bucket.
    pub total_quantity: f64,
    /// Capitalized normalized name.
    pub display_name: String,
    /// Category of `display_name`.
    pub category: Category,
}

impl MergedEntry {
    /// `"<quantity> <unit>"`, or the bare quantity when there is no unit.
    ///
    /// Imperial quantities are snapped to kitchen fractions and unit labels pluralize.
    #[must_use]
    pub fn quantity_text(&self) -> String {
        match self.key.unit {
            Some(unit) => {
                let imperial = unit.system() == UnitSystem::Imperial;
                let (text, shown) = crate::scale::display_quantity(self.total_quantity, imperial);
                format!("{text} {}", unit.label(shown))
            }
            None => crate::scale::format_quantity(self.total_quantity, false),
        }
    }
}

impl Display for MergedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name, self.quantity_text())
    }
}

impl minijinja::value::Object for MergedEntry {
    fn repr(self: &std::sync::Arc<Self>) -> minijinja::value::ObjectRepr {
        minijinja::value::ObjectRepr::Plain
    }

    fn render(self: &std::sync::Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        Self: Sized + 'static,
    {
        self.fmt(f)
    }

    fn get_value(self: &std::sync::Arc<Self>, key: &minijinja::Value) -> Option<minijinja::Value> {
        match key.as_str()? {
            "name" => Some(minijinja::Value::from(&self.display_name)),
            "key" => Some(minijinja::Value::from(self.key.name.as_str())),
            "unit" => Some(minijinja::Value::from(
                self.key.unit.map_or("", |unit| unit.as_str()),
            )),
            "quantity" => Some(minijinja::Value::from(self.quantity_text())),
            "total" => Some(minijinja::Value::from(self.total_quantity)),
            "category" => Some(minijinja::Value::from(self.category.as_str())),
            _ => None,
        }
    }
}

impl From<MergedEntry> for minijinja::Value {
    fn from(value: MergedEntry) -> Self {
        Self::from_object(value)
    }
}

/// The record the grocery-list store persists for each entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Display name.
    pub name: String,
    /// Shopping category.
    pub category: Category,
    /// Formatted quantity, e.g. `"3 cups"` or `"6"`.
    pub quantity: String,
    /// Ticked off by the shopper.
    pub checked: bool,
}

impl From<&MergedEntry> for GroceryItem {
    fn from(entry: &MergedEntry) -> Self {
        Self {
            name: entry.display_name.clone(),
            category: entry.category,
            quantity: entry.quantity_text(),
            checked: false,
        }
    }
}
