use super::{GroceryItem, MergedEntry};
use minijinja::Value;
use serde::Serialize;
use std::fmt::{self, Display};

/// The consolidated grocery list, ordered by aggregation key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroceryList {
    entries: Vec<MergedEntry>,
}

impl GroceryList {
    pub(crate) fn new(entries: Vec<MergedEntry>) -> Self {
        Self { entries }
    }

    /// Get the entries as a slice
    #[must_use]
    pub fn entries(&self) -> &[MergedEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is on the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records for the grocery-list store, all unchecked.
    #[must_use]
    pub fn to_items(&self) -> Vec<GroceryItem> {
        self.entries.iter().map(GroceryItem::from).collect()
    }
}

impl IntoIterator for GroceryList {
    type Item = MergedEntry;
    type IntoIter = std::vec::IntoIter<MergedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Display for GroceryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl From<GroceryList> for Value {
    fn from(list: GroceryList) -> Self {
        // Keep each entry an object so templates get its attributes and rendering
        let values: Vec<Value> = list.entries.into_iter().map(Value::from_object).collect();
        Value::from(values)
    }
}
