//! Grocery categories.
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Shopping category of a grocery entry. [`Category::Processed`] is the catch-all.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// Fresh fruit.
    Fruit,
    /// Vegetables, herbs and aromatics.
    Vegetable,
    /// Meat and poultry.
    Meat,
    /// Fish and shellfish.
    Seafood,
    /// Milk, cheese, eggs and the like.
    Dairy,
    /// Rice, bread, flour, pasta.
    Grain,
    /// Everything else.
    #[default]
    Processed,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 7] = [
        Category::Fruit,
        Category::Vegetable,
        Category::Meat,
        Category::Seafood,
        Category::Dairy,
        Category::Grain,
        Category::Processed,
    ];

    /// Name as shown to the user.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fruit => "Fruit",
            Self::Vegetable => "Vegetable",
            Self::Meat => "Meat",
            Self::Seafood => "Seafood",
            Self::Dairy => "Dairy",
            Self::Grain => "Grain",
            Self::Processed => "Processed",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no category.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown grocery category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
