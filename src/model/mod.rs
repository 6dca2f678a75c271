//! Domain types shared by the parser, the converter and the aggregator.
mod category;
mod entry;
mod grocery_list;
mod ingredient;
mod unit;

pub use category::{Category, UnknownCategory};
pub use entry::{AggregationKey, GroceryItem, MergedEntry, NormalizedName};
pub use grocery_list::GroceryList;
pub(crate) use ingredient::IngredientView;
pub use ingredient::ParsedIngredient;
pub use unit::{Unit, UnitFamily, UnitSystem, UnknownUnitSystem};
