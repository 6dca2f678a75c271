//! The basket of chosen recipes and the grocery list derived from it.
//!
//! [`Pantry`] is an in-memory store for both. Every change to the basket recomputes the whole
//! grocery list from every ingredient line in the basket and replaces the previous list.
use crate::aggregate::aggregate_with;
use crate::model::{GroceryItem, GroceryList};
use crate::rules::Rules;
use crate::scale::{scale_line, serving_multiplier};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// A recipe as stored by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe title.
    pub name: String,
    /// How many servings the ingredient lines make. Zero when unknown.
    pub servings: u32,
    /// Raw ingredient lines.
    pub ingredients: Vec<String>,
}

/// A recipe placed in the basket, with its lines already scaled to the chosen servings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItem {
    /// Name of the recipe this came from.
    pub recipe_name: String,
    /// Servings chosen by the user.
    pub servings: u32,
    /// Scaled ingredient lines.
    pub ingredients: Vec<String>,
}

impl BasketItem {
    /// Scale every line of `recipe` from its own serving count to `servings`.
    ///
    /// ```
    /// use grocery_engine::basket::{BasketItem, Recipe};
    ///
    /// let recipe = Recipe {
    ///     name: "Pancakes".to_string(),
    ///     servings: 2,
    ///     ingredients: vec!["1 cup flour".to_string(), "2 eggs".to_string()],
    /// };
    /// let item = BasketItem::from_recipe(&recipe, 4);
    /// assert_eq!(item.ingredients, ["2 cup flour", "4 eggs"]);
    /// ```
    #[must_use]
    pub fn from_recipe(recipe: &Recipe, servings: u32) -> Self {
        let multiplier = serving_multiplier(recipe.servings, servings);
        Self {
            recipe_name: recipe.name.clone(),
            servings,
            ingredients: recipe
                .ingredients
                .iter()
                .map(|line| scale_line(line, multiplier))
                .collect(),
        }
    }
}

/// The ordered list of basket items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    /// Append an item.
    pub fn push(&mut self, item: BasketItem) {
        self.items.push(item);
    }

    /// Items in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    /// Every ingredient line of every item.
    #[must_use]
    pub fn ingredient_lines(&self) -> Vec<&str> {
        self.items
            .iter()
            .flat_map(|item| item.ingredients.iter().map(String::as_str))
            .collect()
    }

    /// True when nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Default)]
struct Shelves {
    basket: Basket,
    grocery: Vec<GroceryItem>,
}

/// Shared store for the basket and its grocery list.
///
/// All operations lock the same mutex, so a basket change and the grocery list rebuilt from it
/// are one step. Two concurrent [`add`][`Pantry::add`] calls can never drop an item.
#[derive(Debug, Default)]
pub struct Pantry {
    rules: Rules,
    shelves: Mutex<Shelves>,
}

impl Pantry {
    /// An empty store using `rules` for aggregation.
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            shelves: Mutex::default(),
        }
    }

    /// Put `item` in the basket and rebuild the grocery list. Returns the new list.
    pub fn add(&self, item: BasketItem) -> GroceryList {
        let mut shelves = self.lock();
        shelves.basket.push(item);

        let list = aggregate_with(&shelves.basket.ingredient_lines(), &self.rules);
        shelves.grocery = list.to_items();
        debug!(
            items = shelves.basket.items().len(),
            entries = list.len(),
            "rebuilt grocery list"
        );
        list
    }

    /// Empty both the basket and the grocery list.
    pub fn clear(&self) {
        let mut shelves = self.lock();
        shelves.basket = Basket::default();
        shelves.grocery.clear();
    }

    /// A copy of the basket.
    #[must_use]
    pub fn basket(&self) -> Basket {
        self.lock().basket.clone()
    }

    /// A copy of the current grocery list records.
    #[must_use]
    pub fn grocery_items(&self) -> Vec<GroceryItem> {
        self.lock().grocery.clone()
    }

    /// Tick or untick the grocery item at `index` in [`grocery_items`][`Pantry::grocery_items`].
    ///
    /// Positions tell apart entries that share a name, such as chicken in grams and in
    /// kilograms. Returns `false` if there is no item at `index`.
    pub fn set_checked(&self, index: usize, checked: bool) -> bool {
        match self.lock().grocery.get_mut(index) {
            Some(item) => {
                item.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Drop every checked item from the grocery list, leaving the basket alone.
    ///
    /// Returns how many items were removed. Later items move up to fill the gaps.
    pub fn remove_checked(&self) -> usize {
        let mut shelves = self.lock();
        let before = shelves.grocery.len();
        shelves.grocery.retain(|item| !item.checked);
        before - shelves.grocery.len()
    }

    fn lock(&self) -> MutexGuard<'_, Shelves> {
        // Writers never leave the shelves half-updated
        self.shelves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
