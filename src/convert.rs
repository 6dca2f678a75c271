//! Converting ingredients between metric and imperial display units.
use crate::model::{ParsedIngredient, Unit, UnitFamily, UnitSystem};
use crate::parser::parse;
use crate::scale::{display_quantity, format};

/// Render `ingredient` in the `target` unit system.
///
/// The quantity is taken to the family base (ml or g) and the display unit is picked by
/// magnitude: ml below one liter, g below one kilogram, cups from one cup up, tbsp from one
/// tablespoon, tsp below that, oz below one pound. Ingredients without a unit, and ingredients
/// already in the target system, come back exactly as [`format`] renders them.
///
/// ```
/// use grocery_engine::{convert, model::UnitSystem, parse};
///
/// assert_eq!(convert(&parse("2 cup flour"), UnitSystem::Metric), "473.2 ml flour");
/// assert_eq!(convert(&parse("3 eggs"), UnitSystem::Metric), "3 eggs");
/// ```
#[must_use]
pub fn convert(ingredient: &ParsedIngredient, target: UnitSystem) -> String {
    let Some(unit) = ingredient.unit else {
        return format(ingredient);
    };
    if unit.system() == target {
        return format(ingredient);
    }

    let base = ingredient.quantity * unit.factor();
    let (quantity, display_unit) = match (unit.family(), target) {
        (UnitFamily::Volume, UnitSystem::Metric) => pick(base, &[Unit::Liter], Unit::Milliliter),
        (UnitFamily::Weight, UnitSystem::Metric) => pick(base, &[Unit::Kilogram], Unit::Gram),
        (UnitFamily::Volume, UnitSystem::Imperial) => {
            pick(base, &[Unit::Cup, Unit::Tablespoon], Unit::Teaspoon)
        }
        (UnitFamily::Weight, UnitSystem::Imperial) => pick(base, &[Unit::Pound], Unit::Ounce),
    };

    let (text, shown) = display_quantity(quantity, target == UnitSystem::Imperial);
    format!("{text} {} {}", display_unit.label(shown), ingredient.name)
}

/// Parse `line` and convert it.
#[must_use]
pub fn convert_line(line: &str, target: UnitSystem) -> String {
    convert(&parse(line), target)
}

/// Express `base` in the first of `larger` (largest first) it reaches one of, or in `smallest`.
fn pick(base: f64, larger: &[Unit], smallest: Unit) -> (f64, Unit) {
    let unit = larger
        .iter()
        .copied()
        .find(|unit| base >= unit.factor())
        .unwrap_or(smallest);
    (base / unit.factor(), unit)
}
