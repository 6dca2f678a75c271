//! Model for a parsed ingredient line.
use super::{Unit, UnitSystem};
use serde::{Deserialize, Serialize};

/// One ingredient line split into quantity, unit and name.
///
/// Parsing never fails, so every line has one of these. Lines without a leading number carry
/// `quantity = 1`, no unit, `quantified = false` and the trimmed line as `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Non-negative amount.
    pub quantity: f64,
    /// Canonical unit, if a unit token was recognized.
    pub unit: Option<Unit>,
    /// The unit token as written, lowercased (`"cups"`). Empty when there is no unit.
    pub unit_text: String,
    /// Everything after the quantity and unit, trimmed.
    pub name: String,
    /// The line this was parsed from.
    pub raw: String,
    /// Whether a numeric token was found at the start of the line.
    pub quantified: bool,
}

impl ParsedIngredient {
    /// A bare-count ingredient: one of `line`, no unit.
    #[must_use]
    pub fn unquantified(line: &str) -> Self {
        Self {
            quantity: 1.0,
            unit: None,
            unit_text: String::new(),
            name: line.trim().to_string(),
            raw: line.to_string(),
            quantified: false,
        }
    }
}

/// An ingredient as seen by templates: rendered in the requested unit system, if any.
#[derive(Debug, Clone)]
pub(crate) struct IngredientView {
    ingredient: ParsedIngredient,
    unit_system: Option<UnitSystem>,
}

impl IngredientView {
    pub(crate) fn new(ingredient: ParsedIngredient, unit_system: Option<UnitSystem>) -> Self {
        Self {
            ingredient,
            unit_system,
        }
    }

    fn text(&self) -> String {
        match self.unit_system {
            Some(system) => crate::convert::convert(&self.ingredient, system),
            None => crate::scale::format(&self.ingredient),
        }
    }
}

impl minijinja::value::Object for IngredientView {
    fn repr(self: &std::sync::Arc<Self>) -> minijinja::value::ObjectRepr {
        minijinja::value::ObjectRepr::Plain
    }

    fn get_value(self: &std::sync::Arc<Self>, key: &minijinja::Value) -> Option<minijinja::Value> {
        match key.as_str()? {
            "name" => Some(minijinja::Value::from(&self.ingredient.name)),
            "quantity" => Some(minijinja::Value::from(self.ingredient.quantity)),
            "unit" => Some(minijinja::Value::from(&self.ingredient.unit_text)),
            "raw" => Some(minijinja::Value::from(&self.ingredient.raw)),
            "text" => Some(minijinja::Value::from(self.text())),
            _ => None,
        }
    }

    fn render(self: &std::sync::Arc<Self>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        Self: Sized + 'static,
    {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use minijinja::{Environment, Value, context};
    use test_case::test_case;

    #[test_case("2 cups flour", None, "{{ ingredient }}", "2 cups flour"; "native units")]
    #[test_case("2 cup flour", Some(UnitSystem::Metric), "{{ ingredient }}", "473.2 ml flour"; "converted")]
    #[test_case("Salt", None, "{{ ingredient }}", "Salt"; "bare count")]
    #[test_case("1/2 tsp salt", None, "{{ ingredient.name }}|{{ ingredient.unit }}", "salt|tsp"; "fields")]
    #[test_case("3 eggs", None, "{{ ingredient.quantity }}", "3.0"; "quantity is a number")]
    fn ingredient(line: &str, system: Option<UnitSystem>, template: &str, result: &str) {
        let mut env = Environment::new();
        env.add_template("test", template).unwrap();

        let context = context! {
            ingredient => Value::from_object(IngredientView::new(parse(line), system))
        };

        let template = env.get_template("test").unwrap();
        assert_eq!(result, template.render(context).unwrap());
    }
}
