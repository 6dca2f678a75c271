//! Scaling ingredients by a serving ratio and formatting them back to text.
use crate::model::{ParsedIngredient, UnitSystem};
use crate::parser::parse;
use tracing::warn;

/// Kitchen fractions imperial quantities snap to.
const FRACTIONS: [(f64, &str); 5] = [
    (1.0 / 4.0, "1/4"),
    (1.0 / 3.0, "1/3"),
    (1.0 / 2.0, "1/2"),
    (2.0 / 3.0, "2/3"),
    (3.0 / 4.0, "3/4"),
];

/// How far a remainder may sit from a kitchen fraction and still snap to it.
const SNAP_TOLERANCE: f64 = 0.05;

/// Values this close to an integer print as that integer.
const INTEGRAL_TOLERANCE: f64 = 1e-9;

/// Multiply the quantity of `ingredient` by `multiplier`, keeping unit and name.
///
/// A multiplier that is not a positive finite number leaves the ingredient as it was.
#[must_use]
pub fn scale(ingredient: &ParsedIngredient, multiplier: f64) -> ParsedIngredient {
    if !(multiplier.is_finite() && multiplier > 0.0) {
        warn!(multiplier, line = %ingredient.raw, "ignoring invalid scaling multiplier");
        return ingredient.clone();
    }

    ParsedIngredient {
        quantity: ingredient.quantity * multiplier,
        ..ingredient.clone()
    }
}

/// Ratio that turns a recipe written for `base_servings` into one for `servings`.
///
/// A recipe without a serving count scales by one.
#[must_use]
pub fn serving_multiplier(base_servings: u32, servings: u32) -> f64 {
    if base_servings == 0 {
        warn!(servings, "recipe has no base serving count, not scaling");
        return 1.0;
    }
    f64::from(servings) / f64::from(base_servings)
}

/// Render an ingredient as `"<quantity> <unit> <name>"`.
///
/// The unit is printed as it was written. Imperial quantities snap to kitchen fractions.
/// Lines that had no amount to begin with render as their name alone.
#[must_use]
pub fn format(ingredient: &ParsedIngredient) -> String {
    if !ingredient.quantified {
        return ingredient.name.clone();
    }

    let imperial = ingredient
        .unit
        .is_some_and(|unit| unit.system() == UnitSystem::Imperial);
    let quantity = format_quantity(ingredient.quantity, imperial);

    if ingredient.unit_text.is_empty() {
        format!("{quantity} {}", ingredient.name)
    } else {
        format!("{quantity} {} {}", ingredient.unit_text, ingredient.name)
    }
}

/// Parse `line`, scale it and format it again.
///
/// ```
/// use grocery_engine::scale::scale_line;
///
/// assert_eq!(scale_line("1 cup milk", 1.5), "1 1/2 cup milk");
/// assert_eq!(scale_line("250 ml milk", 0.5), "125 ml milk");
/// ```
#[must_use]
pub fn scale_line(line: &str, multiplier: f64) -> String {
    format(&scale(&parse(line), multiplier))
}

/// Format a quantity for display.
///
/// Integers print without decimals. Otherwise imperial quantities try to snap to the nearest
/// of 1/4, 1/3, 1/2, 2/3 and 3/4, and everything else prints with one decimal.
#[must_use]
pub fn format_quantity(value: f64, imperial: bool) -> String {
    display_quantity(value, imperial).0
}

/// Like [`format_quantity`], also returning the value the text stands for, which decides
/// whether a unit label is singular.
pub(crate) fn display_quantity(value: f64, imperial: bool) -> (String, f64) {
    let rounded = value.round();
    if (value - rounded).abs() < INTEGRAL_TOLERANCE {
        return (format!("{rounded}"), rounded);
    }

    if imperial {
        let whole = value.trunc();
        let remainder = value - whole;
        let nearest = FRACTIONS
            .iter()
            .map(|&(fraction, text)| ((remainder - fraction).abs(), fraction, text))
            .filter(|&(distance, _, _)| distance < SNAP_TOLERANCE)
            .min_by(|a, b| a.0.total_cmp(&b.0));

        if let Some((_, fraction, text)) = nearest {
            let shown = whole + fraction;
            if whole < 1.0 {
                return (text.to_string(), shown);
            }
            return (format!("{whole} {text}"), shown);
        }
    }

    let text = format!("{value:.1}");
    let shown = text.parse().unwrap_or(value);
    (text, shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use test_case::test_case;

    #[test_case(3.0, false, "3"; "integer")]
    #[test_case(473.176, false, "473.2"; "one decimal")]
    #[test_case(0.1 + 0.2, false, "0.3"; "float noise")]
    #[test_case(3.0 * (1.0 / 3.0), true, "1"; "integral after thirds")]
    #[test_case(0.5, true, "1/2"; "half")]
    #[test_case(2.26, true, "2 1/4"; "quarter within tolerance")]
    #[test_case(0.29, true, "1/4"; "nearest of two candidates")]
    #[test_case(1.68, true, "1 2/3"; "two thirds")]
    #[test_case(1.1, true, "1.1"; "no fraction close enough")]
    #[test_case(0.5, false, "0.5"; "metric never snaps")]
    fn formats_quantities(value: f64, imperial: bool, expected: &str) {
        assert_eq!(format_quantity(value, imperial), expected);
    }

    #[test_case("2 cups flour", 1.5, "3 cups flour"; "whole result")]
    #[test_case("1 cup milk", 0.5, "1/2 cup milk"; "imperial fraction")]
    #[test_case("250 ml milk", 0.5, "125 ml milk"; "metric")]
    #[test_case("125 g flour", 0.5, "62.5 g flour"; "metric decimal")]
    #[test_case("3 eggs", 0.5, "1.5 eggs"; "unitless")]
    #[test_case("Salt", 2.0, "Salt"; "bare count keeps its text")]
    fn scales_lines(line: &str, multiplier: f64, expected: &str) {
        assert_eq!(scale_line(line, multiplier), expected);
    }

    #[test]
    fn scale_preserves_unit_and_name() {
        let parsed = parse("1/2 tsp salt");
        let scaled = scale(&parsed, 3.0);
        assert_approx_eq!(f64, 1.5, scaled.quantity);
        assert_eq!(parsed.unit, scaled.unit);
        assert_eq!(parsed.unit_text, scaled.unit_text);
        assert_eq!(parsed.name, scaled.name);
    }

    #[test_case(0.0; "zero")]
    #[test_case(-2.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn invalid_multiplier_is_ignored(multiplier: f64) {
        let parsed = parse("2 cups flour");
        assert_eq!(scale(&parsed, multiplier), parsed);
    }

    #[test]
    fn scaling_is_linear() {
        let lines = ["2 cups flour", "1/3 cup sugar", "250 ml milk", "3 eggs"];
        let factors = [(0.5, 3.0), (1.5, 2.0), (2.0, 0.25), (4.0, 1.0 / 3.0)];

        for line in lines {
            let parsed = parse(line);
            for (a, b) in factors {
                let twice = scale(&scale(&parsed, a), b);
                let once = scale(&parsed, a * b);
                assert!((twice.quantity - once.quantity).abs() <= 0.05);
                assert_eq!(format(&twice), format(&once));
            }
        }
    }

    #[test]
    fn serving_ratio() {
        assert_approx_eq!(f64, 2.0, serving_multiplier(2, 4));
        assert_approx_eq!(f64, 0.5, serving_multiplier(4, 2));
        assert_approx_eq!(f64, 1.0, serving_multiplier(0, 3));
    }
}
