//! Splitting raw ingredient lines into quantity, unit and name.
//!
//! Parsing is total: anything that does not start with a recognizable amount comes back as a
//! bare count of one, with the whole trimmed line as its name. Cleaning up the name (plurals,
//! modifiers, synonyms) is left to [`crate::normalize`].

use crate::model::{ParsedIngredient, Unit};
use std::sync::LazyLock;

/// Unit aliases sorted longest first, so `tbsp` is tried before `tbs` and `fl oz` before `floz`.
static UNITS_SORTED: LazyLock<Vec<(&'static str, Unit)>> = LazyLock::new(|| {
    let mut units = Unit::aliases().to_vec();
    units.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    units
});

/// Parse one ingredient line.
///
/// Recognizes an optional leading amount (integer, decimal, `a/b`, mixed `a b/c`, or a unicode
/// vulgar fraction), then an optional unit from the closed vocabulary, then the name.
///
/// ```
/// use grocery_engine::{model::Unit, parse};
///
/// let flour = parse("2 cups flour");
/// assert_eq!(flour.quantity, 2.0);
/// assert_eq!(flour.unit, Some(Unit::Cup));
/// assert_eq!(flour.unit_text, "cups");
/// assert_eq!(flour.name, "flour");
/// ```
#[must_use]
pub fn parse(line: &str) -> ParsedIngredient {
    let trimmed = line.trim();

    let Some((quantity, after_amount)) = parse_quantity_prefix(trimmed) else {
        return ParsedIngredient::unquantified(line);
    };

    // The amount must end at whitespace, or run straight into a unit ("300g")
    let (unit, unit_text, rest) = match after_amount.chars().next() {
        Some(c) if c.is_whitespace() => match extract_unit(after_amount.trim_start()) {
            Some((unit, text, rest)) => (Some(unit), text, rest),
            None => (None, "", after_amount),
        },
        Some(c) if c.is_alphabetic() => match extract_unit(after_amount) {
            Some((unit, text, rest)) => (Some(unit), text, rest),
            None => return ParsedIngredient::unquantified(line),
        },
        _ => return ParsedIngredient::unquantified(line),
    };

    let name = rest.trim();
    if name.is_empty() {
        return ParsedIngredient::unquantified(line);
    }

    ParsedIngredient {
        quantity,
        unit,
        unit_text: unit_text.to_string(),
        name: name.to_string(),
        raw: line.to_string(),
        quantified: true,
    }
}

/// Read a leading amount from `value`, returning it with the unconsumed remainder.
///
/// Returns `None` when `value` does not start with a number, or when the number is not finite
/// (including fractions with a zero denominator).
#[must_use]
pub fn parse_quantity_prefix(value: &str) -> Option<(f64, &str)> {
    let value = value.trim_start();

    if let Some(found) = vulgar_fraction(value) {
        return Some(found);
    }

    let (whole_digits, rest) = split_digits(value);
    if whole_digits.is_empty() {
        return None;
    }

    // Decimal: "1.5"
    if let Some(after_dot) = rest.strip_prefix('.') {
        let (decimal_digits, after_decimal) = split_digits(after_dot);
        if !decimal_digits.is_empty() {
            let number = value[..whole_digits.len() + 1 + decimal_digits.len()]
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())?;
            return Some((number, after_decimal));
        }
    }

    let whole = whole_digits.parse::<f64>().ok().filter(|n| n.is_finite())?;

    // Simple fraction: "1/2"
    if rest.starts_with('/') {
        return simple_fraction(value);
    }

    // Glued vulgar fraction: "1½"
    if let Some((fraction, after)) = vulgar_fraction(rest) {
        return Some((whole + fraction, after));
    }

    // Mixed number: "1 1/2" or "1 ½"
    let after_space = rest.trim_start();
    if after_space.len() < rest.len() {
        if let Some((fraction, after)) =
            simple_fraction(after_space).or_else(|| vulgar_fraction(after_space))
        {
            return Some((whole + fraction, after));
        }
    }

    Some((whole, rest))
}

/// Split off the leading run of ASCII digits.
fn split_digits(value: &str) -> (&str, &str) {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value.split_at(end)
}

/// `a/b` with a non-zero denominator.
fn simple_fraction(value: &str) -> Option<(f64, &str)> {
    let (numerator, rest) = split_digits(value);
    let (denominator, rest) = split_digits(rest.strip_prefix('/')?);
    if numerator.is_empty() || denominator.is_empty() {
        return None;
    }

    let fraction = numerator.parse::<f64>().ok()? / denominator.parse::<f64>().ok()?;
    fraction.is_finite().then_some((fraction, rest))
}

fn vulgar_fraction(value: &str) -> Option<(f64, &str)> {
    let c = value.chars().next()?;
    let fraction = match c {
        '½' => 1.0 / 2.0,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '¼' => 1.0 / 4.0,
        '¾' => 3.0 / 4.0,
        '⅛' => 1.0 / 8.0,
        _ => return None,
    };
    Some((fraction, &value[c.len_utf8()..]))
}

/// Extract a unit from the beginning of a string, returning the unit, the alias it matched
/// and what follows it.
fn extract_unit(value: &str) -> Option<(Unit, &'static str, &str)> {
    for &(alias, unit) in UNITS_SORTED.iter() {
        let Some(candidate) = value.get(..alias.len()) else {
            continue;
        };
        if !candidate.eq_ignore_ascii_case(alias) {
            continue;
        }

        // Make sure it's a word boundary
        let after = &value[alias.len()..];
        if after.chars().next().is_some_and(char::is_alphanumeric) {
            continue;
        }

        // Abbreviations may carry a period: "tbsp."
        let after = after.strip_prefix('.').unwrap_or(after);
        return Some((unit, alias, after));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use test_case::test_case;

    fn check(line: &str, quantity: f64, unit: Option<Unit>, unit_text: &str, name: &str) {
        let parsed = parse(line);
        assert_approx_eq!(f64, quantity, parsed.quantity);
        assert_eq!(unit, parsed.unit, "unit of {line:?}");
        assert_eq!(unit_text, parsed.unit_text, "unit text of {line:?}");
        assert_eq!(name, parsed.name, "name of {line:?}");
        assert_eq!(line, parsed.raw);
    }

    #[test_case("2 cups flour", 2.0, Some(Unit::Cup), "cups", "flour"; "integer with plural unit")]
    #[test_case("1/2 tsp salt", 0.5, Some(Unit::Teaspoon), "tsp", "salt"; "fraction")]
    #[test_case("1 1/2 cups sugar", 1.5, Some(Unit::Cup), "cups", "sugar"; "mixed number")]
    #[test_case("0.75 kg potatoes", 0.75, Some(Unit::Kilogram), "kg", "potatoes"; "decimal")]
    #[test_case("300g beef sirloin, thinly sliced", 300.0, Some(Unit::Gram), "g", "beef sirloin, thinly sliced"; "glued unit")]
    #[test_case("3 eggs", 3.0, None, "", "eggs"; "unitless count")]
    #[test_case("2 Tbsp. butter", 2.0, Some(Unit::Tablespoon), "tbsp", "butter"; "abbreviation with period")]
    #[test_case("2 tablespoons olive oil", 2.0, Some(Unit::Tablespoon), "tablespoons", "olive oil"; "long spelling")]
    #[test_case("8 fl oz cream", 8.0, Some(Unit::FluidOunce), "fl oz", "cream"; "fluid ounces")]
    #[test_case("4 oz cheddar", 4.0, Some(Unit::Ounce), "oz", "cheddar"; "weight ounces")]
    #[test_case("1 L Milk", 1.0, Some(Unit::Liter), "l", "Milk"; "uppercase unit keeps name case")]
    #[test_case("½ cup cream", 0.5, Some(Unit::Cup), "cup", "cream"; "vulgar fraction")]
    #[test_case("1½ cups rice", 1.5, Some(Unit::Cup), "cups", "rice"; "glued vulgar fraction")]
    #[test_case("2 lemons", 2.0, None, "", "lemons"; "unit prefix inside a word")]
    #[test_case("2 cupcakes", 2.0, None, "", "cupcakes"; "cup prefix inside a word")]
    #[test_case("2 garlic cloves", 2.0, None, "", "garlic cloves"; "g prefix inside a word")]
    fn parses(line: &str, quantity: f64, unit: Option<Unit>, unit_text: &str, name: &str) {
        check(line, quantity, unit, unit_text, name);
    }

    #[test_case("Salt"; "no number")]
    #[test_case("  Salt and pepper to taste "; "surrounding whitespace")]
    #[test_case("2 cups"; "amount without a name")]
    #[test_case("1/0 cup milk"; "zero denominator")]
    #[test_case("2eggs"; "glued word that is not a unit")]
    #[test_case("-2 cups flour"; "negative")]
    #[test_case(""; "empty")]
    #[test_case("I| cup fl0ur"; "ocr noise")]
    fn falls_back_to_bare_count(line: &str) {
        let parsed = parse(line);
        assert_approx_eq!(f64, 1.0, parsed.quantity);
        assert_eq!(None, parsed.unit);
        assert_eq!("", parsed.unit_text);
        assert_eq!(line.trim(), parsed.name);
        assert!(!parsed.quantified);
    }

    #[test]
    fn deterministic() {
        for line in ["2 cups flour", "1 1/2 tsp salt", "Salt", "300g beef"] {
            assert_eq!(parse(line), parse(line));
        }
    }

    #[test]
    fn mixed_number_needs_a_fraction() {
        check("1 2 eggs", 1.0, None, "", "2 eggs");
    }

    #[test]
    fn quantity_prefix() {
        let (value, rest) = parse_quantity_prefix("42.54 cup.units").unwrap();
        assert_approx_eq!(f64, 42.54, value);
        assert_eq!(" cup.units", rest);

        let (value, rest) = parse_quantity_prefix("1/2tsp").unwrap();
        assert_approx_eq!(f64, 0.5, value);
        assert_eq!("tsp", rest);

        assert!(parse_quantity_prefix("pinch").is_none());
        assert!(parse_quantity_prefix("1/0").is_none());
    }
}
