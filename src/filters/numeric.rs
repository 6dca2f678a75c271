use crate::parser::parse_quantity_prefix;
use minijinja::{Error, ErrorKind::InvalidOperation};

/// The leading amount of an ingredient line as a number: `"1 1/2 cups"` gives `1.5`.
pub fn numeric_filter(value: &str) -> Result<f64, Error> {
    parse_quantity_prefix(value)
        .map(|(number, _)| number)
        .ok_or_else(|| Error::new(InvalidOperation, "could not parse numeric"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use test_case::test_case;

    #[test_case(42.0, "42"; "integer")]
    #[test_case(42.54, "42.54"; "decimal")]
    #[test_case(0.5, "1/2"; "fraction")]
    #[test_case(1.5, "1 1/2"; "mixed number")]
    #[test_case(0.75, "¾"; "vulgar fraction")]
    #[test_case(300.0, "300g"; "glued unit")]
    #[test_case(42.54, "42.54 cups"; "decimal with unit")]
    #[test_case(0.5, "1/2 tea/spoons"; "fraction with text")]
    fn parses(expected: f64, value: &str) {
        assert_approx_eq!(f64, expected, numeric_filter(value).unwrap());
    }

    #[test_case("pinch, single"; "words")]
    #[test_case("pi2nch"; "digit inside a word")]
    #[test_case(""; "empty")]
    #[test_case("1/0"; "divide by zero")]
    fn rejects(value: &str) {
        numeric_filter(value).unwrap_err();
    }
}
