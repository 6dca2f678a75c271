use crate::convert::convert_line;
use crate::model::UnitSystem;
use minijinja::{Error, ErrorKind::InvalidOperation};

/// Render an ingredient line in another unit system.
///
/// # Template Usage
/// ```jinja
/// {{ "2 cups flour" | convert("metric") }}
/// ```
pub fn convert_filter(value: &str, system: &str) -> Result<String, Error> {
    let system: UnitSystem = system
        .parse()
        .map_err(|err| Error::new(InvalidOperation, "cannot convert").with_source(err))?;
    Ok(convert_line(value, system))
}
