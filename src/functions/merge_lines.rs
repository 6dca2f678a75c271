use crate::aggregate::aggregate_with;
use crate::rules::Rules;
use anyhow::{Context, Result, anyhow};
use minijinja::{Error, ErrorKind, Value};

/// Merge a list of ingredient lines into a grocery list.
///
/// Items may be strings or ingredient objects; objects contribute their rendered `text`, so
/// scaling and unit conversion carry over. The context's `grocery_list` already holds the
/// merged report lines; this merges any other list.
///
/// # Template Usage
/// ```jinja
/// {% for entry in merge_lines(["2 eggs", "1 egg", "1 cup milk"]) %}
/// - {{ entry }}
/// {% endfor %}
/// ```
pub fn merge_lines(rules: &Rules, lines: &Value) -> Result<Value, Error> {
    let lines = collect_lines(lines).map_err(|e| {
        // Keep the whole context chain in the template error
        Error::new(ErrorKind::InvalidOperation, format!("{e:#}"))
    })?;
    Ok(Value::from(aggregate_with(&lines, rules)))
}

fn collect_lines(lines: &Value) -> Result<Vec<String>> {
    let iter = lines
        .try_iter()
        .map_err(|e| anyhow!("merge_lines expects a list of ingredient lines: {e}"))?;

    iter.enumerate()
        .map(|(index, item)| {
            line_of(&item).with_context(|| format!("item {index} is not an ingredient line"))
        })
        .collect()
}

fn line_of(item: &Value) -> Result<String> {
    if let Some(line) = item.as_str() {
        return Ok(line.to_string());
    }

    let text = item
        .get_attr("text")
        .map_err(|e| anyhow!("failed to read the ingredient text: {e}"))?;
    text.as_str()
        .map(String::from)
        .ok_or_else(|| anyhow!("expected a string or an object with a text attribute, got {item}"))
}
