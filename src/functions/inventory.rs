use crate::error::Error as CrateError;
use crate::model::NormalizedName;
use crate::normalize::{normalize, normalize_with};
use crate::rules::SynonymGroup;
use minijinja::{Error, State, Value};
use std::collections::BTreeSet;
use std::path::Path;

/// Read a household inventory: a YAML list of ingredient names, normalized with `synonyms`.
pub(crate) fn load_inventory(
    path: &Path,
    synonyms: &[SynonymGroup],
) -> Result<Vec<String>, CrateError> {
    let content = std::fs::read_to_string(path).map_err(|source| CrateError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let names: Vec<String> = serde_yaml::from_str(&content)?;

    let normalized: BTreeSet<String> = names
        .iter()
        .map(|name| normalize_with(name, synonyms).as_str().to_string())
        .collect();
    Ok(normalized.into_iter().collect())
}

/// Filter grocery entries to exclude items already in the household inventory.
///
/// Entries are compared by normalized name, so "boiled eggs" in the inventory covers an
/// "Eggs" entry.
///
/// # Returns
/// The entries that still need buying. Without an inventory, every entry.
///
/// # Template Usage
/// ```jinja
/// # Need to buy
/// {% for entry in excluding_inventory(grocery_list) %}
/// - {{ entry.name }}: {{ entry.quantity }}
/// {% endfor %}
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn excluding_inventory(state: &State, entries: Value) -> Result<Value, Error> {
    match inventory(state) {
        Some(inventory) => keep(&entries, |key| !inventory.contains(key)),
        None => Ok(entries),
    }
}

/// Filter grocery entries to include only items already in the household inventory.
///
/// The opposite of `excluding_inventory`.
///
/// # Returns
/// The entries found in the inventory. Without an inventory, an empty list.
///
/// # Template Usage
/// ```jinja
/// # Already at home
/// {% for entry in from_inventory(grocery_list) %}
/// - {{ entry.name }}
/// {% endfor %}
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn from_inventory(state: &State, entries: Value) -> Result<Value, Error> {
    match inventory(state) {
        Some(inventory) => keep(&entries, |key| inventory.contains(key)),
        None => Ok(Value::from(Vec::<Value>::new())),
    }
}

fn inventory(state: &State) -> Option<BTreeSet<String>> {
    let value = state.lookup("inventory")?;
    if value.is_none() || value.is_undefined() {
        return None;
    }

    let names = value
        .try_iter()
        .ok()?
        .filter_map(|name| name.as_str().map(String::from))
        .collect();
    Some(names)
}

fn keep<F>(entries: &Value, predicate: F) -> Result<Value, Error>
where
    F: Fn(&str) -> bool,
{
    let mut kept = Vec::new();
    for entry in entries.try_iter()? {
        if entry_key(&entry).is_some_and(|key| predicate(key.as_str())) {
            kept.push(entry);
        }
    }
    Ok(Value::from(kept))
}

/// The entry's normalized name: its `key` attribute, or its `name` normalized.
fn entry_key(entry: &Value) -> Option<NormalizedName> {
    let attr = |name: &str| {
        entry
            .get_attr(name)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
    };

    attr("key")
        .map(|key| NormalizedName::new(&key))
        .or_else(|| attr("name").map(|name| normalize(&name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::rules::Rules;
    use indoc::indoc;
    use minijinja::{Environment, context};
    use std::io::Write;

    fn render(template: &str, inventory: Option<Vec<&str>>) -> String {
        let mut env = Environment::new();
        env.add_function("excluding_inventory", excluding_inventory);
        env.add_function("from_inventory", from_inventory);

        let entries = Value::from(aggregate(&["2 eggs", "1 cup milk", "1 tsp salt"]));
        env.render_str(template, context! { entries, inventory })
            .unwrap()
    }

    #[test]
    fn splits_by_inventory() {
        let inventory = Some(vec!["eggs", "salt"]);
        let template = "{{ excluding_inventory(entries) | map(attribute='name') | join(',') }}";
        assert_eq!(render(template, inventory.clone()), "Milk");

        let template = "{{ from_inventory(entries) | map(attribute='name') | join(',') }}";
        assert_eq!(render(template, inventory), "Eggs,Salt");
    }

    #[test]
    fn without_inventory() {
        let template = "{{ excluding_inventory(entries) | length }}";
        assert_eq!(render(template, None), "3");

        let template = "{{ from_inventory(entries) | length }}";
        assert_eq!(render(template, None), "0");
    }

    #[test]
    fn plain_maps_are_normalized_by_name() {
        let mut env = Environment::new();
        env.add_function("from_inventory", from_inventory);

        let entries = Value::from(vec![
            context! { name => "Boiled Eggs" },
            context! { name => "Bread" },
        ]);
        let result = env
            .render_str(
                "{{ from_inventory(entries) | map(attribute='name') | join(',') }}",
                context! { entries, inventory => vec!["eggs"] },
            )
            .unwrap();
        assert_eq!(result, "Boiled Eggs");
    }

    #[test]
    fn loads_and_normalizes_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            indoc! {"
                - Scrambled Egg
                - sea salt
                - Fresh Basil
                - eggs
            "}
            .as_bytes(),
        )
        .unwrap();

        let inventory = load_inventory(file.path(), &Rules::default().synonyms).unwrap();
        assert_eq!(inventory, ["basil", "eggs", "salt"]);
    }

    #[test]
    fn load_errors() {
        let err = load_inventory(Path::new("no/such/inventory.yaml"), &[]).unwrap_err();
        assert!(matches!(err, CrateError::ConfigRead { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"eggs: 2\n").unwrap();
        let err = load_inventory(file.path(), &[]).unwrap_err();
        assert!(matches!(err, CrateError::ConfigParse(_)));
    }
}
