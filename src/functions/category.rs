use crate::categorize::categorize;
use crate::model::Category;
use minijinja::{Error, Value};

/// Group grocery entries by shopping category.
///
/// Groups come in the fixed category order (Fruit, Vegetable, Meat, Seafood, Dairy, Grain,
/// Processed) and empty groups are left out. An entry's `category` attribute is used when it
/// has one, otherwise its `name` is categorized with the built-in keywords.
///
/// # Template Usage
/// ```jinja
/// {% for category, entries in by_category(grocery_list) | items %}
/// ## {{ category }}
/// {% for entry in entries %}
/// - {{ entry.name }}: {{ entry.quantity }}
/// {% endfor %}
/// {% endfor %}
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn by_category(entries: Value) -> Result<Value, Error> {
    let mut groups: Vec<(Category, Vec<Value>)> =
        Category::ALL.iter().map(|&category| (category, Vec::new())).collect();

    for entry in entries.try_iter()? {
        let category = category_of(&entry);
        if let Some((_, items)) = groups.iter_mut().find(|(c, _)| *c == category) {
            items.push(entry);
        }
    }

    Ok(Value::from_iter(
        groups
            .into_iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(category, items)| (category.as_str(), Value::from(items))),
    ))
}

fn category_of(entry: &Value) -> Category {
    let attr = |name: &str| {
        entry
            .get_attr(name)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
    };

    attr("category")
        .and_then(|category| category.parse().ok())
        .or_else(|| attr("name").map(|name| categorize(&name)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use indoc::indoc;
    use minijinja::{Environment, context};

    fn render(template: &str, entries: Value) -> String {
        let mut env = Environment::new();
        env.add_function("by_category", by_category);
        env.render_str(template, context! { entries }).unwrap()
    }

    const TEMPLATE: &str = indoc! {"
        {%- for category, items in by_category(entries) | items %}
        {{ category }}: {{ items | map(attribute='name') | join(', ') }}
        {%- endfor %}"};

    #[test]
    fn groups_in_category_order() {
        let list = aggregate(&["1 cup rice", "2 eggs", "1 mango", "300 g chicken", "Salt"]);
        let result = render(TEMPLATE, Value::from(list));

        assert_eq!(
            result,
            indoc! {"

                Fruit: Mango
                Meat: Chicken
                Dairy: Eggs
                Grain: Rice
                Processed: Salt"}
        );
    }

    #[test]
    fn plain_maps_are_categorized_by_name() {
        let entries = Value::from(vec![
            context! { name => "Spinach" },
            context! { name => "Tuna", category => "Seafood" },
            context! { name => "Mystery", category => "Snacks" },
        ]);
        let result = render(TEMPLATE, entries);

        assert_eq!(
            result,
            indoc! {"

                Vegetable: Spinach
                Seafood: Tuna
                Processed: Mystery"}
        );
    }

    #[test]
    fn not_a_list() {
        let mut env = Environment::new();
        env.add_function("by_category", by_category);
        env.render_str("{{ by_category(3) }}", context! {})
            .unwrap_err();
    }
}
