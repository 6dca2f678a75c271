//! A Rust library for turning free-text recipe ingredient lines into a consolidated grocery list.
//!
//! The engine parses lines such as `"1 1/2 cups sugar"` into quantity, unit and name, scales
//! them by a serving ratio, converts them between metric and imperial units, normalizes names
//! so that "egg", "eggs" and "boiled eggs" are one ingredient, assigns shopping categories, and
//! merges everything into one list. Every engine operation is total: malformed input falls back
//! to a sensible default instead of failing.
//!
//! Reports are rendered with [Jinja2][00]-style templates.
//!
//! [00]: https://jinja.palletsprojects.com/en/stable/
use aggregate::merge;
use config::Config;
use filters::{convert_filter, numeric_filter, titleize_filter, upcase_first_filter};
use functions::{by_category, excluding_inventory, from_inventory, load_inventory, merge_lines};
use minijinja::{Environment, Value};
use model::{IngredientView, ParsedIngredient, UnitSystem};
use rules::Rules;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

pub mod aggregate;
pub mod basket;
pub mod categorize;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod rules;
pub mod scale;
mod filters;
mod functions;

pub use aggregate::aggregate;
pub use categorize::categorize;
pub use convert::convert;
pub use error::Error;
pub use normalize::normalize;
pub use parser::parse;
pub use scale::{format, scale};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

/// Context passed to the template.
#[derive(Serialize)]
struct ReportContext {
    scale: f64,
    unit_system: Option<UnitSystem>,
    ingredients: Vec<Value>,
    grocery_list: Value,
    inventory: Option<Vec<String>>,
}

impl ReportContext {
    fn new(
        ingredients: Vec<ParsedIngredient>,
        rules: &Rules,
        config: &Config,
        inventory: Option<Vec<String>>,
    ) -> ReportContext {
        let grocery_list = merge(ingredients.iter().cloned(), rules);
        ReportContext {
            scale: config.scale,
            unit_system: config.unit_system,
            ingredients: ingredients
                .into_iter()
                .map(|ingredient| {
                    Value::from_object(IngredientView::new(ingredient, config.unit_system))
                })
                .collect(),
            grocery_list: Value::from(grocery_list),
            inventory,
        }
    }
}

/// Render ingredient lines with the default configuration.
///
/// This is equivalent to calling [`render_template_with_config`] with a default [`Config`].
///
/// # Errors
///
/// Returns [`TemplateError`][`Error::TemplateError`] if the template has a syntax error or rendering fails.
pub fn render_template<S: AsRef<str>>(lines: &[S], template: &str) -> Result<String, Error> {
    render_template_with_config(lines, template, &Config::default())
}

/// Render ingredient lines to a String with the provided [`Config`].
///
/// On success, returns a String with the lines as rendered by the template.
///
/// # Parameters
///
/// * `lines` are raw ingredient lines. Blank lines are skipped.
/// * `template` is a (hopefully valid) template. It sees `scale`, `unit_system`, `ingredients`
///   (scaled, and rendered in `unit_system` when one is set) and `grocery_list` (the merged
///   entries of the scaled ingredients).
/// * `config` is a [`Config`][`config::Config`] with options for rendering the lines.
///
/// An inventory file that cannot be loaded is logged and ignored.
///
/// # Errors
///
/// Returns [`ConfigRead`][`Error::ConfigRead`] or [`ConfigParse`][`Error::ConfigParse`] if the
/// configured rules file cannot be loaded.
///
/// Returns [`TemplateError`][`Error::TemplateError`] if the template has a syntax error or rendering fails.
pub fn render_template_with_config<S: AsRef<str>>(
    lines: &[S],
    template: &str,
    config: &Config,
) -> Result<String, Error> {
    let rules = match &config.rules_path {
        Some(path) => Rules::load(path)?,
        None => Rules::default(),
    };

    let inventory = config.inventory_path.as_ref().and_then(|path| {
        match load_inventory(path, &rules.synonyms) {
            Ok(names) => Some(names),
            Err(err) => {
                warn!("ignoring inventory: {}", err.format_with_source());
                None
            }
        }
    });

    // Create final, scaled ingredients
    let ingredients: Vec<ParsedIngredient> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty())
        .map(|line| scale(&parse(line), config.scale))
        .collect();
    debug!(
        ingredients = ingredients.len(),
        scale = config.scale,
        "rendering report"
    );

    let template_context = ReportContext::new(ingredients, &rules, config, inventory);
    let template_environment = template_environment(template, Arc::new(rules))?;

    let template: minijinja::Template<'_, '_> = template_environment.get_template("base")?;
    Ok(template.render(template_context)?)
}

/// Build an environment for the given template.
fn template_environment(template: &str, rules: Arc<Rules>) -> Result<Environment<'_>, Error> {
    let mut env = Environment::new();
    env.add_template("base", template)?;
    env.add_function("merge_lines", move |lines: Value| merge_lines(&rules, &lines));
    env.add_function("by_category", by_category);
    env.add_function("excluding_inventory", excluding_inventory);
    env.add_function("from_inventory", from_inventory);
    env.add_filter("convert", convert_filter);
    env.add_filter("numeric", numeric_filter);
    env.add_filter("upcase_first", upcase_first_filter);
    env.add_filter("titleize", titleize_filter);
    Ok(env)
}
