//! Declarative, ordered rule tables for name normalization and categorization.
//!
//! Order is part of the contract: the first synonym group and the first category with a match
//! win. Tables can be replaced from a YAML file of the form
//!
//! ```yaml
//! synonyms:
//!   - canonical: eggs
//!     variants: [egg, eggs]
//! categories:
//!   - category: Meat
//!     keywords: [chicken, beef]
//! ```
//!
//! An omitted section keeps the built-in table.
use crate::error::Error;
use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// A canonical ingredient name and the spellings that mean it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    /// Name every variant normalizes to.
    pub canonical: String,
    /// Lowercase variants, matched by substring containment in either direction.
    pub variants: Vec<String>,
}

/// A category and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category returned on a match.
    pub category: Category,
    /// Lowercase keywords searched for inside the name.
    pub keywords: Vec<String>,
}

/// The complete rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Synonym groups, highest precedence first.
    #[serde(default = "default_synonyms")]
    pub synonyms: Vec<SynonymGroup>,
    /// Category rules, highest precedence first.
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryRule>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            synonyms: default_synonyms(),
            categories: default_categories(),
        }
    }
}

impl Rules {
    /// Read rules from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigParse`][`Error::ConfigParse`] if the text is not a valid rules document.
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read rules from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigRead`][`Error::ConfigRead`] if the file cannot be read and
    /// [`ConfigParse`][`Error::ConfigParse`] if its content is not a valid rules document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// The built-in rules, shared.
    pub(crate) fn builtin() -> &'static Rules {
        static BUILTIN: LazyLock<Rules> = LazyLock::new(Rules::default);
        &BUILTIN
    }
}

/// Built-in synonym groups.
const SYNONYMS: &[(&str, &[&str])] = &[
    (
        "eggs",
        &["egg", "eggs", "scrambled egg", "fried egg"],
    ),
    (
        "rice",
        &["rice", "cooked rice", "steamed rice", "white rice", "jasmine rice"],
    ),
    (
        "chicken",
        &["chicken", "chicken breast", "chicken thigh", "chicken wing", "chicken meat"],
    ),
    ("milk", &["milk", "whole milk", "skim milk", "low-fat milk"]),
    ("butter", &["butter"]),
    (
        "flour",
        &["flour", "all-purpose flour", "plain flour", "wheat flour"],
    ),
    (
        "sugar",
        &["sugar", "white sugar", "granulated sugar", "caster sugar"],
    ),
    ("salt", &["salt", "sea salt", "table salt", "kosher salt"]),
    (
        "pepper",
        &["pepper", "black pepper", "ground pepper", "peppercorn"],
    ),
    (
        "onion",
        &["onion", "onions", "yellow onion", "white onion", "red onion"],
    ),
    (
        "garlic",
        &["garlic", "garlic clove", "garlic cloves", "minced garlic"],
    ),
    ("tomato", &["tomato", "tomatoes", "fresh tomato", "ripe tomato"]),
    (
        "oil",
        &["oil", "cooking oil", "vegetable oil", "olive oil", "canola oil"],
    ),
    (
        "soy sauce",
        &["soy sauce", "light soy sauce", "dark soy sauce", "shoyu"],
    ),
    (
        "potato",
        &["potato", "potatoes", "russet potato", "white potato"],
    ),
    ("carrot", &["carrot", "carrots", "fresh carrot"]),
    (
        "cheese",
        &["cheese", "cheddar cheese", "mozzarella cheese", "shredded cheese"],
    ),
    ("bread", &["bread", "white bread", "wheat bread", "loaf bread"]),
];

/// Built-in category keywords, in precedence order.
const CATEGORIES: &[(Category, &[&str])] = &[
    (
        Category::Meat,
        &["chicken", "pork", "beef", "sausage", "hotdog", "tocino", "longganisa", "tapa"],
    ),
    (
        Category::Seafood,
        &["fish", "sardines", "tuna", "salmon", "shrimp", "prawn"],
    ),
    (
        Category::Dairy,
        &["milk", "cheese", "egg", "butter", "cream", "yogurt"],
    ),
    (
        Category::Grain,
        &["rice", "bread", "flour", "oat", "pasta", "noodle"],
    ),
    (
        Category::Fruit,
        &["banana", "apple", "orange", "lemon", "mango"],
    ),
    (
        Category::Vegetable,
        &[
            "beans", "vegetable", "pechay", "spinach", "eggplant", "tomato", "onion", "garlic",
            "pepper", "carrot", "potato", "lettuce", "papaya",
        ],
    ),
    (
        Category::Processed,
        &["sauce", "oil", "vinegar", "soy", "ketchup", "sugar", "salt"],
    ),
];

fn default_synonyms() -> Vec<SynonymGroup> {
    SYNONYMS
        .iter()
        .map(|(canonical, variants)| SynonymGroup {
            canonical: (*canonical).to_string(),
            variants: variants.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

fn default_categories() -> Vec<CategoryRule> {
    CATEGORIES
        .iter()
        .map(|(category, keywords)| CategoryRule {
            category: *category,
            keywords: keywords.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;

    #[test]
    fn builtin_order() {
        let rules = Rules::default();
        assert_eq!(rules.synonyms[0].canonical, "eggs");
        assert_eq!(rules.synonyms.len(), 18);

        let order: Vec<Category> = rules.categories.iter().map(|rule| rule.category).collect();
        assert_eq!(
            order,
            [
                Category::Meat,
                Category::Seafood,
                Category::Dairy,
                Category::Grain,
                Category::Fruit,
                Category::Vegetable,
                Category::Processed,
            ]
        );
    }

    #[test]
    fn builtin_groups_do_not_overlap() {
        // A variant holding another group's variant captures its bare fragment
        let synonyms = Rules::default().synonyms;
        for group in &synonyms {
            for other in synonyms.iter().filter(|other| other.canonical != group.canonical) {
                for variant in &group.variants {
                    for short in &other.variants {
                        assert!(
                            !variant.contains(short.as_str()),
                            "{variant:?} ({}) contains {short:?} ({})",
                            group.canonical,
                            other.canonical
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn yaml_replaces_only_given_sections() {
        let rules = Rules::from_yaml(indoc! {"
            categories:
              - category: Seafood
                keywords: [bangus, tilapia]
        "})
        .unwrap();

        assert_eq!(
            rules.categories,
            [CategoryRule {
                category: Category::Seafood,
                keywords: vec!["bangus".to_string(), "tilapia".to_string()],
            }]
        );
        assert_eq!(rules.synonyms, Rules::default().synonyms);
    }

    #[test]
    fn yaml_with_unknown_category_fails() {
        let err = Rules::from_yaml(indoc! {"
            categories:
              - category: Snacks
                keywords: [chips]
        "})
        .unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            indoc! {"
                synonyms:
                  - canonical: scallion
                    variants: [scallion, green onion, spring onion]
            "}
            .as_bytes(),
        )
        .unwrap();

        let rules = Rules::load(file.path()).unwrap();
        assert_eq!(rules.synonyms.len(), 1);
        assert_eq!(rules.synonyms[0].canonical, "scallion");
        assert_eq!(rules.categories, Rules::default().categories);
    }

    #[test]
    fn load_missing_file() {
        let err = Rules::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
