//! Error types for the grocery-engine library.
//!
//! The engine operations themselves are total. Errors only come from loading configuration
//! files and from rendering templates.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred when generating a report from a template.
    #[error("template error")]
    TemplateError(#[from] minijinja::Error),

    /// A rules or inventory file could not be read.
    #[error("could not read configuration file {}", path.display())]
    ConfigRead {
        /// The file that was requested.
        path: PathBuf,
        /// Why reading failed.
        #[source]
        source: std::io::Error,
    },

    /// A rules or inventory file is not valid YAML of the expected shape.
    #[error("invalid configuration")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl Error {
    /// Format the error with full context including source chain and helpful hints
    ///
    /// This method provides comprehensive error formatting that includes:
    /// - The main error message
    /// - The complete chain of error causes
    /// - Hints for common template and configuration mistakes
    ///
    /// # Example
    /// ```no_run
    /// use grocery_engine::render_template;
    ///
    /// let lines = ["2 eggs"];
    /// let template = "{% for item in grocery_list %}{{ item.name }}{% endfor"; // Missing %}
    ///
    /// match render_template(&lines, template) {
    ///     Ok(result) => println!("{}", result),
    ///     Err(err) => eprintln!("{}", err.format_with_source()),
    /// }
    /// ```
    #[must_use]
    pub fn format_with_source(&self) -> String {
        use std::fmt::Write;

        let mut output = String::new();

        match self {
            Error::TemplateError(minijinja_err) => {
                // minijinja's debug display includes line numbers and source context
                let _ = write!(output, "{}", minijinja_err.display_debug_info());

                match minijinja_err.kind() {
                    minijinja::ErrorKind::SyntaxError => {
                        output.push_str("\n\nHint: This is a syntax error. Check for:");
                        output.push_str("\n  • Missing closing tags ({% endfor %}, {% endif %}, etc.)");
                        output.push_str("\n  • Unclosed strings or brackets");
                    }
                    minijinja::ErrorKind::UndefinedError => {
                        output.push_str("\n\nHint: A variable or attribute is undefined. Check that:");
                        output.push_str(
                            "\n  • Only scale, unit_system, ingredients and grocery_list are used",
                        );
                        output.push_str("\n  • Property names are spelled correctly");
                    }
                    minijinja::ErrorKind::InvalidOperation => {
                        output.push_str("\n\nHint: Invalid operation. Check that:");
                        output.push_str("\n  • convert is given 'metric' or 'imperial'");
                        output.push_str("\n  • Filters are applied to compatible values");
                    }
                    _ => {}
                }
            }
            Error::ConfigParse(_) => {
                let _ = write!(output, "Error: {self:#}");
                output.push_str("\n\nHint: Rules files hold optional 'synonyms' (canonical, variants)");
                output.push_str(" and 'categories' (category, keywords) lists.");
                output.push_str(" Inventory files hold a list of ingredient names.");
            }
            Error::ConfigRead { .. } => {
                let _ = write!(output, "Error: {self:#}");
            }
        }

        // Traverse the error chain
        let mut current_error: &dyn std::error::Error = self;
        while let Some(source) = current_error.source() {
            let _ = write!(output, "\n\nCaused by:\n    {source:#}");
            current_error = source;
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_read_mentions_path_and_cause() {
        let err = Error::ConfigRead {
            path: PathBuf::from("missing/rules.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let formatted = err.format_with_source();
        assert!(formatted.contains("missing/rules.yaml"));
        assert!(formatted.contains("Caused by:\n    no such file"));
    }

    #[test]
    fn config_parse_has_hint() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        let formatted = Error::from(yaml_err).format_with_source();
        assert!(formatted.starts_with("Error: invalid configuration"));
        assert!(formatted.contains("Hint: Rules files"));
    }
}
