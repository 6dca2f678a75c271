/// Uppercase the first character, leaving the rest alone: `"soy sauce"` becomes `"Soy sauce"`.
pub fn upcase_first_filter(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Capitalize every word and lowercase the rest: `"BEEF sirloin"` becomes `"Beef Sirloin"`.
///
/// Hyphens and underscores separate words and are kept.
pub fn titleize_filter(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut capitalize_next = true;

    for c in value.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}
