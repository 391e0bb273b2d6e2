//! Shared naming helpers.

/// Pluralize a model name (e.g., "Category" -> "Categories", "Product" -> "Products")
///
/// Only a trailing "y" is special-cased; irregular plurals are not handled.
pub fn pluralize(name: &str) -> String {
    match name.strip_suffix('y') {
        Some(stem) => format!("{}ies", stem),
        None => format!("{}s", name),
    }
}

/// Convert a CamelCase name to lowercase words (e.g., "BlogPost" -> "blog post")
///
/// Runs of capitals are kept together, so "HTTPRequest" becomes "http request".
pub fn camel_case_to_spaces(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev_lower = chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| !n.is_uppercase());
            if prev_lower || next_lower {
                result.push(' ');
            }
        }
        result.extend(c.to_lowercase());
    }

    result.trim().to_string()
}

/// Default human label for a field (e.g., "created_at" -> "created at")
pub fn field_label(name: &str) -> String {
    name.replace('_', " ")
}

/// URL path segment from a verbose name (e.g., "Blog Posts" -> "blog-posts")
pub fn url_slug(verbose: &str) -> String {
    verbose.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("Product"), "Products");
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Mystery"), "Mysteries");
        assert_eq!(pluralize("Boy"), "Boies");
        assert_eq!(pluralize("Person"), "Persons");
    }

    #[test]
    fn test_camel_case_to_spaces() {
        assert_eq!(camel_case_to_spaces("Product"), "product");
        assert_eq!(camel_case_to_spaces("BlogPost"), "blog post");
        assert_eq!(camel_case_to_spaces("HTTPRequest"), "http request");
        assert_eq!(camel_case_to_spaces("OrderItemV2"), "order item v2");
        assert_eq!(camel_case_to_spaces(""), "");
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("created_at"), "created at");
        assert_eq!(field_label("title"), "title");
    }

    #[test]
    fn test_url_slug() {
        assert_eq!(url_slug("blog posts"), "blog-posts");
        assert_eq!(url_slug("Products"), "products");
    }
}
