//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check if a string has non-whitespace content
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }
}

/// Convert a snake_case field name to the camelCase name used on the wire
pub fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Join a parent path and a child field into a dotted camelCase path
pub fn field_path(parent: Option<&str>, field: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => format!("{}.{}", parent, camel_case(field)),
        _ => camel_case(field),
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("a"));
        assert!(!not_blank(""));
        assert!(!not_blank("   "));
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("user_name"), "userName");
        assert_eq!(camel_case("email"), "email");
        assert_eq!(camel_case("post_code"), "postCode");
        assert_eq!(camel_case("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn test_field_path() {
        assert_eq!(field_path(None, "last_name"), "lastName");
        assert_eq!(field_path(Some("name"), "last_name"), "name.lastName");
        assert_eq!(field_path(Some("cartItems[0]"), "quantity"), "cartItems[0].quantity");
    }
}
