//! Shared utility functions for code generation.

/// Convert an identifier to snake_case (e.g., "StringService" -> "string_service").
///
/// Runs of capitals are treated as one word, so "HTTPClient" becomes
/// "http_client" and "userID" becomes "user_id". Dashes and spaces are
/// normalized to underscores.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' || c == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        }

        result.extend(c.to_lowercase());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("StringService"), "string_service");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_acronyms() {
        assert_eq!(to_snake_case("HTTPClient"), "http_client");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case("APIKeyStore"), "api_key_store");
    }

    #[test]
    fn test_to_snake_case_existing_separators() {
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("Mixed_Case"), "mixed_case");
        assert_eq!(to_snake_case("two  spaces"), "two_spaces");
    }
}
