//! Naming conventions and name templates.

/// Language-specific naming conventions.
///
/// Defines how to turn a type name into a file name stem, and how to
/// handle identifiers that collide with reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a type name to a file name stem (e.g., "StringService" -> "string_service")
    pub type_to_file: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "type_")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a type name into a file name stem.
    pub fn file_name(&self, name: &str) -> String {
        // File names typically don't need escaping
        (self.type_to_file)(name)
    }
}

/// Expand a printf-style name template with a single string argument.
///
/// Every `%s` receives `value` and `%%` is a literal percent sign. Any other
/// `%` sequence is copied through unchanged.
///
/// ```
/// use mimic_codegen::expand_template;
///
/// assert_eq!(expand_template("%sMock", "StringService"), "StringServiceMock");
/// assert_eq!(expand_template("./generated/%s_mock.go", "string_service"),
///            "./generated/string_service_mock.go");
/// ```
pub fn expand_template(template: &str, value: &str) -> String {
    let mut out = String::with_capacity(template.len() + value.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                out.push_str(value);
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }

    out
}
