//! Character classification for the Coll lexer.
//!
//! Letters and digits follow Rust's Unicode-aware `char` predicates; number
//! literals only accept ASCII digits.

/// The character that starts a line comment.
pub const COMMENT_MARKER: char = '#';

/// Checks if a character can start an identifier: a letter or `_`.
///
/// # Example
///
/// ```
/// use collc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('É'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier: a letter, digit or `_`.
///
/// # Example
///
/// ```
/// use collc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('-'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Whitespace skipped between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set_is_narrow() {
        for c in [' ', '\t', '\n', '\r'] {
            assert!(is_whitespace(c));
        }
        assert!(!is_whitespace('\u{000B}'));
        assert!(!is_whitespace('\u{00A0}'));
        assert!(!is_whitespace(COMMENT_MARKER));
    }

    #[test]
    fn test_unicode_digits_continue_identifiers() {
        assert!(is_ident_continue('٣'));
        assert!(!is_ident_start('٣'));
    }
}
