//! Escaping of user-supplied comment delimiters.
//!
//! Delimiters come straight from directive lines, so any regex meta character
//! in them (`*`, `$`, `|`, ...) has to be neutralised before the delimiter is
//! embedded in a detection pattern.

/// Escapes `delimiter` so that it matches itself literally inside a regex.
///
/// # Example
/// ```
/// use toggler_core::escape_delimiter;
///
/// assert_eq!(escape_delimiter("/*"), r"/\*");
/// assert_eq!(escape_delimiter("//"), "//");
/// ```
pub fn escape_delimiter(delimiter: &str) -> String {
    regex::escape(delimiter)
}
