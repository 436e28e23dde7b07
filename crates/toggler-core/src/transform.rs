//! Per-line comment transforms.
//!
//! All three transforms preserve the indentation of the line. `comment` and
//! `uncomment` are no-ops on lines that are already in the requested state;
//! `toggle` is defined entirely in terms of the other two.

use crate::directive::{Action, CommentSyntax};

/// Applies `action` to a single line.
pub fn apply(action: Action, line: &str, syntax: &CommentSyntax, padding: usize) -> String {
    match action {
        Action::Comment => comment(line, syntax, padding),
        Action::Uncomment => uncomment(line, syntax),
        Action::Toggle => toggle(line, syntax, padding),
    }
}

/// Wraps `line` in the comment delimiters unless it already is.
///
/// # Example
/// ```
/// use toggler_core::CommentSyntax;
/// use toggler_core::transform::comment;
///
/// let css = CommentSyntax::resolve("css").unwrap();
/// assert_eq!(comment("  color: red;", &css, 1), "  /* color: red; */");
/// ```
pub fn comment(line: &str, syntax: &CommentSyntax, padding: usize) -> String {
    if syntax.is_commented(line) {
        return line.to_string();
    }

    let content = line.trim_start();
    let whitespace = &line[..line.len() - content.len()];
    let pad = " ".repeat(padding);

    let mut out = String::from(whitespace);
    out.push_str(syntax.start());
    out.push_str(&pad);
    out.push_str(content.trim());
    if let Some(end) = syntax.end() {
        out.push_str(&pad);
        out.push_str(end);
    }
    out
}

/// Strips the comment delimiters from `line` if it is commented.
pub fn uncomment(line: &str, syntax: &CommentSyntax) -> String {
    let Some(caps) = syntax.pattern().captures(line) else {
        return line.to_string();
    };

    let whitespace = caps.get(1).map_or("", |m| m.as_str());
    let content = caps.get(3).map_or("", |m| m.as_str()).trim();

    format!("{whitespace}{content}")
}

/// Comments an uncommented line and uncomments a commented one.
pub fn toggle(line: &str, syntax: &CommentSyntax, padding: usize) -> String {
    let commented = comment(line, syntax, padding);
    if commented != line {
        commented
    } else {
        uncomment(line, syntax)
    }
}
