//! Directive parsing for comment build blocks.
//!
//! A build block starts with a directive naming the action and the comment
//! delimiter, and ends with a fixed terminator:
//! ```text
//! <!-- comments:ACTION DELIM -->
//! ...
//! <!-- endcomments -->
//! ```

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::escape::escape_delimiter;

/// Matches a start directive, capturing the action and the delimiter spec.
static START_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--\s*comments:\s*(\w*)\s*(\S+)\s*-->")
        .expect("Invalid start directive regex")
});

/// Matches the block terminator.
static END_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--\s*endcomments\s*-->").expect("Invalid end directive regex")
});

/// What to do with the lines of a build block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Comment,
    Uncomment,
    Toggle,
}

impl Action {
    /// Parses an action keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "comment" => Some(Self::Comment),
            "uncomment" => Some(Self::Uncomment),
            "toggle" => Some(Self::Toggle),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Uncomment => "uncomment",
            Self::Toggle => "toggle",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed start directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub action: Action,
    /// Raw delimiter token: a shortcut name or literal comment text
    pub delimiter_spec: &'a str,
}

impl<'a> Directive<'a> {
    /// Parses a start directive from `line`.
    ///
    /// Returns `Ok(None)` when the line holds no directive. An unknown action
    /// is an error; `line_number` is only used for reporting it.
    ///
    /// # Example
    /// ```
    /// use toggler_core::{Action, Directive};
    ///
    /// let directive = Directive::parse("<!-- comments:Toggle // -->", 1)
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(directive.action, Action::Toggle);
    /// assert_eq!(directive.delimiter_spec, "//");
    /// ```
    pub fn parse(line: &'a str, line_number: usize) -> Result<Option<Self>> {
        let Some(caps) = START_DIRECTIVE.captures(line) else {
            return Ok(None);
        };

        let keyword = caps.get(1).map_or("", |m| m.as_str());
        let delimiter_spec = caps.get(2).map_or("", |m| m.as_str());

        let action = Action::from_keyword(keyword)
            .ok_or_else(|| Error::invalid_command(keyword.to_lowercase(), line_number))?;

        Ok(Some(Self {
            action,
            delimiter_spec,
        }))
    }

    /// Resolves the delimiter spec into a compiled comment syntax.
    pub fn syntax(&self) -> Result<CommentSyntax> {
        CommentSyntax::resolve(self.delimiter_spec)
    }
}

/// Returns `true` if `line` contains the block terminator.
pub fn is_end_directive(line: &str) -> bool {
    END_DIRECTIVE.is_match(line)
}

/// Comment delimiters of a block together with their detection pattern.
///
/// The pattern captures `(leading whitespace)(start delimiter)(content)` and,
/// for paired delimiters, requires the end delimiter after the content.
#[derive(Debug, Clone)]
pub struct CommentSyntax {
    start: String,
    end: Option<String>,
    pattern: Regex,
}

impl CommentSyntax {
    /// Builds the syntax for a delimiter spec.
    ///
    /// `html` and `css` (any case) expand to `<!--`/`-->` and `/*`/`*/`;
    /// anything else is used verbatim as an unpaired delimiter.
    pub fn resolve(spec: &str) -> Result<Self> {
        if spec.eq_ignore_ascii_case("html") {
            Self::new("<!--", Some("-->"))
        } else if spec.eq_ignore_ascii_case("css") {
            Self::new("/*", Some("*/"))
        } else {
            Self::new(spec, None)
        }
    }

    pub fn new(start: impl Into<String>, end: Option<&str>) -> Result<Self> {
        let start = start.into();
        let end = end.filter(|e| !e.is_empty()).map(str::to_string);

        let pattern = format!(
            r"^(\s*)({})(.*){}",
            escape_delimiter(&start),
            end.as_deref().map(escape_delimiter).unwrap_or_default()
        );
        let pattern = Regex::new(&pattern)?;

        Ok(Self {
            start,
            end,
            pattern,
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Returns `true` if `line` is already wrapped in this syntax.
    pub fn is_commented(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}
