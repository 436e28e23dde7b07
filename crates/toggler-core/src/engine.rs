//! Document-level processing of comment build blocks.
//!
//! The scan state is owned by a single [`Toggler::transform`] call and threaded
//! through the line loop, so independent documents can be processed
//! concurrently with a shared `Toggler`.

use tracing::{debug, warn};

use crate::directive::{self, Action, CommentSyntax, Directive};
use crate::error::{Result, Warning};
use crate::newline;
use crate::options::Options;
use crate::transform::apply;

/// Result of transforming one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The transformed document
    pub content: String,
    /// Recoverable problems found while scanning
    pub warnings: Vec<Warning>,
}

impl Outcome {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// An open build block.
#[derive(Debug)]
struct Block {
    action: Action,
    syntax: CommentSyntax,
    opened_at: usize,
}

#[derive(Debug)]
enum State {
    Searching,
    InBlock(Block),
}

/// Applies comment build blocks to documents with a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toggler {
    options: Options,
}

impl Toggler {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Transforms every build block in `content`.
    ///
    /// # Errors
    /// Returns `Error::InvalidCommand` if a start directive names an unknown
    /// action. Nothing of the document is returned in that case.
    pub fn transform(&self, content: &str) -> Result<Outcome> {
        let (ending, lines) = newline::split_lines(content);

        let mut state = State::Searching;
        let mut output = Vec::with_capacity(lines.len());

        for (index, line) in lines.into_iter().enumerate() {
            let (next, processed) = self.step(state, line, index + 1)?;
            state = next;
            output.push(processed);
        }

        let mut warnings = Vec::new();
        if let State::InBlock(block) = state {
            warn!(
                action = %block.action,
                opened_at = block.opened_at,
                "Missing 'endcomments' tag"
            );
            warnings.push(Warning::MissingEndDirective {
                action: block.action,
                opened_at: block.opened_at,
            });
        }

        Ok(Outcome {
            content: newline::join_lines(&output, ending),
            warnings,
        })
    }

    fn step(&self, state: State, line: &str, line_number: usize) -> Result<(State, String)> {
        match state {
            State::Searching => self.search(line, line_number),
            State::InBlock(block) => {
                if directive::is_end_directive(line) {
                    debug!(action = %block.action, line = line_number, "Closed block");
                    return Ok((State::Searching, self.directive_line(line)));
                }

                let processed = apply(block.action, line, &block.syntax, self.options.padding);
                Ok((State::InBlock(block), processed))
            }
        }
    }

    fn search(&self, line: &str, line_number: usize) -> Result<(State, String)> {
        let Some(directive) = Directive::parse(line, line_number)? else {
            return Ok((State::Searching, line.to_string()));
        };

        let syntax = directive.syntax()?;
        debug!(
            action = %directive.action,
            delimiter = syntax.start(),
            line = line_number,
            "Opened block"
        );

        let block = Block {
            action: directive.action,
            syntax,
            opened_at: line_number,
        };
        Ok((State::InBlock(block), self.directive_line(line)))
    }

    fn directive_line(&self, line: &str) -> String {
        if self.options.remove_directive_lines {
            String::new()
        } else {
            line.to_string()
        }
    }
}

/// Transforms `content` with `options`.
///
/// Shorthand for `Toggler::new(*options).transform(content)`.
pub fn transform(content: &str, options: &Options) -> Result<Outcome> {
    Toggler::new(*options).transform(content)
}
