//! Processing options shared by every block in a document.

use serde::Deserialize;

fn default_padding() -> usize {
    1
}

/// Options controlling how build blocks are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Blank the directive lines (`comments:...` and `endcomments`) instead of keeping them
    pub remove_directive_lines: bool,

    /// Number of spaces between a delimiter and the line content
    #[serde(default = "default_padding")]
    pub padding: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            remove_directive_lines: false,
            padding: default_padding(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remove_directive_lines(mut self, remove: bool) -> Self {
        self.remove_directive_lines = remove;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}
