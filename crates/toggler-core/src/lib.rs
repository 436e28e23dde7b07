//! Comment build-block engine for Comment Toggler.
//!
//! Scans a document line by line for build blocks and comments, uncomments or
//! toggles every line inside them:
//!
//! ```text
//! <!-- comments:comment // -->
//! console.log("debug");
//! <!-- endcomments -->
//! ```
//!
//! The delimiter after the action is either literal comment text (`//`, `#`,
//! `--`) or one of the shortcuts `html` (`<!--` ... `-->`) and `css`
//! (`/*` ... `*/`).
//!
//! # Example
//! ```
//! use toggler_core::{Options, transform};
//!
//! let source = "<!-- comments:comment html -->\nfoo\n<!-- endcomments -->";
//! let outcome = transform(source, &Options::default()).unwrap();
//! assert_eq!(
//!     outcome.content,
//!     "<!-- comments:comment html -->\n<!-- foo -->\n<!-- endcomments -->"
//! );
//! assert!(outcome.warnings.is_empty());
//! ```

pub mod directive;
pub mod engine;
pub mod error;
pub mod escape;
pub mod newline;
pub mod options;
pub mod transform;

pub use directive::{Action, CommentSyntax, Directive};
pub use engine::{Outcome, Toggler, transform};
pub use error::{Error, Result, Warning};
pub use escape::escape_delimiter;
pub use newline::LineEnding;
pub use options::Options;
