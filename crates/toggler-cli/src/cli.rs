//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OptionsOverlay;

/// Comment Toggler - Comment, uncomment and toggle build blocks in text files
#[derive(Parser, Debug)]
#[command(name = "comment-toggler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "COMMENT_TOGGLER_CONFIG",
        default_value = "toggler.toml"
    )]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Process the given files
    ///
    /// Files are rewritten in place unless --out-dir is given. Options from
    /// the configuration file's [options] table apply when it exists.
    ///
    /// Examples:
    ///   comment-toggler process index.html
    ///   comment-toggler process --remove-directives -o dist src/*.html
    Process {
        /// Files to process
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write results below this directory instead of in place
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Run targets from the configuration file
    ///
    /// Examples:
    ///   comment-toggler run            # all targets
    ///   comment-toggler run prod       # only the "prod" target
    Run {
        /// Targets to run (all when omitted)
        targets: Vec<String>,

        #[command(flatten)]
        options: OptionArgs,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// List the targets defined in the configuration file
    Targets,
}

/// Option overrides shared by the processing commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionArgs {
    /// Blank directive lines instead of keeping them
    #[arg(long, conflicts_with = "keep_directives")]
    pub remove_directives: bool,

    /// Keep directive lines even if the configuration removes them
    #[arg(long)]
    pub keep_directives: bool,

    /// Spaces between a delimiter and the line content
    #[arg(long)]
    pub padding: Option<usize>,
}

impl OptionArgs {
    pub fn overlay(&self) -> OptionsOverlay {
        OptionsOverlay {
            remove_directive_lines: if self.remove_directives {
                Some(true)
            } else if self.keep_directives {
                Some(false)
            } else {
                None
            },
            padding: self.padding,
        }
    }
}

/// How results are written
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteArgs {
    /// Print a diff of the changes without writing anything
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit with an error if any file would change
    #[arg(long)]
    pub check: bool,
}
