//! Shared file processing for the process and run commands
//!
//! Reads each job's source, transforms it and, depending on the write mode,
//! writes the result, prints a diff, or only records whether it would change.

use std::fs;
use std::path::Path;

use colored::Colorize;
use similar::TextDiff;
use toggler_core::Toggler;
use tracing::debug;

use crate::cli::WriteArgs;
use crate::config::FileJob;
use crate::error::{CliError, Result};

/// What to do with transformed content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    DryRun,
    Check,
}

impl From<&WriteArgs> for WriteMode {
    fn from(args: &WriteArgs) -> Self {
        if args.dry_run {
            Self::DryRun
        } else if args.check {
            Self::Check
        } else {
            Self::Write
        }
    }
}

/// Totals over a batch of files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub changed: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn merge(&mut self, other: Summary) {
        self.processed += other.processed;
        self.changed += other.changed;
        self.warnings += other.warnings;
    }
}

/// Transform every job with `toggler`.
///
/// The first document with an invalid directive aborts the batch; files
/// already written stay written.
pub fn apply_jobs(jobs: &[FileJob], toggler: &Toggler, mode: WriteMode) -> Result<Summary> {
    let mut summary = Summary::default();

    for job in jobs {
        debug!(source = %job.source.display(), dest = %job.dest.display(), "Processing file");

        let original =
            fs::read_to_string(&job.source).map_err(|e| CliError::io(&job.source, e))?;
        let outcome = toggler
            .transform(&original)
            .map_err(|e| CliError::transform(&job.source, e))?;

        for warning in &outcome.warnings {
            eprintln!(
                "{}: {}: {}",
                "warning".yellow().bold(),
                job.source.display(),
                warning
            );
        }

        summary.processed += 1;
        summary.warnings += outcome.warnings.len();

        let in_place = job.source == job.dest;
        let changed = outcome.content != original;
        if changed {
            summary.changed += 1;
        }

        match mode {
            WriteMode::Write => {
                if changed || !in_place {
                    write_output(&job.dest, &outcome.content)?;
                }
            }
            WriteMode::DryRun => {
                if changed {
                    print!("{}", render_diff(&job.source, &job.dest, &original, &outcome.content));
                }
            }
            WriteMode::Check => {
                if changed {
                    println!("{} {}", "would change".yellow(), job.source.display());
                }
            }
        }
    }

    Ok(summary)
}

fn write_output(dest: &Path, content: &str) -> Result<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
    }
    fs::write(dest, content).map_err(|e| CliError::io(dest, e))
}

/// Unified diff between the original and transformed content
pub fn render_diff(source: &Path, dest: &Path, old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    diff.unified_diff()
        .context_radius(3)
        .header(&source.display().to_string(), &dest.display().to_string())
        .to_string()
}
