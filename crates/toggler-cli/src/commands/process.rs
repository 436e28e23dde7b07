//! Process command implementation
//!
//! Transforms files named on the command line.

use std::path::{Path, PathBuf};

use toggler_core::Toggler;

use crate::commands::apply::{Summary, WriteMode, apply_jobs};
use crate::config::{Config, FileJob, OptionsOverlay};
use crate::error::Result;

/// Run the process command
///
/// With `out_dir`, relative paths keep their layout below it and absolute
/// paths land directly in it.
pub fn run_process(
    config_path: &Path,
    files: &[PathBuf],
    out_dir: Option<&Path>,
    overrides: &OptionsOverlay,
    mode: WriteMode,
) -> Result<Summary> {
    let config = Config::load_or_default(config_path)?;
    let options = config.resolve_options(None, overrides);
    let toggler = Toggler::new(options);

    let jobs: Vec<FileJob> = files
        .iter()
        .map(|file| match out_dir {
            Some(dir) => FileJob {
                source: file.clone(),
                dest: dest_in(dir, file),
            },
            None => FileJob::in_place(file),
        })
        .collect();

    apply_jobs(&jobs, &toggler, mode)
}

fn dest_in(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        match file.file_name() {
            Some(name) => dir.join(name),
            None => dir.to_path_buf(),
        }
    } else {
        dir.join(file)
    }
}
