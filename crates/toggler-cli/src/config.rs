//! Configuration file parsing for toggler.toml
//!
//! The configuration holds default options and named targets. Each target
//! lists glob patterns, an optional destination directory and its own option
//! overrides:
//!
//! ```toml
//! [options]
//! padding = 1
//!
//! [targets.prod]
//! cwd = "src"
//! files = ["**/*.html"]
//! dest = "dist"
//!
//! [targets.prod.options]
//! remove_directive_lines = true
//! ```
//!
//! Options are layered: built-in defaults, then `[options]`, then the target's
//! options, then command-line flags.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use toggler_core::Options;
use tracing::{debug, warn};

use crate::error::{CliError, Result};

/// Partial options; unset fields leave the underlying value alone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsOverlay {
    pub remove_directive_lines: Option<bool>,
    pub padding: Option<usize>,
}

impl OptionsOverlay {
    /// Apply this overlay on top of `options`
    pub fn apply(&self, mut options: Options) -> Options {
        if let Some(remove) = self.remove_directive_lines {
            options.remove_directive_lines = remove;
        }
        if let Some(padding) = self.padding {
            options.padding = padding;
        }
        options
    }
}

/// A named set of files processed with the same options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    /// Directory the patterns and the destination mapping are relative to
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    /// Glob patterns selecting the files
    pub files: Vec<String>,

    /// Output directory; files are rewritten in place when absent
    #[serde(default)]
    pub dest: Option<PathBuf>,

    /// Option overrides for this target
    #[serde(default)]
    pub options: OptionsOverlay,
}

/// A source file and where its result goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl FileJob {
    pub fn in_place(path: impl Into<PathBuf>) -> Self {
        let source = path.into();
        Self {
            dest: source.clone(),
            source,
        }
    }
}

impl Target {
    /// Expand the target's patterns relative to `root`.
    ///
    /// Directories are skipped and every file appears once, in pattern order.
    pub fn expand(&self, root: &Path) -> Result<Vec<FileJob>> {
        let base = match &self.cwd {
            Some(cwd) => root.join(cwd),
            None => root.to_path_buf(),
        };

        // The base is a literal path; only the user patterns are globs
        let escaped_base = PathBuf::from(glob::Pattern::escape(&base.to_string_lossy()));

        let mut jobs: Vec<FileJob> = Vec::new();
        for pattern in &self.files {
            let full = escaped_base.join(pattern);
            let mut matched = 0usize;

            for entry in glob::glob(&full.to_string_lossy())? {
                let source = entry.map_err(|e| {
                    let path = e.path().to_path_buf();
                    CliError::io(path, e.into_error())
                })?;
                if !source.is_file() || jobs.iter().any(|job| job.source == source) {
                    continue;
                }
                matched += 1;

                let dest = match &self.dest {
                    Some(dest) => {
                        let relative = source.strip_prefix(&base).unwrap_or(&source);
                        root.join(dest).join(relative)
                    }
                    None => source.clone(),
                };
                jobs.push(FileJob { source, dest });
            }

            if matched == 0 {
                warn!(pattern = %pattern, "Pattern matched no files");
            }
        }

        Ok(jobs)
    }
}

/// Parsed toggler.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Defaults for every target
    #[serde(default)]
    pub options: OptionsOverlay,

    /// Targets keyed by name
    #[serde(default)]
    pub targets: BTreeMap<String, Target>,

    /// Directory containing the configuration file
    #[serde(skip)]
    pub root: PathBuf,
}

impl Config {
    /// Parse a configuration from TOML content
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut config: Config = toml::from_str(content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Load the configuration file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading configuration");
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CliError::user(format!(
                "Configuration file not found: {}",
                path.display()
            )),
            _ => CliError::io(path, e),
        })?;
        Self::parse(&content, path)
    }

    /// Load the configuration file if it exists, otherwise an empty configuration
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Look up a target by name
    pub fn target(&self, name: &str) -> Result<&Target> {
        self.targets.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.targets.keys().map(String::as_str).collect();
            CliError::user(format!(
                "Unknown target '{}' (available: {})",
                name,
                if known.is_empty() {
                    "none".to_string()
                } else {
                    known.join(", ")
                }
            ))
        })
    }

    /// Resolve the effective options for `target` with command-line overrides
    pub fn resolve_options(&self, target: Option<&Target>, cli: &OptionsOverlay) -> Options {
        let mut options = self.options.apply(Options::default());
        if let Some(target) = target {
            options = target.options.apply(options);
        }
        cli.apply(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[options]
padding = 2

[targets.dev]
files = ["*.html"]

[targets.prod]
cwd = "src"
files = ["**/*.html", "*.css"]
dest = "dist"

[targets.prod.options]
remove_directive_lines = true
"#;

    #[test]
    fn test_parse_sample() {
        let config = Config::parse(SAMPLE, Path::new("project/toggler.toml")).unwrap();
        assert_eq!(config.root, PathBuf::from("project"));
        assert_eq!(config.options.padding, Some(2));
        assert_eq!(config.targets.len(), 2);

        let prod = config.target("prod").unwrap();
        assert_eq!(prod.cwd, Some(PathBuf::from("src")));
        assert_eq!(prod.dest, Some(PathBuf::from("dist")));
        assert_eq!(prod.options.remove_directive_lines, Some(true));
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let err = Config::parse("[options]\npading = 2\n", Path::new("toggler.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_unknown_target() {
        let config = Config::parse(SAMPLE, Path::new("toggler.toml")).unwrap();
        let err = config.target("staging").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown target 'staging' (available: dev, prod)"
        );
    }

    #[test]
    fn test_option_layering() {
        let config = Config::parse(SAMPLE, Path::new("toggler.toml")).unwrap();
        let prod = config.target("prod").unwrap();

        let options = config.resolve_options(Some(prod), &OptionsOverlay::default());
        assert_eq!(options.padding, 2);
        assert!(options.remove_directive_lines);

        let cli = OptionsOverlay {
            remove_directive_lines: None,
            padding: Some(0),
        };
        let options = config.resolve_options(Some(prod), &cli);
        assert_eq!(options.padding, 0);
        assert!(options.remove_directive_lines);

        let options = config.resolve_options(None, &OptionsOverlay::default());
        assert_eq!(options.padding, 2);
        assert!(!options.remove_directive_lines);
    }

    #[test]
    fn test_default_config_uses_builtin_options() {
        let config = Config::default();
        assert_eq!(
            config.resolve_options(None, &OptionsOverlay::default()),
            Options::default()
        );
    }

    #[test]
    fn test_expand_in_place() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.html"), "").unwrap();
        fs::write(temp.path().join("b.html"), "").unwrap();
        fs::write(temp.path().join("c.css"), "").unwrap();

        let target = Target {
            files: vec!["*.html".to_string(), "a.*".to_string()],
            ..Default::default()
        };
        let jobs = target.expand(temp.path()).unwrap();

        assert_eq!(
            jobs,
            vec![
                FileJob::in_place(temp.path().join("a.html")),
                FileJob::in_place(temp.path().join("b.html")),
            ]
        );
    }

    #[test]
    fn test_expand_with_dest_keeps_relative_layout() {
        let temp = TempDir::new().unwrap();
        let pages = temp.path().join("src").join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("index.html"), "").unwrap();

        let target = Target {
            cwd: Some(PathBuf::from("src")),
            files: vec!["**/*.html".to_string()],
            dest: Some(PathBuf::from("dist")),
            ..Default::default()
        };
        let jobs = target.expand(temp.path()).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].source, pages.join("index.html"));
        assert_eq!(
            jobs[0].dest,
            temp.path().join("dist").join("pages").join("index.html")
        );
    }

    #[test]
    fn test_expand_base_with_glob_characters() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site[v2]");
        let pages = root.join("pages?");
        fs::create_dir_all(&pages).unwrap();
        fs::write(root.join("a.html"), "").unwrap();
        fs::write(pages.join("b.html"), "").unwrap();
        // Would be matched if "[v2]" were read as a character class
        let decoy = temp.path().join("site2");
        fs::create_dir_all(&decoy).unwrap();
        fs::write(decoy.join("decoy.html"), "").unwrap();

        let target = Target {
            files: vec!["*.html".to_string()],
            ..Default::default()
        };
        assert_eq!(
            target.expand(&root).unwrap(),
            vec![FileJob::in_place(root.join("a.html"))]
        );

        let nested = Target {
            cwd: Some(PathBuf::from("pages?")),
            files: vec!["*.html".to_string()],
            dest: Some(PathBuf::from("dist")),
            ..Default::default()
        };
        let jobs = nested.expand(&root).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].source, pages.join("b.html"));
        assert_eq!(jobs[0].dest, root.join("dist").join("b.html"));
    }

    #[test]
    fn test_expand_invalid_pattern() {
        let temp = TempDir::new().unwrap();
        let target = Target {
            files: vec!["[".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            target.expand(temp.path()),
            Err(CliError::Pattern(_))
        ));
    }
}
