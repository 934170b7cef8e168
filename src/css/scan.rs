//! Content scanning: which class names are actually used.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Error returned when a content glob cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    /// The offending pattern.
    pub pattern: String,
    /// What the glob compiler reported.
    pub message: String,
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid content glob \"{}\": {}", self.pattern, self.message)
    }
}

impl std::error::Error for PatternError {}

/// What a scan found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Files that matched the content globs, in walk order.
    pub files: Vec<PathBuf>,
    /// Distinct candidate class tokens found in those files.
    pub candidates: BTreeSet<String>,
}

/// Scans a source tree for candidate class names.
///
/// Globs are compiled once; [`ContentScanner::scan`] walks the root,
/// matches files by their root-relative path, and extracts candidate
/// tokens. Matching zero files is a valid outcome — the report is simply
/// empty, and the resulting stylesheet carries no utility rules.
///
/// # Example
///
/// ```rust,ignore
/// let scanner = ContentScanner::new("./web", &["src/**/*.html".to_string()])?;
/// let report = scanner.scan();
/// if report.candidates.contains("text-primary") { /* emit it */ }
/// ```
#[derive(Debug, Clone)]
pub struct ContentScanner {
    root: PathBuf,
    set: GlobSet,
    patterns: Vec<String>,
}

impl ContentScanner {
    /// Compiles the given globs relative to `root`.
    ///
    /// A leading `./` on a pattern is accepted and ignored, so configs
    /// written with explicit relative paths keep working.
    ///
    /// # Errors
    ///
    /// [`PatternError`] for the first glob that fails to compile.
    pub fn new(root: impl Into<PathBuf>, patterns: &[String]) -> Result<Self, PatternError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let normalized = pattern.strip_prefix("./").unwrap_or(pattern);
            let glob = Glob::new(normalized).map_err(|e| PatternError {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| PatternError {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })?;
        Ok(Self {
            root: root.into(),
            set,
            patterns: patterns.to_vec(),
        })
    }

    /// The compiled patterns, as authored.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Walks the root and collects candidate tokens from matching files.
    ///
    /// Files that cannot be read (permissions, non-UTF-8 content) are
    /// skipped with a warning; a build scan does not fail on one bad file.
    pub fn scan(&self) -> ScanReport {
        let mut report = ScanReport::default();
        if self.patterns.is_empty() {
            return report;
        }

        for entry in WalkDir::new(&self.root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = match entry.path().strip_prefix(&self.root) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            if !self.set.is_match(relative) {
                continue;
            }
            match std::fs::read_to_string(entry.path()) {
                Ok(text) => {
                    extract_candidates(&text, &mut report.candidates);
                    report.files.push(entry.path().to_path_buf());
                }
                Err(e) => {
                    warn!(path = %entry.path().display(), error = %e, "skipping unreadable content file");
                }
            }
        }

        debug!(
            files = report.files.len(),
            candidates = report.candidates.len(),
            "content scan finished"
        );
        report
    }
}

/// Collects maximal runs of class-name characters from a chunk of source.
///
/// Anything a class attribute could hold qualifies as a candidate; deciding
/// which candidates correspond to real utilities is the generator's job.
pub(crate) fn extract_candidates(text: &str, out: &mut BTreeSet<String>) {
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '/') {
            current.push(c);
        } else if !current.is_empty() {
            push_candidate(&mut current, out);
        }
    }
    if !current.is_empty() {
        push_candidate(&mut current, out);
    }
}

fn push_candidate(current: &mut String, out: &mut BTreeSet<String>) {
    // Tokens without a letter (numbers, punctuation runs) can't be classes.
    if current.chars().any(|c| c.is_ascii_alphabetic()) {
        out.insert(std::mem::take(current));
    } else {
        current.clear();
    }
}
