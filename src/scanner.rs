use crate::error::ValidationError;
use crate::extractors::{Dialect, DialectTable, VariableReference};
use crate::fs::{FileSystem, WalkOptions};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, trace};

/// A file found under a scan root. `dialect` is `None` for files that are
/// skipped because their extension is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub path: PathBuf,
    pub dialect: Option<Dialect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub dialect: Dialect,
    pub references: Vec<VariableReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub files_visited: usize,
    pub config_files: usize,
    pub code_files: usize,
    pub files_skipped: usize,
    pub references_found: usize,
    pub scan_time_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    /// In traversal order: roots in configured order, then `Path` order.
    pub files: Vec<ScannedFile>,
    pub summary: ScanSummary,
}

impl ScanOutput {
    pub fn references(&self) -> impl Iterator<Item = &VariableReference> {
        self.files.iter().flat_map(|f| f.references.iter())
    }
}

pub struct FileScanner<F: FileSystem> {
    fs: F,
    dialects: DialectTable,
    options: WalkOptions,
}

impl<F: FileSystem> FileScanner<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            dialects: DialectTable::default(),
            options: WalkOptions::default(),
        }
    }

    pub fn with_dialects(mut self, dialects: DialectTable) -> Self {
        self.dialects = dialects;
        self
    }

    pub fn with_walk_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Every file reachable from `roots`, each listed once.
    pub fn targets(&self, roots: &[PathBuf]) -> Result<Vec<ScanTarget>, ValidationError> {
        let mut seen = HashSet::new();
        let mut targets = Vec::new();

        for root in roots {
            for path in self.fs.walk_files(root, &self.options)? {
                if !seen.insert(path.clone()) {
                    continue;
                }
                let dialect = self.dialects.dialect_for(&path);
                targets.push(ScanTarget { path, dialect });
            }
        }

        Ok(targets)
    }

    /// Reads and extracts every recognized file under `roots`.
    ///
    /// The first file that cannot be read aborts the whole scan.
    pub fn scan(&self, roots: &[PathBuf]) -> Result<ScanOutput, ValidationError> {
        let start = Instant::now();
        info!(roots = roots.len(), "Starting reference scan");

        let targets = self.targets(roots)?;
        let mut output = ScanOutput::default();
        output.summary.files_visited = targets.len();

        for target in targets {
            let dialect = match target.dialect {
                Some(d) => d,
                None => {
                    trace!(path = %target.path.display(), "Skipping unrecognized file");
                    output.summary.files_skipped += 1;
                    continue;
                }
            };

            let references = self.scan_file(&target.path, dialect)?;
            match dialect {
                Dialect::Config => output.summary.config_files += 1,
                Dialect::Code => output.summary.code_files += 1,
            }
            output.summary.references_found += references.len();

            output.files.push(ScannedFile {
                path: target.path,
                dialect,
                references,
            });
        }

        output.summary.scan_time_ms = start.elapsed().as_millis() as u64;
        info!(
            files_visited = output.summary.files_visited,
            config_files = output.summary.config_files,
            code_files = output.summary.code_files,
            references_found = output.summary.references_found,
            scan_time_ms = output.summary.scan_time_ms,
            "Reference scan completed"
        );

        Ok(output)
    }

    fn scan_file(&self, path: &Path, dialect: Dialect) -> Result<Vec<VariableReference>, ValidationError> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ValidationError::ScanIo {
                path: path.to_path_buf(),
                source,
            })?;

        let references = self.dialects.extract(dialect, &content);
        debug!(
            path = %path.display(),
            dialect = %dialect,
            references = references.len(),
            "Scanned file"
        );
        Ok(references)
    }
}
