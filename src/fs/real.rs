use super::{FileSystem, WalkError, WalkOptions};
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn walk_files(&self, root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>, WalkError> {
        let rules = options.clone();

        // Results must not depend on VCS state, so every standard filter is
        // off and pruning is done by `WalkOptions` alone.
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
                let name = entry.file_name().to_string_lossy();
                !rules.is_pruned(&name, is_dir)
            });

        let mut files = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|err| into_walk_error(err, root))?;
            if entry.file_type().map_or(false, |t| t.is_file()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

fn into_walk_error(err: ignore::Error, root: &Path) -> WalkError {
    let path = error_path(&err).unwrap_or_else(|| root.to_path_buf());
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));

    WalkError { path, source }
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
