use super::{FileSystem, FileType, WalkError, WalkOptions};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<String>,
    pub file_type: FileType,
    pub readable: bool,
}

pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(HashMap::new()),
            root,
        };
        let root = fs.root.clone();
        fs.add_dir(root);
        fs
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: Some(content.to_string()),
                file_type: FileType::File,
                readable: true,
            },
        );
    }

    /// Adds a file whose reads fail with `PermissionDenied`.
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: None,
                file_type: FileType::File,
                readable: false,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: None,
                file_type: FileType::Directory,
                readable: true,
            },
        );
    }

    pub fn add_symlink(&self, path: impl AsRef<Path>) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: None,
                file_type: FileType::Symlink,
                readable: true,
            },
        );
    }

    fn insert(&self, path: &Path, entry: MockEntry) {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }
        files.insert(path, entry);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
                readable: true,
            });
        }
    }

    fn entry_type(&self, path: &Path) -> Option<FileType> {
        let path = self.normalize_path(path);
        self.files.read().unwrap().get(&path).map(|e| e.file_type)
    }

    /// Maps a normalized path back to the caller's form of `root`.
    fn denormalize(&self, original_root: &Path, normalized_root: &Path, path: &Path) -> PathBuf {
        match path.strip_prefix(normalized_root) {
            Ok(rest) if rest.as_os_str().is_empty() => original_root.to_path_buf(),
            Ok(rest) => original_root.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entry_type(path).is_some()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let normalized = self.normalize_path(path);
        let files = self.files.read().unwrap();
        let entry = files.get(&normalized).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;

        if !entry.readable {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", path.display()),
            ));
        }

        entry.content.clone().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Not a file: {}", path.display()),
            )
        })
    }

    fn walk_files(&self, root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>, WalkError> {
        let normalized_root = self.normalize_path(root);
        let files = self.files.read().unwrap();

        let root_entry = files.get(&normalized_root).ok_or_else(|| WalkError {
            path: root.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::NotFound,
                format!("Path not found: {}", root.display()),
            ),
        })?;

        match root_entry.file_type {
            FileType::File => return Ok(vec![root.to_path_buf()]),
            FileType::Symlink => return Ok(Vec::new()),
            FileType::Directory => {}
        }

        let mut found = Vec::new();
        for (path, entry) in files.iter() {
            if entry.file_type != FileType::File {
                continue;
            }
            let relative = match path.strip_prefix(&normalized_root) {
                Ok(rel) if !rel.as_os_str().is_empty() => rel,
                _ => continue,
            };

            let components: Vec<_> = relative.components().collect();
            let last = components.len() - 1;
            let pruned = components.iter().enumerate().any(|(i, c)| {
                let name = c.as_os_str().to_string_lossy();
                options.is_pruned(&name, i < last)
            });
            if !pruned {
                found.push(self.denormalize(root, &normalized_root, path));
            }
        }

        found.sort();
        Ok(found)
    }
}
