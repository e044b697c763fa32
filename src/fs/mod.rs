//! FileSystem abstraction for testable file operations

mod mock;
mod real;
mod r#trait;

pub use mock::MockFileSystem;
pub use r#trait::{FileSystem, FileType, WalkError, WalkOptions, DEFAULT_EXCLUDED_DIRS};
pub use real::RealFileSystem;
