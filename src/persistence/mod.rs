//! Text storage collaborator
//!
//! The leaderboard and the settings are each persisted as one small text
//! document. Callers decide what goes in it; a `TextStore` only moves the
//! text in and out:
//! - `FileStore`: a file on disk, overwritten on every write
//! - `MemoryStore`: an in-memory document (tests, headless runs)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where one persisted document lives
pub trait TextStore {
    /// Read the whole document
    fn read(&self) -> io::Result<String>;

    /// Replace the whole document
    fn write(&mut self, contents: &str) -> io::Result<()>;
}

/// A document stored in a single file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextStore for FileStore {
    fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        fs::write(&self.path, contents)
    }
}

/// A document held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub contents: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }
}

impl TextStore for MemoryStore {
    fn read(&self) -> io::Result<String> {
        self.contents
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "nothing stored"))
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::new(dir.path().join("leaderboard.txt"));
        assert_eq!(store.path(), dir.path().join("leaderboard.txt"));
        assert!(store.read().is_err());

        store.write("3\n2\n1\n").expect("write");
        assert_eq!(store.read().expect("read"), "3\n2\n1\n");

        store.write("9\n").expect("overwrite");
        assert_eq!(store.read().expect("read"), "9\n");
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(
            store.read().map_err(|e| e.kind()),
            Err(io::ErrorKind::NotFound)
        );
        store.write("hello").expect("write");
        assert_eq!(store.read().expect("read"), "hello");
    }
}
