//! Where the save document lives.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::EngineResult;

/// Raw storage for the save document.
pub trait StateStore {
    /// The stored document, or `None` if nothing has been saved yet.
    fn load(&self) -> EngineResult<Option<String>>;

    /// Replace the stored document.
    fn save(&self, document: &str) -> EngineResult<()>;
}

/// A save file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The save file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> EngineResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, document: &str) -> EngineResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, document)?;
        Ok(())
    }
}

/// An in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Option<String>>,
}

impl MemoryStore {
    /// A store already holding `document`.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
        }
    }

    /// The current document.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> EngineResult<Option<String>> {
        Ok(self.document())
    }

    fn save(&self, document: &str) -> EngineResult<()> {
        *self.document.borrow_mut() = Some(document.to_string());
        Ok(())
    }
}
