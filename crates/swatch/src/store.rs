//! Persistent key-value stores for the selected theme.
//!
//! This module provides:
//!
//! - [`ThemeStore`]: The storage seam, mirroring the browser's `localStorage`
//! - [`MemoryStore`]: A process-local store for tests and embedding
//! - [`FileStore`]: A JSON object on disk, used by the command-line tool
//! - [`DeferredStore`]: Opens an underlying store on every access
//!
//! Values are stored as plain strings with no encoding or versioning.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Error;

/// A string key-value store that outlives the current session.
pub trait ThemeStore {
    /// Reads the value stored under `key`, or `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<String>, Error>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

impl<S: ThemeStore + ?Sized> ThemeStore for &mut S {
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
        (**self).save(key, value)
    }
}

/// An in-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }

    /// Returns the value under `key` without going through the trait.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store that opens its backing store on each access.
///
/// Opening can fail (browsers may disable `localStorage` or throw on access).
/// Deferring the open to `load`/`save` keeps such a failure at the storage
/// step: [`ThemeSwitcher::apply`](crate::ThemeSwitcher::apply) writes the
/// palette first and only then reports the error.
///
/// # Example
///
/// ```rust
/// use swatch::{apply_theme, DeferredStore, Error, InlineStyle, MemoryStore};
///
/// let mut style = InlineStyle::new();
/// let mut store = DeferredStore::new(|| -> Result<MemoryStore, Error> {
///     Err(Error::Unavailable("localStorage"))
/// });
///
/// assert!(apply_theme(&mut style, &mut store, "roka").is_err());
/// assert_eq!(style.get("--color-primary"), Some("#d4af37"));
/// ```
#[derive(Debug, Clone)]
pub struct DeferredStore<F> {
    open: F,
}

impl<F> DeferredStore<F> {
    /// Wraps a function opening the backing store.
    pub fn new(open: F) -> Self {
        Self { open }
    }
}

impl<F, K> ThemeStore for DeferredStore<F>
where
    F: Fn() -> Result<K, Error>,
    K: ThemeStore,
{
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        (self.open)()?.load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
        (self.open)()?.save(key, value)
    }
}

/// A store backed by a JSON object file.
///
/// The file holds a flat object of string values, e.g. `{"theme": "roka"}`.
/// A missing file reads as empty; the file (but not its parent directory) is
/// created on the first save. Every operation re-reads the file.
///
/// Saves write a temporary file in the same directory and rename it over the
/// target, so readers never observe a partial file. Concurrent writers are not
/// merged: the last rename wins, and a key saved by another process in between
/// can be lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for the given path. Nothing is read until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, Error> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(Error::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| Error::StateFormat {
            path: self.path.clone(),
            source,
        })
    }
}

impl ThemeStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());

        let mut content = serde_json::to_string_pretty(&entries).map_err(|source| {
            Error::StateFormat {
                path: self.path.clone(),
                source,
            }
        })?;
        content.push('\n');

        let io_error = |source: io::Error| Error::Io {
            path: self.path.clone(),
            source,
        };
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
        tmp.write_all(content.as_bytes()).map_err(io_error)?;
        tmp.persist(&self.path).map_err(|e| io_error(e.error))?;
        Ok(())
    }
}
