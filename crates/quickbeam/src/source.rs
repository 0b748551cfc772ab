//! Source file access with a bounded cache
//!
//! [`SourceCache`] is the single gateway to source text: it reads files at
//! most once, keeps at most `capacity` of them in memory, and hands out
//! cheap `Arc<str>` clones of the code. Both the lint walker and the AST
//! dump read code through it so that byte offsets taken from spans always
//! index into the exact text that was parsed.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{QuickbeamError, Result};

/// Default number of files kept in the cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// File extension recognized as Rust source.
const SOURCE_EXTENSION: &str = "rs";

/// Read-through cache from source paths to their code.
///
/// Files are decoded as UTF-8; invalid byte sequences are replaced with
/// `U+FFFD` rather than failing the whole file. When the cache grows past
/// its capacity, arbitrary entries are evicted until it fits again.
#[derive(Debug)]
pub struct SourceCache {
    files: DashMap<PathBuf, Arc<str>>,
    capacity: usize,
}

impl Default for SourceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache bounded to `capacity` files.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            files: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Number of files currently held in the cache.
    pub fn cached_files(&self) -> usize {
        self.files.len()
    }

    /// Return the full code of a source file, loading it on first access.
    pub fn code_of_file(&self, path: &Path) -> Result<Arc<str>> {
        if let Some(code) = self.files.get(path) {
            return Ok(Arc::clone(&code));
        }
        if !self.is_source_file(path) {
            return Err(QuickbeamError::NotSourceFile {
                path: path.to_path_buf(),
            });
        }
        let bytes = fs::read(path).map_err(|source| QuickbeamError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let code: Arc<str> = Arc::from(String::from_utf8_lossy(&bytes).into_owned());
        self.files.insert(path.to_path_buf(), Arc::clone(&code));
        self.evict_over_capacity();
        Ok(code)
    }

    /// Return the byte range `[offset, offset + len)` of a file's code.
    ///
    /// The range is clamped to the end of the file; an offset at or past the
    /// end, or one that splits a UTF-8 sequence, is an error.
    pub fn code_segment(&self, path: &Path, offset: usize, len: usize) -> Result<String> {
        let code = self.code_of_file(path)?;
        let end = offset.saturating_add(len).min(code.len());
        if offset >= code.len() {
            return Err(QuickbeamError::OutOfRange {
                path: path.to_path_buf(),
                offset,
                len,
                file_len: code.len(),
            });
        }
        code.get(offset..end)
            .map(str::to_owned)
            .ok_or_else(|| QuickbeamError::OutOfRange {
                path: path.to_path_buf(),
                offset,
                len,
                file_len: code.len(),
            })
    }

    /// Whether `path` names an existing Rust source file.
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == SOURCE_EXTENSION)
    }

    /// Collect every Rust source file under `root`, breadth-first.
    ///
    /// The result is sorted so that repeated runs over the same tree visit
    /// files in the same order.
    pub fn source_files_in(&self, root: &Path) -> Vec<PathBuf> {
        let mut queue = VecDeque::new();
        queue.push_back(root.to_path_buf());
        let mut sources = Vec::new();
        while let Some(path) = queue.pop_front() {
            if path.is_dir() {
                let Ok(entries) = fs::read_dir(&path) else {
                    continue;
                };
                for entry in entries.flatten() {
                    queue.push_back(entry.path());
                }
            } else if self.is_source_file(&path) {
                sources.push(path);
            }
        }
        sources.sort();
        sources.dedup();
        sources
    }

    /// Parse a source file into a `syn` syntax tree.
    pub fn parse_source(&self, path: &Path) -> Result<syn::File> {
        let code = self.code_of_file(path)?;
        syn::parse_file(&code).map_err(|err| QuickbeamError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Drop arbitrary entries until the cache is back at capacity.
    fn evict_over_capacity(&self) {
        while self.files.len() > self.capacity {
            let victim = self.files.iter().next().map(|entry| entry.key().clone());
            match victim {
                Some(key) => {
                    self.files.remove(&key);
                }
                None => break,
            }
        }
    }
}
