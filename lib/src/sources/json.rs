use super::{BookmarkTreeSource, ReadingListQuery, ReadingListSource};
use crate::error::{PocketLinksError, Result};
use crate::models::{Node, ReadingListEntry};
use crate::utils;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Reading list stored as a JSON array of entries
#[derive(Debug, Clone)]
pub struct JsonReadingListFile {
    path: PathBuf,
}

impl JsonReadingListFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ReadingListSource for JsonReadingListFile {
    fn query(&self, filter: &ReadingListQuery) -> Result<Vec<ReadingListEntry>> {
        let contents = fs::read(&self.path)?;
        let entries: Vec<ReadingListEntry> = utils::from_json_slice(&contents)?;
        log::debug!(
            "read {} reading-list entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries.into_iter().filter(|e| filter.matches(e)).collect())
    }
}

/// Bookmark tree stored as JSON in the platform's tree shape
#[derive(Debug, Clone)]
pub struct JsonBookmarkTreeFile {
    path: PathBuf,
}

impl JsonBookmarkTreeFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl BookmarkTreeSource for JsonBookmarkTreeFile {
    fn get_tree(&self) -> Result<Node> {
        let contents = fs::read(&self.path)?;
        // Either the array of roots a tree query returns, or a single root
        let root = match utils::from_json_slice::<Value>(&contents)? {
            Value::Array(roots) => roots.into_iter().next().ok_or_else(|| {
                PocketLinksError::Source(format!(
                    "{} contains no bookmark root",
                    self.path.display()
                ))
            })?,
            root => root,
        };
        utils::from_json_value(root)
    }
}
