//! Where the raw data comes from.
//!
//! The core never talks to a browser directly: it asks a [`ReadingListSource`]
//! for reading-list entries and a [`BookmarkTreeSource`] for the bookmark tree.

pub mod chrome;
pub mod json;

use crate::error::Result;
use crate::models::{ContainerNode, Node, ReadingListEntry};
use std::path::Path;

pub use chrome::{detect_browsers, BrowserProfile, BrowserType, ChromeBookmarksFile};
pub use json::{JsonBookmarkTreeFile, JsonReadingListFile};

/// Filter passed to [`ReadingListSource::query`]; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingListQuery {
    pub read: Option<bool>,
    pub url: Option<String>,
    pub title: Option<String>,
}

impl ReadingListQuery {
    /// Match every entry
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, entry: &ReadingListEntry) -> bool {
        self.read.map_or(true, |read| entry.read == read)
            && self.url.as_deref().map_or(true, |url| entry.url == url)
            && self.title.as_deref().map_or(true, |title| entry.title.as_deref() == Some(title))
    }
}

pub trait ReadingListSource: Sync {
    fn query(&self, filter: &ReadingListQuery) -> Result<Vec<ReadingListEntry>>;
}

pub trait BookmarkTreeSource: Sync {
    /// Root node whose children are the top-level bookmark forest
    fn get_tree(&self) -> Result<Node>;
}

/// Pick a reader for a bookmark file: Chromium profiles name theirs `Bookmarks`,
/// anything else is read as a JSON tree dump
pub fn open_bookmark_file(path: &Path) -> Box<dyn BookmarkTreeSource> {
    if path.file_name().is_some_and(|name| name == "Bookmarks") {
        Box::new(ChromeBookmarksFile::new(path))
    } else {
        Box::new(JsonBookmarkTreeFile::new(path))
    }
}

/// Fixed data held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub entries: Vec<ReadingListEntry>,
    pub roots: Vec<Node>,
}

impl InMemorySource {
    pub fn new(entries: Vec<ReadingListEntry>, roots: Vec<Node>) -> Self {
        Self { entries, roots }
    }
}

impl ReadingListSource for InMemorySource {
    fn query(&self, filter: &ReadingListQuery) -> Result<Vec<ReadingListEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }
}

impl BookmarkTreeSource for InMemorySource {
    fn get_tree(&self) -> Result<Node> {
        Ok(Node::Container(ContainerNode::new("0", "", self.roots.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entries() -> Vec<ReadingListEntry> {
        vec![
            ReadingListEntry::new("r1", "Foo", "http://foo", true),
            ReadingListEntry::new("r2", "Bar", "http://bar", false),
            ReadingListEntry::new("r3", "Baz", "http://baz", false),
        ]
    }

    #[rstest]
    #[case(ReadingListQuery::all(), vec!["r1", "r2", "r3"])]
    #[case(ReadingListQuery { read: Some(false), ..Default::default() }, vec!["r2", "r3"])]
    #[case(ReadingListQuery { url: Some("http://foo".into()), ..Default::default() }, vec!["r1"])]
    #[case(ReadingListQuery { title: Some("Baz".into()), read: Some(true), ..Default::default() }, vec![])]
    fn test_query_filters(#[case] query: ReadingListQuery, #[case] expected: Vec<&str>) {
        let source = InMemorySource::new(entries(), vec![]);
        let found = source.query(&query).unwrap();
        let ids: Vec<&str> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_open_bookmark_file_by_name() {
        let dir = tempfile::TempDir::new().unwrap();

        let chrome = dir.path().join("Bookmarks");
        std::fs::write(
            &chrome,
            r#"{"roots": {"bookmark_bar": {"id": "1", "name": "Bar", "type": "folder", "children": []},
                          "other": {"id": "2", "name": "Other", "type": "folder", "children": []}}}"#,
        )
        .unwrap();
        assert_eq!(open_bookmark_file(&chrome).get_tree().unwrap().children().len(), 2);

        let dump = dir.path().join("tree.json");
        std::fs::write(&dump, r#"[{"id": "0", "title": "", "children": []}]"#).unwrap();
        assert!(open_bookmark_file(&dump).get_tree().unwrap().children().is_empty());
    }

    #[test]
    fn test_in_memory_tree_wraps_roots() {
        let source = InMemorySource::new(vec![], vec![ContainerNode::new("1", "Bar", vec![]).into()]);
        let root = source.get_tree().unwrap();
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].id(), "1");
    }
}
