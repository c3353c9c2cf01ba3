use super::BookmarkTreeSource;
use crate::error::Result;
use crate::models::{ContainerNode, LinkNode, Node, Passthrough, Timestamp};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Microseconds between 1601-01-01 (WebKit epoch) and 1970-01-01
const WEBKIT_EPOCH_OFFSET_MICROS: i64 = 11_644_473_600_000_000;

/// Chromium-family browser that keeps bookmarks in a profile `Bookmarks` file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BrowserType {
    Chrome,
    Chromium,
    Edge,
}

impl BrowserType {
    /// Get a user-friendly display name for the browser
    pub fn display_name(&self) -> &str {
        match self {
            BrowserType::Chrome => "Chrome",
            BrowserType::Chromium => "Chromium",
            BrowserType::Edge => "Edge",
        }
    }

    fn user_data_dir(&self, home: &str) -> PathBuf {
        #[cfg(target_os = "macos")]
        let base = match self {
            BrowserType::Chrome => "Library/Application Support/Google/Chrome",
            BrowserType::Chromium => "Library/Application Support/Chromium",
            BrowserType::Edge => "Library/Application Support/Microsoft Edge",
        };

        #[cfg(target_os = "windows")]
        let base = match self {
            BrowserType::Chrome => "AppData\\Local\\Google\\Chrome\\User Data",
            BrowserType::Chromium => "AppData\\Local\\Chromium\\User Data",
            BrowserType::Edge => "AppData\\Local\\Microsoft\\Edge\\User Data",
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let base = match self {
            BrowserType::Chrome => ".config/google-chrome",
            BrowserType::Chromium => ".config/chromium",
            BrowserType::Edge => ".config/microsoft-edge",
        };

        PathBuf::from(home).join(base)
    }
}

/// Browser profile location
#[derive(Debug, Clone)]
pub struct BrowserProfile {
    pub browser: BrowserType,
    pub profile_name: String,
    pub path: PathBuf,
}

impl BrowserProfile {
    pub fn display_string(&self) -> String {
        format!("{} ({})", self.browser.display_name(), self.profile_name)
    }
}

/// Detect installed browsers and their `Bookmarks` files
pub fn detect_browsers() -> Vec<BrowserProfile> {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    [BrowserType::Chrome, BrowserType::Chromium, BrowserType::Edge]
        .into_iter()
        .flat_map(|browser| detect_profiles(browser, &home))
        .collect()
}

fn detect_profiles(browser: BrowserType, home: &str) -> Vec<BrowserProfile> {
    let base_path = browser.user_data_dir(home);
    if !base_path.exists() {
        return Vec::new();
    }

    // Common profile directories to check
    let profile_names = ["Default", "Profile 1", "Profile 2", "Profile 3", "Profile 4"];

    profile_names
        .iter()
        .map(|name| (name, base_path.join(name).join("Bookmarks")))
        .filter(|(_, path)| path.exists())
        .map(|(name, path)| BrowserProfile {
            browser: browser.clone(),
            profile_name: name.to_string(),
            path,
        })
        .collect()
}

/// Node as stored in a Chromium `Bookmarks` file
#[derive(Debug, Deserialize)]
struct ChromeBookmark {
    #[serde(rename = "type", default)]
    node_type: String,
    #[serde(default)]
    id: String,
    name: Option<String>,
    url: Option<String>,
    children: Option<Vec<ChromeBookmark>>,
    date_added: Option<String>,
    date_modified: Option<String>,
    date_last_used: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChromeBookmarkFile {
    roots: ChromeRoots,
}

#[derive(Debug, Deserialize)]
struct ChromeRoots {
    bookmark_bar: ChromeBookmark,
    other: ChromeBookmark,
    synced: Option<ChromeBookmark>,
}

/// Convert a WebKit timestamp string (microseconds since 1601) to epoch millis.
/// Zero and unparseable values mean "unset".
fn webkit_to_timestamp(raw: Option<&str>) -> Option<Timestamp> {
    let micros: i64 = raw?.trim().parse().ok()?;
    if micros == 0 {
        return None;
    }
    let unix_micros = micros.checked_sub(WEBKIT_EPOCH_OFFSET_MICROS)?;
    Some(Timestamp::from_millis(unix_micros / 1000))
}

fn convert(bookmark: ChromeBookmark, parent_id: &str, index: usize) -> Node {
    let date_added = webkit_to_timestamp(bookmark.date_added.as_deref());
    let title = bookmark.name;

    let is_link = match bookmark.node_type.as_str() {
        "url" => true,
        "folder" => false,
        _ => bookmark.url.is_some(),
    };

    if is_link {
        let mut extra = Passthrough::new();
        if let Some(last_used) = webkit_to_timestamp(bookmark.date_last_used.as_deref()) {
            extra.insert("dateLastUsed".to_string(), serde_json::json!(last_used));
        }
        Node::Link(LinkNode {
            id: bookmark.id,
            title,
            url: bookmark.url.unwrap_or_default(),
            parent_id: Some(parent_id.to_string()),
            date_added,
            index: Some(index as i64),
            extra,
            ..Default::default()
        })
    } else {
        let children = bookmark
            .children
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, child)| convert(child, &bookmark.id, i))
            .collect();

        let mut extra = Passthrough::new();
        extra.insert("index".to_string(), serde_json::json!(index));
        Node::Container(ContainerNode {
            id: bookmark.id,
            title,
            parent_id: Some(parent_id.to_string()),
            date_added,
            date_group_modified: webkit_to_timestamp(bookmark.date_modified.as_deref()),
            children,
            extra,
        })
    }
}

/// Bookmarks read straight from a Chromium profile's `Bookmarks` file,
/// reshaped the way the browser's bookmark API reports them
#[derive(Debug, Clone)]
pub struct ChromeBookmarksFile {
    path: PathBuf,
}

impl ChromeBookmarksFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl BookmarkTreeSource for ChromeBookmarksFile {
    fn get_tree(&self) -> Result<Node> {
        let mut json_content = fs::read(&self.path)?;
        let chrome_data: ChromeBookmarkFile = simd_json::serde::from_slice(&mut json_content)?;

        let roots = chrome_data.roots;
        let top_level = [Some(roots.bookmark_bar), Some(roots.other), roots.synced]
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(i, root)| convert(root, "0", i))
            .collect();

        log::debug!("parsed Chrome bookmarks from {}", self.path.display());
        Ok(Node::Container(ContainerNode::new("0", "", top_level)))
    }
}
