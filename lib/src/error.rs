/// Error type for the pocketlinks library
///
/// Display formatting is the only place failures are recovered locally; everything
/// else surfaces to the caller through this enum.
#[derive(Debug, thiserror::Error)]
pub enum PocketLinksError {
    /// I/O errors (reading sources, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing/serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A reading-list or bookmark-tree source failed to deliver
    #[error("Source error: {0}")]
    Source(String),

    /// The save collaborator rejected the exported document
    #[error("Export error: {0}")]
    Export(String),

    /// No node with the given id exists in the forest
    #[error("Node with ID {0} not found")]
    NodeNotFound(String),

    /// The node exists but is a folder, not a link
    #[error("Node {0} is a folder, not a link")]
    NotALink(String),

    /// The node exists but is a link, not a folder
    #[error("Node {0} is a link, not a folder")]
    NotAFolder(String),

    /// Rendered folder handle out of range
    #[error("No folder with handle {0}")]
    FolderNotFound(usize),

    /// Browser integration errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using PocketLinksError
pub type Result<T> = std::result::Result<T, PocketLinksError>;

impl From<String> for PocketLinksError {
    fn from(s: String) -> Self {
        PocketLinksError::Other(s)
    }
}

impl From<&str> for PocketLinksError {
    fn from(s: &str) -> Self {
        PocketLinksError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for PocketLinksError {
    fn from(err: serde_yaml::Error) -> Self {
        PocketLinksError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for PocketLinksError {
    fn from(err: serde_json::Error) -> Self {
        PocketLinksError::Json(err.to_string())
    }
}

impl From<simd_json::Error> for PocketLinksError {
    fn from(err: simd_json::Error) -> Self {
        PocketLinksError::Json(err.to_string())
    }
}
