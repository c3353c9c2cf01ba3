use crate::error::{PocketLinksError, Result};
use crate::models::Forest;
use crate::utils;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name every export is saved under
pub const EXPORT_FILE_NAME: &str = "bookmarks.json";

/// Receives the finished document; where it ends up is the sink's business
pub trait SaveSink {
    fn save(&mut self, document: &str, file_name: &str) -> Result<()>;
}

/// Writes `<dir>/<file_name>`, creating the directory if needed
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    last_saved: Option<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            last_saved: None,
        }
    }

    /// Path of the most recent successful save
    pub fn last_saved(&self) -> Option<&Path> {
        self.last_saved.as_deref()
    }
}

impl SaveSink for DirectorySink {
    fn save(&mut self, document: &str, file_name: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, document)
            .map_err(|e| PocketLinksError::Export(format!("{}: {}", path.display(), e)))?;
        log::info!("saved {} bytes to {}", document.len(), path.display());
        self.last_saved = Some(path);
        Ok(())
    }
}

/// Streams the document to any writer (stdout, a buffer); the file name is ignored
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SaveSink for WriterSink<W> {
    fn save(&mut self, document: &str, _file_name: &str) -> Result<()> {
        writeln!(self.out, "{}", document)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON (2-space indent) of the whole forest, every field included
pub fn to_document(forest: &Forest) -> Result<String> {
    Ok(serde_json::to_string_pretty(forest)?)
}

/// Read a document produced by [`to_document`] back into a forest
pub fn parse_document(document: &str) -> Result<Forest> {
    utils::from_json_str(document)
}

/// Serialize the forest and hand it to `sink` under [`EXPORT_FILE_NAME`]
pub fn export(forest: &Forest, sink: &mut dyn SaveSink) -> Result<()> {
    let document = to_document(forest)?;
    sink.save(&document, EXPORT_FILE_NAME)
}
