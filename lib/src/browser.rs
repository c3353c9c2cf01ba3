use crate::error::{PocketLinksError, Result};

/// Open a link in the system browser, outside this program's own view
pub fn open_url(url: &str) -> Result<()> {
    log::debug!("opening {}", url);
    open::that_detached(url).map_err(|e| PocketLinksError::Browser(format!("{}: {}", url, e)))
}
