use super::{AppContext, PanelCommand};
use crate::interactive;
use pocketlinks::browser;
use pocketlinks::error::{PocketLinksError, Result};
use pocketlinks::models::{Forest, LinkNode};
use pocketlinks::sources;

/// Look up a link by node id; folders are rejected
pub fn resolve_link<'a>(forest: &'a Forest, id: &str) -> Result<&'a LinkNode> {
    let node = forest
        .find(id)
        .ok_or_else(|| PocketLinksError::NodeNotFound(id.to_string()))?;
    node.as_link()
        .ok_or_else(|| PocketLinksError::NotALink(id.to_string()))
}

#[derive(Debug, Clone)]
pub struct OpenCommand {
    pub id: String,
}

impl PanelCommand for OpenCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let link = resolve_link(ctx.forest, &self.id)?;
        eprintln!("Opening: {}", link.url);
        browser::open_url(&link.url)
    }
}

#[derive(Debug, Clone)]
pub struct ShellCommand;

impl PanelCommand for ShellCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        interactive::run_with_context(ctx)
    }
}

/// Lists detected browser profiles; needs no loaded forest
#[derive(Debug, Clone)]
pub struct BrowsersCommand;

impl BrowsersCommand {
    pub fn run(&self) -> Result<()> {
        let profiles = sources::detect_browsers();
        if profiles.is_empty() {
            eprintln!("No browser profiles detected.");
        } else {
            eprintln!("Detected browser profiles:");
            for profile in profiles {
                eprintln!("  • {}: {}", profile.display_string(), profile.path.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_forest;

    #[test]
    fn test_resolve_nested_link() {
        let forest = sample_forest();
        assert_eq!(resolve_link(&forest, "b4").unwrap().url, "http://baz");
        assert_eq!(resolve_link(&forest, "r1").unwrap().url, "http://foo");
    }

    #[test]
    fn test_resolve_rejects_folders_and_unknown_ids() {
        let forest = sample_forest();
        assert!(matches!(
            resolve_link(&forest, "-1"),
            Err(PocketLinksError::NotALink(_))
        ));
        assert!(matches!(
            resolve_link(&forest, "zzz"),
            Err(PocketLinksError::NodeNotFound(_))
        ));
    }
}
