use super::{AppContext, PanelCommand};
use crate::output::colorize::ColoredMount;
use pocketlinks::error::{PocketLinksError, Result};
use pocketlinks::models::Forest;
use pocketlinks::render::{self, DisplayOptions, HtmlMount, MountPoint, RenderedTree, TextMount};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ShowCommand {
    pub collapse: Vec<String>,
    pub html: Option<PathBuf>,
    pub dates: bool,
}

/// Render with the requested folders collapsed.
/// Every id must name a folder in the forest.
pub fn render_collapsed(
    forest: &Forest,
    options: &DisplayOptions,
    collapse: &[String],
) -> Result<RenderedTree> {
    let mut tree = render::render(forest, options);
    for id in collapse {
        let node = forest
            .find(id)
            .ok_or_else(|| PocketLinksError::NodeNotFound(id.clone()))?;
        if node.is_link() {
            return Err(PocketLinksError::NotAFolder(id.clone()));
        }
        if let Some(handle) = tree.handle_of(id) {
            if !tree.is_collapsed(handle).unwrap_or(false) {
                tree.toggle(handle)?;
            }
        }
    }
    Ok(tree)
}

impl PanelCommand for ShowCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let mut options = ctx.config.display.clone();
        options.show_dates |= self.dates;

        let tree = render_collapsed(ctx.forest, &options, &self.collapse)?;

        if let Some(path) = &self.html {
            let mut mount = HtmlMount::new(BufWriter::new(File::create(path)?));
            mount.mount(&tree)?;
            eprintln!("Wrote bookmark panel to {}", path.display());
        } else if ctx.nc {
            TextMount::new(io::stdout().lock()).mount(&tree)?;
        } else {
            ColoredMount::new(io::stdout().lock()).mount(&tree)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_forest;
    use pocketlinks::config::Config;
    use rstest::rstest;

    #[test]
    fn test_render_collapsed_marks_only_requested() {
        let forest = sample_forest();
        let tree =
            render_collapsed(&forest, &DisplayOptions::default(), &["b3".to_string()]).unwrap();
        let b3 = tree.handle_of("b3").unwrap();
        for handle in 0..tree.folder_count() {
            assert_eq!(tree.is_collapsed(handle), Some(handle == b3));
        }
    }

    #[test]
    fn test_repeated_id_stays_collapsed() {
        let forest = sample_forest();
        let ids = vec!["-1".to_string(), "-1".to_string()];
        let tree = render_collapsed(&forest, &DisplayOptions::default(), &ids).unwrap();
        assert_eq!(tree.is_collapsed(0), Some(true));
    }

    #[rstest]
    #[case("missing", "not found")]
    #[case("b2", "not a folder")]
    fn test_bad_collapse_ids(#[case] id: &str, #[case] message: &str) {
        let forest = sample_forest();
        let err =
            render_collapsed(&forest, &DisplayOptions::default(), &[id.to_string()]).unwrap_err();
        assert!(err.to_string().contains(message), "{}", err);
    }

    #[test]
    fn test_show_writes_html() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("panel.html");
        let forest = sample_forest();
        let config = Config::default();
        let ctx = AppContext {
            config: &config,
            forest: &forest,
            nc: true,
        };

        ShowCommand {
            collapse: vec!["b1".to_string()],
            html: Some(path.clone()),
            dates: false,
        }
        .execute(&ctx)
        .unwrap();

        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains(r#"<summary class="folder-header">Folder</summary>"#));
        assert!(html.contains(r#"data-handle="1"><details><summary"#));
        assert!(html.contains(r#"href="http://foo" target="_blank""#));
    }
}
