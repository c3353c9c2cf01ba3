use super::{AppContext, PanelCommand};
use pocketlinks::error::Result;
use pocketlinks::export::{self, DirectorySink, WriterSink};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ExportCommand {
    pub dir: Option<PathBuf>,
    pub stdout: bool,
}

impl PanelCommand for ExportCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        if self.stdout {
            return export::export(ctx.forest, &mut WriterSink::new(io::stdout().lock()));
        }

        let dir = self.dir.clone().unwrap_or_else(|| ctx.config.export_dir());
        let mut sink = DirectorySink::new(&dir);
        export::export(ctx.forest, &mut sink)?;
        if let Some(path) = sink.last_saved() {
            eprintln!(
                "✓ Exported {} node(s) to {}",
                ctx.forest.len(),
                path.display()
            );
        }
        Ok(())
    }
}
