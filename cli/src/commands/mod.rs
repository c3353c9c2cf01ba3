use pocketlinks::config::Config;
use pocketlinks::error::Result;
use pocketlinks::models::Forest;

pub struct AppContext<'a> {
    pub config: &'a Config,
    /// Loaded once at startup and only ever read afterwards
    pub forest: &'a Forest,
    pub nc: bool,
}

pub mod export;
pub mod misc;
pub mod show;

pub trait PanelCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn PanelCommand>)
pub enum CommandEnum {
    Show(show::ShowCommand),
    Export(export::ExportCommand),
    Open(misc::OpenCommand),
    Shell(misc::ShellCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Show(cmd) => cmd.execute(ctx),
            Self::Export(cmd) => cmd.execute(ctx),
            Self::Open(cmd) => cmd.execute(ctx),
            Self::Shell(cmd) => cmd.execute(ctx),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use pocketlinks::models::{ContainerNode, Forest, LinkNode, ReadingListEntry, Timestamp};
    use pocketlinks::normalize::normalize;

    pub fn sample_forest() -> Forest {
        normalize(
            vec![ReadingListEntry::new("r1", "Foo", "http://foo", true)],
            vec![ContainerNode::new(
                "b1",
                "Folder",
                vec![
                    LinkNode::new("b2", "Bar", "http://bar").into(),
                    ContainerNode::new("b3", "Inner", vec![LinkNode::new("b4", "Baz", "http://baz").into()])
                        .into(),
                ],
            )
            .into()],
            Timestamp::from_millis(1_700_000_000_000),
        )
    }
}
