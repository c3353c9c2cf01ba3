use crate::commands::{
    export::ExportCommand,
    misc::{BrowsersCommand, OpenCommand, ShellCommand},
    show::ShowCommand,
    AppContext, CommandEnum,
};
use clap::{Parser, Subcommand};
use pocketlinks::config::Config;
use pocketlinks::error::Result;
use pocketlinks::loader::load_forest;
use pocketlinks::sources::{
    self, BookmarkTreeSource, ChromeBookmarksFile, InMemorySource, JsonReadingListFile,
    ReadingListSource,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reading-list JSON file (overrides config)
    #[arg(long)]
    pub reading_list: Option<PathBuf>,

    /// Bookmark source: a Chromium `Bookmarks` file or a JSON tree dump (overrides config)
    #[arg(long)]
    pub bookmarks: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the bookmark tree (default)
    Show {
        /// Render the folder with this node ID collapsed (repeatable)
        #[arg(short, long, allow_hyphen_values = true)]
        collapse: Vec<String>,

        /// Write the tree as an HTML panel page instead of printing it
        #[arg(long)]
        html: Option<PathBuf>,

        /// Annotate entries with the date they were added
        #[arg(short, long)]
        dates: bool,
    },

    /// Export the whole tree as bookmarks.json
    Export {
        /// Directory to save into (default: config export_dir, then ~/Downloads)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Print the document to stdout instead of saving a file
        #[arg(long, conflicts_with = "dir")]
        stdout: bool,
    },

    /// Open a link in the system browser
    Open {
        /// Node ID of the link
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// List browser profiles with a detectable Bookmarks file
    Browsers,

    /// Start interactive shell
    Shell,
}

fn reading_list_source(path: Option<&Path>) -> Box<dyn ReadingListSource> {
    match path {
        Some(path) => Box::new(JsonReadingListFile::new(path)),
        None => {
            log::info!("no reading list configured; starting with an empty one");
            Box::new(InMemorySource::default())
        }
    }
}

fn bookmark_source(path: Option<&Path>) -> Box<dyn BookmarkTreeSource> {
    if let Some(path) = path {
        return sources::open_bookmark_file(path);
    }

    match sources::detect_browsers().into_iter().next() {
        Some(profile) => {
            log::info!("using bookmarks from {}", profile.display_string());
            Box::new(ChromeBookmarksFile::new(profile.path))
        }
        None => {
            log::warn!("no bookmark file configured and no browser profile found");
            Box::new(InMemorySource::default())
        }
    }
}

pub fn handle_args(cli: Cli, config: &Config) -> Result<()> {
    let command = match cli.command {
        Some(Commands::Browsers) => return BrowsersCommand.run(),
        Some(Commands::Show {
            collapse,
            html,
            dates,
        }) => CommandEnum::Show(ShowCommand {
            collapse,
            html,
            dates,
        }),
        Some(Commands::Export { dir, stdout }) => CommandEnum::Export(ExportCommand { dir, stdout }),
        Some(Commands::Open { id }) => CommandEnum::Open(OpenCommand { id }),
        Some(Commands::Shell) => CommandEnum::Shell(ShellCommand),
        None => CommandEnum::Show(ShowCommand::default()),
    };

    let reading_list_path = cli.reading_list.as_deref().or(config.reading_list.as_deref());
    let bookmarks_path = cli.bookmarks.as_deref().or(config.bookmarks.as_deref());

    let reading_list = reading_list_source(reading_list_path);
    let bookmarks = bookmark_source(bookmarks_path);
    let forest = load_forest(&*reading_list, &*bookmarks)?;

    let ctx = AppContext {
        config,
        forest: &forest,
        nc: cli.nc,
    };
    command.execute(&ctx)
}
