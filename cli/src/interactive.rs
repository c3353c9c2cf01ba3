use crate::commands::export::ExportCommand;
use crate::commands::misc::OpenCommand;
use crate::commands::{AppContext, PanelCommand};
use crate::output::colorize::ColoredMount;
use pocketlinks::error::{PocketLinksError, Result};
use pocketlinks::render::{self, MountPoint, RenderedTree, TextMount};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;
use std::path::PathBuf;

/// Interactive panel. Collapse state lives only as long as this session.
pub fn run_with_context(ctx: &AppContext) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| PocketLinksError::Other(e.to_string()))?;
    let mut tree = render::render(ctx.forest, &ctx.config.display);

    println!("pocket-links interactive mode - type '?' for help");
    print_tree(ctx, &tree)?;

    loop {
        let readline = rl.readline("links> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)
                    .map_err(|e| PocketLinksError::Other(e.to_string()))?;

                match line {
                    "q" | "quit" | "exit" => break,
                    "?" | "help" => print_help(),
                    _ => match handle_command(ctx, &mut tree, line) {
                        Ok(true) => print_tree(ctx, &tree)?,
                        Ok(false) => {}
                        Err(e) => eprintln!("Error: {}", e),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn print_tree(ctx: &AppContext, tree: &RenderedTree) -> Result<()> {
    if ctx.nc {
        TextMount::new(io::stdout().lock()).mount(tree)
    } else {
        ColoredMount::new(io::stdout().lock()).mount(tree)
    }
}

/// Run one shell line. Returns whether the tree should be redrawn.
fn handle_command(ctx: &AppContext, tree: &mut RenderedTree, line: &str) -> Result<bool> {
    let mut parts = line.trim().splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

    match (cmd, arg) {
        ("ls" | "p", _) => Ok(true),
        ("t" | "toggle", Some(handle)) => {
            let handle: usize = handle
                .parse()
                .map_err(|_| PocketLinksError::Other(format!("Invalid folder number: {}", handle)))?;
            tree.toggle(handle)?;
            Ok(true)
        }
        ("x" | "expand", _) => {
            tree.expand_all();
            Ok(true)
        }
        ("o" | "open", Some(id)) => {
            OpenCommand { id: id.to_string() }.execute(ctx)?;
            Ok(false)
        }
        ("e" | "export", dir) => {
            ExportCommand {
                dir: dir.map(PathBuf::from),
                stdout: false,
            }
            .execute(ctx)?;
            Ok(false)
        }
        ("t" | "toggle" | "o" | "open", None) => {
            Err(PocketLinksError::Other(format!("'{}' needs an argument", cmd)))
        }
        _ => Err(PocketLinksError::Other(format!(
            "Unknown command: {} (type '?' for help)",
            cmd
        ))),
    }
}

fn print_help() {
    println!(
        "
INTERACTIVE MODE COMMANDS:

BROWSE:
    ls  or p               Redraw the tree
    t <n>                  Collapse/expand folder [n]
    x                      Expand every folder

OPEN:
    o <id>                 Open link with node ID <id> in the browser

EXPORT:
    e [dir]                Save bookmarks.json (default: configured export dir)

HELP & EXIT:
    ?  or help             Show this help
    q  or quit or exit     Exit interactive mode
    ^D or ^C               Exit interactive mode
"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_forest;
    use pocketlinks::config::Config;
    use pocketlinks::export::EXPORT_FILE_NAME;
    use rstest::rstest;

    #[test]
    fn test_toggle_flips_only_that_folder() {
        let forest = sample_forest();
        let config = Config::default();
        let ctx = AppContext {
            config: &config,
            forest: &forest,
            nc: true,
        };
        let mut tree = render::render(&forest, &config.display);

        assert!(handle_command(&ctx, &mut tree, "t 2").unwrap());
        assert_eq!(tree.is_collapsed(2), Some(true));
        assert_eq!(tree.is_collapsed(1), Some(false));

        handle_command(&ctx, &mut tree, "t 1").unwrap();
        assert_eq!(tree.is_collapsed(1), Some(true));
        assert_eq!(tree.is_collapsed(2), Some(true));

        handle_command(&ctx, &mut tree, "x").unwrap();
        assert_eq!(tree.is_collapsed(1), Some(false));
        assert_eq!(tree.is_collapsed(2), Some(false));
    }

    #[rstest]
    #[case("t abc")]
    #[case("t 99")]
    #[case("t")]
    #[case("o")]
    #[case("o -1")]
    #[case("frobnicate")]
    fn test_bad_commands_are_errors(#[case] line: &str) {
        let forest = sample_forest();
        let config = Config::default();
        let ctx = AppContext {
            config: &config,
            forest: &forest,
            nc: true,
        };
        let mut tree = render::render(&forest, &config.display);
        assert!(handle_command(&ctx, &mut tree, line).is_err());
    }

    #[test]
    fn test_export_from_shell() {
        let dir = tempfile::TempDir::new().unwrap();
        let forest = sample_forest();
        let config = Config::default();
        let ctx = AppContext {
            config: &config,
            forest: &forest,
            nc: true,
        };
        let mut tree = render::render(&forest, &config.display);

        let line = format!("e {}", dir.path().display());
        assert!(!handle_command(&ctx, &mut tree, &line).unwrap());
        assert!(dir.path().join(EXPORT_FILE_NAME).exists());
    }

    #[test]
    fn test_export_dir_may_contain_spaces() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("My Exports");
        let forest = sample_forest();
        let config = Config::default();
        let ctx = AppContext {
            config: &config,
            forest: &forest,
            nc: true,
        };
        let mut tree = render::render(&forest, &config.display);

        let line = format!("e   {}  ", target.display());
        assert!(!handle_command(&ctx, &mut tree, &line).unwrap());
        assert!(target.join(EXPORT_FILE_NAME).exists());
        assert!(!dir.path().join("My").exists());
    }
}
