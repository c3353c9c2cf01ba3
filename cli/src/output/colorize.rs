use owo_colors::OwoColorize;
use pocketlinks::error::Result;
use pocketlinks::render::{Element, MountPoint, ReadBadge, RenderedTree};
use std::io::Write;

/// Terminal tree with colors; the folder handle in brackets is what `t <n>` takes
pub struct ColoredMount<W: Write> {
    out: W,
}

impl<W: Write> ColoredMount<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_elements(&mut self, elements: &[Element], depth: usize) -> Result<()> {
        let padding = depth * 2;
        for element in elements {
            match element {
                Element::Link(link) => {
                    let mut line = format!(
                        "{:padding$}{} {} {}",
                        "",
                        "•".red(),
                        link.label.bold(),
                        link.href.yellow()
                    );
                    match link.badge {
                        Some(ReadBadge::Read) => line.push_str(&format!(" {}", "read".green())),
                        Some(ReadBadge::Unread) => {
                            line.push_str(&format!(" {}", "unread".magenta()))
                        }
                        None => {}
                    }
                    if let Some(added) = &link.added {
                        line.push_str(&format!(" {}", added.dimmed()));
                    }
                    writeln!(self.out, "{}", line)?;
                }
                Element::Folder(folder) => {
                    let glyph = if folder.is_collapsed() { "▸" } else { "▾" };
                    let handle = format!("[{}]", folder.handle);
                    let mut line = format!(
                        "{:padding$}{} {} {}",
                        "",
                        glyph.cyan(),
                        handle.bright_blue(),
                        folder.header.bold().green()
                    );
                    if folder.is_collapsed() && !folder.children.is_empty() {
                        line.push_str(&format!(" {}", format!("({})", folder.children.len()).dimmed()));
                    }
                    if let Some(added) = &folder.added {
                        line.push_str(&format!(" {}", added.dimmed()));
                    }
                    writeln!(self.out, "{}", line)?;
                    if !folder.is_collapsed() {
                        self.write_elements(&folder.children, depth + 1)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> MountPoint for ColoredMount<W> {
    fn mount(&mut self, tree: &RenderedTree) -> Result<()> {
        self.write_elements(tree.elements(), 0)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_forest;
    use pocketlinks::render::{render, DisplayOptions, ReadMarker};
    use rstest::rstest;

    fn paint(tree: &RenderedTree) -> String {
        let mut mount = ColoredMount::new(Vec::new());
        mount.mount(tree).unwrap();
        String::from_utf8(mount.into_inner()).unwrap()
    }

    #[test]
    fn test_colored_output_structure() {
        let out = paint(&render(&sample_forest(), &DisplayOptions::default()));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("[0]") && lines[0].contains("Reading List"));
        assert!(lines[1].starts_with("  ") && lines[1].contains("☑️ Foo"));
        assert!(lines[2].contains("Folder"));
        assert!(lines[3].contains("http://bar"));
        assert!(lines[4].contains("[2]") && lines[4].contains("Inner"));
        assert!(lines[5].starts_with("    ") && lines[5].contains("Baz"));
    }

    #[test]
    fn test_collapsed_folder_shows_child_count() {
        let mut tree = render(&sample_forest(), &DisplayOptions::default());
        tree.toggle(1).unwrap();
        let out = paint(&tree);

        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("▸"));
        assert!(out.contains("(2)"));
        assert!(!out.contains("http://bar"));
    }

    #[rstest]
    #[case(ReadMarker::Badge, "read", "☑️")]
    #[case(ReadMarker::Hidden, "Foo", "☑️")]
    fn test_read_marker_modes(
        #[case] marker: ReadMarker,
        #[case] present: &str,
        #[case] absent: &str,
    ) {
        let options = DisplayOptions {
            read_marker: marker,
            show_dates: false,
        };
        let out = paint(&render(&sample_forest(), &options));
        assert!(out.contains(present));
        assert!(!out.contains(absent));
    }

    #[test]
    fn test_dates_are_appended() {
        let options = DisplayOptions {
            show_dates: true,
            ..Default::default()
        };
        let out = paint(&render(&sample_forest(), &options));
        assert!(out.lines().next().unwrap().contains("2023-11-14 22:13"));
    }
}
