use super::{Element, MountPoint, ReadBadge, RenderedTree};
use crate::error::Result;
use std::io::Write;

const INDENT: &str = "  ";

/// Plain-text tree written to any `Write`; collapsed folders hide their contents
pub struct TextMount<W: Write> {
    out: W,
}

impl<W: Write> TextMount<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_elements(&mut self, elements: &[Element], depth: usize) -> Result<()> {
        let pad = INDENT.repeat(depth);
        for element in elements {
            match element {
                Element::Link(link) => {
                    write!(self.out, "{}• {} <{}>", pad, link.label, link.href)?;
                    match link.badge {
                        Some(ReadBadge::Read) => write!(self.out, " [read]")?,
                        Some(ReadBadge::Unread) => write!(self.out, " [unread]")?,
                        None => {}
                    }
                    if let Some(added) = &link.added {
                        write!(self.out, " · {}", added)?;
                    }
                    writeln!(self.out)?;
                }
                Element::Folder(folder) => {
                    let glyph = if folder.is_collapsed() { "▸" } else { "▾" };
                    write!(self.out, "{}{} [{}] {}", pad, glyph, folder.handle, folder.header)?;
                    if let Some(added) = &folder.added {
                        write!(self.out, " · {}", added)?;
                    }
                    writeln!(self.out)?;
                    if !folder.is_collapsed() {
                        self.write_elements(&folder.children, depth + 1)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> MountPoint for TextMount<W> {
    fn mount(&mut self, tree: &RenderedTree) -> Result<()> {
        self.write_elements(tree.elements(), 0)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContainerNode, ReadingListEntry, Timestamp};
    use crate::normalize::normalize;
    use crate::render::{render, render_into, DisplayOptions, ReadMarker};

    fn forest() -> crate::models::Forest {
        normalize(
            vec![ReadingListEntry::new("r1", "Foo", "http://foo", true)],
            vec![ContainerNode::new(
                "b1",
                "Folder",
                vec![crate::models::LinkNode::new("b2", "Bar", "http://bar").into()],
            )
            .into()],
            Timestamp::from_millis(0),
        )
    }

    fn mount_to_string(tree: &RenderedTree) -> String {
        let mut mount = TextMount::new(Vec::new());
        mount.mount(tree).unwrap();
        String::from_utf8(mount.into_inner()).unwrap()
    }

    #[test]
    fn test_text_layout() {
        let mut mount = TextMount::new(Vec::new());
        render_into(&forest(), &DisplayOptions::default(), &mut mount).unwrap();
        let out = String::from_utf8(mount.into_inner()).unwrap();
        assert_eq!(
            out,
            "▾ [0] Reading List\n  • ☑️ Foo <http://foo>\n▾ [1] Folder\n  • Bar <http://bar>\n"
        );
    }

    #[test]
    fn test_collapsed_folder_hides_children() {
        let mut tree = render(&forest(), &DisplayOptions::default());
        tree.toggle(1).unwrap();
        let out = mount_to_string(&tree);
        assert!(out.contains("▸ [1] Folder\n"));
        assert!(!out.contains("Bar"));
        assert!(out.contains("Foo"));
    }

    #[test]
    fn test_badges_and_dates() {
        let options = DisplayOptions {
            read_marker: ReadMarker::Badge,
            show_dates: true,
        };
        let out = mount_to_string(&render(&forest(), &options));
        assert!(out.contains("• Foo <http://foo> [read]"));
        assert!(out.contains("▾ [0] Reading List · 1970-01-01 00:00"));
    }
}
