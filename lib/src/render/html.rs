use super::{Element, MountPoint, ReadBadge, RenderedTree, Target};
use crate::error::Result;
use std::io::Write;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Bookmarks</title>
<style>
  #bookmark-tree ul { list-style: none; padding-left: 1em; }
  .folder-header { cursor: pointer; font-weight: bold; }
  .badge, time { color: #888; font-size: smaller; margin-left: .5em; }
</style>
</head>
<body>
<div id="bookmark-tree">
"#;

const PAGE_TAIL: &str = "</div>\n</body>\n</html>\n";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Standalone HTML panel page. Folders are `<details>` blocks, open unless collapsed.
pub struct HtmlMount<W: Write> {
    out: W,
}

impl<W: Write> HtmlMount<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_list(&mut self, elements: &[Element]) -> Result<()> {
        writeln!(self.out, "<ul>")?;
        for element in elements {
            match element {
                Element::Link(link) => {
                    let target = match link.target {
                        Target::NewContext => r#" target="_blank" rel="noopener noreferrer""#,
                    };
                    write!(
                        self.out,
                        r#"<li class="bookmark-item"><a href="{}"{}>{}</a>"#,
                        escape_html(&link.href),
                        target,
                        escape_html(&link.label)
                    )?;
                    match link.badge {
                        Some(ReadBadge::Read) => write!(self.out, r#"<span class="badge">read</span>"#)?,
                        Some(ReadBadge::Unread) => {
                            write!(self.out, r#"<span class="badge">unread</span>"#)?
                        }
                        None => {}
                    }
                    if let Some(added) = &link.added {
                        write!(self.out, "<time>{}</time>", escape_html(&added.to_string()))?;
                    }
                    writeln!(self.out, "</li>")?;
                }
                Element::Folder(folder) => {
                    let open = if folder.is_collapsed() { "" } else { " open" };
                    writeln!(
                        self.out,
                        r#"<li class="folder" data-handle="{}"><details{}><summary class="folder-header">{}</summary>"#,
                        folder.handle,
                        open,
                        escape_html(&folder.header)
                    )?;
                    writeln!(self.out, r#"<div class="folder-content">"#)?;
                    self.write_list(&folder.children)?;
                    writeln!(self.out, "</div></details></li>")?;
                }
            }
        }
        writeln!(self.out, "</ul>")?;
        Ok(())
    }
}

impl<W: Write> MountPoint for HtmlMount<W> {
    fn mount(&mut self, tree: &RenderedTree) -> Result<()> {
        self.out.write_all(PAGE_HEAD.as_bytes())?;
        self.write_list(tree.elements())?;
        self.out.write_all(PAGE_TAIL.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
