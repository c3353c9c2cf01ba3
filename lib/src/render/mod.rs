//! Projects a [`Forest`] into a nested tree of display elements.
//!
//! Rendering is a pure function of the forest and the display options. The only
//! mutable state is the per-folder `collapsed` flag, which lives on the rendered
//! elements and never touches the forest.

pub mod date;
pub mod html;
pub mod text;

use crate::error::{PocketLinksError, Result};
use crate::models::{ContainerNode, Forest, LinkNode, Node};
use serde::{Deserialize, Serialize};

pub use date::DateLabel;
pub use html::HtmlMount;
pub use text::TextMount;

/// Prepended to the label of read reading-list links in [`ReadMarker::Prefix`] mode
pub const READ_PREFIX: &str = "☑️ ";

/// How read/unread state of reading-list links is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMarker {
    /// Prefix the label of read entries with a check mark
    #[default]
    Prefix,
    /// Leave the label alone and attach a separate read/unread badge
    Badge,
    /// Show nothing
    Hidden,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default)]
    pub read_marker: ReadMarker,
    /// Annotate entries with their formatted `dateAdded`
    #[serde(default)]
    pub show_dates: bool,
}

/// Where an activated link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A new, independent viewing context; never the panel itself
    NewContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadBadge {
    Read,
    Unread,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkElement {
    pub node_id: String,
    pub label: String,
    pub href: String,
    pub target: Target,
    pub badge: Option<ReadBadge>,
    pub added: Option<DateLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FolderElement {
    pub node_id: String,
    /// Pre-order number of this folder within the rendered tree
    pub handle: usize,
    pub header: String,
    pub added: Option<DateLabel>,
    pub children: Vec<Element>,
    collapsed: bool,
}

impl FolderElement {
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip this folder's collapsed flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Link(LinkElement),
    Folder(FolderElement),
}

/// Counts describing the structure of a rendered tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeShape {
    pub folders: usize,
    pub links: usize,
    pub max_depth: usize,
}

/// Something a rendered tree can be attached to
pub trait MountPoint {
    fn mount(&mut self, tree: &RenderedTree) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTree {
    elements: Vec<Element>,
    folder_count: usize,
}

impl RenderedTree {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn folder_count(&self) -> usize {
        self.folder_count
    }

    pub fn folder(&self, handle: usize) -> Option<&FolderElement> {
        find_folder(&self.elements, &|f: &FolderElement| f.handle == handle)
    }

    /// Handle of the folder rendered from the node with this id
    pub fn handle_of(&self, node_id: &str) -> Option<usize> {
        find_folder(&self.elements, &|f: &FolderElement| f.node_id == node_id).map(|f| f.handle)
    }

    pub fn is_collapsed(&self, handle: usize) -> Option<bool> {
        self.folder(handle).map(FolderElement::is_collapsed)
    }

    /// Flip one folder's collapsed flag; siblings, ancestors and descendants keep theirs
    pub fn toggle(&mut self, handle: usize) -> Result<bool> {
        find_folder_mut(&mut self.elements, handle)
            .map(FolderElement::toggle)
            .ok_or(PocketLinksError::FolderNotFound(handle))
    }

    pub fn expand_all(&mut self) {
        fn expand(elements: &mut [Element]) {
            for element in elements {
                if let Element::Folder(folder) = element {
                    folder.collapsed = false;
                    expand(&mut folder.children);
                }
            }
        }
        expand(&mut self.elements);
    }

    pub fn shape(&self) -> TreeShape {
        fn walk(elements: &[Element], depth: usize, shape: &mut TreeShape) {
            if !elements.is_empty() {
                shape.max_depth = shape.max_depth.max(depth);
            }
            for element in elements {
                match element {
                    Element::Link(_) => shape.links += 1,
                    Element::Folder(folder) => {
                        shape.folders += 1;
                        walk(&folder.children, depth + 1, shape);
                    }
                }
            }
        }
        let mut shape = TreeShape::default();
        walk(&self.elements, 1, &mut shape);
        shape
    }
}

fn find_folder<'a>(
    elements: &'a [Element],
    pred: &dyn Fn(&FolderElement) -> bool,
) -> Option<&'a FolderElement> {
    for element in elements {
        if let Element::Folder(folder) = element {
            if pred(folder) {
                return Some(folder);
            }
            if let Some(found) = find_folder(&folder.children, pred) {
                return Some(found);
            }
        }
    }
    None
}

fn find_folder_mut(elements: &mut [Element], handle: usize) -> Option<&mut FolderElement> {
    for element in elements {
        if let Element::Folder(folder) = element {
            if folder.handle == handle {
                return Some(folder);
            }
            if let Some(found) = find_folder_mut(&mut folder.children, handle) {
                return Some(found);
            }
        }
    }
    None
}

/// Render a forest. Every folder starts expanded.
pub fn render(forest: &Forest, options: &DisplayOptions) -> RenderedTree {
    let mut next_handle = 0;
    let elements = render_nodes(forest.roots(), options, &mut next_handle);
    RenderedTree {
        elements,
        folder_count: next_handle,
    }
}

/// Render a forest and attach the result to `mount`.
/// The returned tree owns the collapse state for later toggling.
pub fn render_into(
    forest: &Forest,
    options: &DisplayOptions,
    mount: &mut dyn MountPoint,
) -> Result<RenderedTree> {
    let tree = render(forest, options);
    mount.mount(&tree)?;
    Ok(tree)
}

fn render_nodes(nodes: &[Node], options: &DisplayOptions, next_handle: &mut usize) -> Vec<Element> {
    nodes
        .iter()
        .map(|node| match node {
            Node::Link(link) => Element::Link(render_link(link, options)),
            Node::Container(container) => {
                Element::Folder(render_container(container, options, next_handle))
            }
        })
        .collect()
}

fn render_container(
    container: &ContainerNode,
    options: &DisplayOptions,
    next_handle: &mut usize,
) -> FolderElement {
    let handle = *next_handle;
    *next_handle += 1;
    FolderElement {
        node_id: container.id.clone(),
        handle,
        header: container.title.clone().unwrap_or_default(),
        added: date_label(container.date_added.as_ref(), options),
        children: render_nodes(&container.children, options, next_handle),
        collapsed: false,
    }
}

fn render_link(link: &LinkNode, options: &DisplayOptions) -> LinkElement {
    let base = match link.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => link.url.as_str(),
    };

    let label = match (options.read_marker, link.read) {
        (ReadMarker::Prefix, Some(true)) => format!("{READ_PREFIX}{base}"),
        _ => base.to_string(),
    };

    let badge = match (options.read_marker, link.read) {
        (ReadMarker::Badge, Some(true)) => Some(ReadBadge::Read),
        (ReadMarker::Badge, Some(false)) => Some(ReadBadge::Unread),
        _ => None,
    };

    LinkElement {
        node_id: link.id.clone(),
        label,
        href: link.url.clone(),
        target: Target::NewContext,
        badge,
        added: date_label(link.date_added.as_ref(), options),
    }
}

fn date_label(
    timestamp: Option<&crate::models::Timestamp>,
    options: &DisplayOptions,
) -> Option<DateLabel> {
    if !options.show_dates {
        return None;
    }
    timestamp.map(DateLabel::from_timestamp)
}
