use crate::models::{ContainerNode, Forest, LinkNode, Node, ReadingListEntry, Timestamp};

/// Reserved id of the synthetic reading-list container
pub const READING_LIST_ID: &str = "-1";
pub const READING_LIST_TITLE: &str = "Reading List";

/// Merge reading-list entries and the platform bookmark forest into one forest.
///
/// The reading list becomes a synthetic container at index 0 (present even when
/// empty), followed by the bookmark roots exactly as received.
pub fn normalize(
    reading_list: Vec<ReadingListEntry>,
    bookmarks: Vec<Node>,
    loaded_at: Timestamp,
) -> Forest {
    let children: Vec<Node> = reading_list
        .into_iter()
        .map(|entry| Node::Link(LinkNode::from(entry)))
        .collect();

    let reading_list_node = ContainerNode {
        id: READING_LIST_ID.to_string(),
        title: Some(READING_LIST_TITLE.to_string()),
        date_added: Some(loaded_at.clone()),
        date_group_modified: Some(loaded_at),
        children,
        ..Default::default()
    };

    let mut roots = Vec::with_capacity(bookmarks.len() + 1);
    roots.push(Node::Container(reading_list_node));
    roots.extend(bookmarks);
    Forest::new(roots)
}
