use crate::error::Result;
use crate::models::{Forest, Node, Timestamp};
use crate::normalize::normalize;
use crate::sources::{BookmarkTreeSource, ReadingListQuery, ReadingListSource};

/// Fetch both sources concurrently and build the forest once both have answered.
///
/// Either fetch failing fails the whole load; a partial forest is never produced.
pub fn load_forest<R, B>(reading_list: &R, bookmarks: &B) -> Result<Forest>
where
    R: ReadingListSource + ?Sized,
    B: BookmarkTreeSource + ?Sized,
{
    let (entries, tree) = rayon::join(
        || reading_list.query(&ReadingListQuery::all()),
        || bookmarks.get_tree(),
    );
    let entries = entries?;
    let roots = match tree? {
        Node::Container(root) => root.children,
        Node::Link(link) => {
            log::warn!("bookmark root {} is a link; treating it as empty", link.id);
            Vec::new()
        }
    };

    log::info!(
        "loaded {} reading-list entries and {} bookmark roots",
        entries.len(),
        roots.len()
    );
    Ok(normalize(entries, roots, Timestamp::now()))
}
