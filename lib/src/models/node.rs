use super::{Passthrough, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the forest: either a link or a container of further nodes.
///
/// The variant is decided by the presence of `url`. A node with neither `url`
/// nor `children` is read as an empty container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Link(LinkNode),
    Container(ContainerNode),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<Timestamp>,
    /// Only present on links that came from the reading list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syncing: Option<bool>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_group_modified: Option<Timestamp>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

impl LinkNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            url: url.into(),
            ..Default::default()
        }
    }
}

impl ContainerNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            children,
            ..Default::default()
        }
    }
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Link(link) => &link.id,
            Node::Container(container) => &container.id,
        }
    }

    /// Title as stored, empty when the source gave none
    pub fn title(&self) -> &str {
        let title = match self {
            Node::Link(link) => link.title.as_deref(),
            Node::Container(container) => container.title.as_deref(),
        };
        title.unwrap_or_default()
    }

    pub fn parent_id(&self) -> Option<&str> {
        match self {
            Node::Link(link) => link.parent_id.as_deref(),
            Node::Container(container) => container.parent_id.as_deref(),
        }
    }

    pub fn date_added(&self) -> Option<&Timestamp> {
        match self {
            Node::Link(link) => link.date_added.as_ref(),
            Node::Container(container) => container.date_added.as_ref(),
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Node::Link(_))
    }

    pub fn as_link(&self) -> Option<&LinkNode> {
        match self {
            Node::Link(link) => Some(link),
            Node::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerNode> {
        match self {
            Node::Link(_) => None,
            Node::Container(container) => Some(container),
        }
    }

    /// Child nodes; always empty for links
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Link(_) => &[],
            Node::Container(container) => &container.children,
        }
    }
}

impl From<LinkNode> for Node {
    fn from(link: LinkNode) -> Self {
        Node::Link(link)
    }
}

impl From<ContainerNode> for Node {
    fn from(container: ContainerNode) -> Self {
        Node::Container(container)
    }
}

/// Superset of both variants, used to pick one while reading
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    id: String,
    title: Option<String>,
    url: Option<String>,
    parent_id: Option<String>,
    date_added: Option<Timestamp>,
    date_group_modified: Option<Timestamp>,
    read: Option<bool>,
    index: Option<i64>,
    syncing: Option<bool>,
    children: Option<Vec<Node>>,
    #[serde(flatten)]
    extra: Passthrough,
}

/// Keep a field the chosen variant has no slot for
fn stash<T: Serialize>(extra: &mut Passthrough, key: &str, value: Option<T>) {
    if let Some(value) = value {
        if let Ok(value) = serde_json::to_value(value) {
            extra.insert(key.to_string(), value);
        }
    }
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let mut extra = raw.extra;
        match raw.url {
            Some(url) => {
                if let Some(children) = raw.children {
                    log::warn!(
                        "link {} carries {} children; dropping them",
                        raw.id,
                        children.len()
                    );
                }
                stash(&mut extra, "dateGroupModified", raw.date_group_modified);
                Node::Link(LinkNode {
                    id: raw.id,
                    title: raw.title,
                    url,
                    parent_id: raw.parent_id,
                    date_added: raw.date_added,
                    read: raw.read,
                    index: raw.index,
                    syncing: raw.syncing,
                    extra,
                })
            }
            None => {
                stash(&mut extra, "index", raw.index);
                stash(&mut extra, "read", raw.read);
                stash(&mut extra, "syncing", raw.syncing);
                Node::Container(ContainerNode {
                    id: raw.id,
                    title: raw.title,
                    parent_id: raw.parent_id,
                    date_added: raw.date_added,
                    date_group_modified: raw.date_group_modified,
                    children: raw.children.unwrap_or_default(),
                    extra,
                })
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawNode::deserialize(deserializer).map(Node::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_selects_link_variant() {
        let node: Node =
            serde_json::from_value(json!({"id": "b2", "title": "Bar", "url": "http://bar"}))
                .unwrap();
        let link = node.as_link().expect("link variant");
        assert_eq!(link.url, "http://bar");
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_missing_url_and_children_is_empty_container() {
        let node: Node = serde_json::from_value(json!({"id": "7", "title": "Odd"})).unwrap();
        let container = node.as_container().expect("container variant");
        assert!(container.children.is_empty());
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"id": "7", "title": "Odd", "children": []})
        );
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let input = json!({
            "id": "5",
            "title": "Docs",
            "url": "https://docs.rs",
            "dateLastUsed": 1700000000123u64,
            "meta": {"pinned": true}
        });
        let node: Node = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&node).unwrap(), input);
    }

    #[test]
    fn test_folder_index_survives_as_passthrough() {
        let input = json!({"id": "1", "title": "Bar", "index": 0, "parentId": "0", "children": []});
        let node: Node = serde_json::from_value(input.clone()).unwrap();
        assert!(!node.is_link());
        assert_eq!(serde_json::to_value(&node).unwrap(), input);
    }

    #[test]
    fn test_null_optional_is_absent() {
        let node: Node =
            serde_json::from_value(json!({"id": "9", "title": "t", "url": "u", "read": null}))
                .unwrap();
        assert_eq!(node.as_link().unwrap().read, None);
        let out = serde_json::to_value(&node).unwrap();
        assert!(out.get("read").is_none());
    }

    #[test]
    fn test_link_never_keeps_children() {
        let node: Node = serde_json::from_value(json!({
            "id": "3",
            "title": "Both",
            "url": "http://x",
            "children": [{"id": "4", "title": "y", "url": "http://y"}]
        }))
        .unwrap();
        assert!(node.is_link());
        assert!(serde_json::to_value(&node).unwrap().get("children").is_none());
    }

    #[test]
    fn test_missing_title_is_not_added() {
        let input = json!([
            {"id": "1", "url": "http://x"},
            {"id": "2", "children": []}
        ]);
        let nodes: Vec<Node> = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(nodes[0].title(), "");
        assert_eq!(nodes[1].as_container().unwrap().title, None);
        assert_eq!(serde_json::to_value(&nodes).unwrap(), input);
    }

    #[test]
    fn test_accessors() {
        let node: Node = ContainerNode::new(
            "b1",
            "Folder",
            vec![LinkNode::new("b2", "Bar", "http://bar").into()],
        )
        .into();
        assert_eq!(node.id(), "b1");
        assert_eq!(node.title(), "Folder");
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].parent_id(), None);
        assert!(node.date_added().is_none());
    }
}
