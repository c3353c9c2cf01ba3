use super::Node;
use crate::normalize::READING_LIST_ID;
use serde::{Deserialize, Serialize};

/// Ordered top-level nodes plus all their descendants.
///
/// Built once per session and read-only afterwards; there is no way to get a
/// mutable reference to a node through this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    roots: Vec<Node>,
}

impl Forest {
    pub fn new(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// The synthetic reading-list container, if this forest has one at the front
    pub fn reading_list(&self) -> Option<&Node> {
        self.roots.first().filter(|n| n.id() == READING_LIST_ID)
    }

    /// Depth-first, pre-order walk over every node
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.roots.iter().rev().collect(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        self.iter().find(|node| node.id() == id)
    }

    /// Number of nodes at every depth
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
