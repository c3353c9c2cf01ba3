pub mod entry;
pub mod forest;
pub mod node;
pub mod timestamp;

pub use entry::ReadingListEntry;
pub use forest::Forest;
pub use node::{ContainerNode, LinkNode, Node};
pub use timestamp::Timestamp;

/// Fields carried through verbatim that the model does not name explicitly
pub type Passthrough = serde_json::Map<String, serde_json::Value>;
