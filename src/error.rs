use std::fmt::Debug;

/// Errors reported while building an [`OwnedGraph`](crate::graph::OwnedGraph).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} was added twice")]
    DuplicateNode(String),
    #[error("edge references unknown node {0}")]
    UnknownNode(String),
}

impl GraphError {
    pub(crate) fn duplicate_node<K: Debug>(node_id: &K) -> Self {
        GraphError::DuplicateNode(format!("{:?}", node_id))
    }

    pub(crate) fn unknown_node<K: Debug>(node_id: &K) -> Self {
        GraphError::UnknownNode(format!("{:?}", node_id))
    }
}
