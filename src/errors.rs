#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    /// A node was looked up as a key but the graph has no entry for it
    #[error("node {node} is not a key of the graph")]
    NodeNotFound { node: String },
}

impl GraphError {
    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::NodeNotFound { node: format!("{node:?}") }
    }
}


#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize }, // Rows must all be the same length
    #[error("unknown cell label {label:?} at ({row}, {col})")]
    UnknownLabel { label: char, row: usize, col: usize },
}
