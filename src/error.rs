use thiserror::Error;

/// Reasons a hand-built node graph can't become a [`Tree`][crate::Tree].
///
/// `depth` counts nodes from the root, so the root itself is at depth 1.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A key sits on the wrong side of one of its ancestors.
    #[error("node at depth {depth} is on the wrong side of an ancestor")]
    OutOfOrder {
        /// Depth of the offending node.
        depth: usize,
    },

    /// A key is equal to one of its ancestors' keys.
    #[error("node at depth {depth} repeats an ancestor's key")]
    DuplicateKey {
        /// Depth of the offending node.
        depth: usize,
    },
}
