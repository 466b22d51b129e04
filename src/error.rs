/// Errors returned by [`Tree`][crate::Tree] operations.
///
/// Most "failures" on a tree are not errors at all: inserting a duplicate,
/// deleting a missing value or asking for the depth of a missing value are
/// no-ops or return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A traversal that requires a visitor was called without one.
    #[error("a visitor is required to traverse the tree")]
    MissingVisitor,
}
