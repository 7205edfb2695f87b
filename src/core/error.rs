use thiserror::Error;

/// Reasons a board lookup or mutation could not be applied.
///
/// None of these reach the user: the drag handlers log them and leave the
/// board as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no container at index {index} (board has {len})")]
    ContainerIndexOutOfRange { index: usize, len: usize },

    #[error("no item at index {index} in container {container} (container has {len})")]
    ItemIndexOutOfRange {
        container: usize,
        index: usize,
        len: usize,
    },

    #[error("unknown item id: {0}")]
    UnknownItem(String),

    #[error("unknown container id: {0}")]
    UnknownContainer(String),
}
