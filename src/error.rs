//! Error type shared by every container in the crate.

/// Failure of a container operation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A removal or value read was attempted on a container with no elements.
    #[error("operation on an empty container")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CollectionError>;
