use thiserror::Error;

use crate::layout::{AttributeDataType, AttributeKey};

/// Errors that can occur when accessing or mutating a [`PointSet`](crate::containers::PointSet).
///
/// Every operation validates its arguments before touching any stored data, so a returned error
/// never leaves the point set in a partially mutated state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointSetError {
    /// A buffer, dimensionality or permutation does not fit the shape of the point set
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The requested attribute is not stored in the point set
    #[error("Attribute {0} not found")]
    NotFound(AttributeKey),
    /// Typed access with an element type that differs from the stored one
    #[error("Type mismatch: requested {requested} but data is stored as {stored}")]
    TypeMismatch {
        requested: AttributeDataType,
        stored: AttributeDataType,
    },
}

impl PointSetError {
    pub(crate) fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type for all fallible point set operations
pub type Result<T> = std::result::Result<T, PointSetError>;
