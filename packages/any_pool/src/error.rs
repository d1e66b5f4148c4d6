use thiserror::Error;

/// Errors that can occur when creating an [`AnyPool`][crate::AnyPool].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CreatePoolError {
    /// No constructor was supplied to the builder. A pool with no way to manufacture
    /// items cannot satisfy `get()`, so it refuses to be created.
    #[error("a pool cannot be created without a constructor")]
    MissingConstructor,
}

/// A pooled item retrieved via [`AnyPool::get_as()`][crate::AnyPool::get_as] was not
/// of the expected type.
///
/// The failed retrieval is rolled back: the item stays in the pool, no cleanup runs
/// and the in-use count is unchanged, so the caller may retry with the right type.
#[derive(Debug, Error)]
#[error("pooled item is not of the expected type `{expected}`")]
pub struct TypeMismatchError {
    pub(crate) expected: &'static str,
}

impl TypeMismatchError {
    /// The name of the type the caller expected the item to be.
    #[must_use]
    pub fn expected(&self) -> &'static str {
        self.expected
    }
}
