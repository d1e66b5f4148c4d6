use thiserror::Error;

/// Errors that can occur when creating a [`ManagedSlotPool`][crate::ManagedSlotPool].
///
/// Creation is the only fallible moment in a pool's life; `get()` and `release()`
/// cannot fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CreatePoolError {
    /// No constructor was supplied to the builder. A pool with no way to manufacture
    /// items cannot satisfy `get()`, so it refuses to be created.
    #[error("a pool cannot be created without a constructor")]
    MissingConstructor,
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(CreatePoolError: Send, Sync, Debug);

    #[test]
    fn missing_constructor_is_error() {
        let error = CreatePoolError::MissingConstructor;

        // Verify it is a valid error that can be used in Result context.
        let result: Result<(), CreatePoolError> = Err(error);
        assert!(result.is_err());
    }
}
