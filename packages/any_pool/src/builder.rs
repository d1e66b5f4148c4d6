use std::any::Any;

use crate::{AnyPool, CreatePoolError};

/// Builder for creating an instance of [`AnyPool`].
///
/// The constructor is mandatory; [`build()`][Self::build] fails with
/// [`CreatePoolError::MissingConstructor`] if none was supplied. `initial_size`
/// defaults to zero and `cleanup` defaults to a no-op.
///
/// # Example
///
/// ```rust
/// use std::any::Any;
///
/// use any_pool::AnyPool;
///
/// let pool = AnyPool::builder()
///     .initial_size(8)
///     .constructor(|| Box::new(String::new()))
///     .cleanup(|item: &mut dyn Any| {
///         if let Some(text) = item.downcast_mut::<String>() {
///             text.clear();
///         }
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(pool.capacity(), 8);
/// ```
#[must_use]
pub struct AnyPoolBuilder {
    initial_size: usize,
    make: Option<Box<dyn FnMut() -> Box<dyn Any>>>,
    cleanup: Option<Box<dyn FnMut(&mut dyn Any)>>,
}

impl std::fmt::Debug for AnyPoolBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyPoolBuilder")
            .field("initial_size", &self.initial_size)
            .field("has_constructor", &self.make.is_some())
            .field("has_cleanup", &self.cleanup.is_some())
            .finish()
    }
}

impl AnyPoolBuilder {
    pub(crate) fn new() -> Self {
        Self {
            initial_size: 0,
            make: None,
            cleanup: None,
        }
    }

    /// Sets the number of items the pool eagerly constructs at creation time.
    ///
    /// Defaults to zero, in which case the first `get()` grows the pool.
    pub fn initial_size(mut self, initial_size: usize) -> Self {
        self.initial_size = initial_size;
        self
    }

    /// Sets the constructor the pool uses to manufacture items.
    ///
    /// Mandatory. Every invocation must produce an item of the pool's one logical
    /// shape - the pool cannot verify this, but consumers using
    /// [`AnyPool::get_as()`][crate::AnyPool::get_as] will observe a
    /// [`TypeMismatchError`][crate::TypeMismatchError] if it is violated.
    pub fn constructor(mut self, make: impl FnMut() -> Box<dyn Any> + 'static) -> Self {
        self.make = Some(Box::new(make));
        self
    }

    /// Sets the cleanup routine run on every item passed to `release()`.
    ///
    /// The routine receives the erased item and typically downcasts it to reset its
    /// fields. Optional; when absent, released items keep whatever state the caller
    /// left them in.
    pub fn cleanup(mut self, cleanup: impl FnMut(&mut dyn Any) + 'static) -> Self {
        self.cleanup = Some(Box::new(cleanup));
        self
    }

    /// Builds the pool with the specified configuration, eagerly constructing the
    /// initial items.
    ///
    /// # Errors
    ///
    /// Returns [`CreatePoolError::MissingConstructor`] if no constructor was supplied.
    pub fn build(self) -> Result<AnyPool, CreatePoolError> {
        let Some(make) = self.make else {
            return Err(CreatePoolError::MissingConstructor);
        };

        let cleanup = self.cleanup.unwrap_or_else(|| Box::new(|_| {}));

        Ok(AnyPool::new_inner(self.initial_size, make, cleanup))
    }
}
