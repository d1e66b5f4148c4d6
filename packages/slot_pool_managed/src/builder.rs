use crate::{CreatePoolError, ManagedSlotPool};

/// Builder for creating an instance of [`ManagedSlotPool`].
///
/// The constructor is mandatory; [`build()`][Self::build] fails with
/// [`CreatePoolError::MissingConstructor`] if none was supplied. Everything else is
/// optional: `initial_size` defaults to zero and `cleanup` defaults to a no-op.
///
/// # Example
///
/// ```rust
/// use slot_pool_managed::ManagedSlotPool;
///
/// let pool = ManagedSlotPool::builder()
///     .initial_size(8)
///     .constructor(String::new)
///     .cleanup(|item: &mut String| item.clear())
///     .build()
///     .unwrap();
///
/// assert_eq!(pool.capacity(), 8);
/// ```
#[must_use]
pub struct ManagedSlotPoolBuilder<H> {
    initial_size: usize,
    make: Option<Box<dyn FnMut() -> H>>,
    cleanup: Option<Box<dyn FnMut(&mut H)>>,
}

impl<H> std::fmt::Debug for ManagedSlotPoolBuilder<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedSlotPoolBuilder")
            .field(
                "handle_type",
                &std::format_args!("{}", std::any::type_name::<H>()),
            )
            .field("initial_size", &self.initial_size)
            .field("has_constructor", &self.make.is_some())
            .field("has_cleanup", &self.cleanup.is_some())
            .finish()
    }
}

impl<H> ManagedSlotPoolBuilder<H> {
    pub(crate) fn new() -> Self {
        Self {
            initial_size: 0,
            make: None,
            cleanup: None,
        }
    }

    /// Sets the number of handles the pool eagerly constructs at creation time.
    ///
    /// Defaults to zero, in which case the first `get()` grows the pool.
    pub fn initial_size(mut self, initial_size: usize) -> Self {
        self.initial_size = initial_size;
        self
    }

    /// Sets the constructor the pool uses to manufacture handles.
    ///
    /// Mandatory. It runs `initial_size` times at creation and twice per
    /// exhaustion event thereafter.
    pub fn constructor(mut self, make: impl FnMut() -> H + 'static) -> Self {
        self.make = Some(Box::new(make));
        self
    }

    /// Sets the cleanup routine run on every handle passed to `release()`.
    ///
    /// Optional; when absent, released handles keep whatever state the caller
    /// left them in.
    pub fn cleanup(mut self, cleanup: impl FnMut(&mut H) + 'static) -> Self {
        self.cleanup = Some(Box::new(cleanup));
        self
    }

    /// Builds the pool with the specified configuration, eagerly constructing the
    /// initial handles.
    ///
    /// # Errors
    ///
    /// Returns [`CreatePoolError::MissingConstructor`] if no constructor was supplied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slot_pool_managed::{CreatePoolError, ManagedSlotPool};
    ///
    /// let result = ManagedSlotPool::<String>::builder().initial_size(4).build();
    ///
    /// assert!(matches!(result, Err(CreatePoolError::MissingConstructor)));
    /// ```
    pub fn build(self) -> Result<ManagedSlotPool<H>, CreatePoolError> {
        let Some(make) = self.make else {
            return Err(CreatePoolError::MissingConstructor);
        };

        let cleanup = self.cleanup.unwrap_or_else(|| Box::new(|_| {}));

        Ok(ManagedSlotPool::new_inner(self.initial_size, make, cleanup))
    }
}
