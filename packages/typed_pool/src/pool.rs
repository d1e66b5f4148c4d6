use slot_pool_managed::ManagedSlotPool;

/// A statically typed object pool.
///
/// Thin wrapper over [`ManagedSlotPool<T>`]: same LIFO reuse, same eager pre-build,
/// same growth by exactly two items per exhaustion event, same cleanup-on-release
/// contract. The only difference is ergonomic - items go in and out as plain `T`
/// values and the constructor/cleanup pair is supplied as ordinary typed closures.
///
/// # Thread safety
///
/// No internal synchronization; the stored closures make the pool neither `Send` nor
/// `Sync`, and all operations take `&mut self`.
///
/// # Example
///
/// ```rust
/// use typed_pool::TypedPool;
///
/// let mut pool = TypedPool::new(2, || vec![0_u8; 256]);
///
/// let buffer = pool.get();
/// assert_eq!(buffer.len(), 256);
/// assert_eq!(pool.in_use(), 1);
///
/// pool.release(buffer);
/// assert_eq!(pool.in_use(), 0);
/// ```
#[derive(Debug)]
pub struct TypedPool<T> {
    inner: ManagedSlotPool<T>,
}

impl<T> TypedPool<T> {
    /// Creates a new [`TypedPool`] with no cleanup routine, eagerly constructing
    /// `initial_size` items.
    ///
    /// Released items are recycled exactly as the caller left them. Use
    /// [`with_cleanup()`][Self::with_cleanup] when items must be reset between uses.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typed_pool::TypedPool;
    ///
    /// let pool = TypedPool::new(8, String::new);
    ///
    /// assert_eq!(pool.capacity(), 8);
    /// assert_eq!(pool.in_use(), 0);
    /// ```
    #[must_use]
    pub fn new(initial_size: usize, make: impl FnMut() -> T + 'static) -> Self {
        Self {
            inner: ManagedSlotPool::builder()
                .initial_size(initial_size)
                .constructor(make)
                .build()
                .expect("the constructor is statically present, so building cannot fail"),
        }
    }

    /// Creates a new [`TypedPool`] whose items are reset by `cleanup` on every
    /// release.
    ///
    /// Cleanup runs exactly once per [`release()`][Self::release] call and never on
    /// the [`get()`][Self::get] path, so items that came straight from the
    /// constructor are handed out untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typed_pool::TypedPool;
    ///
    /// let mut pool = TypedPool::with_cleanup(
    ///     1,
    ///     || String::from("fresh"),
    ///     |item| item.clear(),
    /// );
    ///
    /// let mut item = pool.get();
    /// item.push_str(" and dirty");
    /// pool.release(item);
    ///
    /// let item = pool.get();
    /// assert!(item.is_empty());
    /// # pool.release(item);
    /// ```
    #[must_use]
    pub fn with_cleanup(
        initial_size: usize,
        make: impl FnMut() -> T + 'static,
        cleanup: impl FnMut(&mut T) + 'static,
    ) -> Self {
        Self {
            inner: ManagedSlotPool::builder()
                .initial_size(initial_size)
                .constructor(make)
                .cleanup(cleanup)
                .build()
                .expect("the constructor is statically present, so building cannot fail"),
        }
    }

    /// Checks out an item, constructing new ones only on exhaustion.
    ///
    /// The item is either fresh from the constructor or exactly as the cleanup
    /// routine left it at its last release.
    pub fn get(&mut self) -> T {
        self.inner.get()
    }

    /// Runs cleanup on the item, then returns it to the pool.
    ///
    /// The item becomes the next one [`get()`][Self::get] hands out.
    ///
    /// # Orphan items
    ///
    /// Releasing an item this pool never handed out is absorbed: cleanup still runs
    /// once, the in-use counter never goes below zero, and capacity grows by one per
    /// orphan.
    pub fn release(&mut self, item: T) {
        self.inner.release(item);
    }

    /// The number of items currently checked out.
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.inner.in_use()
    }

    /// The total number of items the pool manages, checked out or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// The number of items available for checkout without construction.
    #[must_use]
    pub fn available(&self) -> usize {
        self.inner.available()
    }
}
