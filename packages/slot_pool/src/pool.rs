/// A growable stack of reusable handles with an in-use counter.
///
/// The pool hands out previously constructed handles in LIFO order: the most recently
/// released handle is the next one [`get()`][Self::get] returns. When every handle is
/// checked out, the pool grows by exactly two handles per [`get()`][Self::get] call:
/// one is returned to the caller and one is stored so the next caller does not trigger
/// growth again. This count is a contract, not an implementation detail - callers that
/// meter their constructors can rely on it.
///
/// The pool stores no constructor. Construction is a per-call parameter of
/// [`new()`][Self::new] and [`get()`][Self::get], which keeps this layer free of any
/// dynamic dispatch. If you want the pool to remember how to construct and how to
/// reset its items, use `slot_pool_managed` instead.
///
/// # Handle ownership
///
/// A handle returned by [`get()`][Self::get] is borrowed by the caller in the logical
/// sense: the pool expects it back via [`release()`][Self::release] but has no way to
/// detect a handle that is dropped instead, released twice (possible only for `Copy`
/// or re-constructed handles), or released into a different pool. Releasing a handle
/// the pool never handed out is absorbed rather than rejected; see
/// [`release()`][Self::release].
///
/// # Thread safety
///
/// The pool performs no internal synchronization. All operations take `&mut self`, so
/// within safe Rust an exclusive borrow already serializes access; to share a pool
/// across threads, wrap it in a lock. `SlotPool<H>` is `Send` and `Sync` whenever `H`
/// is, since it owns nothing but the handles themselves.
///
/// # Example
///
/// ```rust
/// use slot_pool::SlotPool;
///
/// let mut pool = SlotPool::new(1, || Box::new(0_u64));
///
/// let first = pool.get(|| Box::new(0_u64));
/// assert_eq!(pool.in_use(), 1);
///
/// // The pool is exhausted, so this get constructs two handles:
/// // one for us and one stored for the next caller.
/// let second = pool.get(|| Box::new(0_u64));
/// assert_eq!(pool.capacity(), 3);
///
/// pool.release(second);
/// pool.release(first);
///
/// // `first` was released last, so it comes back first.
/// let recycled = pool.get(|| Box::new(0_u64));
/// ```
#[derive(Debug)]
pub struct SlotPool<H> {
    /// Handles not currently checked out, in release order. The last element is the
    /// top of the stack: the slot the next `get()` reads and the slot the most recent
    /// `release()` wrote.
    free: Vec<H>,

    /// Number of handles currently checked out.
    in_use: usize,
}

impl<H> SlotPool<H> {
    /// Creates a new [`SlotPool`], eagerly constructing `initial_size` handles.
    ///
    /// `initial_size` may be zero, in which case the first [`get()`][Self::get]
    /// grows the pool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slot_pool::SlotPool;
    ///
    /// let pool = SlotPool::new(4, || Box::new(String::new()));
    ///
    /// assert_eq!(pool.capacity(), 4);
    /// assert_eq!(pool.in_use(), 0);
    /// ```
    #[must_use]
    pub fn new(initial_size: usize, make: impl FnMut() -> H) -> Self {
        Self {
            free: std::iter::repeat_with(make).take(initial_size).collect(),
            in_use: 0,
        }
    }

    /// Checks out a handle, constructing new ones only on exhaustion.
    ///
    /// If a previously released (or pre-built) handle is available, it is returned
    /// without calling `make`. If every handle is checked out, the pool grows by two:
    /// `make` is called once for a handle stored for the next caller and once for the
    /// handle returned from this call. Exactly two constructions per exhaustion event.
    ///
    /// Recycled handles are returned exactly as they were released. This layer never
    /// resets them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cell::Cell;
    ///
    /// use slot_pool::SlotPool;
    ///
    /// let constructed = Cell::new(0);
    /// let make = || {
    ///     constructed.set(constructed.get() + 1);
    ///     Box::new(0_u32)
    /// };
    ///
    /// let mut pool = SlotPool::new(1, make);
    /// assert_eq!(constructed.get(), 1);
    ///
    /// // The pre-built handle is handed out without construction.
    /// let first = pool.get(|| {
    ///     constructed.set(constructed.get() + 1);
    ///     Box::new(0_u32)
    /// });
    /// assert_eq!(constructed.get(), 1);
    ///
    /// // Exhaustion: two constructions, capacity grows from 1 to 3.
    /// let second = pool.get(|| {
    ///     constructed.set(constructed.get() + 1);
    ///     Box::new(0_u32)
    /// });
    /// assert_eq!(constructed.get(), 3);
    /// assert_eq!(pool.capacity(), 3);
    /// # pool.release(second);
    /// # pool.release(first);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the number of checked-out handles would exceed `usize::MAX`.
    pub fn get(&mut self, mut make: impl FnMut() -> H) -> H {
        self.in_use = self
            .in_use
            .checked_add(1)
            .expect("checked out more handles than a usize can count, which cannot happen before memory is exhausted");

        if let Some(handle) = self.free.pop() {
            return handle;
        }

        // Exhausted. Grow by two handles at once: one stored so the next get() does
        // not grow again, one returned directly to the caller.
        self.free.reserve(2);
        self.free.push(make());
        make()
    }

    /// Returns a handle to the pool, making it the next one [`get()`][Self::get]
    /// hands out.
    ///
    /// # Orphan handles
    ///
    /// Releasing a handle this pool never handed out (an orphan) is absorbed: the
    /// in-use counter never goes below zero and the pool's capacity simply grows by
    /// one per orphan. The pool does not track handle identity, so it cannot tell an
    /// orphan from a legitimate return; callers that mix pools get a bigger pool, not
    /// an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slot_pool::SlotPool;
    ///
    /// let mut pool = SlotPool::new(1, || Box::new(0_u16));
    ///
    /// let handle = pool.get(|| Box::new(0_u16));
    /// pool.release(handle);
    ///
    /// assert_eq!(pool.in_use(), 0);
    /// assert_eq!(pool.capacity(), 1);
    /// ```
    pub fn release(&mut self, handle: H) {
        self.in_use = self.in_use.saturating_sub(1);
        self.free.push(handle);
    }

    /// The number of handles currently checked out.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slot_pool::SlotPool;
    ///
    /// let mut pool = SlotPool::new(2, || Box::new(0_u8));
    /// assert_eq!(pool.in_use(), 0);
    ///
    /// let handle = pool.get(|| Box::new(0_u8));
    /// assert_eq!(pool.in_use(), 1);
    ///
    /// pool.release(handle);
    /// assert_eq!(pool.in_use(), 0);
    /// ```
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// The total number of handles the pool manages, checked out or not.
    ///
    /// Grows by two per exhaustion event and by one per orphan release; never shrinks.
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Trivial accessor arithmetic, mutations are equivalent.
    pub fn capacity(&self) -> usize {
        self.in_use
            .checked_add(self.free.len())
            .expect("pool capacity exceeds usize, which cannot happen with real memory")
    }

    /// The number of handles available for checkout without construction.
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.len()
    }
}
