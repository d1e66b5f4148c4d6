use slot_pool::SlotPool;

use crate::ManagedSlotPoolBuilder;

/// A slot store bundled with a stored constructor and a cleanup routine.
///
/// [`get()`][Self::get] delegates to the underlying [`SlotPool`] using the stored
/// constructor, so the reuse discipline is unchanged: LIFO recycling, eager pre-build,
/// growth by exactly two handles per exhaustion event.
///
/// [`release()`][Self::release] runs the cleanup routine on the handle first and then
/// returns it to its slot, so every handle sitting in the pool is in canonical "ready"
/// state. Cleanup never runs on the `get()` path: a recycled handle was already
/// cleaned when it was released, and a newly constructed handle is fresh and needs no
/// reset. A caller can therefore rely on `get()` returning either a fresh or a cleaned
/// handle, never a dirty one.
///
/// Cleanup runs exactly once per `release()` call, synchronously. The pool does not
/// guard against cleanup side effects; if a reset can fail, the caller must deal with
/// that before releasing.
///
/// # Thread safety
///
/// The pool performs no internal synchronization, and the stored closures make it
/// neither `Send` nor `Sync`. All operations take `&mut self`. Use
/// [`slot_pool::SlotPool`] with external locking if you need to pool across threads.
///
/// # Example
///
/// ```rust
/// use slot_pool_managed::ManagedSlotPool;
///
/// let mut pool = ManagedSlotPool::builder()
///     .initial_size(1)
///     .constructor(|| vec![0_u8; 16])
///     .cleanup(|buffer: &mut Vec<u8>| buffer.fill(0))
///     .build()
///     .unwrap();
///
/// let mut buffer = pool.get();
/// buffer[0] = 0xFF;
/// pool.release(buffer);
///
/// // The recycled buffer was zeroed on release.
/// let buffer = pool.get();
/// assert_eq!(buffer[0], 0);
/// # pool.release(buffer);
/// ```
pub struct ManagedSlotPool<H> {
    slots: SlotPool<H>,

    /// Manufactures one new handle. Runs only at creation and on exhaustion.
    make: Box<dyn FnMut() -> H>,

    /// Resets a handle to its canonical reusable state. Runs once per release.
    cleanup: Box<dyn FnMut(&mut H)>,
}

impl<H: std::fmt::Debug> std::fmt::Debug for ManagedSlotPool<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedSlotPool")
            .field(
                "handle_type",
                &std::format_args!("{}", std::any::type_name::<H>()),
            )
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

impl<H> ManagedSlotPool<H> {
    pub(crate) fn new_inner(
        initial_size: usize,
        mut make: Box<dyn FnMut() -> H>,
        cleanup: Box<dyn FnMut(&mut H)>,
    ) -> Self {
        Self {
            slots: SlotPool::new(initial_size, &mut make),
            make,
            cleanup,
        }
    }

    /// Starts building a new [`ManagedSlotPool`].
    ///
    /// The builder is the only way to create one; see
    /// [`ManagedSlotPoolBuilder`] for the recognized options.
    pub fn builder() -> ManagedSlotPoolBuilder<H> {
        ManagedSlotPoolBuilder::new()
    }

    /// Checks out a handle, constructing new ones only on exhaustion.
    ///
    /// The returned handle is either fresh from the constructor or exactly as the
    /// cleanup routine left it at its last release. No cleanup runs on this path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slot_pool_managed::ManagedSlotPool;
    ///
    /// let mut pool = ManagedSlotPool::builder()
    ///     .initial_size(1)
    ///     .constructor(|| String::from("fresh"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let item = pool.get();
    /// assert_eq!(item, "fresh");
    /// # pool.release(item);
    /// ```
    pub fn get(&mut self) -> H {
        self.slots.get(&mut self.make)
    }

    /// Runs cleanup on the handle, then returns it to the pool.
    ///
    /// The handle becomes the next one [`get()`][Self::get] hands out.
    ///
    /// # Orphan handles
    ///
    /// Releasing a handle this pool never handed out is absorbed: cleanup still runs
    /// once, the in-use counter never goes below zero, and capacity grows by one per
    /// orphan. See [`SlotPool::release()`].
    pub fn release(&mut self, mut handle: H) {
        (self.cleanup)(&mut handle);
        self.slots.release(handle);
    }

    /// The number of handles currently checked out.
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.slots.in_use()
    }

    /// The total number of handles the pool manages, checked out or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The number of handles available for checkout without construction.
    #[must_use]
    pub fn available(&self) -> usize {
        self.slots.available()
    }
}
