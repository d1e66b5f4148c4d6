use std::any::Any;

use crate::{AnyPoolBuilder, TypeMismatchError};

/// An object pool over dynamically typed containers.
///
/// Same discipline as the typed layers: the most recently released item is the next
/// one returned, the initial items are constructed eagerly, and exhaustion grows the
/// pool by exactly two items - one returned to the caller, one stored for the next
/// caller. That construction count is a contract callers may meter.
///
/// Items are [`Box<dyn Any>`]. The pool holds one logical item shape for its lifetime,
/// but nothing in the type system enforces that; [`get_as()`][Self::get_as] is the
/// checked retrieval path and reports a wrong expectation as a recoverable
/// [`TypeMismatchError`].
///
/// Release runs the stored cleanup routine exactly once before the item re-enters its
/// slot, so recycled items are always in canonical "ready" state. Fresh items -
/// pre-built or constructed on exhaustion - never pass through cleanup.
///
/// # Thread safety
///
/// No internal synchronization; the stored closures make the pool neither `Send` nor
/// `Sync`, and all operations take `&mut self`.
///
/// # Example
///
/// ```rust
/// use any_pool::AnyPool;
///
/// let mut pool = AnyPool::builder()
///     .initial_size(1)
///     .constructor(|| Box::new(vec![0_u8; 512]))
///     .build()
///     .unwrap();
///
/// let buffer = pool.get_as::<Vec<u8>>().unwrap();
/// assert_eq!(buffer.len(), 512);
///
/// // Asking for the wrong type is an error, not an abort; the item went back.
/// assert!(pool.get_as::<String>().is_err());
/// assert_eq!(pool.in_use(), 1);
/// # pool.release(buffer);
/// ```
pub struct AnyPool {
    /// Items not currently checked out, in release order. The last element is the top
    /// of the stack: the slot the next `get()` reads.
    free: Vec<Box<dyn Any>>,

    /// Number of items currently checked out.
    in_use: usize,

    /// Manufactures one new item. Runs only at creation and on exhaustion.
    make: Box<dyn FnMut() -> Box<dyn Any>>,

    /// Resets an item to its canonical reusable state. Runs once per release.
    cleanup: Box<dyn FnMut(&mut dyn Any)>,
}

impl std::fmt::Debug for AnyPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyPool")
            .field("capacity", &self.capacity())
            .field("in_use", &self.in_use)
            .finish_non_exhaustive()
    }
}

impl AnyPool {
    pub(crate) fn new_inner(
        initial_size: usize,
        mut make: Box<dyn FnMut() -> Box<dyn Any>>,
        cleanup: Box<dyn FnMut(&mut dyn Any)>,
    ) -> Self {
        Self {
            free: std::iter::repeat_with(&mut make).take(initial_size).collect(),
            in_use: 0,
            make,
            cleanup,
        }
    }

    /// Starts building a new [`AnyPool`].
    ///
    /// See [`AnyPoolBuilder`] for the recognized options.
    pub fn builder() -> AnyPoolBuilder {
        AnyPoolBuilder::new()
    }

    /// Checks out an erased item, constructing new ones only on exhaustion.
    ///
    /// The item is either fresh from the constructor or exactly as the cleanup routine
    /// left it at its last release. Prefer [`get_as()`][Self::get_as] when you intend
    /// to downcast immediately.
    ///
    /// # Panics
    ///
    /// Panics if the number of checked-out items would exceed `usize::MAX`.
    pub fn get(&mut self) -> Box<dyn Any> {
        self.in_use = self
            .in_use
            .checked_add(1)
            .expect("checked out more items than a usize can count, which cannot happen before memory is exhausted");

        if let Some(item) = self.free.pop() {
            return item;
        }

        // Exhausted. Grow by two items at once: one stored so the next get() does not
        // grow again, one returned directly to the caller.
        self.free.reserve(2);
        self.free.push((self.make)());
        (self.make)()
    }

    /// Checks out an item and downcasts it to the expected type.
    ///
    /// On mismatch the checkout is rolled back - the item returns to its slot without
    /// cleanup and the in-use count is unchanged - and the call reports which type was
    /// expected. The pool remains fully usable afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the item is not a `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use any_pool::AnyPool;
    ///
    /// let mut pool = AnyPool::builder()
    ///     .initial_size(1)
    ///     .constructor(|| Box::new(42_u64))
    ///     .build()
    ///     .unwrap();
    ///
    /// let number = pool.get_as::<u64>().unwrap();
    /// assert_eq!(*number, 42);
    /// # pool.release(number);
    /// ```
    pub fn get_as<T: Any>(&mut self) -> Result<Box<T>, TypeMismatchError> {
        match self.get().downcast::<T>() {
            Ok(item) => Ok(item),
            Err(item) => {
                // Undo the checkout exactly: same slot, no cleanup, counter restored.
                self.in_use -= 1;
                self.free.push(item);

                Err(TypeMismatchError {
                    expected: std::any::type_name::<T>(),
                })
            }
        }
    }

    /// Runs cleanup on the item, then returns it to the pool.
    ///
    /// The item becomes the next one [`get()`][Self::get] hands out. Accepts anything
    /// that erases to `Box<dyn Any>`, so a `Box<T>` obtained from
    /// [`get_as()`][Self::get_as] can be passed back directly.
    ///
    /// # Orphan items
    ///
    /// Releasing an item this pool never handed out is absorbed: cleanup still runs
    /// once, the in-use counter never goes below zero, and capacity grows by one per
    /// orphan.
    pub fn release(&mut self, mut item: Box<dyn Any>) {
        (self.cleanup)(item.as_mut());
        self.in_use = self.in_use.saturating_sub(1);
        self.free.push(item);
    }

    /// The number of items currently checked out.
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// The total number of items the pool manages, checked out or not.
    ///
    /// Grows by two per exhaustion event and by one per orphan release; never shrinks.
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Trivial accessor arithmetic, mutations are equivalent.
    pub fn capacity(&self) -> usize {
        self.in_use
            .checked_add(self.free.len())
            .expect("pool capacity exceeds usize, which cannot happen with real memory")
    }

    /// The number of items available for checkout without construction.
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use static_assertions::assert_not_impl_any;

    use super::*;

    // The stored closures pin the pool to the thread that created it.
    assert_not_impl_any!(AnyPool: Send, Sync);

    fn counting_pool(initial_size: usize) -> (AnyPool, Rc<Cell<usize>>) {
        let constructed = Rc::new(Cell::new(0));
        let constructed_in_make = Rc::clone(&constructed);

        let pool = AnyPool::builder()
            .initial_size(initial_size)
            .constructor(move || {
                constructed_in_make.set(constructed_in_make.get() + 1);
                Box::new(0_u32)
            })
            .build()
            .unwrap();

        (pool, constructed)
    }

    #[test]
    fn builder_without_constructor_is_rejected() {
        let result = AnyPool::builder().initial_size(2).build();

        assert!(result.is_err());
    }

    #[test]
    fn capacity_accounting() {
        let (mut pool, constructed) = counting_pool(2);
        assert_eq!(constructed.get(), 2);

        let a = pool.get();
        let b = pool.get();
        assert_eq!(constructed.get(), 2);

        // Exhaustion: two constructions at once, capacity 4.
        let c = pool.get();
        assert_eq!(constructed.get(), 4);
        assert_eq!(pool.capacity(), 4);

        // Recycling constructs nothing.
        pool.release(c);
        let c = pool.get();
        assert_eq!(constructed.get(), 4);

        pool.release(a);
        pool.release(b);
        pool.release(c);
    }

    #[test]
    fn lifo_ordering() {
        let mut next_id = 0_u32;
        let mut pool = AnyPool::builder()
            .initial_size(2)
            .constructor(move || {
                next_id += 1;
                Box::new(next_id)
            })
            .build()
            .unwrap();

        let a1 = pool.get_as::<u32>().unwrap();
        let b1 = pool.get_as::<u32>().unwrap();
        let (a_id, b_id) = (*a1, *b1);

        pool.release(a1);
        pool.release(b1);

        // b was released last, so it comes back first.
        assert_eq!(*pool.get_as::<u32>().unwrap(), b_id);
        assert_eq!(*pool.get_as::<u32>().unwrap(), a_id);
    }

    #[test]
    fn type_mismatch_is_recoverable_and_rolled_back() {
        let (mut pool, constructed) = counting_pool(1);

        let error = pool.get_as::<String>().unwrap_err();
        assert!(error.expected().contains("String"));

        // The failed retrieval changed nothing.
        assert_eq!(pool.in_use(), 0);
        assert_eq!(pool.capacity(), 1);
        assert_eq!(constructed.get(), 1);

        // The same item is still retrievable with the right type.
        let item = pool.get_as::<u32>().unwrap();
        assert_eq!(pool.in_use(), 1);
        pool.release(item);
    }

    #[test]
    fn mismatch_rollback_does_not_run_cleanup() {
        let cleaned = Rc::new(Cell::new(0));
        let cleaned_in_cleanup = Rc::clone(&cleaned);

        let mut pool = AnyPool::builder()
            .initial_size(1)
            .constructor(|| Box::new(0_u32))
            .cleanup(move |_| cleaned_in_cleanup.set(cleaned_in_cleanup.get() + 1))
            .build()
            .unwrap();

        assert!(pool.get_as::<String>().is_err());
        assert_eq!(cleaned.get(), 0);
    }

    #[test]
    fn cleanup_runs_once_per_release_and_never_on_fresh_items() {
        let cleaned = Rc::new(Cell::new(0));
        let cleaned_in_cleanup = Rc::clone(&cleaned);

        let mut pool = AnyPool::builder()
            .initial_size(1)
            .constructor(|| Box::new(String::from("fresh")))
            .cleanup(move |item: &mut dyn Any| {
                cleaned_in_cleanup.set(cleaned_in_cleanup.get() + 1);
                if let Some(text) = item.downcast_mut::<String>() {
                    *text = String::from("clean");
                }
            })
            .build()
            .unwrap();

        // Two gets with no release in between: the pre-built item, then a freshly
        // constructed one. Cleanup has run for neither.
        let first = pool.get_as::<String>().unwrap();
        let second = pool.get_as::<String>().unwrap();
        assert_eq!(*first, "fresh");
        assert_eq!(*second, "fresh");
        assert_eq!(cleaned.get(), 0);

        pool.release(second);
        assert_eq!(cleaned.get(), 1);

        // The recycled item observes post-cleanup state.
        let recycled = pool.get_as::<String>().unwrap();
        assert_eq!(*recycled, "clean");

        pool.release(recycled);
        pool.release(first);
        assert_eq!(cleaned.get(), 3);
    }

    #[test]
    fn orphan_release_cleans_and_grows() {
        let cleaned = Rc::new(Cell::new(0));
        let cleaned_in_cleanup = Rc::clone(&cleaned);

        let mut pool = AnyPool::builder()
            .initial_size(1)
            .constructor(|| Box::new(0_u32))
            .cleanup(move |_| cleaned_in_cleanup.set(cleaned_in_cleanup.get() + 1))
            .build()
            .unwrap();

        for n in 1..=3_u32 {
            pool.release(Box::new(n));
        }

        assert_eq!(cleaned.get(), 3);
        assert_eq!(pool.in_use(), 0);
        assert_eq!(pool.capacity(), 4);

        // Ordering stays intact: orphans newest-first, then the pre-built item.
        assert_eq!(*pool.get_as::<u32>().unwrap(), 3);
        assert_eq!(*pool.get_as::<u32>().unwrap(), 2);
        assert_eq!(*pool.get_as::<u32>().unwrap(), 1);
        assert_eq!(*pool.get_as::<u32>().unwrap(), 0);
    }

    #[test]
    fn zero_initial_size_is_allowed() {
        let (mut pool, constructed) = counting_pool(0);
        assert_eq!(constructed.get(), 0);
        assert_eq!(pool.capacity(), 0);

        let item = pool.get();
        assert_eq!(constructed.get(), 2);
        assert_eq!(pool.capacity(), 2);

        pool.release(item);
    }
}
