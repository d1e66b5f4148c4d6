//! This package provides [`ManagedSlotPool`], a [`slot_pool::SlotPool`] that remembers
//! how to construct its handles and resets every handle on release.
//!
//! The underlying store implements the reuse and growth algorithm; this layer adds the
//! two contracts a reusable object usually needs:
//!
//! - a **constructor**, stored at pool creation, so callers do not pass one to every
//!   `get()` - it is mandatory, and its absence is a recoverable construction error
//!   rather than a crash;
//! - an optional **cleanup** routine, run exactly once on every handle passed to
//!   `release()`, so a handle is back in canonical "ready for reuse" state the moment
//!   it lands in its slot. Absence of cleanup means no reset is performed.
//!
//! Handles that have never been released are handed out exactly as the constructor
//! produced them - cleanup never runs on the `get()` path, so fresh items are never
//! redundantly reset.
//!
//! # Example
//!
//! ```rust
//! use slot_pool_managed::ManagedSlotPool;
//!
//! let mut pool = ManagedSlotPool::builder()
//!     .initial_size(2)
//!     .constructor(|| Vec::<u8>::with_capacity(1024))
//!     .cleanup(|buffer: &mut Vec<u8>| buffer.clear())
//!     .build()
//!     .unwrap();
//!
//! let mut buffer = pool.get();
//! buffer.extend_from_slice(b"scratch data");
//!
//! // Cleanup clears the buffer, so the next get() sees it empty.
//! pool.release(buffer);
//!
//! let buffer = pool.get();
//! assert!(buffer.is_empty());
//! # pool.release(buffer);
//! ```

mod builder;
mod error;
mod pool;

pub use builder::*;
pub use error::*;
pub use pool::*;
