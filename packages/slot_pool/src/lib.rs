//! This package provides [`SlotPool`], a growable LIFO slot store that hands out
//! previously constructed handles instead of allocating new ones.
//!
//! This is the zero-overhead leaf layer of the `repool` pool family. It knows nothing
//! about cleanup or the static type of the items behind its handles; it only implements
//! the reuse and growth algorithm. The layers above add a stored constructor and a
//! cleanup contract (`slot_pool_managed`) and a statically typed facade (`typed_pool`).
//!
//! # Features
//!
//! - **LIFO reuse**: the most recently released handle is the next one returned,
//!   keeping hot items hot.
//! - **Eager pre-build**: the pool constructs its initial handles up front, so the
//!   steady state performs no allocation at all.
//! - **Predictable growth**: exhaustion grows the pool by exactly two handles, one
//!   returned to the caller and one stored for the next caller.
//! - **Statically dispatched construction**: the constructor is a per-call parameter,
//!   so it monomorphizes and can be inlined rather than going through a stored
//!   `dyn` closure.
//!
//! # Example
//!
//! ```rust
//! use slot_pool::SlotPool;
//!
//! // Two handles are constructed up front.
//! let mut pool = SlotPool::new(2, || Box::new([0_u8; 64]));
//!
//! let buffer = pool.get(|| Box::new([0_u8; 64]));
//! assert_eq!(pool.in_use(), 1);
//!
//! // ... use the buffer ...
//!
//! pool.release(buffer);
//! assert_eq!(pool.in_use(), 0);
//! ```

mod pool;

pub use pool::*;
