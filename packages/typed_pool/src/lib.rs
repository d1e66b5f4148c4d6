//! This package provides [`TypedPool`], the statically typed front door of the
//! `repool` pool family.
//!
//! It is a zero-added-behavior facade over
//! [`slot_pool_managed::ManagedSlotPool`]: the typed constructor and cleanup closures
//! are translated into the managed pool's handle-level closures once, at construction
//! time, and every `get()`/`release()` afterwards is pure delegation. No extra
//! allocation, no extra indirection - just no manual type plumbing at call sites.
//!
//! Because the constructor is a required argument of [`TypedPool::new`], the managed
//! layer's "missing constructor" failure cannot occur and construction is infallible.
//!
//! # Example
//!
//! ```rust
//! use typed_pool::TypedPool;
//!
//! struct Parser {
//!     depth: u32,
//!     scratch: Vec<u8>,
//! }
//!
//! let mut pool = TypedPool::with_cleanup(
//!     4,
//!     || Parser {
//!         depth: 0,
//!         scratch: Vec::with_capacity(4096),
//!     },
//!     |parser| {
//!         parser.depth = 0;
//!         parser.scratch.clear();
//!     },
//! );
//!
//! let mut parser = pool.get();
//! parser.depth = 7;
//! parser.scratch.extend_from_slice(b"input");
//!
//! pool.release(parser);
//!
//! // The recycled parser was reset, keeping its allocated scratch capacity.
//! let parser = pool.get();
//! assert_eq!(parser.depth, 0);
//! assert!(parser.scratch.is_empty());
//! assert!(parser.scratch.capacity() >= 4096);
//! # pool.release(parser);
//! ```

mod pool;

pub use pool::*;
