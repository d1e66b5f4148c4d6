//! This package provides [`AnyPool`], an object pool whose items are dynamically typed
//! [`Box<dyn Any>`][std::any::Any] containers.
//!
//! It implements the same algorithm as `slot_pool` plus `slot_pool_managed` - LIFO
//! reuse, eager pre-build, growth by exactly two items per exhaustion event, a stored
//! mandatory constructor and an optional cleanup routine run once per release - but
//! restated over erased containers instead of a statically typed handle. Use it where
//! the item type cannot appear in the pool's type, for example when the pool is owned
//! by code that must not be generic. Where the type is nameable, prefer `typed_pool`.
//!
//! A pool instance still holds exactly one logical item shape for its lifetime; the
//! erasure moves type checking from compile time to the call site. Retrieval through
//! [`AnyPool::get_as`] makes a wrong expectation a recoverable
//! [`TypeMismatchError`], never a panic or process abort.
//!
//! # Example
//!
//! ```rust
//! use std::any::Any;
//!
//! use any_pool::AnyPool;
//!
//! #[derive(Default)]
//! struct Connection {
//!     dirty: bool,
//! }
//!
//! let mut pool = AnyPool::builder()
//!     .initial_size(2)
//!     .constructor(|| Box::new(Connection::default()))
//!     .cleanup(|item: &mut dyn Any| {
//!         if let Some(connection) = item.downcast_mut::<Connection>() {
//!             connection.dirty = false;
//!         }
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut connection = pool.get_as::<Connection>().unwrap();
//! connection.dirty = true;
//!
//! pool.release(connection);
//!
//! // The cleanup routine reset the recycled item.
//! let connection = pool.get_as::<Connection>().unwrap();
//! assert!(!connection.dirty);
//! # pool.release(connection);
//! ```

mod builder;
mod error;
mod pool;

pub use builder::*;
pub use error::*;
pub use pool::*;
