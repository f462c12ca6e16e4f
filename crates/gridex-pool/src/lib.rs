//! Reusable list buffers for gridex multi-result operations.
//!
//! Operations that yield zero or more items (removing everything at a
//! position, best-effort moves over many candidates) hand their results
//! back in a `Vec<T>`. Renting those vectors from a [`ListPool`] instead
//! of allocating each time keeps hot loops allocation-free.
//!
//! # Protocol
//!
//! - [`ListPool::rent`] returns an empty list, allocating if the pool is dry.
//! - [`ListPool::return_list`] clears the list and stores it for reuse.
//! - [`ListPool::return_list_with`] lets a caller that already drained
//!   the list skip the clear.
//! - [`ListPool::lease`] wraps a rented list in a [`Lease`] that returns
//!   it on every exit path.
//!
//! [`NullPool`] implements the same interface without recycling, for
//! callers who want pooling off.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod lease;
pub mod pool;

pub use config::PoolConfig;
pub use lease::Lease;
pub use pool::{ListPool, NullPool, RecyclingPool};
