//! Single-occupancy spatial index for 2D grids.
//!
//! [`SpatialMap`] associates each item with exactly one [`Position`] and
//! each position with at most one item, answering both "where is this
//! item?" and "what is at this position?" in expected constant time.
//!
//! Mutations come in strict (`Result`) and non-strict (`bool`) forms
//! sharing one implementation. Successful mutations are announced through
//! per-kind [`Signal`]s after they are committed.
//!
//! [`Position`]: gridex_core::Position

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod id_map;
pub mod map;
pub mod query;
pub mod signal;

pub use config::MapConfig;
pub use id_map::IdSpatialMap;
pub use map::{Iter, SpatialMap};
pub use query::SpatialQuery;
pub use signal::{ItemAdded, ItemMoved, ItemRemoved, ListenerId, Signal};
