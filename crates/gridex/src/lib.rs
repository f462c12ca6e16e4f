//! Gridex: a single-occupancy spatial index for 2D grid worlds.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridex sub-crates. For most users, adding `gridex` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridex::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut map = SpatialMap::new();
//! let moves = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&moves);
//! map.item_moved().connect(move |_, _| counter.set(counter.get() + 1));
//!
//! map.add("player", Position::new(1, 1)).unwrap();
//! map.add("chest", Position::new(2, 1)).unwrap();
//!
//! // Blocked: the chest is in the way.
//! assert_eq!(
//!     map.move_item(&"player", Position::new(2, 1)),
//!     Err(MapError::DuplicatePosition { position: Position::new(2, 1) })
//! );
//! assert!(map.try_move(&"player", Position::new(1, 2)));
//!
//! assert_eq!(map.try_item_at(Position::new(1, 2)), Some(&"player"));
//! assert_eq!(moves.get(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridex-core` | Positions, IDs, comparers, errors |
//! | [`pool`] | `gridex-pool` | Reusable list buffers |
//! | [`map`] | `gridex-map` | The spatial map, signals, queries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`gridex-core`).
///
/// [`types::Position`], item identity ([`types::ItemId`],
/// [`types::HasId`]), comparer capabilities and [`types::MapError`].
pub use gridex_core as types;

/// List pooling (`gridex-pool`).
///
/// [`pool::ListPool`] with [`pool::RecyclingPool`] and [`pool::NullPool`]
/// implementations, plus the scoped [`pool::Lease`] guard.
pub use gridex_pool as pool;

/// The spatial map (`gridex-map`).
///
/// [`map::SpatialMap`], its change [`map::Signal`]s and the read-only
/// [`map::SpatialQuery`] view.
pub use gridex_map as map;

/// Common imports for typical gridex usage.
///
/// ```rust
/// use gridex::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridex_core::{
        ById, ByValue, ErrorKind, ExactPosition, HasId, ItemComparer, ItemId, KeyFn, MapError,
        Position, PositionComparer, WrappedPosition,
    };

    // Pooling
    pub use gridex_pool::{ListPool, NullPool, PoolConfig, RecyclingPool};

    // Map
    pub use gridex_map::{
        IdSpatialMap, ItemAdded, ItemMoved, ItemRemoved, MapConfig, SpatialMap, SpatialQuery,
    };
}
