//! Core types and traits for the gridex spatial index.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the gridex workspace:
//! grid positions, item identities, comparator capabilities, and the
//! error taxonomy shared by strict map operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod id;
pub mod position;

pub use compare::{
    ById, ByValue, ExactPosition, ItemComparer, KeyFn, PositionComparer, WrappedPosition,
};
pub use error::{ErrorKind, MapError};
pub use id::{HasId, IdGenerator, ItemId};
pub use position::Position;
