//! Error types for strict spatial map operations.
//!
//! Only the strict (`Result`-returning) forms of map operations produce
//! these errors. The non-strict forms report the same conditions as
//! `false` or an empty result and never construct a `MapError`.

use crate::position::Position;
use std::error::Error;
use std::fmt;

/// Errors from strict spatial map operations and from configuration
/// validation.
///
/// Items are opaque to the map, so item-side variants identify the
/// failing key by role rather than by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The item is already tracked by the map.
    DuplicateItem,
    /// The position is already occupied by another item.
    DuplicatePosition {
        /// The occupied position.
        position: Position,
    },
    /// The item is not tracked by the map.
    ItemNotFound,
    /// Nothing occupies the position.
    PositionNotFound {
        /// The empty position.
        position: Position,
    },
    /// A configuration or comparator was rejected at construction.
    InvalidArgument {
        /// What was wrong with it.
        reason: String,
    },
}

/// Coarse classification of a [`MapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An item or position key was already present.
    DuplicateKey,
    /// An item or position key was absent.
    NotFound,
    /// Structural misuse detected at construction.
    InvalidArgument,
}

impl MapError {
    /// The error's class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateItem | Self::DuplicatePosition { .. } => ErrorKind::DuplicateKey,
            Self::ItemNotFound | Self::PositionNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateItem => write!(f, "item is already present in the map"),
            Self::DuplicatePosition { position } => {
                write!(f, "position {position} is already occupied")
            }
            Self::ItemNotFound => write!(f, "item is not present in the map"),
            Self::PositionNotFound { position } => {
                write!(f, "no item at position {position}")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl Error for MapError {}
