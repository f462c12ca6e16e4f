//! Comparator capabilities for items and positions.
//!
//! A map never compares items or positions directly. It asks the
//! comparator it was built with for a *key*, and stores and looks up
//! entries by that key. Equality and hashing are both derived from the
//! key, so "equal values hash identically" holds for every comparator.
//!
//! The comparator is fixed when the map is constructed. Changing what a
//! stored item's key would be afterwards (for instance mutating the
//! field a [`KeyFn`] reads through interior mutability) is a logic
//! error: the map keeps working but can no longer find that item.

use crate::error::MapError;
use crate::id::{HasId, ItemId};
use crate::position::Position;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_key<K: Hash>(key: &K) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Identity capability for tracked items.
pub trait ItemComparer<T: ?Sized> {
    /// The identity key an item is stored under.
    type Key: Hash + Eq + Clone;

    /// Project an item onto its identity key.
    fn key(&self, item: &T) -> Self::Key;

    /// Whether two items are the same item under this comparator.
    fn equal(&self, a: &T, b: &T) -> bool {
        self.key(a) == self.key(b)
    }

    /// Hash of an item's identity. Equal items always hash identically.
    fn hash(&self, item: &T) -> u64 {
        hash_key(&self.key(item))
    }
}

/// Compare items by their own `Eq`/`Hash` implementation.
///
/// The item itself is the key, so every lookup clones it. Prefer
/// [`ById`] or a [`KeyFn`] for large items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByValue;

impl<T: Hash + Eq + Clone> ItemComparer<T> for ByValue {
    type Key = T;

    fn key(&self, item: &T) -> T {
        item.clone()
    }
}

/// Compare items by their intrinsic [`ItemId`].
///
/// Only item types implementing [`HasId`] can be used with this
/// comparator; anything else is rejected by the compiler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ById;

impl<T: HasId + ?Sized> ItemComparer<T> for ById {
    type Key = ItemId;

    fn key(&self, item: &T) -> ItemId {
        item.id()
    }
}

/// Compare items by a caller-supplied key projection.
///
/// ```
/// use gridex_core::{ItemComparer, KeyFn};
///
/// let by_len = KeyFn(|s: &String| s.len());
/// assert!(by_len.equal(&"abc".to_string(), &"xyz".to_string()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct KeyFn<F>(pub F);

impl<T: ?Sized, K, F> ItemComparer<T> for KeyFn<F>
where
    F: Fn(&T) -> K,
    K: Hash + Eq + Clone,
{
    type Key = K;

    fn key(&self, item: &T) -> K {
        (self.0)(item)
    }
}

/// Identity capability for positions.
pub trait PositionComparer {
    /// The key a position is stored under.
    type Key: Hash + Eq + Clone;

    /// Project a position onto its key.
    fn key(&self, position: Position) -> Self::Key;

    /// Whether two positions denote the same cell.
    fn equal(&self, a: Position, b: Position) -> bool {
        self.key(a) == self.key(b)
    }

    /// Hash of a position's key.
    fn hash(&self, position: Position) -> u64 {
        hash_key(&self.key(position))
    }
}

/// Exact coordinate equality. The default position comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactPosition;

impl PositionComparer for ExactPosition {
    type Key = Position;

    fn key(&self, position: Position) -> Position {
        position
    }
}

/// Positions compared modulo the grid dimensions (a torus).
///
/// `(x, y)` and `(x + width, y - height)` denote the same cell.
///
/// ```
/// use gridex_core::{Position, PositionComparer, WrappedPosition};
///
/// let wrap = WrappedPosition::new(10, 5).unwrap();
/// assert!(wrap.equal(Position::new(-1, 0), Position::new(9, 5)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrappedPosition {
    width: i32,
    height: i32,
}

impl WrappedPosition {
    /// Create a wrapping comparator for a `width` x `height` grid.
    ///
    /// Both dimensions must be non-zero and fit in an `i32`.
    pub fn new(width: u32, height: u32) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::InvalidArgument {
                reason: format!("wrapped grid must be non-empty, got {width}x{height}"),
            });
        }
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(MapError::InvalidArgument {
                reason: format!("wrapped grid {width}x{height} exceeds i32 coordinates"),
            });
        };
        Ok(Self {
            width: w,
            height: h,
        })
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// The canonical in-bounds representative of `position`.
    pub fn normalize(&self, position: Position) -> Position {
        Position::new(
            position.x.rem_euclid(self.width),
            position.y.rem_euclid(self.height),
        )
    }
}

impl PositionComparer for WrappedPosition {
    type Key = Position;

    fn key(&self, position: Position) -> Position {
        self.normalize(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Named {
        id: u32,
        name: &'static str,
    }

    impl HasId for Named {
        fn id(&self) -> ItemId {
            ItemId(self.id)
        }
    }

    #[test]
    fn by_id_ignores_other_fields() {
        let a = Named { id: 1, name: "orc" };
        let b = Named { id: 1, name: "troll" };
        let c = Named { id: 2, name: "orc" };
        assert!(ById.equal(&a, &b));
        assert!(!ById.equal(&a, &c));
        assert_eq!(ItemComparer::hash(&ById, &a), ItemComparer::hash(&ById, &b));
        assert_eq!(a.name, c.name);
    }

    #[test]
    fn by_value_uses_item_equality() {
        assert!(ByValue.equal(&"a", &"a"));
        assert!(!ByValue.equal(&"a", &"b"));
    }

    #[test]
    fn key_fn_projects() {
        let parity = KeyFn(|n: &i64| n.rem_euclid(2));
        assert!(parity.equal(&3, &-1));
        assert_eq!(parity.hash(&4), parity.hash(&10));
    }

    #[test]
    fn wrapped_rejects_empty_grid() {
        let err = WrappedPosition::new(0, 4).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidArgument);
        assert!(WrappedPosition::new(4, 0).is_err());
        assert!(WrappedPosition::new(u32::MAX, 1).is_err());
    }

    #[test]
    fn wrapped_normalizes_negative_coordinates() {
        let wrap = WrappedPosition::new(8, 8).unwrap();
        assert_eq!(wrap.normalize(Position::new(-1, -9)), Position::new(7, 7));
        assert_eq!(wrap.normalize(Position::new(17, 3)), Position::new(1, 3));
        assert_eq!(
            PositionComparer::hash(&wrap, Position::new(-8, 0)),
            PositionComparer::hash(&wrap, Position::new(0, 8))
        );
    }

    #[test]
    fn exact_position_distinguishes_all_coordinates() {
        assert!(ExactPosition.equal(Position::new(1, 1), Position::new(1, 1)));
        assert!(!ExactPosition.equal(Position::new(1, 1), Position::new(1, 2)));
    }
}
