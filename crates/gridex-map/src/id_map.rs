//! Maps keyed by item ID.

use crate::map::SpatialMap;
use gridex_core::{ById, ExactPosition, HasId};
use gridex_pool::RecyclingPool;

/// A [`SpatialMap`] identifying items by their [`ItemId`](gridex_core::ItemId).
///
/// Items need not implement `Eq` or `Hash`; two values with the same ID
/// are the same item as far as the map is concerned. The capability is
/// checked at compile time: a type without [`HasId`] cannot be stored.
///
/// ```
/// use gridex_core::{HasId, ItemId, Position};
/// use gridex_map::IdSpatialMap;
///
/// struct Actor {
///     id: ItemId,
///     hp: i32,
/// }
///
/// impl HasId for Actor {
///     fn id(&self) -> ItemId {
///         self.id
///     }
/// }
///
/// let mut map = IdSpatialMap::by_id();
/// map.add(Actor { id: ItemId(1), hp: 10 }, Position::new(0, 0)).unwrap();
///
/// let lookup = Actor { id: ItemId(1), hp: 0 };
/// assert_eq!(map.position_of(&lookup), Ok(Position::new(0, 0)));
/// ```
///
/// ```compile_fail
/// use gridex_map::IdSpatialMap;
///
/// struct Anonymous;
///
/// let map: IdSpatialMap<Anonymous> = IdSpatialMap::by_id();
/// ```
pub type IdSpatialMap<T, P = RecyclingPool<T>> = SpatialMap<T, ById, ExactPosition, P>;

impl<T: HasId> SpatialMap<T, ById> {
    /// An empty map comparing items by ID.
    pub fn by_id() -> Self {
        Self::with_comparer(ById)
    }

    /// An empty map comparing items by ID, with room for `capacity`
    /// entries (clamped to [`MapConfig::MAX_INITIAL_CAPACITY`]).
    ///
    /// [`MapConfig::MAX_INITIAL_CAPACITY`]: crate::MapConfig::MAX_INITIAL_CAPACITY
    pub fn by_id_with_capacity(capacity: usize) -> Self {
        Self::with_comparer_and_capacity(ById, capacity)
    }
}
