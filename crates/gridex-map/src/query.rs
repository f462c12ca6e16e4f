//! Read-only, object-safe view over a spatial index.

use crate::map::SpatialMap;
use gridex_core::{ItemComparer, Position, PositionComparer};

/// Read-only queries shared by every spatial index.
///
/// Object-safe, so code that only inspects a map (renderers, AI
/// planners, consistency checks) can take `&dyn SpatialQuery<T>` and stay
/// agnostic of the map's comparers and pool.
pub trait SpatialQuery<T> {
    /// Number of tracked items.
    fn len(&self) -> usize;

    /// Whether nothing is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `item` is tracked.
    fn contains(&self, item: &T) -> bool;

    /// Whether anything occupies `position`.
    fn contains_position(&self, position: Position) -> bool;

    /// Position of `item`, if tracked.
    fn try_position_of(&self, item: &T) -> Option<Position>;

    /// Occupant of `position`, if any.
    fn try_item_at(&self, position: Position) -> Option<&T>;

    /// All `(item, position)` pairs.
    fn entries(&self) -> Box<dyn Iterator<Item = (&T, Position)> + '_>;

    /// All occupied positions.
    fn occupied<'a>(&'a self) -> Box<dyn Iterator<Item = Position> + 'a>
    where
        T: 'a,
    {
        Box::new(self.entries().map(|(_, position)| position))
    }
}

impl<T, C, PC, P> SpatialQuery<T> for SpatialMap<T, C, PC, P>
where
    C: ItemComparer<T>,
    PC: PositionComparer,
{
    fn len(&self) -> usize {
        SpatialMap::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        SpatialMap::contains(self, item)
    }

    fn contains_position(&self, position: Position) -> bool {
        SpatialMap::contains_position(self, position)
    }

    fn try_position_of(&self, item: &T) -> Option<Position> {
        SpatialMap::try_position_of(self, item)
    }

    fn try_item_at(&self, position: Position) -> Option<&T> {
        SpatialMap::try_item_at(self, position)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&T, Position)> + '_> {
        Box::new(self.iter())
    }
}
