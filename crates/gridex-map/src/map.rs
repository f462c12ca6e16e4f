//! The dual index: [`SpatialMap`].
//!
//! A `SpatialMap` keeps two mappings in lock-step:
//!
//! ```text
//! items:     IndexMap<ItemKey, Slot { item, position }>   (insertion-ordered)
//! positions: HashMap<PositionKey, ItemKey>
//! ```
//!
//! Every public call leaves them a bijection: each tracked item's
//! position maps back to that item, each occupied position maps to an
//! item whose recorded position is that position, and both sides hold
//! the same number of entries.
//!
//! # Strict and non-strict forms
//!
//! Each mutation comes in a strict form returning `Result<_, MapError>`
//! and a non-strict form returning `bool` (or an empty result). Both
//! share one implementation, so they succeed under exactly the same
//! conditions and leave identical state. A failed call of either form
//! leaves the map untouched and raises no notification.
//!
//! # Ordering
//!
//! Enumeration follows insertion order of the item-keyed mapping.
//! Removal swaps the last entry into the removed one's slot, so order
//! does not survive removals.

use crate::config::MapConfig;
use crate::signal::{ItemAdded, ItemMoved, ItemRemoved, Signal};
use gridex_core::{ByValue, ExactPosition, ItemComparer, MapError, Position, PositionComparer};
use gridex_pool::{ListPool, RecyclingPool};
use indexmap::map::{Entry as ItemEntry, Values};
use indexmap::IndexMap;
use std::collections::hash_map::{Entry as PositionEntry, HashMap};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

const LOG_TARGET: &str = "gridex::map";

/// A tracked item and the position it occupies.
#[derive(Clone, Debug)]
pub(crate) struct Slot<T> {
    item: T,
    position: Position,
}

/// Bidirectional index between items and the grid positions they occupy.
///
/// At most one item occupies a position, and each item occupies exactly
/// one position. Items are identified through the [`ItemComparer`] `C`
/// and positions through the [`PositionComparer`] `PC`, both fixed at
/// construction. `P` supplies the buffers returned by multi-result
/// operations such as [`remove_at`](Self::remove_at).
///
/// The map is single-threaded: it holds no locks and its notification
/// registries are reference-counted, so it is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```
/// use gridex_map::SpatialMap;
/// use gridex_core::Position;
///
/// let mut map = SpatialMap::new();
/// map.add("goblin", Position::new(0, 0)).unwrap();
/// map.move_item(&"goblin", Position::new(5, 5)).unwrap();
///
/// assert_eq!(map.position_of(&"goblin"), Ok(Position::new(5, 5)));
/// assert_eq!(map.try_item_at(Position::new(5, 5)), Some(&"goblin"));
/// assert!(map.item_at(Position::new(0, 0)).is_err());
/// ```
pub struct SpatialMap<T, C = ByValue, PC = ExactPosition, P = RecyclingPool<T>>
where
    C: ItemComparer<T>,
    PC: PositionComparer,
{
    items: IndexMap<C::Key, Slot<T>>,
    positions: HashMap<PC::Key, C::Key>,
    comparer: C,
    position_comparer: PC,
    pool: P,
    added: Signal<T, ItemAdded>,
    removed: Signal<T, ItemRemoved>,
    moved: Signal<T, ItemMoved>,
}

impl<T: Hash + Eq + Clone> SpatialMap<T> {
    /// An empty map comparing items by value.
    pub fn new() -> Self {
        Self::with_capacity(MapConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// An empty map comparing items by value, with room for `capacity`
    /// entries.
    ///
    /// The capacity is a hint: values above
    /// [`MapConfig::MAX_INITIAL_CAPACITY`] are clamped to it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_comparer_and_capacity(ByValue, capacity)
    }
}

impl<T: Hash + Eq + Clone> Default for SpatialMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: ItemComparer<T>> SpatialMap<T, C> {
    /// An empty map identifying items through `comparer`.
    pub fn with_comparer(comparer: C) -> Self {
        Self::with_comparer_and_capacity(comparer, MapConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// An empty map identifying items through `comparer`, with room for
    /// `capacity` entries (clamped to [`MapConfig::MAX_INITIAL_CAPACITY`]).
    pub fn with_comparer_and_capacity(comparer: C, capacity: usize) -> Self {
        Self::assemble(comparer, ExactPosition, RecyclingPool::new(), capacity)
    }
}

impl<T, C, PC, P> SpatialMap<T, C, PC, P>
where
    C: ItemComparer<T>,
    PC: PositionComparer,
{
    /// Build a map from explicit parts after validating `config`.
    ///
    /// Fails with [`MapError::InvalidArgument`] if the configuration is
    /// rejected. The pool must hand out lists of the map's item type:
    ///
    /// ```compile_fail
    /// use gridex_core::{ByValue, ExactPosition, Position};
    /// use gridex_map::{MapConfig, SpatialMap};
    /// use gridex_pool::NullPool;
    ///
    /// let pool: NullPool<u64> = NullPool::new();
    /// let mut map = SpatialMap::from_parts(MapConfig::default(), ByValue, ExactPosition, pool)
    ///     .unwrap();
    /// map.add('x', Position::ORIGIN).unwrap();
    /// ```
    pub fn from_parts(
        config: MapConfig,
        comparer: C,
        position_comparer: PC,
        pool: P,
    ) -> Result<Self, MapError>
    where
        P: ListPool<T>,
    {
        config.validate()?;
        Ok(Self::assemble(
            comparer,
            position_comparer,
            pool,
            config.initial_capacity,
        ))
    }

    fn assemble(comparer: C, position_comparer: PC, pool: P, capacity: usize) -> Self {
        let capacity = capacity.min(MapConfig::MAX_INITIAL_CAPACITY);
        Self {
            items: IndexMap::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            comparer,
            position_comparer,
            pool,
            added: Signal::new(),
            removed: Signal::new(),
            moved: Signal::new(),
        }
    }

    // ── Queries ────────────────────────────────────────────────

    /// Number of tracked items (equal to the number of occupied positions).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the map tracks no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries the map can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity().min(self.positions.capacity())
    }

    /// Reserve room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
        self.positions.reserve(additional);
    }

    /// Whether `item` is tracked.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains_key(&self.comparer.key(item))
    }

    /// Whether anything occupies `position`.
    pub fn contains_position(&self, position: Position) -> bool {
        self.positions
            .contains_key(&self.position_comparer.key(position))
    }

    /// Position of `item`; fails with [`MapError::ItemNotFound`] if it is
    /// not tracked.
    pub fn position_of(&self, item: &T) -> Result<Position, MapError> {
        self.try_position_of(item).ok_or(MapError::ItemNotFound)
    }

    /// Position of `item`, or `None` if it is not tracked.
    pub fn try_position_of(&self, item: &T) -> Option<Position> {
        self.items
            .get(&self.comparer.key(item))
            .map(|slot| slot.position)
    }

    /// The item at `position`; fails with [`MapError::PositionNotFound`]
    /// if the position is empty.
    pub fn item_at(&self, position: Position) -> Result<&T, MapError> {
        self.try_item_at(position)
            .ok_or(MapError::PositionNotFound { position })
    }

    /// The item at `position`, or `None` if the position is empty.
    pub fn try_item_at(&self, position: Position) -> Option<&T> {
        let key = self.positions.get(&self.position_comparer.key(position))?;
        self.items.get(key).map(|slot| &slot.item)
    }

    /// Every item at `position`: zero or one under single occupancy.
    pub fn items_at(&self, position: Position) -> std::option::IntoIter<&T> {
        self.try_item_at(position).into_iter()
    }

    /// All tracked items.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator {
        self.items.values().map(|slot| &slot.item)
    }

    /// All occupied positions.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + DoubleEndedIterator + '_ {
        self.items.values().map(|slot| slot.position)
    }

    /// All `(item, position)` pairs.
    pub fn iter(&self) -> Iter<'_, C::Key, T> {
        Iter {
            inner: self.items.values(),
        }
    }

    // ── Predicates ─────────────────────────────────────────────

    /// Whether [`add`](Self::add) would succeed.
    pub fn can_add(&self, item: &T, position: Position) -> bool {
        !self.contains(item) && !self.contains_position(position)
    }

    /// Whether [`move_item`](Self::move_item) would succeed.
    pub fn can_move(&self, item: &T, target: Position) -> bool {
        match self.try_position_of(item) {
            Some(current) => self.is_free_for(current, target),
            None => false,
        }
    }

    /// Whether [`move_all`](Self::move_all) would succeed.
    pub fn can_move_all(&self, current: Position, target: Position) -> bool {
        self.contains_position(current) && self.is_free_for(current, target)
    }

    /// `target` is the same cell as `current`, or is empty.
    fn is_free_for(&self, current: Position, target: Position) -> bool {
        let target_key = self.position_comparer.key(target);
        self.position_comparer.key(current) == target_key
            || !self.positions.contains_key(&target_key)
    }

    // ── Add ────────────────────────────────────────────────────

    /// Track `item` at `position`.
    ///
    /// Fails with [`MapError::DuplicateItem`] if the item is already
    /// tracked, or [`MapError::DuplicatePosition`] if the position is
    /// occupied. On failure `item` is dropped and the map is unchanged.
    pub fn add(&mut self, item: T, position: Position) -> Result<(), MapError> {
        let key = self.comparer.key(&item);
        match self.items.entry(key.clone()) {
            ItemEntry::Occupied(_) => return Err(MapError::DuplicateItem),
            ItemEntry::Vacant(entry) => {
                entry.insert(Slot { item, position });
            }
        }
        match self.positions.entry(self.position_comparer.key(position)) {
            PositionEntry::Occupied(_) => {
                // Roll back the item-side insertion; it is the newest entry.
                self.items.pop();
                return Err(MapError::DuplicatePosition { position });
            }
            PositionEntry::Vacant(entry) => {
                entry.insert(key);
            }
        }
        tracing::trace!(target: LOG_TARGET, %position, len = self.items.len(), "item added");
        if let Some((_, slot)) = self.items.last() {
            self.added.emit(&slot.item, &ItemAdded { position });
        }
        Ok(())
    }

    /// Non-strict [`add`](Self::add): `false` instead of an error.
    pub fn try_add(&mut self, item: T, position: Position) -> bool {
        self.add(item, position).is_ok()
    }

    // ── Remove ─────────────────────────────────────────────────

    /// Stop tracking `item`, returning it with the position it occupied.
    ///
    /// Fails with [`MapError::ItemNotFound`] if it is not tracked.
    pub fn remove(&mut self, item: &T) -> Result<(T, Position), MapError> {
        let slot = self
            .items
            .swap_remove(&self.comparer.key(item))
            .ok_or(MapError::ItemNotFound)?;
        self.positions
            .remove(&self.position_comparer.key(slot.position));
        self.announce_removal(&slot);
        Ok((slot.item, slot.position))
    }

    /// Non-strict [`remove`](Self::remove).
    pub fn try_remove(&mut self, item: &T) -> bool {
        self.remove(item).is_ok()
    }

    /// Remove and return whatever occupies `position`, if anything.
    pub fn take_at(&mut self, position: Position) -> Option<T> {
        let key = self
            .positions
            .remove(&self.position_comparer.key(position))?;
        let slot = self.items.swap_remove(&key);
        debug_assert!(slot.is_some(), "position index names an untracked item");
        let slot = slot?;
        self.announce_removal(&slot);
        Some(slot.item)
    }

    /// Remove whatever occupies `position`, appending it to `out`.
    ///
    /// Returns the number of items appended (zero or one).
    pub fn remove_at_into(&mut self, position: Position, out: &mut Vec<T>) -> usize {
        match self.take_at(position) {
            Some(item) => {
                out.push(item);
                1
            }
            None => 0,
        }
    }

    /// Non-strict removal by position: `true` if something was removed.
    pub fn try_remove_at(&mut self, position: Position) -> bool {
        self.take_at(position).is_some()
    }

    fn announce_removal(&self, slot: &Slot<T>) {
        tracing::trace!(
            target: LOG_TARGET,
            position = %slot.position,
            len = self.items.len(),
            "item removed"
        );
        self.removed.emit(
            &slot.item,
            &ItemRemoved {
                position: slot.position,
            },
        );
    }

    /// Remove every item.
    ///
    /// Both mappings are emptied first; then one removal notification is
    /// raised per removed item.
    pub fn clear(&mut self) {
        let count = self.items.len();
        self.positions.clear();
        tracing::trace!(target: LOG_TARGET, count, "map cleared");
        if self.removed.listener_count() == 0 {
            self.items.clear();
            return;
        }
        let drained: Vec<Slot<T>> = self.items.drain(..).map(|(_, slot)| slot).collect();
        for slot in &drained {
            self.removed.emit(
                &slot.item,
                &ItemRemoved {
                    position: slot.position,
                },
            );
        }
    }

    // ── Move ───────────────────────────────────────────────────

    /// Move `item` to `target`.
    ///
    /// Fails with [`MapError::ItemNotFound`] if the item is not tracked,
    /// or [`MapError::DuplicatePosition`] if a different item occupies
    /// `target`. Moving an item onto its own position succeeds without
    /// changing anything or raising a notification.
    pub fn move_item(&mut self, item: &T, target: Position) -> Result<(), MapError> {
        let index = self
            .items
            .get_index_of(&self.comparer.key(item))
            .ok_or(MapError::ItemNotFound)?;
        self.relocate(index, target).map(|_| ())
    }

    /// Non-strict [`move_item`](Self::move_item).
    pub fn try_move(&mut self, item: &T, target: Position) -> bool {
        self.move_item(item, target).is_ok()
    }

    /// Move everything at `current` to `target`.
    ///
    /// Fails with [`MapError::PositionNotFound`] if `current` is empty,
    /// or [`MapError::DuplicatePosition`] if `target` is occupied by
    /// something else. With `current == target` this is a successful
    /// no-op.
    pub fn move_all(&mut self, current: Position, target: Position) -> Result<(), MapError> {
        let index = self
            .index_at(current)
            .ok_or(MapError::PositionNotFound { position: current })?;
        self.relocate(index, target).map(|_| ())
    }

    /// Non-strict [`move_all`](Self::move_all).
    pub fn try_move_all(&mut self, current: Position, target: Position) -> bool {
        self.move_all(current, target).is_ok()
    }

    fn index_at(&self, position: Position) -> Option<usize> {
        let key = self.positions.get(&self.position_comparer.key(position))?;
        self.items.get_index_of(key)
    }

    /// Move the entry at `index` to `target`.
    ///
    /// Returns `Ok(false)` for a same-cell no-op. The new position entry
    /// is attached before the old one is detached, so a failure leaves
    /// both mappings as they were.
    fn relocate(&mut self, index: usize, target: Position) -> Result<bool, MapError> {
        let (key, slot) = self
            .items
            .get_index(index)
            .ok_or(MapError::ItemNotFound)?;
        let from = slot.position;
        let from_key = self.position_comparer.key(from);
        let target_key = self.position_comparer.key(target);
        if from_key == target_key {
            return Ok(false);
        }
        match self.positions.entry(target_key) {
            PositionEntry::Occupied(_) => {
                return Err(MapError::DuplicatePosition { position: target })
            }
            PositionEntry::Vacant(entry) => {
                entry.insert(key.clone());
            }
        }
        self.positions.remove(&from_key);
        self.items[index].position = target;

        tracing::trace!(target: LOG_TARGET, from = %from, to = %target, "item moved");
        self.moved.emit(
            &self.items[index].item,
            &ItemMoved {
                old_position: from,
                new_position: target,
            },
        );
        Ok(true)
    }

    // ── Notifications and parts ────────────────────────────────

    /// Signal raised after an item is added.
    pub fn item_added(&self) -> &Signal<T, ItemAdded> {
        &self.added
    }

    /// Signal raised after an item is removed.
    pub fn item_removed(&self) -> &Signal<T, ItemRemoved> {
        &self.removed
    }

    /// Signal raised after an item moves.
    pub fn item_moved(&self) -> &Signal<T, ItemMoved> {
        &self.moved
    }

    /// The item comparer this map was built with.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// The position comparer this map was built with.
    pub fn position_comparer(&self) -> &PC {
        &self.position_comparer
    }

    /// The list pool backing multi-result operations.
    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Mutable access to the list pool, e.g. to rent scratch lists
    /// for [`move_valid_into`](Self::move_valid_into).
    pub fn pool_mut(&mut self) -> &mut P {
        &mut self.pool
    }
}

impl<T, C, PC, P> SpatialMap<T, C, PC, P>
where
    T: Clone,
    C: ItemComparer<T>,
    PC: PositionComparer,
{
    /// Best-effort move of whatever occupies `current` to `target`.
    ///
    /// If `current` holds an item and `target` is a different, empty
    /// cell, the item moves and a clone of it is appended to `out`.
    /// Otherwise nothing happens: no error, no notification, nothing
    /// appended. Returns the number of items appended.
    pub fn move_valid_into(
        &mut self,
        current: Position,
        target: Position,
        out: &mut Vec<T>,
    ) -> usize {
        let Some(index) = self.index_at(current) else {
            return 0;
        };
        match self.relocate(index, target) {
            Ok(true) => {
                out.push(self.items[index].item.clone());
                1
            }
            Ok(false) | Err(_) => 0,
        }
    }
}

impl<T, C, PC, P> SpatialMap<T, C, PC, P>
where
    C: ItemComparer<T>,
    PC: PositionComparer,
    P: ListPool<T>,
{
    /// Remove whatever occupies `position`.
    ///
    /// The result (zero or one item) is rented from the map's pool; hand
    /// it back with [`return_list`](Self::return_list) once consumed.
    pub fn remove_at(&mut self, position: Position) -> Vec<T> {
        let mut out = self.pool.rent();
        self.remove_at_into(position, &mut out);
        out
    }

    /// Return a list obtained from [`remove_at`](Self::remove_at) or
    /// [`move_valid`](Self::move_valid) to the pool, clearing it.
    pub fn return_list(&mut self, list: Vec<T>) {
        self.pool.return_list(list);
    }
}

impl<T, C, PC, P> SpatialMap<T, C, PC, P>
where
    T: Clone,
    C: ItemComparer<T>,
    PC: PositionComparer,
    P: ListPool<T>,
{
    /// [`move_valid_into`](Self::move_valid_into) with a list rented from
    /// the map's pool.
    pub fn move_valid(&mut self, current: Position, target: Position) -> Vec<T> {
        let mut out = self.pool.rent();
        self.move_valid_into(current, target, &mut out);
        out
    }
}

impl<T, C, PC, P> fmt::Debug for SpatialMap<T, C, PC, P>
where
    T: fmt::Debug,
    C: ItemComparer<T>,
    PC: PositionComparer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, T, C, PC, P> IntoIterator for &'a SpatialMap<T, C, PC, P>
where
    C: ItemComparer<T>,
    PC: PositionComparer,
{
    type Item = (&'a T, Position);
    type IntoIter = Iter<'a, C::Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(item, position)` pairs of a [`SpatialMap`].
pub struct Iter<'a, K, T> {
    inner: Values<'a, K, Slot<T>>,
}

impl<'a, K, T> Iterator for Iter<'a, K, T> {
    type Item = (&'a T, Position);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| (&slot.item, slot.position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, T> DoubleEndedIterator for Iter<'_, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|slot| (&slot.item, slot.position))
    }
}

impl<K, T> ExactSizeIterator for Iter<'_, K, T> {}

impl<K, T> FusedIterator for Iter<'_, K, T> {}

#[cfg(test)]
impl<T, C, PC, P> SpatialMap<T, C, PC, P>
where
    C: ItemComparer<T>,
    PC: PositionComparer,
{
    /// Panic unless the two mappings form a bijection.
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(
            self.items.len(),
            self.positions.len(),
            "forward and reverse entry counts differ"
        );
        for (key, slot) in &self.items {
            let back = self
                .positions
                .get(&self.position_comparer.key(slot.position))
                .unwrap_or_else(|| panic!("no reverse entry for {}", slot.position));
            assert!(back == key, "reverse entry at {} names another item", slot.position);
        }
    }
}
