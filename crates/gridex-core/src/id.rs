//! Intrinsic numeric identities for tracked items.

use std::fmt;

/// A stable numeric identity carried by an item.
///
/// Two items with the same `ItemId` are considered the same item by
/// [`ById`](crate::ById), regardless of any other state they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Capability: the item exposes a stable, unique numeric identity.
///
/// The identity must not change while the item is stored in a map keyed
/// by it. Changing it afterwards leaves the map unable to find the item.
pub trait HasId {
    /// The item's identity.
    fn id(&self) -> ItemId;
}

impl<T: HasId + ?Sized> HasId for &T {
    fn id(&self) -> ItemId {
        (**self).id()
    }
}

impl<T: HasId + ?Sized> HasId for std::rc::Rc<T> {
    fn id(&self) -> ItemId {
        (**self).id()
    }
}

impl<T: HasId + ?Sized> HasId for Box<T> {
    fn id(&self) -> ItemId {
        (**self).id()
    }
}

/// Sequential allocator of [`ItemId`]s.
///
/// Hands out `start, start + 1, ...` and never repeats a value. Once the
/// `u32` range is used up, [`try_next`](Self::try_next) returns `None`.
/// Not shared between threads; each world or level owns its own.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    next: Option<u32>,
}

impl IdGenerator {
    /// A generator whose first ID is `0`.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// A generator whose first ID is `start`.
    pub fn starting_at(start: u32) -> Self {
        Self { next: Some(start) }
    }

    /// Allocate the next ID, or `None` once the ID space is exhausted.
    pub fn try_next(&mut self) -> Option<ItemId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(ItemId(id))
    }

    /// Allocate the next ID.
    ///
    /// # Panics
    ///
    /// Panics if all `u32` IDs have been handed out.
    pub fn next_id(&mut self) -> ItemId {
        match self.try_next() {
            Some(id) => id,
            None => panic!("IdGenerator exhausted the u32 ID space"),
        }
    }

    /// The ID the next call would return, without consuming it.
    pub fn peek(&self) -> Option<ItemId> {
        self.next.map(ItemId)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
