//! Test helpers for gridex development.
//!
//! Provides an [`EventLog`] that records every notification a map
//! raises, a structural [`assert_bijection`] check usable against any
//! [`SpatialQuery`], and fixture item types in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{tokens, Token};

use gridex_core::{ItemComparer, Position, PositionComparer};
use gridex_map::{ListenerId, SpatialMap, SpatialQuery};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One notification as seen by an [`EventLog`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recorded<T> {
    Added { item: T, position: Position },
    Removed { item: T, position: Position },
    Moved { item: T, from: Position, to: Position },
}

/// Records every notification raised by one map, in delivery order.
///
/// Connects one listener to each of the map's three signals. Dropping
/// the log does not disconnect them; call [`detach`](Self::detach) for
/// that.
pub struct EventLog<T> {
    events: Rc<RefCell<Vec<Recorded<T>>>>,
    listeners: [ListenerId; 3],
}

impl<T: Clone + 'static> EventLog<T> {
    pub fn attach<C, PC, P>(map: &SpatialMap<T, C, PC, P>) -> Self
    where
        C: ItemComparer<T>,
        PC: PositionComparer,
    {
        let events = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&events);
        let added = map.item_added().connect(move |item: &T, ev| {
            sink.borrow_mut().push(Recorded::Added {
                item: item.clone(),
                position: ev.position,
            })
        });
        let sink = Rc::clone(&events);
        let removed = map.item_removed().connect(move |item: &T, ev| {
            sink.borrow_mut().push(Recorded::Removed {
                item: item.clone(),
                position: ev.position,
            })
        });
        let sink = Rc::clone(&events);
        let moved = map.item_moved().connect(move |item: &T, ev| {
            sink.borrow_mut().push(Recorded::Moved {
                item: item.clone(),
                from: ev.old_position,
                to: ev.new_position,
            })
        });

        Self {
            events,
            listeners: [added, removed, moved],
        }
    }

    /// Everything recorded so far.
    pub fn events(&self) -> Vec<Recorded<T>> {
        self.events.borrow().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<Recorded<T>> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Disconnect the log's listeners from `map`.
    pub fn detach<C, PC, P>(&self, map: &SpatialMap<T, C, PC, P>)
    where
        C: ItemComparer<T>,
        PC: PositionComparer,
    {
        let [added, removed, moved] = self.listeners;
        map.item_added().disconnect(added);
        map.item_removed().disconnect(removed);
        map.item_moved().disconnect(moved);
    }
}

impl<T: fmt::Debug> fmt::Debug for EventLog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.events.borrow().iter()).finish()
    }
}

/// Panic unless `view` describes a bijection between items and positions.
///
/// Checks, through the public query surface only, that:
///
/// 1. enumeration yields exactly `len()` pairs on distinct positions;
/// 2. each enumerated item reports the enumerated position;
/// 3. each enumerated position reports an occupant located there.
pub fn assert_bijection<T, Q>(view: &Q)
where
    T: fmt::Debug,
    Q: SpatialQuery<T> + ?Sized,
{
    let mut seen = Vec::with_capacity(view.len());
    for (item, position) in view.entries() {
        assert!(view.contains(item), "{item:?} enumerated but not contained");
        assert!(
            view.contains_position(position),
            "{position} enumerated but not occupied"
        );
        assert_eq!(
            view.try_position_of(item),
            Some(position),
            "{item:?} reports a different position"
        );
        let occupant = view
            .try_item_at(position)
            .unwrap_or_else(|| panic!("no occupant reported at {position}"));
        assert_eq!(
            view.try_position_of(occupant),
            Some(position),
            "occupant of {position} is located elsewhere"
        );
        seen.push(position);
    }
    assert_eq!(seen.len(), view.len(), "enumeration length differs from len()");
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), view.len(), "two items share a position");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_captures_every_kind() {
        let mut map = SpatialMap::new();
        let log = EventLog::attach(&map);
        map.add('a', Position::new(0, 0)).unwrap();
        map.move_item(&'a', Position::new(1, 0)).unwrap();
        map.remove(&'a').unwrap();
        assert_eq!(
            log.take(),
            vec![
                Recorded::Added {
                    item: 'a',
                    position: Position::new(0, 0)
                },
                Recorded::Moved {
                    item: 'a',
                    from: Position::new(0, 0),
                    to: Position::new(1, 0)
                },
                Recorded::Removed {
                    item: 'a',
                    position: Position::new(1, 0)
                },
            ]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn detached_log_stops_recording() {
        let mut map = SpatialMap::new();
        let log = EventLog::attach(&map);
        log.detach(&map);
        map.add(1u8, Position::ORIGIN).unwrap();
        assert_eq!(log.len(), 0);
        assert_eq!(map.item_added().listener_count(), 0);
    }

    #[test]
    fn bijection_holds_for_populated_map() {
        let mut map = SpatialMap::new();
        for (i, token) in tokens(5).into_iter().enumerate() {
            map.add(token, Position::new(i as i32, 2)).unwrap();
        }
        assert_bijection(&map);
    }
}
