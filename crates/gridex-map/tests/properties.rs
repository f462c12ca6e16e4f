//! Property tests: the bijection survives arbitrary operation sequences,
//! strict and non-strict forms agree, and failures leave no trace.

#![cfg(not(miri))]

use gridex_core::Position;
use gridex_map::SpatialMap;
use gridex_test_utils::{assert_bijection, EventLog};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Add(u8, Position),
    Remove(u8),
    RemoveAt(Position),
    Move(u8, Position),
    MoveAll(Position, Position),
    MoveValid(Position, Position),
    Clear,
}

fn position() -> impl Strategy<Value = Position> {
    (0i32..5, 0i32..5).prop_map(|(x, y)| Position::new(x, y))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..8, position()).prop_map(|(i, p)| Op::Add(i, p)),
        2 => (0u8..8).prop_map(Op::Remove),
        2 => position().prop_map(Op::RemoveAt),
        3 => (0u8..8, position()).prop_map(|(i, p)| Op::Move(i, p)),
        2 => (position(), position()).prop_map(|(a, b)| Op::MoveAll(a, b)),
        2 => (position(), position()).prop_map(|(a, b)| Op::MoveValid(a, b)),
        1 => Just(Op::Clear),
    ]
}

/// Apply `op` through the strict form; returns whether it succeeded.
fn apply_strict(map: &mut SpatialMap<u8>, op: &Op) -> bool {
    match *op {
        Op::Add(i, p) => map.add(i, p).is_ok(),
        Op::Remove(i) => map.remove(&i).is_ok(),
        Op::RemoveAt(p) => !map.remove_at(p).is_empty(),
        Op::Move(i, p) => map.move_item(&i, p).is_ok(),
        Op::MoveAll(a, b) => map.move_all(a, b).is_ok(),
        Op::MoveValid(a, b) => {
            let mut out = Vec::new();
            map.move_valid_into(a, b, &mut out) == 1
        }
        Op::Clear => {
            map.clear();
            true
        }
    }
}

/// Apply `op` through the non-strict form; returns whether it succeeded.
fn apply_lenient(map: &mut SpatialMap<u8>, op: &Op) -> bool {
    match *op {
        Op::Add(i, p) => map.try_add(i, p),
        Op::Remove(i) => map.try_remove(&i),
        Op::RemoveAt(p) => map.try_remove_at(p),
        Op::Move(i, p) => map.try_move(&i, p),
        Op::MoveAll(a, b) => map.try_move_all(a, b),
        Op::MoveValid(a, b) => !map.move_valid(a, b).is_empty(),
        Op::Clear => {
            map.clear();
            true
        }
    }
}

fn snapshot(map: &SpatialMap<u8>) -> Vec<(u8, Position)> {
    let mut pairs: Vec<_> = map.iter().map(|(i, p)| (*i, p)).collect();
    pairs.sort();
    pairs
}

proptest! {
    #[test]
    fn bijection_survives_any_sequence(ops in proptest::collection::vec(op(), 1..120)) {
        let mut map = SpatialMap::new();
        for op in &ops {
            apply_strict(&mut map, op);
            assert_bijection(&map);
        }
    }

    #[test]
    fn strict_and_lenient_forms_agree(ops in proptest::collection::vec(op(), 1..120)) {
        let mut strict = SpatialMap::new();
        let mut lenient = SpatialMap::new();
        for op in &ops {
            let a = apply_strict(&mut strict, op);
            let b = apply_lenient(&mut lenient, op);
            prop_assert_eq!(a, b, "outcome differs for {:?}", op);
            prop_assert_eq!(snapshot(&strict), snapshot(&lenient));
        }
    }

    #[test]
    fn failures_leave_state_and_listeners_untouched(
        ops in proptest::collection::vec(op(), 1..80),
    ) {
        let mut map = SpatialMap::new();
        let log = EventLog::attach(&map);
        for op in &ops {
            let before = snapshot(&map);
            log.take();
            if !apply_strict(&mut map, op) {
                prop_assert_eq!(snapshot(&map), before);
                prop_assert!(log.is_empty(), "failed {:?} raised {:?}", op, log);
            }
        }
    }

    #[test]
    fn every_notification_matches_a_state_change(
        ops in proptest::collection::vec(op(), 1..80),
    ) {
        let mut map = SpatialMap::new();
        let log = EventLog::attach(&map);
        for op in &ops {
            let before = map.len();
            apply_strict(&mut map, op);
            let events = log.take();
            match op {
                Op::Add(..) => {
                    prop_assert_eq!(events.len(), map.len() - before);
                }
                Op::Remove(_) | Op::RemoveAt(_) | Op::Clear => {
                    prop_assert_eq!(events.len(), before - map.len());
                }
                Op::Move(..) | Op::MoveAll(..) | Op::MoveValid(..) => {
                    prop_assert_eq!(map.len(), before);
                    prop_assert!(events.len() <= 1);
                }
            }
        }
    }
}
