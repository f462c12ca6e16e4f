//! The [`ListPool`] trait and its two implementations.

use crate::config::PoolConfig;
use crate::lease::Lease;
use gridex_core::MapError;
use std::cell::RefCell;
use std::rc::Rc;

/// A source of reusable `Vec<T>` buffers.
///
/// A rented list is exclusively owned by the renter until it is handed
/// back. Nothing forces a list to be returned: dropping it simply frees
/// the allocation instead of recycling it.
pub trait ListPool<T> {
    /// Take an empty list from the pool, allocating one if none is idle.
    fn rent(&mut self) -> Vec<T>;

    /// Hand a list back, optionally skipping the clear.
    ///
    /// Pass `clear: false` only for a list that is already empty (for
    /// example one drained with [`Vec::drain`]). Storing a non-empty list
    /// keeps its items alive until the list is next rented.
    fn return_list_with(&mut self, list: Vec<T>, clear: bool);

    /// Hand a list back, clearing it first.
    fn return_list(&mut self, list: Vec<T>) {
        self.return_list_with(list, true);
    }

    /// Drop every idle list the pool is holding.
    fn clear(&mut self);

    /// Rent a list wrapped in a guard that returns it when dropped.
    fn lease(&mut self) -> Lease<'_, T, Self>
    where
        Self: Sized,
    {
        Lease::new(self)
    }
}

/// A pool that recycles returned lists, up to a configured limit.
///
/// # Examples
///
/// ```
/// use gridex_pool::{ListPool, RecyclingPool};
///
/// let mut pool: RecyclingPool<u32> = RecyclingPool::new();
/// let mut list = pool.rent();
/// list.push(7);
/// pool.return_list(list);
/// assert_eq!(pool.retained(), 1);
///
/// let list = pool.rent();
/// assert!(list.is_empty());
/// assert_eq!(pool.retained(), 0);
/// ```
#[derive(Debug)]
pub struct RecyclingPool<T> {
    idle: Vec<Vec<T>>,
    config: PoolConfig,
}

impl<T> RecyclingPool<T> {
    /// Create a pool with [`PoolConfig::default`].
    pub fn new() -> Self {
        Self {
            idle: Vec::new(),
            config: PoolConfig::default(),
        }
    }

    /// Create a pool with an explicit configuration.
    pub fn with_config(config: PoolConfig) -> Result<Self, MapError> {
        config.validate()?;
        Ok(Self {
            idle: Vec::with_capacity(config.max_retained),
            config,
        })
    }

    /// Number of idle lists currently held.
    pub fn retained(&self) -> usize {
        self.idle.len()
    }

    /// The pool's configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}

impl<T> Default for RecyclingPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListPool<T> for RecyclingPool<T> {
    fn rent(&mut self) -> Vec<T> {
        self.idle.pop().unwrap_or_default()
    }

    fn return_list_with(&mut self, mut list: Vec<T>, clear: bool) {
        if self.idle.len() >= self.config.max_retained {
            tracing::trace!(
                target: "gridex::pool",
                retained = self.idle.len(),
                "pool full, dropping returned list"
            );
            return;
        }
        if clear {
            list.clear();
        } else {
            debug_assert!(
                list.is_empty(),
                "list returned with clear=false still holds {} items",
                list.len()
            );
        }
        if list.capacity() > self.config.max_list_capacity {
            tracing::trace!(
                target: "gridex::pool",
                capacity = list.capacity(),
                max = self.config.max_list_capacity,
                "trimming oversized list"
            );
            list.shrink_to(self.config.max_list_capacity);
        }
        self.idle.push(list);
    }

    fn clear(&mut self) {
        tracing::debug!(
            target: "gridex::pool",
            discarded = self.idle.len(),
            "clearing list pool"
        );
        self.idle.clear();
    }
}

/// A pool that never recycles: every rent allocates, every return drops.
///
/// Drop-in replacement for [`RecyclingPool`] when pooling is unwanted.
#[derive(Debug)]
pub struct NullPool<T> {
    _items: std::marker::PhantomData<fn() -> T>,
}

impl<T> NullPool<T> {
    /// Create a null pool.
    pub fn new() -> Self {
        Self {
            _items: std::marker::PhantomData,
        }
    }
}

impl<T> Default for NullPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NullPool<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> ListPool<T> for NullPool<T> {
    fn rent(&mut self) -> Vec<T> {
        Vec::new()
    }

    fn return_list_with(&mut self, _list: Vec<T>, _clear: bool) {}

    fn clear(&mut self) {}
}

impl<T, P: ListPool<T> + ?Sized> ListPool<T> for Box<P> {
    fn rent(&mut self) -> Vec<T> {
        (**self).rent()
    }

    fn return_list_with(&mut self, list: Vec<T>, clear: bool) {
        (**self).return_list_with(list, clear);
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

/// A pool shared between several owners on one thread, such as the
/// layers of a multi-layer map.
impl<T, P: ListPool<T> + ?Sized> ListPool<T> for Rc<RefCell<P>> {
    fn rent(&mut self) -> Vec<T> {
        self.borrow_mut().rent()
    }

    fn return_list_with(&mut self, list: Vec<T>, clear: bool) {
        self.borrow_mut().return_list_with(list, clear);
    }

    fn clear(&mut self) {
        self.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_pool(max_retained: usize, max_list_capacity: usize) -> RecyclingPool<u32> {
        RecyclingPool::with_config(PoolConfig {
            max_retained,
            max_list_capacity,
        })
        .unwrap()
    }

    #[test]
    fn rent_from_empty_pool_allocates() {
        let mut pool: RecyclingPool<u32> = RecyclingPool::new();
        let list = pool.rent();
        assert!(list.is_empty());
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn returned_list_is_reused() {
        let mut pool = small_pool(4, 64);
        let mut list = pool.rent();
        list.extend([1, 2, 3]);
        let ptr = list.as_ptr();
        pool.return_list(list);

        let again = pool.rent();
        assert!(again.is_empty());
        assert_eq!(again.as_ptr(), ptr, "same allocation handed back");
    }

    #[test]
    fn retention_is_capped() {
        let mut pool = small_pool(2, 16);
        for _ in 0..5 {
            pool.return_list(Vec::with_capacity(4));
        }
        assert_eq!(pool.retained(), 2);
    }

    #[test]
    fn oversized_lists_are_trimmed() {
        let mut pool = small_pool(4, 8);
        let mut list = pool.rent();
        list.extend(0..100);
        pool.return_list(list);

        let list = pool.rent();
        assert!(list.capacity() >= 8);
        assert!(list.capacity() < 100, "capacity {} not trimmed", list.capacity());
    }

    #[test]
    fn return_without_clear_keeps_drained_list() {
        let mut pool = small_pool(4, 16);
        let mut list = pool.rent();
        list.push(9);
        let drained: Vec<u32> = list.drain(..).collect();
        assert_eq!(drained, vec![9]);
        pool.return_list_with(list, false);
        assert_eq!(pool.retained(), 1);
        assert!(pool.rent().is_empty());
    }

    #[test]
    fn clear_discards_idle_lists() {
        let mut pool = small_pool(4, 16);
        pool.return_list(Vec::new());
        pool.return_list(Vec::new());
        pool.clear();
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn null_pool_never_retains() {
        let mut pool: NullPool<u32> = NullPool::new();
        let mut list = pool.rent();
        list.push(1);
        pool.return_list(list);
        assert!(pool.rent().is_empty());
        pool.clear();
    }

    #[test]
    fn shared_pool_recycles_across_owners() {
        let shared = Rc::new(RefCell::new(small_pool(4, 16)));
        let mut a = Rc::clone(&shared);
        let mut b = Rc::clone(&shared);

        let list = a.rent();
        a.return_list(list);
        assert_eq!(shared.borrow().retained(), 1);

        let _list = b.rent();
        assert_eq!(shared.borrow().retained(), 0);
    }

    #[test]
    fn boxed_dyn_pool_dispatches() {
        let mut pool: Box<dyn ListPool<u32>> = Box::new(small_pool(4, 16));
        let list = pool.rent();
        pool.return_list(list);
        assert!(pool.rent().is_empty());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn retained_never_exceeds_cap(
                ops in proptest::collection::vec(any::<bool>(), 1..64),
                cap in 1usize..8,
            ) {
                let mut pool = small_pool(cap, 16);
                let mut out = Vec::new();
                for rent in ops {
                    if rent {
                        out.push(pool.rent());
                    } else if let Some(list) = out.pop() {
                        pool.return_list(list);
                    } else {
                        pool.return_list(Vec::new());
                    }
                    prop_assert!(pool.retained() <= cap);
                }
            }

            #[test]
            fn rented_lists_are_always_empty(
                fills in proptest::collection::vec(0usize..40, 1..20),
            ) {
                let mut pool = small_pool(4, 8);
                for n in fills {
                    let mut list = pool.rent();
                    prop_assert!(list.is_empty());
                    list.extend(0..n as u32);
                    pool.return_list(list);
                }
            }
        }
    }
}
