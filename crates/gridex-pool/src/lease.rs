//! Scoped list rental.

use crate::pool::ListPool;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A rented list that goes back to its pool when dropped.
///
/// Dereferences to `Vec<T>`. Whichever way the enclosing scope exits
/// (normal return, early `?` return, or unwinding) the list is cleared
/// and returned. Use [`into_inner`](Self::into_inner) to keep the list
/// instead.
///
/// ```
/// use gridex_pool::{ListPool, RecyclingPool};
///
/// let mut pool: RecyclingPool<i32> = RecyclingPool::new();
/// {
///     let mut scratch = pool.lease();
///     scratch.extend([1, 2, 3]);
///     assert_eq!(scratch.iter().sum::<i32>(), 6);
/// }
/// assert_eq!(pool.retained(), 1);
/// ```
pub struct Lease<'p, T, P: ListPool<T> + ?Sized> {
    pool: &'p mut P,
    list: Option<Vec<T>>,
}

impl<'p, T, P: ListPool<T> + ?Sized> Lease<'p, T, P> {
    /// Rent a list from `pool` for the lifetime of the guard.
    pub fn new(pool: &'p mut P) -> Self {
        let list = pool.rent();
        Self {
            pool,
            list: Some(list),
        }
    }

    /// Detach the list from the guard. It will not be returned.
    pub fn into_inner(mut self) -> Vec<T> {
        self.list.take().unwrap_or_default()
    }
}

impl<T, P: ListPool<T> + ?Sized> Deref for Lease<'_, T, P> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        // Only `into_inner` and `drop` take the list, and both consume the guard.
        self.list.as_ref().unwrap_or_else(|| unreachable!())
    }
}

impl<T, P: ListPool<T> + ?Sized> DerefMut for Lease<'_, T, P> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        self.list.as_mut().unwrap_or_else(|| unreachable!())
    }
}

impl<T, P: ListPool<T> + ?Sized> Drop for Lease<'_, T, P> {
    fn drop(&mut self) {
        if let Some(list) = self.list.take() {
            self.pool.return_list(list);
        }
    }
}

impl<T: fmt::Debug, P: ListPool<T> + ?Sized> fmt::Debug for Lease<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Lease").field(&self.list).finish()
    }
}
