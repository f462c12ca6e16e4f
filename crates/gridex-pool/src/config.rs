//! List pool configuration parameters.

use gridex_core::MapError;

/// Configuration for a [`RecyclingPool`](crate::RecyclingPool).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of idle lists held for reuse.
    ///
    /// Lists returned while the pool is full are dropped. Default: 50.
    /// Must be at least 1; use [`NullPool`](crate::NullPool) to disable
    /// recycling altogether.
    pub max_retained: usize,

    /// Capacity a returned list is trimmed down to before it is stored.
    ///
    /// Keeps one unusually large result from pinning its allocation in
    /// the pool forever. Default: 16. Must be at least 1.
    pub max_list_capacity: usize,
}

impl PoolConfig {
    /// Default number of idle lists retained.
    pub const DEFAULT_MAX_RETAINED: usize = 50;

    /// Default capacity cap for retained lists.
    pub const DEFAULT_MAX_LIST_CAPACITY: usize = 16;

    /// Check the configuration for values the pool cannot honour.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.max_retained == 0 {
            return Err(MapError::InvalidArgument {
                reason: "max_retained must be at least 1 (use NullPool to disable pooling)"
                    .to_string(),
            });
        }
        if self.max_list_capacity == 0 {
            return Err(MapError::InvalidArgument {
                reason: "max_list_capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_retained: Self::DEFAULT_MAX_RETAINED,
            max_list_capacity: Self::DEFAULT_MAX_LIST_CAPACITY,
        }
    }
}
