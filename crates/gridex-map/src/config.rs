//! Spatial map configuration parameters.

use gridex_core::MapError;

/// Construction-time configuration for a [`SpatialMap`](crate::SpatialMap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapConfig {
    /// Number of entries to reserve room for up front.
    ///
    /// A hint only: the map grows past it as needed. Default: 32.
    /// Must not exceed [`MapConfig::MAX_INITIAL_CAPACITY`].
    pub initial_capacity: usize,
}

impl MapConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 32;

    /// Largest accepted capacity hint (1M entries).
    ///
    /// [`validate`](Self::validate) rejects larger values; the infallible
    /// constructors clamp to it.
    pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

    /// Configuration with the given capacity hint.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check the configuration for values the map cannot honour.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.initial_capacity > Self::MAX_INITIAL_CAPACITY {
            return Err(MapError::InvalidArgument {
                reason: format!(
                    "initial_capacity {} exceeds maximum {}",
                    self.initial_capacity,
                    Self::MAX_INITIAL_CAPACITY
                ),
            });
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_32() {
        assert_eq!(MapConfig::default().initial_capacity, 32);
        MapConfig::default().validate().unwrap();
    }

    #[test]
    fn oversized_hint_rejected() {
        let err = MapConfig::with_capacity(usize::MAX).validate().unwrap_err();
        assert!(err.to_string().contains("initial_capacity"), "got: {err}");
    }
}
