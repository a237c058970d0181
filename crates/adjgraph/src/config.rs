//! Capacity configuration for graph storage.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Controls how the vertex map is pre-sized and grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of vertex slots reserved up front
    pub initial_capacity: usize,

    /// Multiplier applied to the current capacity when more room is needed.
    /// A request larger than the multiplied capacity is honoured exactly.
    pub growth_factor: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 10,
            growth_factor: 2,
        }
    }
}

impl GraphConfig {
    /// Config that reserves nothing up front and grows only as far as asked.
    pub fn compact() -> Self {
        Self {
            initial_capacity: 0,
            growth_factor: 1,
        }
    }

    /// Config for graphs expected to hold around `expected_vertices` vertices.
    pub fn large(expected_vertices: usize) -> Self {
        Self {
            initial_capacity: expected_vertices,
            ..Default::default()
        }
    }

    /// Check that the config describes a usable growth policy.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if `growth_factor` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.growth_factor == 0 {
            return Err(GraphError::InvalidConfig {
                message: "growth_factor must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Capacity to grow to when at least `requested` slots are needed.
    ///
    /// Returns `current` unchanged if it already covers the request.
    pub(crate) fn grown_capacity(&self, current: usize, requested: usize) -> usize {
        if requested <= current {
            return current;
        }
        current.saturating_mul(self.growth_factor).max(requested)
    }
}
