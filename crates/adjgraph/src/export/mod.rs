//! Export module for visualizing graphs in external tools.
//!
//! Supports two formats:
//! - **DOT**: Graphviz visualization
//! - **JSON**: web-based tools and ad-hoc inspection

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{export_json, export_json_filtered};

use log::warn;

/// Vertex count above which exports log a warning.
pub const LARGE_EXPORT_THRESHOLD: usize = 10_000;

/// Warn when exporting a graph large enough to be slow to render.
pub(crate) fn check_export_size(vertex_count: usize) {
    if vertex_count > LARGE_EXPORT_THRESHOLD {
        warn!(
            "Exporting large graph ({vertex_count} vertices). Consider filtering for better performance."
        );
    }
}
