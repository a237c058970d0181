//! Error types for adjgraph operations.
//!
//! Only a handful of operations can fail; most queries on missing vertices
//! return an empty result instead of an error.

use thiserror::Error;

/// Result type alias for adjgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex not present in the graph
    #[error("Vertex not found: {vertex}")]
    VertexNotFound {
        /// Debug rendering of the missing vertex
        vertex: String,
    },

    /// Rejected graph configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization error during export
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a not-found error naming the given vertex.
    pub fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
