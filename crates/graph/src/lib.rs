//! # Graph
//!
//! The capability interface operators need from a graph, independent of its
//! storage format, plus a compressed sparse row (CSR) implementation.
//!
//! ## Example
//!
//! ```rust
//! use lbox_graph::{Csr, GraphBase, GraphProperties};
//!
//! let edges = [(0, 1, 1.0), (0, 2, 4.0), (1, 2, 2.0)];
//! let graph = Csr::from_edges(3, edges, GraphProperties::directed().weighted()).unwrap();
//!
//! assert_eq!(graph.neighbor_list_length(0), 2);
//! assert_eq!(graph.source_vertex(2), 1);
//! ```

mod csr;
mod error;

pub use crate::csr::Csr;
pub use crate::error::{GraphError, GraphErrorExt};

/// Static properties of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GraphProperties {
    pub directed: bool,
    pub weighted: bool,
}

impl GraphProperties {
    #[must_use]
    pub const fn directed() -> Self {
        Self { directed: true, weighted: false }
    }

    #[must_use]
    pub const fn undirected() -> Self {
        Self { directed: false, weighted: false }
    }

    #[must_use]
    pub const fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }
}

/// Accessors every graph representation must provide.
///
/// Vertices and edges are dense indices (`0..number_of_vertices`,
/// `0..number_of_edges`). Implementations may panic when given an index out
/// of range.
pub trait GraphBase {
    type Vertex: Copy;
    type Edge: Copy;
    type Weight;

    /// Number of edges leaving `vertex`.
    fn neighbor_list_length(&self, vertex: Self::Vertex) -> Self::Edge;

    /// Vertex that `edge` leaves from.
    fn source_vertex(&self, edge: Self::Edge) -> Self::Vertex;
}
