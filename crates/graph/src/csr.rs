use crate::error::GraphError;
use crate::{GraphBase, GraphProperties};

/// Compressed sparse row graph.
///
/// Edges leaving vertex `v` occupy `row_offsets[v]..row_offsets[v + 1]` of
/// `column_indices` (destinations) and `values` (weights).
#[derive(Debug, Clone, PartialEq)]
pub struct Csr<W = ()> {
    row_offsets: Vec<usize>,
    column_indices: Vec<usize>,
    values: Vec<W>,
    properties: GraphProperties,
}

impl<W> Csr<W> {
    /// Builds a graph from raw CSR arrays.
    ///
    /// # Errors
    /// * [`GraphError::InvalidOffsets`] if `row_offsets` is empty, does not start at
    ///   zero, decreases, or does not end at `column_indices.len()`.
    /// * [`GraphError::ValueCount`] if `values` and `column_indices` differ in length.
    /// * [`GraphError::VertexOutOfRange`] if a column index is not a vertex.
    pub fn new(
        row_offsets: Vec<usize>,
        column_indices: Vec<usize>,
        values: Vec<W>,
        properties: GraphProperties,
    ) -> Result<Self, GraphError> {
        let Some((&first, &last)) = row_offsets.first().zip(row_offsets.last()) else {
            return Err(invalid_offsets("row offsets must contain at least one entry"));
        };
        if first != 0 {
            return Err(invalid_offsets("row offsets must start at zero"));
        }
        if row_offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(invalid_offsets("row offsets must be non-decreasing"));
        }
        if last != column_indices.len() {
            return Err(GraphError::InvalidOffsets {
                message: format!(
                    "last offset is {last} but there are {} column indices",
                    column_indices.len()
                )
                .into(),
                context: None,
            });
        }
        if values.len() != column_indices.len() {
            return Err(GraphError::ValueCount {
                expected: column_indices.len(),
                actual: values.len(),
                context: None,
            });
        }

        let number_of_vertices = row_offsets.len() - 1;
        if let Some(&vertex) = column_indices.iter().find(|&&c| c >= number_of_vertices) {
            return Err(GraphError::VertexOutOfRange { vertex, number_of_vertices, context: None });
        }

        Ok(Self { row_offsets, column_indices, values, properties })
    }

    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.row_offsets.len() - 1
    }

    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.column_indices.len()
    }

    #[must_use]
    pub const fn properties(&self) -> GraphProperties {
        self.properties
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.properties.directed
    }

    /// Destinations of the edges leaving `vertex`.
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.column_indices[self.edge_range(vertex)]
    }

    /// Weights of the edges leaving `vertex`, aligned with [`Csr::neighbors`].
    #[must_use]
    pub fn weights(&self, vertex: usize) -> &[W] {
        &self.values[self.edge_range(vertex)]
    }

    #[must_use]
    pub fn destination_vertex(&self, edge: usize) -> usize {
        self.column_indices[edge]
    }

    fn edge_range(&self, vertex: usize) -> std::ops::Range<usize> {
        self.row_offsets[vertex]..self.row_offsets[vertex + 1]
    }
}

impl<W: Clone> Csr<W> {
    /// Builds a graph from `(source, destination, weight)` triples.
    ///
    /// Edges keep their relative order within each source vertex. For
    /// undirected graphs every edge is stored in both directions.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if an endpoint is not below `number_of_vertices`.
    pub fn from_edges(
        number_of_vertices: usize,
        edges: impl IntoIterator<Item = (usize, usize, W)>,
        properties: GraphProperties,
    ) -> Result<Self, GraphError> {
        let mut triples = Vec::new();
        for (src, dst, weight) in edges {
            for vertex in [src, dst] {
                if vertex >= number_of_vertices {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        number_of_vertices,
                        context: None,
                    });
                }
            }
            if !properties.directed && src != dst {
                triples.push((dst, src, weight.clone()));
            }
            triples.push((src, dst, weight));
        }
        triples.sort_by_key(|&(src, _, _)| src);

        let mut row_offsets = vec![0; number_of_vertices + 1];
        for &(src, _, _) in &triples {
            row_offsets[src + 1] += 1;
        }
        for v in 0..number_of_vertices {
            row_offsets[v + 1] += row_offsets[v];
        }

        let (column_indices, values) = triples.into_iter().map(|(_, dst, w)| (dst, w)).unzip();
        Self::new(row_offsets, column_indices, values, properties)
    }
}

impl<W> GraphBase for Csr<W> {
    type Vertex = usize;
    type Edge = usize;
    type Weight = W;

    fn neighbor_list_length(&self, vertex: usize) -> usize {
        self.edge_range(vertex).len()
    }

    fn source_vertex(&self, edge: usize) -> usize {
        assert!(edge < self.number_of_edges(), "edge {edge} out of range");
        // Last row whose first edge is at or before `edge`; empty rows share offsets.
        self.row_offsets.partition_point(|&offset| offset <= edge) - 1
    }
}

const fn invalid_offsets(message: &'static str) -> GraphError {
    GraphError::InvalidOffsets { message: std::borrow::Cow::Borrowed(message), context: None }
}
