use std::borrow::Cow;

/// Errors raised while assembling a graph representation.
#[lbox_derive::lbox_error]
pub enum GraphError {
    /// Row offsets are empty, do not start at zero, decrease, or disagree with the edge count.
    #[error("Invalid row offsets{}: {message}", format_context(.context))]
    InvalidOffsets { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An edge references a vertex outside `0..number_of_vertices`.
    #[error("Vertex {vertex} out of range for {number_of_vertices} vertices{}", format_context(.context))]
    VertexOutOfRange {
        vertex: usize,
        number_of_vertices: usize,
        context: Option<Cow<'static, str>>,
    },

    /// Edge values and column indices have different lengths.
    #[error("Expected {expected} edge values, got {actual}{}", format_context(.context))]
    ValueCount { expected: usize, actual: usize, context: Option<Cow<'static, str>> },
}
