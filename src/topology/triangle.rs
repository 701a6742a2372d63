use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a triangle in the triangle store.
    pub struct TriangleId;
}

/// Data associated with a triangle of the figure.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % 3`. Triangles are
/// never mutated once stored.
#[derive(Debug, Clone)]
pub struct TriangleData {
    /// Creation index, starting at zero and never reused.
    pub serial: usize,
    /// The three vertices, in order.
    pub vertices: [VertexId; 3],
}

impl TriangleData {
    #[must_use]
    pub fn new(serial: usize, vertices: [VertexId; 3]) -> Self {
        Self { serial, vertices }
    }

    /// Start and end vertex of edge `i`, wrapping modulo 3.
    #[must_use]
    pub fn edge_vertices(&self, i: usize) -> (VertexId, VertexId) {
        (self.vertices[i % 3], self.vertices[(i + 1) % 3])
    }

    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }
}
