pub mod triangle;
pub mod vertex;

pub use triangle::{TriangleData, TriangleId};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use crate::math::intersect_2d::Segment;
use crate::math::Point2;
use slotmap::SlotMap;

/// Central arena that owns every vertex and triangle of a figure.
///
/// Entities reference each other via typed IDs, so triangles never hold
/// pointers to their vertices and vertices only record owner IDs. Nothing
/// is ever removed, which keeps every ID valid for the store's lifetime.
#[derive(Debug, Default)]
pub struct TriangleStore {
    vertices: SlotMap<VertexId, VertexData>,
    triangles: SlotMap<TriangleId, TriangleData>,
    vertex_order: Vec<VertexId>,
    triangle_order: Vec<TriangleId>,
}

impl TriangleStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        let id = self.vertices.insert(data);
        self.vertex_order.push(id);
        id
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or(TopologyError::EntityNotFound("vertex"))
    }

    /// Vertex IDs in creation order.
    #[must_use]
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_order
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    // --- Triangle operations ---

    /// Stores a triangle over three existing vertices and registers it as an
    /// owner of each of them.
    ///
    /// The triangle is fully stored before any vertex refers to it.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the vertices is not in the store.
    pub fn add_triangle(&mut self, vertices: [VertexId; 3]) -> Result<TriangleId, TopologyError> {
        for &v in &vertices {
            self.vertex(v)?;
        }
        let serial = self.triangle_order.len();
        let id = self.triangles.insert(TriangleData::new(serial, vertices));
        self.triangle_order.push(id);
        for v in vertices {
            if let Some(vertex) = self.vertices.get_mut(v) {
                vertex.add_owner(id);
            }
        }
        Ok(id)
    }

    /// Returns a reference to the triangle data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn triangle(&self, id: TriangleId) -> Result<&TriangleData, TopologyError> {
        self.triangles
            .get(id)
            .ok_or(TopologyError::EntityNotFound("triangle"))
    }

    /// Triangle IDs in creation order.
    #[must_use]
    pub fn triangle_ids(&self) -> &[TriangleId] {
        &self.triangle_order
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangle_order.len()
    }

    /// Returns edge `i` of a triangle as a segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle or one of its vertices is missing.
    pub fn edge(&self, id: TriangleId, i: usize) -> Result<Segment, TopologyError> {
        let (start, end) = self.triangle(id)?.edge_vertices(i);
        Ok(Segment::new(
            self.vertex(start)?.point,
            self.vertex(end)?.point,
        ))
    }

    /// Returns all three edges of a triangle, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle or one of its vertices is missing.
    pub fn edges(&self, id: TriangleId) -> Result<[Segment; 3], TopologyError> {
        Ok([self.edge(id, 0)?, self.edge(id, 1)?, self.edge(id, 2)?])
    }

    /// Returns the positions of a triangle's vertices, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle or one of its vertices is missing.
    pub fn shape(&self, id: TriangleId) -> Result<[Point2; 3], TopologyError> {
        let [a, b, c] = self.triangle(id)?.vertices;
        Ok([
            self.vertex(a)?.point,
            self.vertex(b)?.point,
            self.vertex(c)?.point,
        ])
    }
}
