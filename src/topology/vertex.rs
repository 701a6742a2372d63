use std::collections::BTreeSet;

use crate::math::Point2;

use super::triangle::TriangleId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the triangle store.
    pub struct VertexId;
}

/// Data associated with a lattice vertex.
///
/// The vertex does not own the triangles that use it; `owners` only records
/// which triangles currently list it, for eligibility and overlap tests.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 2D position of the vertex.
    pub point: Point2,
    eligible: bool,
    owners: BTreeSet<TriangleId>,
}

impl VertexData {
    /// Creates a new eligible vertex at the given point.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self::with_eligibility(point, true)
    }

    /// Creates a vertex with explicit eligibility.
    ///
    /// Eligibility is fixed for the lifetime of the vertex.
    #[must_use]
    pub fn with_eligibility(point: Point2, eligible: bool) -> Self {
        Self {
            point,
            eligible,
            owners: BTreeSet::new(),
        }
    }

    /// Whether this vertex may be an endpoint of a new candidate triangle.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// Records `triangle` as an owner. Adding the same triangle twice is a no-op.
    pub fn add_owner(&mut self, triangle: TriangleId) {
        self.owners.insert(triangle);
    }

    #[must_use]
    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    pub fn owners(&self) -> impl Iterator<Item = TriangleId> + '_ {
        self.owners.iter().copied()
    }

    /// Returns `true` if both vertices are listed by at least one common triangle.
    #[must_use]
    pub fn shares_triangle_with(&self, other: &VertexData) -> bool {
        !self.owners.is_disjoint(&other.owners)
    }
}
