use crate::error::Result;
use crate::math::intersect_2d::{are_intersecting, Segment};
use crate::math::polygon_2d::Bounds2;
use crate::math::{Point2, TOLERANCE};
use crate::operations::creation::{fill_in_apex, TriangleRequest};
use crate::topology::{TriangleStore, VertexId};

/// A provisional fill-in triangle considered during a growth step.
///
/// Candidates live outside the store; only the accepted one is built into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub first: VertexId,
    pub second: VertexId,
    shape: [Point2; 3],
}

impl Candidate {
    fn new(first: VertexId, second: VertexId, a: Point2, b: Point2) -> Self {
        Self {
            first,
            second,
            shape: [a, b, fill_in_apex(&a, &b)],
        }
    }

    /// Vertex positions in triangle order; the apex is last.
    #[must_use]
    pub fn shape(&self) -> [Point2; 3] {
        self.shape
    }

    #[must_use]
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.shape;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    /// The request that builds this candidate into the store.
    #[must_use]
    pub fn request(&self) -> TriangleRequest {
        TriangleRequest::FillIn {
            first: self.first,
            second: self.second,
        }
    }

    /// At least one vertex must lie within `bounds`.
    #[must_use]
    pub fn is_on_screen(&self, bounds: &Bounds2) -> bool {
        self.shape.iter().any(|p| bounds.contains(p))
    }

    /// Returns `true` if any edge properly crosses an edge already in `store`.
    ///
    /// Edge pairs with a common endpoint are skipped; they meet at a lattice
    /// joint rather than overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is inconsistent.
    pub fn crosses_any(&self, store: &TriangleStore) -> Result<bool> {
        let ours = self.edges();
        for &id in store.triangle_ids() {
            for theirs in store.edges(id)? {
                let hit = ours
                    .iter()
                    .filter(|edge| !edge.shares_endpoint_with(&theirs))
                    .any(|edge| are_intersecting(edge, &theirs));
                if hit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

/// Enumerates every legal fill-in triangle for the current figure.
///
/// Ordered pairs of eligible vertices are visited in vertex creation order.
/// A pair is skipped when both vertices already belong to a common triangle
/// or sit on the same point. A candidate is then rejected when all its
/// vertices are off screen, or when it crosses an existing edge.
///
/// # Errors
///
/// Returns an error if the store is inconsistent.
pub fn find_candidates(store: &TriangleStore, bounds: &Bounds2) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();
    let mut considered = 0usize;
    for &i in store.vertex_ids() {
        let vi = store.vertex(i)?;
        if !vi.is_eligible() {
            continue;
        }
        for &j in store.vertex_ids() {
            if i == j {
                continue;
            }
            let vj = store.vertex(j)?;
            if !vj.is_eligible() || vi.shares_triangle_with(vj) {
                continue;
            }
            if (vj.point - vi.point).norm() < TOLERANCE {
                continue;
            }
            considered += 1;
            let candidate = Candidate::new(i, j, vi.point, vj.point);
            if !candidate.is_on_screen(bounds) {
                continue;
            }
            if candidate.crosses_any(store)? {
                continue;
            }
            candidates.push(candidate);
        }
    }
    tracing::trace!(
        considered,
        accepted = candidates.len(),
        "enumerated fill-in candidates"
    );
    Ok(candidates)
}
