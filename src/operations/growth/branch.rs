use crate::error::Result;
use crate::math::{degrees_to_radians, subtend_point_from_vector, Degrees};
use crate::operations::creation::TriangleRequest;
use crate::topology::{TriangleId, TriangleStore};

/// Where and how the second triangle attaches to the seed.
#[derive(Debug, Clone, Copy)]
pub struct BranchSpec {
    /// Seed edge to branch from, `0..=2`.
    pub edge: usize,
    /// Fraction along the edge, in `(0, 1)`.
    pub point: f64,
    /// Angle between the reversed edge and the branch edge, in `(0°, 120°)`.
    pub angle: Degrees,
    /// Seed size; the branch edge gets the seed's side length `√3 · size`.
    pub size: f64,
}

/// Builds the request for the branch triangle off `seed`.
///
/// The branch point lies `point` of the way along the chosen edge. The new
/// triangle's first edge is the reversed seed edge, rescaled to `√3 · size`
/// and pivoted about the branch point by `angle`.
///
/// # Errors
///
/// Returns an error if the seed is missing from the store.
pub fn branch_request(
    store: &TriangleStore,
    seed: TriangleId,
    spec: &BranchSpec,
) -> Result<TriangleRequest> {
    let edge = store.edge(seed, spec.edge)?;
    let along = edge.vector();
    let point = edge.origin + along * spec.point;

    let opposite = -along;
    let scaled = opposite * (3.0_f64.sqrt() * spec.size / opposite.norm());
    let tip = subtend_point_from_vector(&point, &scaled, degrees_to_radians(spec.angle));

    Ok(TriangleRequest::Branch {
        point,
        edge: tip - point,
    })
}
