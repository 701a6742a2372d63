use crate::error::{GrowthError, Result};
use crate::math::{
    degrees_to_radians, subtend_point_from_vector, Degrees, Point2, Vector2, TOLERANCE,
};
use crate::topology::{TriangleId, TriangleStore, VertexData, VertexId};

/// Interior angle of an equilateral triangle, in degrees.
const EQUILATERAL_ANGLE: Degrees = 60.0;

/// The three ways a triangle can enter the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleRequest {
    /// The first triangle: vertices at `size` from `center`, starting from
    /// the upward ray and turning by 120° each, offset by `rotation`.
    Seed {
        center: Point2,
        rotation: Degrees,
        size: f64,
    },
    /// A triangle whose first vertex sits on an existing edge. That vertex is
    /// ineligible for further growth.
    Branch { point: Point2, edge: Vector2 },
    /// A triangle joining two existing vertices; only the apex is new.
    FillIn { first: VertexId, second: VertexId },
}

/// Returns the apex of the equilateral triangle built on `first -> second`.
#[must_use]
pub fn fill_in_apex(first: &Point2, second: &Point2) -> Point2 {
    subtend_point_from_vector(
        first,
        &(second - first),
        degrees_to_radians(EQUILATERAL_ANGLE),
    )
}

/// A vertex slot of a triangle under construction.
enum Corner {
    Existing(VertexId),
    New(VertexData),
}

/// Creates a triangle in the store from a [`TriangleRequest`].
pub struct MakeTriangle {
    request: TriangleRequest,
}

impl MakeTriangle {
    /// Creates a new `MakeTriangle` operation.
    #[must_use]
    pub fn new(request: TriangleRequest) -> Self {
        Self { request }
    }

    /// Executes the operation, creating any new vertices and the triangle.
    ///
    /// Positions are resolved and checked before the store is touched, so a
    /// rejected request leaves the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced vertex is missing or if the three
    /// vertices would not be mutually distinct.
    pub fn execute(&self, store: &mut TriangleStore) -> Result<TriangleId> {
        let corners = self.resolve(store)?;

        let mut points = [Point2::origin(); 3];
        for (slot, corner) in points.iter_mut().zip(&corners) {
            *slot = match corner {
                Corner::Existing(id) => store.vertex(*id)?.point,
                Corner::New(data) => data.point,
            };
        }
        ensure_distinct(&points)?;

        let vertices = corners.map(|corner| match corner {
            Corner::Existing(id) => id,
            Corner::New(data) => store.add_vertex(data),
        });
        Ok(store.add_triangle(vertices)?)
    }

    fn resolve(&self, store: &TriangleStore) -> Result<[Corner; 3]> {
        match self.request {
            TriangleRequest::Seed {
                center,
                rotation,
                size,
            } => {
                let up = Vector2::new(0.0, -size);
                let corner = |turn: f64| {
                    Corner::New(VertexData::new(subtend_point_from_vector(
                        &center,
                        &up,
                        degrees_to_radians(rotation + turn),
                    )))
                };
                Ok([corner(0.0), corner(120.0), corner(240.0)])
            }
            TriangleRequest::Branch { point, edge } => Ok([
                Corner::New(VertexData::with_eligibility(point, false)),
                Corner::New(VertexData::new(point + edge)),
                Corner::New(VertexData::new(subtend_point_from_vector(
                    &point,
                    &edge,
                    degrees_to_radians(EQUILATERAL_ANGLE),
                ))),
            ]),
            TriangleRequest::FillIn { first, second } => {
                let a = store.vertex(first)?.point;
                let b = store.vertex(second)?.point;
                Ok([
                    Corner::Existing(first),
                    Corner::Existing(second),
                    Corner::New(VertexData::new(fill_in_apex(&a, &b))),
                ])
            }
        }
    }
}

fn ensure_distinct(points: &[Point2; 3]) -> Result<()> {
    for i in 0..3 {
        let a = points[i];
        let b = points[(i + 1) % 3];
        if (b - a).norm() < TOLERANCE {
            return Err(GrowthError::DegenerateTriangle(format!(
                "vertices ({}, {}) and ({}, {}) coincide",
                a.x, a.y, b.x, b.y
            ))
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn side_lengths(shape: &[Point2; 3]) -> [f64; 3] {
        [
            (shape[1] - shape[0]).norm(),
            (shape[2] - shape[1]).norm(),
            (shape[0] - shape[2]).norm(),
        ]
    }

    #[test]
    fn seed_is_equilateral_around_center() {
        let mut store = TriangleStore::new();
        let t = MakeTriangle::new(TriangleRequest::Seed {
            center: Point2::new(400.0, 300.0),
            rotation: 0.0,
            size: 50.0,
        })
        .execute(&mut store)
        .unwrap();

        let shape = store.shape(t).unwrap();
        assert_abs_diff_eq!(shape[0].x, 400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(shape[0].y, 250.0, epsilon = 1e-9);
        for p in shape {
            assert_abs_diff_eq!((p - Point2::new(400.0, 300.0)).norm(), 50.0, epsilon = 1e-9);
        }
        for side in side_lengths(&shape) {
            assert_abs_diff_eq!(side, 3.0_f64.sqrt() * 50.0, epsilon = 1e-9);
        }
        for &v in &store.triangle(t).unwrap().vertices {
            let data = store.vertex(v).unwrap();
            assert!(data.is_eligible());
            assert_eq!(data.owner_count(), 1);
        }
    }

    #[test]
    fn branch_first_vertex_is_ineligible() {
        let mut store = TriangleStore::new();
        let t = MakeTriangle::new(TriangleRequest::Branch {
            point: Point2::new(10.0, 10.0),
            edge: Vector2::new(4.0, 0.0),
        })
        .execute(&mut store)
        .unwrap();

        let [a, b, c] = store.triangle(t).unwrap().vertices;
        assert!(!store.vertex(a).unwrap().is_eligible());
        assert!(store.vertex(b).unwrap().is_eligible());
        assert!(store.vertex(c).unwrap().is_eligible());

        let shape = store.shape(t).unwrap();
        assert_eq!(shape[1], Point2::new(14.0, 10.0));
        assert_abs_diff_eq!(shape[2].x, 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(shape[2].y, 10.0 + 2.0 * 3.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn fill_in_shares_existing_vertices() {
        let mut store = TriangleStore::new();
        let seed = MakeTriangle::new(TriangleRequest::Seed {
            center: Point2::new(0.0, 0.0),
            rotation: 0.0,
            size: 10.0,
        })
        .execute(&mut store)
        .unwrap();
        let [a, b, _] = store.triangle(seed).unwrap().vertices;

        // Reversing the seed edge folds the new triangle outwards.
        let t = MakeTriangle::new(TriangleRequest::FillIn { first: b, second: a })
            .execute(&mut store)
            .unwrap();

        let data = store.triangle(t).unwrap();
        assert_eq!(data.serial, 1);
        assert_eq!(&data.vertices[..2], &[b, a]);
        assert_eq!(store.vertex(a).unwrap().owner_count(), 2);
        assert_eq!(store.vertex(b).unwrap().owner_count(), 2);
        assert_eq!(store.vertex_count(), 4);
        for side in side_lengths(&store.shape(t).unwrap()) {
            assert_abs_diff_eq!(side, 3.0_f64.sqrt() * 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn degenerate_request_leaves_store_untouched() {
        let mut store = TriangleStore::new();
        let result = MakeTriangle::new(TriangleRequest::Branch {
            point: Point2::new(1.0, 1.0),
            edge: Vector2::zeros(),
        })
        .execute(&mut store);
        assert!(result.is_err());
        assert_eq!(store.vertex_count(), 0);
        assert_eq!(store.triangle_count(), 0);
    }
}
