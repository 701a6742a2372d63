pub mod intersect_2d;
pub mod polygon_2d;

use std::f64::consts::PI;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Angle measured in degrees.
pub type Degrees = f64;

/// Angle measured in radians.
pub type Radians = f64;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts an angle in degrees to radians.
#[must_use]
pub fn degrees_to_radians(d: Degrees) -> Radians {
    d * PI / 180.0
}

/// Converts an angle in radians to degrees.
#[must_use]
pub fn radians_to_degrees(r: Radians) -> Degrees {
    r * 180.0 / PI
}

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed angle that rotates `a` onto `b`, in `(-π, π]`.
///
/// A half-turn is always reported as `+π`.
///
/// Both vectors must be non-zero; the result is meaningless otherwise.
#[must_use]
pub fn angle_between(a: &Vector2, b: &Vector2) -> Radians {
    let theta = cross_2d(a, b).atan2(a.dot(b));
    if theta <= -PI {
        PI
    } else {
        theta
    }
}

/// Rotates `v` by `theta` about the coordinate origin and returns `origin + v'`.
///
/// This is how every new triangle vertex is placed: a known edge is pivoted
/// around one of its endpoints.
#[must_use]
pub fn subtend_point_from_vector(origin: &Point2, v: &Vector2, theta: Radians) -> Point2 {
    *origin + Rotation2::new(theta) * *v
}
