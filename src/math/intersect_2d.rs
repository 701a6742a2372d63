use super::{Point2, Rotation2, Vector2, TOLERANCE};

/// A bounded line segment from `origin` to `destination`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub origin: Point2,
    pub destination: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(origin: Point2, destination: Point2) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Displacement from `origin` to `destination`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.destination - self.origin
    }

    /// Returns `true` if the two segments have at least one endpoint in common.
    #[must_use]
    pub fn shares_endpoint_with(&self, other: &Segment) -> bool {
        self.origin == other.origin
            || self.origin == other.destination
            || self.destination == other.origin
            || self.destination == other.destination
    }
}

/// Does `l` straddle the infinite line through `i`?
///
/// Both segments are rotated so that `i` runs along the x-axis; `l` then
/// crosses if its endpoints lie strictly on opposite sides of it.
fn crosses_line_of(l: &Segment, i: &Segment) -> bool {
    let delta = i.vector();
    let unrotate = Rotation2::new(-delta.y.atan2(delta.x));
    let level = (unrotate * i.origin.coords).y;
    let y0 = (unrotate * l.origin.coords).y - level;
    let y1 = (unrotate * l.destination.coords).y - level;
    (y0 < -TOLERANCE && y1 > TOLERANCE) || (y0 > TOLERANCE && y1 < -TOLERANCE)
}

/// Returns `true` if segments `a` and `b` properly cross.
///
/// Each segment must straddle the line through the other; testing one side
/// only reports near misses where an infinite extension crosses. Touching
/// endpoints and collinear overlap do not count.
#[must_use]
pub fn are_intersecting(a: &Segment, b: &Segment) -> bool {
    crosses_line_of(a, b) && crosses_line_of(b, a)
}
