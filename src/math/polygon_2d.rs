use super::{cross_2d, Point2, Vector2, TOLERANCE};

/// Returns `true` if the polygon described by `points` is concave.
///
/// `points` must list the polygon's vertices in a consistent winding
/// (clockwise or anticlockwise). The verdict does not depend on which.
/// Collinear runs of vertices carry no turn direction and are ignored.
#[must_use]
pub fn is_concave(points: &[Point2]) -> bool {
    let n = points.len();
    let mut first_sign: Option<bool> = None;
    for i in 0..n {
        let start = points[i];
        let middle = points[(i + 1) % n];
        let end = points[(i + 2) % n];
        let turn = cross_2d(&(middle - start), &(end - start));
        if turn.abs() < TOLERANCE {
            continue;
        }
        let positive = turn > 0.0;
        match first_sign {
            None => first_sign = Some(positive),
            Some(sign) if sign != positive => return true,
            Some(_) => {}
        }
    }
    false
}

/// An axis-aligned rectangle, inclusive on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds2 {
    /// A rectangle spanning from the coordinate origin to `size`.
    #[must_use]
    pub fn from_size(size: Vector2) -> Self {
        Self {
            min: Point2::origin(),
            max: Point2::from(size),
        }
    }

    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn poly(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn convex_shapes() -> Vec<Vec<Point2>> {
        vec![
            poly(&[(1.0, 12.0), (2.0, 14.0), (4.0, 13.0), (2.0, 11.0)]),
            poly(&[(6.0, 14.0), (8.0, 13.0), (8.0, 11.0), (6.0, 11.0), (5.0, 12.0)]),
            poly(&[(2.0, 4.0), (2.0, 3.0), (1.0, 3.0)]),
        ]
    }

    fn concave_shapes() -> Vec<Vec<Point2>> {
        vec![
            poly(&[(2.0, 10.0), (4.0, 9.0), (2.0, 7.0), (3.0, 6.0), (1.0, 5.0)]),
            poly(&[(5.0, 9.0), (8.0, 10.0), (7.0, 7.0), (8.0, 4.0), (5.0, 5.0), (6.0, 7.0)]),
            poly(&[
                (8.0, 7.0),
                (10.0, 14.0),
                (10.0, 10.0),
                (11.0, 12.0),
                (11.0, 10.0),
                (13.0, 12.0),
                (10.0, 8.0),
                (13.0, 8.0),
                (9.0, 6.0),
            ]),
        ]
    }

    #[test]
    fn convex_shapes_in_both_windings() {
        for mut shape in convex_shapes() {
            assert!(!is_concave(&shape), "{shape:?}");
            shape.reverse();
            assert!(!is_concave(&shape), "{shape:?}");
        }
    }

    #[test]
    fn concave_shapes_in_both_windings() {
        for mut shape in concave_shapes() {
            assert!(is_concave(&shape), "{shape:?}");
            shape.reverse();
            assert!(is_concave(&shape), "{shape:?}");
        }
    }

    #[test]
    fn collinear_vertex_keeps_square_convex() {
        let square = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert!(!is_concave(&square));
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds2::from_size(Vector2::new(800.0, 600.0));
        assert!(b.contains(&Point2::new(0.0, 0.0)));
        assert!(b.contains(&Point2::new(800.0, 600.0)));
        assert!(b.contains(&Point2::new(400.0, 300.0)));
        assert!(!b.contains(&Point2::new(-0.5, 300.0)));
        assert!(!b.contains(&Point2::new(400.0, 600.5)));
    }

    proptest! {
        #[test]
        fn prop_is_concave_ignores_winding(
            coords in prop::collection::vec((-20i32..20, -20i32..20), 3..9)
        ) {
            let points: Vec<Point2> = coords
                .iter()
                .map(|&(x, y)| Point2::new(f64::from(x), f64::from(y)))
                .collect();
            let mut reversed = points.clone();
            reversed.reverse();
            prop_assert_eq!(is_concave(&points), is_concave(&reversed));
        }
    }
}
