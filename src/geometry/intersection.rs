//! Planar line and segment intersection
//!
//! Points are `(x, y)` pairs. Both functions work on raw coordinates and
//! apply no tolerance.

/// Intersection point of the infinite lines through `p1`-`p2` and `q1`-`q2`
///
/// The result is not clipped to either segment.
///
/// # Returns
/// * `None` if the lines are parallel or coincident (`denom == 0.0` exactly)
pub fn line_intersection(
    p1: (f64, f64),
    p2: (f64, f64),
    q1: (f64, f64),
    q2: (f64, f64),
) -> Option<(f64, f64)> {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = q1;
    let (x4, y4) = q2;

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;

    Some((x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
}

/// True if segment `p1`-`p2` crosses segment `q1`-`q2`
///
/// Uses the strict counter-clockwise orientation test, so exactly collinear
/// or endpoint-touching configurations are not reliably reported.
pub fn do_lines_intersect(
    p1: (f64, f64),
    p2: (f64, f64),
    q1: (f64, f64),
    q2: (f64, f64),
) -> bool {
    ccw(p1, q1, q2) != ccw(p2, q1, q2) && ccw(p1, p2, q1) != ccw(p1, p2, q2)
}

fn ccw(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    (c.1 - a.1) * (b.0 - a.0) > (b.1 - a.1) * (c.0 - a.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_intersection_diagonals() {
        let p = line_intersection((0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0));
        assert_eq!(p, Some((1.0, 1.0)));
    }

    #[test]
    fn test_line_intersection_parallel() {
        let p = line_intersection((0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0));
        assert_eq!(p, None);
    }

    #[test]
    fn test_line_intersection_coincident() {
        let p = line_intersection((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0));
        assert_eq!(p, None);
    }

    #[test]
    fn test_line_intersection_beyond_segments() {
        // Segments do not touch but their lines meet at (3, 0)
        let p = line_intersection((0.0, 0.0), (1.0, 0.0), (3.0, 1.0), (3.0, 2.0));
        assert_eq!(p, Some((3.0, 0.0)));
    }

    #[test]
    fn test_do_lines_intersect_crossing() {
        assert!(do_lines_intersect(
            (0.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (1.0, 0.0)
        ));
    }

    #[test]
    fn test_do_lines_intersect_parallel() {
        assert!(!do_lines_intersect(
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0)
        ));
    }

    #[test]
    fn test_do_lines_intersect_lines_meet_outside_segments() {
        assert!(!do_lines_intersect(
            (0.0, 0.0),
            (1.0, 0.0),
            (3.0, 1.0),
            (3.0, 2.0)
        ));
    }

    #[test]
    fn test_do_lines_intersect_shared_endpoint_not_reported() {
        assert!(!do_lines_intersect(
            (0.0, 0.0),
            (1.0, 1.0),
            (1.0, 1.0),
            (2.0, 0.0)
        ));
    }

    #[test]
    fn test_do_lines_intersect_collinear_overlap_not_reported() {
        assert!(!do_lines_intersect(
            (0.0, 0.0),
            (2.0, 0.0),
            (1.0, 0.0),
            (3.0, 0.0)
        ));
    }

    #[test]
    fn test_do_lines_intersect_is_symmetric() {
        let (p1, p2, q1, q2) = ((-1.0, 0.5), (2.0, 0.5), (0.5, -3.0), (0.5, 4.0));
        assert!(do_lines_intersect(p1, p2, q1, q2));
        assert!(do_lines_intersect(q1, q2, p1, p2));
    }
}
