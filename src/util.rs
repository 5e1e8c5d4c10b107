//! Geometry helpers shared by hit-testing and shape construction.

/// Euclidean distance between two points.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Three-way sign of a value: -1.0, 0.0, or 1.0.
///
/// Unlike `f64::signum`, zero maps to zero, which is what the square
/// construction rule needs to preserve the drag quadrant.
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Finds the first point within `radius` of (x, y), returning its index.
///
/// Used to decide which control point a pointer-down grabs.
pub fn point_index(points: &[(f64, f64)], x: f64, y: f64, radius: f64) -> Option<usize> {
    points
        .iter()
        .position(|&pt| distance(pt, (x, y)) <= radius)
}

/// Distance from point `p` to the line segment `a`-`b`.
pub fn distance_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, (a.0 + t * dx, a.1 + t * dy))
}

/// Even-odd ray cast test for point-in-polygon containment.
pub fn point_in_polygon(vertices: &[(f64, f64)], x: f64, y: f64) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = vertices[i];
        let (xj, yj) = vertices[j];
        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
    }

    #[test]
    fn sign_maps_zero_to_zero() {
        assert_eq!(sign(2.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
    }

    #[test]
    fn point_index_respects_radius() {
        let pts = [(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)];
        assert_eq!(point_index(&pts, 11.0, 9.0, 3.0), Some(1));
        assert_eq!(point_index(&pts, 50.0, 50.0, 3.0), None);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = (0.0, 0.0);
        let b = (10.0, 0.0);
        assert_eq!(distance_to_segment((5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_to_segment((-4.0, 3.0), a, b), 5.0);
    }

    #[test]
    fn polygon_containment() {
        let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        assert!(point_in_polygon(&square, 5.0, 5.0));
        assert!(!point_in_polygon(&square, 15.0, 5.0));
        assert!(!point_in_polygon(&square[..2], 5.0, 5.0));
    }
}
