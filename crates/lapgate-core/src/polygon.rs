//! Polygon operations on traced contours.

use nalgebra::Point2;

/// Douglas-Peucker approximation of a closed contour.
///
/// `epsilon` is the absolute deviation tolerance in pixels. The curve is
/// split at two approximately-extreme points and each arc is simplified
/// independently, so the result stays a closed polygon in traversal order.
pub fn approx_poly_dp(points: &[Point2<f32>], epsilon: f32) -> Vec<Point2<f32>> {
    let len = points.len();
    if len < 3 {
        return points.to_vec();
    }

    let first = farthest_from(points, 0);
    let second = farthest_from(points, first);
    let (a, b) = if second > first {
        (first, second)
    } else {
        (second, first)
    };

    let mut poly = Vec::new();
    simplify_arc(points, a, b, epsilon, &mut poly);
    simplify_arc(points, b, a + len, epsilon, &mut poly);
    poly
}

fn farthest_from(points: &[Point2<f32>], anchor: usize) -> usize {
    let a = points[anchor];
    let mut best = anchor;
    let mut best_dist = -1.0f32;
    for (i, p) in points.iter().enumerate() {
        let dx = p.x - a.x;
        let dy = p.y - a.y;
        let dist = dx * dx + dy * dy;
        if dist > best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Emit the simplified vertices of the circular arc `[start, end)`.
fn simplify_arc(
    points: &[Point2<f32>],
    start: usize,
    end: usize,
    epsilon: f32,
    out: &mut Vec<Point2<f32>>,
) {
    let len = points.len();
    let mut stack = vec![(start, end)];

    while let Some((s, e)) = stack.pop() {
        let sp = points[s % len];
        let ep = points[e % len];

        let mut split = s;
        let mut keep = true;
        if e > s + 1 {
            let dx = ep.x - sp.x;
            let dy = ep.y - sp.y;
            let chord = dx * dx + dy * dy;

            let mut max_dev = 0.0f32;
            for i in (s + 1)..e {
                let p = points[i % len];
                let dev = ((p.y - sp.y) * dx - (p.x - sp.x) * dy).abs();
                if dev > max_dev {
                    max_dev = dev;
                    split = i;
                }
            }
            // perpendicular distance against epsilon, both sides squared
            keep = max_dev * max_dev <= epsilon * epsilon * chord;
        }

        if keep {
            out.push(sp);
        } else {
            stack.push((split, e));
            stack.push((s, split));
        }
    }
}

/// True when all turns of the closed polygon share one orientation.
pub fn is_contour_convex(poly: &[Point2<f32>]) -> bool {
    let len = poly.len();
    if len < 3 {
        return false;
    }

    let mut seen_pos = false;
    let mut seen_neg = false;
    for i in 0..len {
        let p0 = poly[i];
        let p1 = poly[(i + 1) % len];
        let p2 = poly[(i + 2) % len];
        let cross = (p1.x - p0.x) * (p2.y - p1.y) - (p1.y - p0.y) * (p2.x - p1.x);
        if cross > 0.0 {
            seen_pos = true;
        } else if cross < 0.0 {
            seen_neg = true;
        }
        if seen_pos && seen_neg {
            return false;
        }
    }
    true
}

/// Total edge length of the closed polygon.
pub fn perimeter(poly: &[Point2<f32>]) -> f32 {
    let len = poly.len();
    let mut total = 0.0f32;
    for i in 0..len {
        let p = poly[i];
        let q = poly[(i + 1) % len];
        let dx = q.x - p.x;
        let dy = q.y - p.y;
        total += (dx * dx + dy * dy).sqrt();
    }
    total
}

/// Length of the shortest edge of the closed polygon.
pub fn min_edge_length(poly: &[Point2<f32>]) -> f32 {
    let len = poly.len();
    let mut min_sq = f32::INFINITY;
    for i in 0..len {
        let p = poly[i];
        let q = poly[(i + 1) % len];
        let dx = q.x - p.x;
        let dy = q.y - p.y;
        min_sq = min_sq.min(dx * dx + dy * dy);
    }
    min_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Dense boundary walk of an axis-aligned square, counter-clockwise in
    /// image coordinates.
    fn square_contour(x0: f32, y0: f32, side: f32) -> Vec<Point2<f32>> {
        let n = side as usize;
        let mut pts = Vec::new();
        for i in 0..n {
            pts.push(Point2::new(x0, y0 + i as f32));
        }
        for i in 0..n {
            pts.push(Point2::new(x0 + i as f32, y0 + side));
        }
        for i in 0..n {
            pts.push(Point2::new(x0 + side, y0 + side - i as f32));
        }
        for i in 0..n {
            pts.push(Point2::new(x0 + side - i as f32, y0));
        }
        pts
    }

    #[test]
    fn square_simplifies_to_four_corners() {
        let contour = square_contour(10.0, 20.0, 30.0);
        let poly = approx_poly_dp(&contour, 1.0);
        assert_eq!(poly.len(), 4);
        for corner in [
            Point2::new(10.0, 20.0),
            Point2::new(10.0, 50.0),
            Point2::new(40.0, 50.0),
            Point2::new(40.0, 20.0),
        ] {
            assert!(
                poly.iter().any(|p| (p - corner).norm() < 1e-3),
                "missing corner {corner}"
            );
        }
    }

    #[test]
    fn jitter_below_tolerance_is_flattened() {
        let mut contour = square_contour(0.0, 0.0, 20.0);
        for (i, p) in contour.iter_mut().enumerate() {
            if i % 3 == 0 && p.x == 0.0 && p.y > 2.0 && p.y < 18.0 {
                p.x = 0.4;
            }
        }
        let poly = approx_poly_dp(&contour, 2.0);
        assert_eq!(poly.len(), 4);
    }

    #[test]
    fn tiny_contours_pass_through() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(approx_poly_dp(&pts, 0.5), pts);
    }

    #[test]
    fn convexity_rejects_reflex_quads() {
        let convex = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        assert!(is_contour_convex(&convex));

        let reflex = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 10.0),
        ];
        assert!(!is_contour_convex(&reflex));
    }

    #[test]
    fn perimeter_and_min_edge_of_rectangle() {
        let rect = [
            Point2::new(0.0, 0.0),
            Point2::new(8.0, 0.0),
            Point2::new(8.0, 3.0),
            Point2::new(0.0, 3.0),
        ];
        assert_relative_eq!(perimeter(&rect), 22.0);
        assert_relative_eq!(min_edge_length(&rect), 3.0);
    }
}
