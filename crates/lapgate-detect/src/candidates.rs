//! Quadrilateral candidate extraction and cleanup.

use nalgebra::Point2;

use lapgate_core::{approx_poly_dp, is_contour_convex, min_edge_length, perimeter, Contour};

/// A potential marker: four corners in contour-scan order.
pub type Candidate = [Point2<f32>; 4];

/// Filter raw contours down to convex quadrilateral candidates.
///
/// A contour survives when it is at least `min_size` points long, its
/// approximation (tolerance `length * epsilon`) has exactly four
/// vertices, is convex, and its shortest edge is at least `min_edge`
/// pixels. Scan order is preserved; an empty result is a normal outcome.
pub fn find_candidates(
    contours: &[Contour],
    min_size: f32,
    epsilon: f32,
    min_edge: f32,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for contour in contours {
        let length = contour.len();
        if (length as f32) < min_size {
            continue;
        }

        let poly = approx_poly_dp(&contour.points, length as f32 * epsilon);
        if poly.len() != 4 || !is_contour_convex(&poly) {
            continue;
        }
        if min_edge_length(&poly) < min_edge {
            continue;
        }
        candidates.push([poly[0], poly[1], poly[2], poly[3]]);
    }
    candidates
}

/// Force clockwise corner winding (image coordinates, y down).
pub fn clockwise_corners(candidates: &mut [Candidate]) {
    for corners in candidates.iter_mut() {
        let d1 = corners[1] - corners[0];
        let d2 = corners[2] - corners[0];
        if d1.x * d2.y - d1.y * d2.x < 0.0 {
            corners.swap(1, 3);
        }
    }
}

/// Collapse near-identical candidate pairs, keeping the larger one.
///
/// Two candidates are "near" when the mean of their four squared corner
/// distances is under `min_dist²`. The smaller-perimeter candidate of a
/// near pair is dropped; an exact perimeter tie drops the earlier one.
pub fn drop_near_duplicates(candidates: Vec<Candidate>, min_dist: f32) -> Vec<Candidate> {
    let mut discarded = vec![false; candidates.len()];

    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            let mut dist = 0.0f32;
            for k in 0..4 {
                let d = candidates[i][k] - candidates[j][k];
                dist += d.x * d.x + d.y * d.y;
            }
            if dist / 4.0 < min_dist * min_dist {
                if perimeter(&candidates[j]) < perimeter(&candidates[i]) {
                    discarded[j] = true;
                } else {
                    discarded[i] = true;
                }
            }
        }
    }

    candidates
        .into_iter()
        .zip(discarded)
        .filter(|&(_, dropped)| !dropped)
        .map(|(c, _)| c)
        .collect()
}
