//! Contour extraction by border following.
//!
//! Suzuki-Abe style tracing over a padded label buffer: every outer and
//! hole border of the non-zero regions is followed once, with visited
//! border pixels relabeled so no border is reported twice.

use nalgebra::Point2;

use crate::GrayImageView;

/// One closed border traced from a binary image.
#[derive(Clone, Debug)]
pub struct Contour {
    pub points: Vec<Point2<f32>>,
    /// True when this border was entered from a hole (traced along the
    /// inside of a region).
    pub hole: bool,
}

impl Contour {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// 8-neighborhood in counter-clockwise order (y grows downward), starting
// east. Index arithmetic below relies on this ordering.
const NEIGHBORHOOD: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Trace every outer and hole border of the non-zero regions in `src`.
///
/// `labels` is scratch storage for the padded label buffer; it is resized
/// and overwritten on every call.
pub fn find_contours(src: &GrayImageView<'_>, labels: &mut Vec<i32>) -> Vec<Contour> {
    let width = src.width;
    let height = src.height;
    let stride = width + 2;

    labels.clear();
    labels.resize(stride * (height + 2), 0);
    for y in 0..height {
        let row = &src.data[y * width..(y + 1) * width];
        let base = (y + 1) * stride + 1;
        for (x, &v) in row.iter().enumerate() {
            labels[base + x] = i32::from(v != 0);
        }
    }

    // doubled so the forward search can run past index 7 unmasked
    let mut deltas = [0i32; 16];
    for (i, (dx, dy)) in NEIGHBORHOOD.iter().enumerate() {
        deltas[i] = dx + dy * stride as i32;
        deltas[i + 8] = deltas[i];
    }

    let mut contours = Vec::new();
    let mut nbd = 1i32;
    let mut pos = stride as i32 + 1;

    for y in 0..height {
        for x in 0..width {
            let pix = labels[pos as usize];
            if pix != 0 {
                let outer = pix == 1 && labels[(pos - 1) as usize] == 0;
                let hole = !outer && pix >= 1 && labels[(pos + 1) as usize] == 0;
                if outer || hole {
                    nbd += 1;
                    contours.push(follow_border(
                        labels,
                        pos,
                        nbd,
                        Point2::new(x as f32, y as f32),
                        hole,
                        &deltas,
                    ));
                }
            }
            pos += 1;
        }
        pos += 2;
    }

    contours
}

fn follow_border(
    labels: &mut [i32],
    start: i32,
    nbd: i32,
    mut point: Point2<f32>,
    hole: bool,
    deltas: &[i32; 16],
) -> Contour {
    let mut contour = Contour {
        points: Vec::new(),
        hole,
    };

    // backward scan for the first non-zero neighbor; the direction we
    // entered from (west for outer, east for hole) is known to be zero
    let s_start = if hole { 0usize } else { 4usize };
    let mut s = s_start;
    let first = loop {
        s = s.wrapping_sub(1) & 7;
        let probe = start + deltas[s];
        if labels[probe as usize] != 0 {
            break probe;
        }
        if s == s_start {
            // isolated pixel
            labels[start as usize] = -nbd;
            contour.points.push(point);
            return contour;
        }
    };

    let mut pos = start;
    loop {
        // resume counter-clockwise from just past the previous direction
        let s_end = s;
        let mut probe = s_end + 1;
        let mut next = pos + deltas[probe];
        while labels[next as usize] == 0 {
            probe += 1;
            next = pos + deltas[probe];
        }
        s = probe & 7;

        // Suzuki marking: negative when the east neighbor was examined
        // and found zero during this search, positive otherwise
        if s >= 1 && s <= s_end {
            labels[pos as usize] = -nbd;
        } else if labels[pos as usize] == 1 {
            labels[pos as usize] = nbd;
        }

        contour.points.push(point);
        point.x += NEIGHBORHOOD[s].0 as f32;
        point.y += NEIGHBORHOOD[s].1 as f32;

        if next == start && pos == first {
            break;
        }
        pos = next;
        s = (s + 4) & 7;
    }

    contour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GrayImage;

    fn image_with(width: usize, height: usize, set: &[(usize, usize)]) -> GrayImage {
        let mut img = GrayImage::new(width, height);
        for &(x, y) in set {
            img.data[y * width + x] = 255;
        }
        img
    }

    fn filled_rect(width: usize, height: usize, x0: usize, y0: usize, side: usize) -> GrayImage {
        let mut img = GrayImage::new(width, height);
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                img.data[y * width + x] = 255;
            }
        }
        img
    }

    #[test]
    fn isolated_pixel_yields_single_point() {
        let img = image_with(5, 5, &[(2, 2)]);
        let mut labels = Vec::new();
        let contours = find_contours(&img.view(), &mut labels);
        assert_eq!(contours.len(), 1);
        assert!(!contours[0].hole);
        assert_eq!(contours[0].points, vec![Point2::new(2.0, 2.0)]);
    }

    #[test]
    fn filled_square_has_one_outer_border() {
        let img = filled_rect(20, 20, 5, 5, 10);
        let mut labels = Vec::new();
        let contours = find_contours(&img.view(), &mut labels);
        assert_eq!(contours.len(), 1);
        let c = &contours[0];
        assert!(!c.hole);
        // 8-connected boundary of a 10x10 square
        assert_eq!(c.len(), 36);
        assert_eq!(c.points[0], Point2::new(5.0, 5.0));
        for p in &c.points {
            assert!((5.0..=14.0).contains(&p.x) && (5.0..=14.0).contains(&p.y));
            let on_edge = p.x == 5.0 || p.x == 14.0 || p.y == 5.0 || p.y == 14.0;
            assert!(on_edge, "interior point {p} traced");
        }
    }

    #[test]
    fn ring_reports_outer_and_hole_borders() {
        // 8x8 white frame of thickness 2 with a 4x4 hole
        let mut img = filled_rect(12, 12, 2, 2, 8);
        for y in 4..8 {
            for x in 4..8 {
                img.data[y * 12 + x] = 0;
            }
        }
        let mut labels = Vec::new();
        let contours = find_contours(&img.view(), &mut labels);
        assert_eq!(contours.len(), 2);
        assert!(!contours[0].hole);
        assert!(contours[1].hole);
        // the hole border runs along the ring pixels facing the hole
        for p in &contours[1].points {
            assert!((3.0..=8.0).contains(&p.x) && (3.0..=8.0).contains(&p.y));
        }
    }

    #[test]
    fn two_separate_blobs_trace_in_scan_order() {
        let mut img = filled_rect(24, 12, 2, 2, 4);
        for y in 5..9 {
            for x in 14..18 {
                img.data[y * 24 + x] = 255;
            }
        }
        let mut labels = Vec::new();
        let contours = find_contours(&img.view(), &mut labels);
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].points[0], Point2::new(2.0, 2.0));
        assert_eq!(contours[1].points[0], Point2::new(14.0, 5.0));
    }

    #[test]
    fn scratch_buffer_is_reusable_across_calls() {
        let img = filled_rect(20, 20, 5, 5, 10);
        let mut labels = Vec::new();
        let first = find_contours(&img.view(), &mut labels);
        let second = find_contours(&img.view(), &mut labels);
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].points, second[0].points);
    }
}
