//! Border validation, bit extraction and rotation-invariant decoding.

use nalgebra::Point2;

use lapgate_core::{count_non_zero, GrayImageView, Rect};

use crate::codebook::GRID;
use crate::BitMatrix;

/// Cells per marker side: the 5x5 data grid plus a one-cell border ring.
pub const CELLS: usize = GRID + 2;

/// One decoded marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Payload id in `0..=1023`.
    pub id: u16,
    /// Image-space corners, realigned so index 0 names the same physical
    /// corner at every presentation angle.
    pub corners: [Point2<f32>; 4],
}

/// Decode a binarized square sample into a marker, or reject it.
///
/// The sample is divided into a `7x7` cell grid of `floor(W/7)` pixels
/// per side. Rejection is the expected outcome for candidates that are
/// not markers; callers treat `None` as silence, not as an error.
pub fn decode_sample(sample: &GrayImageView<'_>, corners: [Point2<f32>; 4]) -> Option<Marker> {
    debug_assert_eq!(sample.width, sample.height);

    let cell = sample.width / CELLS;
    if cell == 0 {
        return None;
    }
    let min_zero = (cell * cell) / 2;
    let cell_rect = |cx: usize, cy: usize| Rect {
        x: cx * cell,
        y: cy * cell,
        width: cell,
        height: cell,
    };

    // a genuine marker has a solid dark border: every one of the 24
    // border cells must be at most half white
    for i in 0..CELLS {
        let step = if i == 0 || i == CELLS - 1 { 1 } else { CELLS - 1 };
        let mut j = 0;
        while j < CELLS {
            if count_non_zero(sample, cell_rect(j, i)) > min_zero {
                return None;
            }
            j += step;
        }
    }

    let mut rows = [[0u8; GRID]; GRID];
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, bit) in row.iter_mut().enumerate() {
            let white = count_non_zero(sample, cell_rect(j + 1, i + 1)) > min_zero;
            *bit = u8::from(white);
        }
    }

    // score all four presentations; ties keep the earliest rotation
    let mut matrix = BitMatrix::new(rows);
    let mut best_matrix = matrix;
    let mut best_distance = matrix.codebook_distance();
    let mut best_rotation = 0usize;
    for rotation in 1..4 {
        matrix = matrix.rotated();
        let distance = matrix.codebook_distance();
        if distance < best_distance {
            best_distance = distance;
            best_rotation = rotation;
            best_matrix = matrix;
        }
    }

    // only an exact codebook match at some rotation is a marker
    if best_distance != 0 {
        return None;
    }

    Some(Marker {
        id: best_matrix.id(),
        corners: rotate_corners(corners, (4 - best_rotation) % 4),
    })
}

/// Cyclically rotate a corner list left by `shift` positions.
///
/// This reorders a point list; [`BitMatrix::rotated`] transforms grid
/// indices. They share a rotation concept and nothing else.
pub fn rotate_corners(corners: [Point2<f32>; 4], shift: usize) -> [Point2<f32>; 4] {
    [
        corners[shift % 4],
        corners[(shift + 1) % 4],
        corners[(shift + 2) % 4],
        corners[(shift + 3) % 4],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codebook::CODEBOOK;
    use lapgate_core::GrayImage;

    const SAMPLE: usize = 128;

    fn corners() -> [Point2<f32>; 4] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    /// Render a binarized sample: black everywhere, white data cells per
    /// `rows`.
    fn build_sample(rows: [[u8; GRID]; GRID], size: usize) -> GrayImage {
        let cell = size / CELLS;
        let mut img = GrayImage::new(size, size);
        for (i, row) in rows.iter().enumerate() {
            for (j, &bit) in row.iter().enumerate() {
                if bit == 1 {
                    for y in (i + 1) * cell..(i + 2) * cell {
                        for x in (j + 1) * cell..(j + 2) * cell {
                            img.data[y * size + x] = 255;
                        }
                    }
                }
            }
        }
        img
    }

    fn grid_from(m: &BitMatrix) -> [[u8; GRID]; GRID] {
        let mut rows = [[0u8; GRID]; GRID];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = m.bit(i, j);
            }
        }
        rows
    }

    #[test]
    fn all_first_row_sample_decodes_to_id_zero() {
        let img = build_sample([CODEBOOK[0]; GRID], SAMPLE);
        let marker = decode_sample(&img.view(), corners()).expect("marker");
        assert_eq!(marker.id, 0);
        assert_eq!(marker.corners, corners());
    }

    #[test]
    fn non_codebook_rows_are_rejected() {
        // column 1 flipped on every row: [1,1,0,0,0] is one off the
        // nearest codebook row at each rotation
        let mut rows = [CODEBOOK[0]; GRID];
        for row in &mut rows {
            row[1] = 1;
        }
        let img = build_sample(rows, SAMPLE);
        assert!(decode_sample(&img.view(), corners()).is_none());
    }

    #[test]
    fn white_border_cell_is_rejected() {
        let mut img = build_sample([CODEBOOK[0]; GRID], SAMPLE);
        let cell = SAMPLE / CELLS;
        for y in 0..cell {
            for x in 0..cell {
                img.data[y * SAMPLE + x] = 255;
            }
        }
        assert!(decode_sample(&img.view(), corners()).is_none());
    }

    #[test]
    fn decoding_is_rotation_invariant() {
        let rows = [CODEBOOK[0], CODEBOOK[1], CODEBOOK[2], CODEBOOK[3], CODEBOOK[1]];
        let reference = decode_sample(&build_sample(rows, SAMPLE).view(), corners())
            .expect("reference marker");

        let mut presented = BitMatrix::new(rows);
        for turn in 1..4 {
            presented = presented.rotated();
            let img = build_sample(grid_from(&presented), SAMPLE);
            let marker = decode_sample(&img.view(), corners()).expect("rotated marker");
            assert_eq!(marker.id, reference.id, "turn {turn}");
            // realignment undoes the presentation rotation
            assert_eq!(marker.corners, rotate_corners(corners(), turn), "turn {turn}");
        }
    }

    #[test]
    fn legacy_sample_size_decodes_too() {
        let rows = [CODEBOOK[2]; GRID];
        let img = build_sample(rows, 49);
        let marker = decode_sample(&img.view(), corners()).expect("marker");
        assert_eq!(marker.id, 0b10_10_10_10_10);
    }

    #[test]
    fn tiny_sample_is_rejected() {
        let img = GrayImage::new(5, 5);
        assert!(decode_sample(&img.view(), corners()).is_none());
    }
}
