//! Local-mean adaptive thresholding.

use crate::{GrayImage, GrayImageView};

/// Binarize against a local mean: a pixel becomes 255 (set) when it is at
/// least `offset` darker than the mean of the `(2*radius+1)²` window
/// centered on it, 0 otherwise. Dark ink on light paper becomes the
/// foreground that contour tracing follows.
///
/// `(radius, offset)` pairs are empirical; the pipeline currently runs
/// `(2, 1)`, with `(2, 3)` as the coarser historical setting.
pub fn adaptive_threshold(src: &GrayImageView<'_>, dst: &mut GrayImage, radius: usize, offset: u8) {
    let w = src.width;
    let h = src.height;
    dst.reset(w, h);
    if w == 0 || h == 0 {
        return;
    }

    // summed-area table with a zero row/column prepended
    let mut integral = vec![0u64; (w + 1) * (h + 1)];
    for y in 0..h {
        let mut row_sum = 0u64;
        for x in 0..w {
            row_sum += u64::from(src.data[y * w + x]);
            integral[(y + 1) * (w + 1) + (x + 1)] = integral[y * (w + 1) + (x + 1)] + row_sum;
        }
    }

    let r = radius as i64;
    for y in 0..h {
        let y0 = (y as i64 - r).max(0) as usize;
        let y1 = (y as i64 + r + 1).min(h as i64) as usize;
        for x in 0..w {
            let x0 = (x as i64 - r).max(0) as usize;
            let x1 = (x as i64 + r + 1).min(w as i64) as usize;

            let a = integral[y1 * (w + 1) + x1];
            let b = integral[y0 * (w + 1) + x1];
            let c = integral[y1 * (w + 1) + x0];
            let d = integral[y0 * (w + 1) + x0];
            let sum = (a - b) - (c - d);
            let area = ((y1 - y0) * (x1 - x0)) as u64;
            let mean = (sum / area) as i32;

            let v = i32::from(src.data[y * w + x]);
            dst.data[y * w + x] = if v <= mean - i32::from(offset) { 255 } else { 0 };
        }
    }
}
