//! Perspective sampling of candidate quads.

use lapgate_core::{otsu_threshold, threshold_in_place, warp_square_gray, GrayImage, GrayImageView};

use crate::candidates::Candidate;

/// Warp one candidate into `dst` as a `size x size` sample and binarize it
/// against a global Otsu threshold.
///
/// This always fills `dst`, even for a degenerate quad; the decoder's
/// border validation is what rejects bad samples.
pub fn sample_candidate(
    gray: &GrayImageView<'_>,
    dst: &mut GrayImage,
    candidate: &Candidate,
    size: usize,
) {
    warp_square_gray(gray, dst, candidate, size);
    let level = otsu_threshold(&dst.view());
    threshold_in_place(dst, level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn sample_is_binary_and_oriented() {
        // 40x40 frame: dark 20x20 block at (10,10) with a light inset at
        // its top-left quarter
        let mut data = vec![200u8; 40 * 40];
        for y in 10..30 {
            for x in 10..30 {
                data[y * 40 + x] = 30;
            }
        }
        for y in 12..19 {
            for x in 12..19 {
                data[y * 40 + x] = 220;
            }
        }
        let gray = GrayImageView {
            width: 40,
            height: 40,
            data: &data,
        };

        let candidate = [
            Point2::new(10.0, 10.0),
            Point2::new(30.0, 10.0),
            Point2::new(30.0, 30.0),
            Point2::new(10.0, 30.0),
        ];
        let mut sample = GrayImage::default();
        sample_candidate(&gray, &mut sample, &candidate, 64);

        assert_eq!(sample.width, 64);
        assert!(sample.data.iter().all(|&v| v == 0 || v == 255));
        // the light inset lands in the sample's top-left quarter
        assert_eq!(sample.data[16 * 64 + 16], 255);
        assert_eq!(sample.data[48 * 64 + 48], 0);
    }
}
