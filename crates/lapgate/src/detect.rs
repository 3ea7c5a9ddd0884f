//! End-to-end helpers from `image` buffers.

use crate::{DetectError, Detector, Marker};
use lapgate_core::RgbaImageView;

/// Wrap an `image::RgbaImage` into the raw frame view the detector takes.
pub fn rgba_view(img: &::image::RgbaImage) -> RgbaImageView<'_> {
    RgbaImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Run the detector over one decoded frame.
pub fn detect_markers(
    detector: &mut Detector,
    img: &::image::RgbaImage,
) -> Result<Vec<Marker>, DetectError> {
    detector.detect(&rgba_view(img))
}
