use serde::{Deserialize, Serialize};

/// Tunables for the detection pipeline.
///
/// Every value here has been adjusted empirically for different marker
/// sizes and camera placements, so they are configuration rather than
/// constants. `default()` is the trackside tuning; [`coarse`](Self::coarse)
/// restores the historical settings for large, close-up markers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectorParams {
    /// Minimum contour length as a fraction of the frame width.
    pub min_contour_frac: f32,
    /// Polygon approximation tolerance as a fraction of the contour
    /// length.
    pub poly_epsilon: f32,
    /// Minimum candidate edge length in pixels.
    pub min_edge_length: f32,
    /// Mean corner distance below which overlapping candidates collapse
    /// into one.
    pub dedup_min_dist: f32,
    /// Side length of the square marker sample in pixels.
    pub warp_size: usize,
    /// Adaptive threshold window radius.
    ///
    /// Opaque empirical constant of the thresholding step, paired with
    /// `thresh_offset`.
    pub thresh_radius: usize,
    /// Adaptive threshold offset below the local mean.
    pub thresh_offset: u8,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            min_contour_frac: 0.01,
            poly_epsilon: 0.01,
            min_edge_length: 1.0,
            dedup_min_dist: 4.0,
            warp_size: 128,
            thresh_radius: 2,
            thresh_offset: 1,
        }
    }
}

impl DetectorParams {
    /// The coarser tuning the detector shipped with before it was retuned
    /// to pick up small markers on the far side of the track.
    pub fn coarse() -> Self {
        Self {
            poly_epsilon: 0.05,
            min_edge_length: 10.0,
            dedup_min_dist: 10.0,
            warp_size: 49,
            thresh_offset: 3,
            ..Self::default()
        }
    }
}
