//! Per-frame detection pipeline.

use log::debug;

use lapgate_aruco::{decode_sample, Marker};
use lapgate_core::{adaptive_threshold, find_contours, grayscale, GrayImage, RgbaImageView};

use crate::candidates::{clockwise_corners, drop_near_duplicates, find_candidates};
use crate::sampling::sample_candidate;
use crate::{DetectError, DetectorParams};

/// Marker detector with per-instance scratch buffers.
///
/// The gray, thresholded and warped working images plus the contour label
/// buffer are overwritten at the start of every [`detect`](Self::detect)
/// call and never read across calls. The `&mut self` receiver keeps calls
/// from overlapping on one instance; use one detector per stream.
pub struct Detector {
    params: DetectorParams,
    gray: GrayImage,
    thresholded: GrayImage,
    warped: GrayImage,
    labels: Vec<i32>,
}

impl Detector {
    pub fn new(params: DetectorParams) -> Self {
        Self {
            params,
            gray: GrayImage::default(),
            thresholded: GrayImage::default(),
            warped: GrayImage::default(),
            labels: Vec::new(),
        }
    }

    #[inline]
    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Detect every marker in one RGBA frame.
    ///
    /// Markers come back in candidate scan order, not sorted by id or
    /// position. An empty list is the normal result for a frame without
    /// markers; only a malformed frame is an error. Candidates that fail
    /// validation anywhere along the pipeline are dropped silently, and
    /// the next frame is their retry.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, frame), fields(width = frame.width, height = frame.height))
    )]
    pub fn detect(&mut self, frame: &RgbaImageView<'_>) -> Result<Vec<Marker>, DetectError> {
        if frame.width == 0 || frame.height == 0 || frame.data.len() != 4 * frame.width * frame.height
        {
            return Err(DetectError::InvalidInput {
                width: frame.width,
                height: frame.height,
                bytes: frame.data.len(),
            });
        }

        grayscale(frame, &mut self.gray);
        adaptive_threshold(
            &self.gray.view(),
            &mut self.thresholded,
            self.params.thresh_radius,
            self.params.thresh_offset,
        );
        let contours = find_contours(&self.thresholded.view(), &mut self.labels);

        let min_size = frame.width as f32 * self.params.min_contour_frac;
        let mut candidates = find_candidates(
            &contours,
            min_size,
            self.params.poly_epsilon,
            self.params.min_edge_length,
        );
        clockwise_corners(&mut candidates);
        let candidates = drop_near_duplicates(candidates, self.params.dedup_min_dist);
        debug!(
            "{} contours, {} candidates after dedup",
            contours.len(),
            candidates.len()
        );

        let mut markers = Vec::new();
        for candidate in &candidates {
            sample_candidate(
                &self.gray.view(),
                &mut self.warped,
                candidate,
                self.params.warp_size,
            );
            if let Some(marker) = decode_sample(&self.warped.view(), *candidate) {
                markers.push(marker);
            }
        }
        debug!("{} markers decoded", markers.len());

        Ok(markers)
    }
}
