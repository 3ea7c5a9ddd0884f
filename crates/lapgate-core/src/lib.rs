//! Image primitives for the lap-gate marker detection pipeline.
//!
//! This crate is intentionally small and free of any concrete image
//! container: callers hand in raw row-major byte views and get owned
//! buffers back. It provides the operations the detection pipeline
//! consumes:
//! - grayscale conversion and local-mean adaptive thresholding,
//! - contour extraction by border following,
//! - polygon approximation and geometry checks,
//! - square-to-quad perspective sampling,
//! - Otsu thresholding and per-rect pixel counting.

mod adaptive;
mod contour;
mod homography;
mod image;
mod logger;
mod polygon;

pub use adaptive::adaptive_threshold;
pub use contour::{find_contours, Contour};
pub use homography::{homography_from_4pt, warp_square_gray, Homography};
pub use image::{
    count_non_zero, grayscale, otsu_threshold, sample_bilinear, sample_bilinear_u8,
    threshold_in_place, GrayImage, GrayImageView, Rect, RgbaImageView,
};
pub use polygon::{approx_poly_dp, is_contour_convex, min_edge_length, perimeter};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
