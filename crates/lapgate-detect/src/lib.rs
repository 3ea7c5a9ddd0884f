//! Per-frame marker detection pipeline.
//!
//! This crate wires the image primitives and the marker decoder into the
//! detector a lap-timer feeds camera frames to: adaptive thresholding,
//! contour tracing, quad candidate filtering, perspective sampling and
//! rotation-invariant decoding.

mod candidates;
mod error;
mod params;
mod pipeline;
mod sampling;

pub use candidates::{clockwise_corners, drop_near_duplicates, find_candidates, Candidate};
pub use error::DetectError;
pub use params::DetectorParams;
pub use pipeline::Detector;
pub use sampling::sample_candidate;
