//! High-level facade crate for the `lapgate-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the underlying pipeline crates
//! - (feature-gated) helpers that bridge `image` buffers into the raw
//!   frame views the detector consumes.
//!
//! ## Quickstart
//!
//! ```no_run
//! use lapgate::{Detector, DetectorParams};
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("frame.png")?.decode()?.to_rgba8();
//! let mut detector = Detector::new(DetectorParams::default());
//! let markers = lapgate::detect::detect_markers(&mut detector, &img)?;
//! for m in &markers {
//!     println!("marker {} at {:?}", m.id, m.corners);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `lapgate::core`: image primitives (views, contours, warping).
//! - `lapgate::aruco`: codebook, bit matrices, sample decoding.
//! - `lapgate::pipeline`: the per-frame detector and its parameters.
//! - `lapgate::detect` (feature `image`): helpers from `image` buffers.

pub use lapgate_aruco as aruco;
pub use lapgate_core as core;
pub use lapgate_detect as pipeline;

pub use lapgate_aruco::Marker;
pub use lapgate_detect::{DetectError, Detector, DetectorParams};

#[cfg(feature = "image")]
pub mod detect;
