//! Marker codebook and decoding for the lap-gate pipeline.
//!
//! This crate covers the bit-level half of marker detection:
//! - the embedded row codebook (compiled into the binary),
//! - 5x5 bit grids with their 90-degree index rotation,
//! - decoding a warped, binarized sample into a [`Marker`].
//!
//! It does **not** perform quad detection; `lapgate-detect` finds the
//! candidate quads and hands their samples here.

pub mod codebook;

mod bitmatrix;
mod decoder;

pub use bitmatrix::BitMatrix;
pub use decoder::{decode_sample, rotate_corners, Marker, CELLS};
