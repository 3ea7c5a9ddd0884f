/// Errors surfaced by [`Detector::detect`](crate::Detector::detect).
///
/// Candidates failing size, convexity, border or codebook checks are not
/// errors; they are silently excluded from the result.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid input frame (width={width}, height={height}, bytes={bytes})")]
    InvalidInput {
        width: usize,
        height: usize,
        bytes: usize,
    },
}
