use thiserror::Error;

/// Failures a detector capability can report.
///
/// Neither variant escapes the `RegionDetector` boundary as a hard
/// failure; the pipeline degrades to the other detector's results.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// The capability never initialized (missing model, no backend).
    #[error("detector unavailable: {0}")]
    Unavailable(String),

    /// A single call failed; later calls may succeed.
    #[error("detector call failed: {0}")]
    CallFailed(String),
}
