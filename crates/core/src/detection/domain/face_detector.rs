use crate::detection::domain::detector_error::DetectorError;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for face detection.
///
/// Implementations may be stateful (e.g., tracking across frames),
/// hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect_faces(&mut self, frame: &Frame) -> Result<Vec<Region>, DetectorError>;
}
