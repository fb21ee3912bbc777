use std::collections::HashMap;

use crate::detection::domain::detector_error::DetectorError;
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Replays pre-computed face regions keyed by frame sequence.
///
/// Used by the CLI replay mode and by tests, where a real model is
/// unavailable or nondeterministic. Unknown sequences yield an empty
/// result.
pub struct CachedFaceDetector {
    cache: HashMap<u64, Vec<Region>>,
}

impl CachedFaceDetector {
    pub fn new(cache: HashMap<u64, Vec<Region>>) -> Self {
        Self { cache }
    }
}

impl FaceDetector for CachedFaceDetector {
    fn detect_faces(&mut self, frame: &Frame) -> Result<Vec<Region>, DetectorError> {
        Ok(self
            .cache
            .get(&frame.sequence())
            .cloned()
            .unwrap_or_default())
    }
}
