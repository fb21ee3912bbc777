use std::collections::HashMap;

use crate::detection::domain::detector_error::DetectorError;
use crate::detection::domain::text_recognizer::{TextBlock, TextRecognizer};
use crate::shared::frame::Frame;

/// Replays pre-computed text blocks keyed by frame sequence, mirroring
/// [`CachedFaceDetector`](super::cached_face_detector::CachedFaceDetector)
/// for the OCR side of the pipeline.
pub struct CachedTextRecognizer {
    cache: HashMap<u64, Vec<TextBlock>>,
}

impl CachedTextRecognizer {
    pub fn new(cache: HashMap<u64, Vec<TextBlock>>) -> Self {
        Self { cache }
    }
}

impl TextRecognizer for CachedTextRecognizer {
    fn recognize_text(&mut self, frame: &Frame) -> Result<Vec<TextBlock>, DetectorError> {
        Ok(self
            .cache
            .get(&frame.sequence())
            .cloned()
            .unwrap_or_default())
    }
}
