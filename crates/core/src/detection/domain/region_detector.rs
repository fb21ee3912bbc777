use crate::classify::classifier;
use crate::detection::domain::detected_item::DetectedItem;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::text_recognizer::{TextBlock, TextRecognizer};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Aggregates the face detector and text recognizer behind one call.
///
/// Both detectors run concurrently against the same frame (they share
/// no data dependency) and are joined before returning. A failing
/// detector contributes nothing; the call itself never fails. Detector
/// handles are injected at construction and owned by the pipeline.
pub struct RegionDetector {
    face: Box<dyn FaceDetector>,
    text: Box<dyn TextRecognizer>,
}

impl RegionDetector {
    pub fn new(face: Box<dyn FaceDetector>, text: Box<dyn TextRecognizer>) -> Self {
        Self { face, text }
    }

    /// Runs both detectors against `frame` and returns tagged items.
    ///
    /// Faces come first, then text blocks; within each group the source
    /// detector's ordering is preserved. Text blocks are classified for
    /// sensitivity; blank blocks are dropped. Face regions are always
    /// sensitive.
    pub fn detect_regions(&mut self, frame: &Frame) -> Vec<DetectedItem> {
        let face = &mut self.face;
        let text = &mut self.text;

        let (face_result, text_result) = std::thread::scope(|s| {
            let face_handle = s.spawn(|| face.detect_faces(frame));
            let text_result = text.recognize_text(frame);
            let face_result = match face_handle.join() {
                Ok(result) => result,
                Err(_) => {
                    log::warn!("face detector panicked; treating as empty result");
                    Ok(Vec::new())
                }
            };
            (face_result, text_result)
        });

        let faces = face_result.unwrap_or_else(|e| {
            log::warn!("face detection failed: {e}");
            Vec::new()
        });
        let blocks = text_result.unwrap_or_else(|e| {
            log::warn!("text recognition failed: {e}");
            Vec::new()
        });

        let mut items: Vec<DetectedItem> = faces.into_iter().map(DetectedItem::face).collect();
        items.extend(blocks.into_iter().filter_map(classify_block));
        items
    }
}

fn classify_block(block: TextBlock) -> Option<DetectedItem> {
    let trimmed = block.text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let verdict = classifier::classify(trimmed);
    Some(DetectedItem::text(
        trimmed.to_string(),
        block.region,
        verdict.sensitive,
        verdict.category,
    ))
}

/// Convenience: the clamped regions of all sensitive items, ready for
/// mask rendering. Zero-area regions are dropped.
pub fn sensitive_regions(items: &[DetectedItem], frame: &Frame) -> Vec<Region> {
    items
        .iter()
        .filter(|item| item.sensitive)
        .map(|item| item.region.clamp_to(frame.width(), frame.height()))
        .filter(|r| !r.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classifier::SensitivityCategory;
    use crate::detection::domain::detected_item::DetectionKind;
    use crate::detection::domain::detector_error::DetectorError;

    struct StubFaceDetector {
        regions: Vec<Region>,
    }

    impl FaceDetector for StubFaceDetector {
        fn detect_faces(&mut self, _frame: &Frame) -> Result<Vec<Region>, DetectorError> {
            Ok(self.regions.clone())
        }
    }

    struct FailingFaceDetector;

    impl FaceDetector for FailingFaceDetector {
        fn detect_faces(&mut self, _frame: &Frame) -> Result<Vec<Region>, DetectorError> {
            Err(DetectorError::CallFailed("model crashed".into()))
        }
    }

    struct StubTextRecognizer {
        blocks: Vec<TextBlock>,
    }

    impl TextRecognizer for StubTextRecognizer {
        fn recognize_text(&mut self, _frame: &Frame) -> Result<Vec<TextBlock>, DetectorError> {
            Ok(self.blocks.clone())
        }
    }

    struct FailingTextRecognizer;

    impl TextRecognizer for FailingTextRecognizer {
        fn recognize_text(&mut self, _frame: &Frame) -> Result<Vec<TextBlock>, DetectorError> {
            Err(DetectorError::Unavailable("no OCR backend".into()))
        }
    }

    fn frame() -> Frame {
        Frame::new(vec![0u8; 100 * 100 * 3], 100, 100, 3, 0)
    }

    fn block(text: &str, x: i32) -> TextBlock {
        TextBlock {
            text: text.to_string(),
            region: Region::new(x, 10, 40, 12),
        }
    }

    #[test]
    fn test_faces_and_text_combined() {
        let mut detector = RegionDetector::new(
            Box::new(StubFaceDetector {
                regions: vec![Region::new(5, 5, 20, 20)],
            }),
            Box::new(StubTextRecognizer {
                blocks: vec![block("Your OTP is 482913", 40)],
            }),
        );

        let items = detector.detect_regions(&frame());

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, DetectionKind::Face);
        assert!(items[0].sensitive);
        assert_eq!(items[1].kind, DetectionKind::Text);
        assert!(items[1].sensitive);
        assert_eq!(items[1].category, SensitivityCategory::Otp);
    }

    #[test]
    fn test_face_failure_still_returns_text() {
        // One detector down must not take out the other's results.
        let mut detector = RegionDetector::new(
            Box::new(FailingFaceDetector),
            Box::new(StubTextRecognizer {
                blocks: vec![block("just some prose", 10)],
            }),
        );

        let items = detector.detect_regions(&frame());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, DetectionKind::Text);
        assert!(!items[0].sensitive);
        assert_eq!(items[0].category, SensitivityCategory::None);
    }

    #[test]
    fn test_text_failure_still_returns_faces() {
        let mut detector = RegionDetector::new(
            Box::new(StubFaceDetector {
                regions: vec![Region::new(5, 5, 20, 20), Region::new(60, 5, 20, 20)],
            }),
            Box::new(FailingTextRecognizer),
        );

        let items = detector.detect_regions(&frame());

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.kind == DetectionKind::Face));
    }

    #[test]
    fn test_double_failure_returns_empty() {
        let mut detector =
            RegionDetector::new(Box::new(FailingFaceDetector), Box::new(FailingTextRecognizer));
        assert!(detector.detect_regions(&frame()).is_empty());
    }

    #[test]
    fn test_blank_text_blocks_skipped() {
        let mut detector = RegionDetector::new(
            Box::new(StubFaceDetector { regions: vec![] }),
            Box::new(StubTextRecognizer {
                blocks: vec![block("   ", 10), block("password here", 40)],
            }),
        );

        let items = detector.detect_regions(&frame());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, SensitivityCategory::Password);
    }

    #[test]
    fn test_text_order_preserved() {
        let mut detector = RegionDetector::new(
            Box::new(StubFaceDetector { regions: vec![] }),
            Box::new(StubTextRecognizer {
                blocks: vec![block("first", 10), block("second", 40), block("third", 70)],
            }),
        );

        let items = detector.detect_regions(&frame());
        let texts: Vec<_> = items.iter().filter_map(|i| i.text.as_deref()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn test_sensitive_regions_filters_and_clamps() {
        let f = frame();
        let items = vec![
            DetectedItem::face(Region::new(90, 90, 30, 30)), // overhangs frame
            DetectedItem::text(
                "prose".into(),
                Region::new(0, 0, 10, 10),
                false,
                SensitivityCategory::None,
            ),
            DetectedItem::face(Region::new(200, 200, 10, 10)), // fully outside
        ];

        let regions = sensitive_regions(&items, &f);

        assert_eq!(regions, vec![Region::new(90, 90, 10, 10)]);
    }
}
