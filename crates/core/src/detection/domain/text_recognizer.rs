use crate::detection::domain::detector_error::DetectorError;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// One recognized block of on-screen text with its bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub region: Region,
}

/// Domain interface for OCR-style text recognition.
pub trait TextRecognizer: Send {
    fn recognize_text(&mut self, frame: &Frame) -> Result<Vec<TextBlock>, DetectorError>;
}
