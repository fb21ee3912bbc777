use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// A fully rendered output frame together with the regions that were
/// redacted to produce it.
///
/// `source_sequence` is the capture sequence of the frame this mask was
/// computed from; `generation` is the detection pass that produced it.
/// The shared frame buffer holds at most one of these, always the most
/// recently published.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedFrame {
    pub frame: Frame,
    pub regions: Vec<Region>,
    pub source_sequence: u64,
    pub generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let frame = Frame::new(vec![0u8; 12], 2, 2, 3, 7);
        let masked = MaskedFrame {
            frame,
            regions: vec![Region::new(0, 0, 1, 1)],
            source_sequence: 7,
            generation: 3,
        };
        assert_eq!(masked.source_sequence, 7);
        assert_eq!(masked.generation, 3);
        assert_eq!(masked.regions.len(), 1);
    }
}
