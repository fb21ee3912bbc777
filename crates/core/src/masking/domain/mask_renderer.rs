use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// How redacted regions are visually obscured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskStyle {
    /// Soften region content. The unmasked source frame is discarded
    /// right after rendering, so obscuring (rather than destroying)
    /// the pixels is acceptable.
    Blur,
    /// Overwrite the region with a single opaque color.
    SolidFill,
}

/// Domain interface for rendering a masked copy of a frame.
///
/// Implementations are pure with respect to the input: the source
/// frame is never mutated, and the same inputs always produce the same
/// output. Regions are clamped to frame bounds; zero-area regions are
/// no-ops. An empty region list returns a pixel-identical copy.
pub trait MaskRenderer: Send {
    fn apply(&self, frame: &Frame, regions: &[Region]) -> Frame;
}
